// @module: Heuristic character width estimation
//
// Widths are estimated, not measured: no font loading, no shaping, no
// kerning. Factors are fractions of the font size with an additive
// per-character spacing term from the style.

/// Characters rendered noticeably narrower than the average glyph.
const NARROW_CHARS: &str = "iIlL1|!.,;:'\"";

/// Characters rendered noticeably wider than the average glyph.
const WIDE_CHARS: &str = "mMwW";

/// Width estimator parameterized by style metrics.
///
/// Canonical width table: narrow 0.30, wide 0.60, space 0.25, non-ASCII
/// 1.00 (CJK treated as double width), everything else 0.50, all times the
/// font size, plus `spacing` per character.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextMetrics {
    pub font_size: f32,
    pub spacing: f32,
}

impl TextMetrics {
    pub fn new(font_size: f32, spacing: f32) -> Self {
        TextMetrics { font_size, spacing }
    }

    /// Estimated display width of a single character.
    pub fn char_width(&self, ch: char) -> f32 {
        let factor = if NARROW_CHARS.contains(ch) {
            0.3
        } else if WIDE_CHARS.contains(ch) {
            0.6
        } else if ch == ' ' {
            0.25
        } else if !ch.is_ascii() {
            1.0
        } else {
            0.5
        };

        self.font_size * factor + self.spacing
    }

    /// Estimated display width of a text run: per-character sum, no kerning.
    pub fn text_width(&self, text: &str) -> f32 {
        text.chars().map(|c| self.char_width(c)).sum()
    }
}

impl Default for TextMetrics {
    fn default() -> Self {
        TextMetrics::new(crate::style_catalog::DEFAULT_FONT_SIZE, 0.0)
    }
}
