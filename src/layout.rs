use log::debug;

use crate::dialogue::DialogueLine;
use crate::style_catalog::StyleCatalog;
use crate::syllable::{extract_syllables, Syllable};
use crate::text_metrics::TextMetrics;

// @module: Line layout: dialogue fields + style metrics -> positioned syllables

/// Vertical baseline shared by every syllable of a line.
pub const DEFAULT_BASELINE_Y: f32 = 29.0;

/// A fully laid-out karaoke line: structural fields, resolved style
/// metrics, and the positioned syllable sequence.
///
/// The syllable durations need not sum to `duration_ms`; trailing
/// non-karaoke text simply produces no syllable.
#[derive(Debug, Clone)]
pub struct KaraokeLine {
    pub dialogue: DialogueLine,
    pub start_ms: i64,
    pub end_ms: i64,
    pub duration_ms: i64,
    pub font_size: f32,
    pub spacing: f32,
    pub syllables: Vec<Syllable>,
}

impl KaraokeLine {
    /// Width estimator matching this line's resolved style metrics.
    pub fn metrics(&self) -> TextMetrics {
        TextMetrics::new(self.font_size, self.spacing)
    }
}

/// One visible character of a syllable with its centered x position.
#[derive(Debug, Clone, PartialEq)]
pub struct CharPlacement {
    pub ch: char,
    pub x: f32,
    pub width: f32,
}

/// Turns raw dialogue lines into [`KaraokeLine`]s using a style catalog for
/// font metrics and a fixed vertical baseline.
///
/// This is deliberately not real text layout: every syllable sits on the
/// same baseline and widths come from the heuristic estimator.
#[derive(Debug, Clone)]
pub struct LayoutEngine {
    catalog: StyleCatalog,
    baseline_y: f32,
}

impl LayoutEngine {
    pub fn new(catalog: StyleCatalog) -> Self {
        LayoutEngine {
            catalog,
            baseline_y: DEFAULT_BASELINE_Y,
        }
    }

    pub fn with_baseline(catalog: StyleCatalog, baseline_y: f32) -> Self {
        LayoutEngine {
            catalog,
            baseline_y,
        }
    }

    /// Parse and lay out one raw script line.
    ///
    /// Returns `None` for non-dialogue lines. A style name missing from the
    /// catalog falls back to default font size and spacing; start > end is
    /// tolerated (the composer then emits windows a renderer will drop).
    pub fn layout(&self, line: &str) -> Option<KaraokeLine> {
        let dialogue = DialogueLine::parse(line)?;

        let font_size = self.catalog.font_size(&dialogue.style);
        let spacing = self.catalog.spacing(&dialogue.style);
        let metrics = TextMetrics::new(font_size, spacing);

        let start_ms = dialogue.start_ms();
        let end_ms = dialogue.end_ms();

        let syllables = extract_syllables(&dialogue.text, &metrics, self.baseline_y);
        debug!(
            "Laid out {} syllables for style '{}' (fontsize {})",
            syllables.len(),
            dialogue.style,
            font_size
        );

        Some(KaraokeLine {
            dialogue,
            start_ms,
            end_ms,
            duration_ms: end_ms - start_ms,
            font_size,
            spacing,
            syllables,
        })
    }

    /// Per-character geometry of a syllable for the entry layer.
    ///
    /// The cursor starts at the syllable's left edge; whitespace characters
    /// advance it but yield no placement.
    pub fn char_layout(syllable: &Syllable, metrics: &TextMetrics) -> Vec<CharPlacement> {
        let mut placements = Vec::new();
        let mut cursor = syllable.x - metrics.text_width(&syllable.text) / 2.0;

        for ch in syllable.text.chars() {
            let width = metrics.char_width(ch);
            if !ch.is_whitespace() {
                placements.push(CharPlacement {
                    ch,
                    x: cursor + width / 2.0,
                    width,
                });
            }
            cursor += width;
        }

        placements
    }
}
