use once_cell::sync::Lazy;
use regex::Regex;

use crate::text_metrics::TextMetrics;

// @module: Karaoke syllable extraction from {\k}-tagged text

/// Horizontal cursor origin for the first syllable.
pub const LEFT_MARGIN: f32 = 10.0;

// @const: One karaoke run: an override block carrying \k / \K / \kf with a
// centisecond duration, then plain text up to the next block or end of line
static KARAOKE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{[^}]*\\[kK]f?(\d+)[^}]*\}([^{]*)").unwrap()
});

/// One timed syllable: the smallest span granted its own position and
/// start/end time.
///
/// `start_ms`/`end_ms` are offsets from the line start, `x` is the span's
/// horizontal center, `char_index` the offset of the first character within
/// the tag-stripped text.
#[derive(Debug, Clone, PartialEq)]
pub struct Syllable {
    pub text: String,
    pub duration_cs: u32,
    pub start_ms: i64,
    pub end_ms: i64,
    pub x: f32,
    pub y: f32,
    pub index: usize,
    pub char_index: usize,
}

/// Scan tagged text for karaoke runs and build the syllable sequence.
///
/// Every matched run advances the running clock by its duration and the
/// running cursor by its estimated width. Runs whose text is empty or
/// whitespace-only produce no syllable but still advance clock, cursor and
/// character offset, so later syllables stay synchronized with the audio.
/// Text without any marker yields an empty sequence.
pub fn extract_syllables(text: &str, metrics: &TextMetrics, baseline_y: f32) -> Vec<Syllable> {
    let mut syllables = Vec::new();

    let mut current_time: i64 = 0;
    let mut current_x = LEFT_MARGIN;
    let mut char_index = 0usize;

    for caps in KARAOKE_REGEX.captures_iter(text) {
        let duration_cs: u32 = caps[1].parse().unwrap_or(0);
        let syl_text = &caps[2];

        let duration_ms = i64::from(duration_cs) * 10;
        let syl_width = metrics.text_width(syl_text);

        if !syl_text.trim().is_empty() {
            syllables.push(Syllable {
                text: syl_text.to_string(),
                duration_cs,
                start_ms: current_time,
                end_ms: current_time + duration_ms,
                x: current_x + syl_width / 2.0,
                y: baseline_y,
                index: syllables.len(),
                char_index,
            });
        }

        current_time += duration_ms;
        current_x += syl_width;
        char_index += syl_text.chars().count();
    }

    syllables
}
