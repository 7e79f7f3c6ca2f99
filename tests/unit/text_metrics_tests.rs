/*!
 * Tests for heuristic character width estimation
 */

use karafx::text_metrics::TextMetrics;

use crate::common::assert_close;

/// Each character class uses its canonical factor
#[test]
fn test_char_width_withEachClass_shouldUseCanonicalFactor() {
    let metrics = TextMetrics::new(48.0, 0.0);

    // narrow: 0.3
    assert_close(metrics.char_width('i'), 14.4);
    assert_close(metrics.char_width('!'), 14.4);
    // wide: 0.6
    assert_close(metrics.char_width('M'), 28.8);
    // space: 0.25
    assert_close(metrics.char_width(' '), 12.0);
    // non-ASCII treated as double width: 1.0
    assert_close(metrics.char_width('漢'), 48.0);
    assert_close(metrics.char_width('é'), 48.0);
    // everything else: 0.5
    assert_close(metrics.char_width('a'), 24.0);
    assert_close(metrics.char_width('Z'), 24.0);
}

/// Text width is the plain per-character sum
#[test]
fn test_text_width_withMixedText_shouldSumPerChar() {
    let metrics = TextMetrics::new(48.0, 0.0);
    // H (24) + i (14.4) = 38.4
    assert_close(metrics.text_width("Hi"), 38.4);
    // space (12) + t,h,e,r,e (5 x 24) = 132
    assert_close(metrics.text_width(" there"), 132.0);
}

/// Style spacing adds per character, including spaces
#[test]
fn test_text_width_withSpacing_shouldAddPerChar() {
    let metrics = TextMetrics::new(48.0, 1.5);
    assert_close(metrics.text_width("Hi"), 38.4 + 3.0);
}

/// Empty text has zero width
#[test]
fn test_text_width_withEmptyText_shouldBeZero() {
    let metrics = TextMetrics::new(48.0, 2.0);
    assert_close(metrics.text_width(""), 0.0);
}
