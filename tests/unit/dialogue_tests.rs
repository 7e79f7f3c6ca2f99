/*!
 * Tests for Dialogue line parsing
 */

use karafx::dialogue::DialogueLine;

/// The ten positional fields split correctly
#[test]
fn test_parse_withValidLine_shouldSplitFields() {
    let line = r"Dialogue: 0,0:00:01.00,0:00:03.00,Default,Singer,10,20,30,fade,{\k50}Hi{\k100} there";
    let dialogue = DialogueLine::parse(line).unwrap();

    assert_eq!(dialogue.layer, 0);
    assert_eq!(dialogue.start, "0:00:01.00");
    assert_eq!(dialogue.end, "0:00:03.00");
    assert_eq!(dialogue.style, "Default");
    assert_eq!(dialogue.actor, "Singer");
    assert_eq!(dialogue.margin_l, 10);
    assert_eq!(dialogue.margin_r, 20);
    assert_eq!(dialogue.margin_v, 30);
    assert_eq!(dialogue.effect, "fade");
    assert_eq!(dialogue.text, r"{\k50}Hi{\k100} there");

    assert_eq!(dialogue.start_ms(), 1000);
    assert_eq!(dialogue.end_ms(), 3000);
}

/// The free-text field captures embedded commas
#[test]
fn test_parse_withCommasInText_shouldKeepTextWhole() {
    let line = "Dialogue: 1,0:00:00.00,0:00:05.00,Default,,0,0,0,,Hello, world, again";
    let dialogue = DialogueLine::parse(line).unwrap();
    assert_eq!(dialogue.text, "Hello, world, again");
}

/// Empty style, actor and effect fields are allowed
#[test]
fn test_parse_withEmptyOptionalFields_shouldAccept() {
    let line = "Dialogue: 2,0:00:00.00,0:00:01.00,,,0,0,0,,text";
    let dialogue = DialogueLine::parse(line).unwrap();
    assert_eq!(dialogue.style, "");
    assert_eq!(dialogue.actor, "");
    assert_eq!(dialogue.effect, "");
}

/// Non-dialogue lines return None so the caller can filter them uniformly
#[test]
fn test_parse_withNonDialogueLines_shouldReturnNone() {
    assert!(DialogueLine::parse("Comment: 0,0:00:00.00,0:00:01.00,,,0,0,0,,x").is_none());
    assert!(DialogueLine::parse("Format: Layer, Start, End").is_none());
    assert!(DialogueLine::parse("").is_none());
    // Missing margin fields
    assert!(DialogueLine::parse("Dialogue: 0,0:00:00.00,0:00:01.00,Default,,text").is_none());
}

/// An inverted time range parses; downstream tolerates it
#[test]
fn test_parse_withInvertedTimes_shouldStillParse() {
    let line = "Dialogue: 0,0:00:05.00,0:00:01.00,Default,,0,0,0,,late";
    let dialogue = DialogueLine::parse(line).unwrap();
    assert!(dialogue.start_ms() > dialogue.end_ms());
}
