/*!
 * Tests for multi-layer effect composition
 */

use rand::rngs::StdRng;
use rand::SeedableRng;

use karafx::app_config::{EffectConfig, EntryStyle};
use karafx::composer::EffectComposer;
use karafx::layout::{KaraokeLine, LayoutEngine};
use karafx::style_catalog::StyleCatalog;

use crate::common::SAMPLE_SCRIPT;

const KARAOKE_LINE: &str =
    r"Dialogue: 0,0:00:01.00,0:00:03.00,Karaoke,,0,0,0,,{\k50}Hi{\k100} there";

fn lay_out(raw: &str) -> KaraokeLine {
    LayoutEngine::new(StyleCatalog::parse(SAMPLE_SCRIPT))
        .layout(raw)
        .unwrap()
}

fn compose_with_seed(config: EffectConfig, raw: &str, seed: u64) -> Vec<String> {
    let composer = EffectComposer::new(config);
    let mut rng = StdRng::seed_from_u64(seed);
    composer.compose_line(&lay_out(raw), &mut rng)
}

/// Per syllable: one main line, one entry line per visible char, one highlight
#[test]
fn test_compose_withTwoSyllables_shouldInterleaveLayers() {
    let lines = compose_with_seed(EffectConfig::default(), KARAOKE_LINE, 42);

    // "Hi" -> 1 + 2 + 1, " there" -> 1 + 5 + 1
    assert_eq!(lines.len(), 11);

    assert!(lines[0].starts_with("Dialogue: 1,"));
    assert!(lines[1].starts_with("Dialogue: 2,"));
    assert!(lines[2].starts_with("Dialogue: 2,"));
    assert!(lines[3].starts_with("Dialogue: 3,"));
    assert!(lines[4].starts_with("Dialogue: 1,"));
    assert!(lines[10].starts_with("Dialogue: 3,"));
}

/// The main layer line is byte-exact for the default configuration
#[test]
fn test_compose_mainLayer_withDefaults_shouldMatchExactly() {
    let lines = compose_with_seed(EffectConfig::default(), KARAOKE_LINE, 42);

    assert_eq!(
        lines[0],
        r"Dialogue: 1,0:00:01.30,0:00:03.00,Karaoke,,0,0,0,fx,{\an5\pos(29,29)\fad(0,300)\blur3\bord2\shad0\3c&H00F276FC&\c&H00FFFFFF&}Hi"
    );
}

/// The highlight layer line is byte-exact for the default configuration
#[test]
fn test_compose_highlightLayer_withDefaults_shouldMatchExactly() {
    let lines = compose_with_seed(EffectConfig::default(), KARAOKE_LINE, 42);

    assert_eq!(
        lines[3],
        r"Dialogue: 3,0:00:01.00,0:00:01.30,Karaoke,,0,0,0,fx,{\an5\move(29,19,29,29)\fscx135\fscy150\bord3\blur4\3c&H00C5D9FF&\xshad0\yshad-4\4c&H0092B7FF&\t(0,150,\frz10\fry-40\frx-30)\t(150,300,\c&H00FFFFFF&)\t(100,300,\fscx100\fscy100\fry0\frz0\frx0)}Hi"
    );
}

/// Entry lines cover [start - entry_duration, start] and carry one character
#[test]
fn test_compose_entryLayer_withDefaults_shouldAnimateEachChar() {
    let lines = compose_with_seed(EffectConfig::default(), KARAOKE_LINE, 42);

    let h_entry = &lines[1];
    let i_entry = &lines[2];

    assert!(h_entry.starts_with("Dialogue: 2,0:00:00.60,0:00:01.00,Karaoke,,0,0,0,fx,"));
    assert!(h_entry.ends_with("}H"));
    assert!(i_entry.ends_with("}i"));

    // Random-rotate entry: move to rest over the entry duration, unspin
    assert!(h_entry.contains(r"\move("));
    assert!(h_entry.contains(r"\fad(400,0)"));
    assert!(h_entry.contains(r"\frz"));
    assert!(h_entry.contains(r"\t(0,400,\frz0)"));
    // Resting position of 'H' is (22, 29)
    assert!(h_entry.contains(",22,29,0,400)"));
}

/// Entry visibility clamps at zero for lines starting near the clock origin
#[test]
fn test_compose_entryLayer_withEarlyLine_shouldClampStartToZero() {
    let raw = r"Dialogue: 0,0:00:00.10,0:00:02.00,Karaoke,,0,0,0,,{\k50}Go";
    let lines = compose_with_seed(EffectConfig::default(), raw, 42);

    let entry = lines
        .iter()
        .find(|l| l.starts_with("Dialogue: 2,"))
        .unwrap();
    assert!(entry.starts_with("Dialogue: 2,0:00:00.00,0:00:00.10,"));
}

/// Fly-in rises from below the resting position without rotation
#[test]
fn test_compose_entryLayer_withFlyIn_shouldMoveFromBelow() {
    let config = EffectConfig {
        entry_style: EntryStyle::FlyIn,
        ..EffectConfig::default()
    };
    let lines = compose_with_seed(config, KARAOKE_LINE, 42);

    let entry = &lines[1];
    // 'H' rests at (22, 29); entry starts 50 units below
    assert!(entry.contains(r"\move(22,79,22,29,0,400)"));
    assert!(!entry.contains(r"\frz"));
}

/// Scale-in grows in place from zero scale
#[test]
fn test_compose_entryLayer_withScaleIn_shouldGrowInPlace() {
    let config = EffectConfig {
        entry_style: EntryStyle::ScaleIn,
        ..EffectConfig::default()
    };
    let lines = compose_with_seed(config, KARAOKE_LINE, 42);

    let entry = &lines[1];
    assert!(entry.contains(r"\pos(22,29)"));
    assert!(entry.contains(r"\fscx0\fscy0"));
    assert!(entry.contains(r"\t(0,400,\fscx100\fscy100)"));
    assert!(!entry.contains(r"\move("));
}

/// Identical inputs and seed produce byte-identical output
#[test]
fn test_compose_withFixedSeed_shouldBeDeterministic() {
    let first = compose_with_seed(EffectConfig::default(), KARAOKE_LINE, 7);
    let second = compose_with_seed(EffectConfig::default(), KARAOKE_LINE, 7);
    assert_eq!(first, second);
}

/// Different seeds scatter the entry characters differently
#[test]
fn test_compose_withDifferentSeeds_shouldDiffer() {
    let first = compose_with_seed(EffectConfig::default(), KARAOKE_LINE, 1);
    let second = compose_with_seed(EffectConfig::default(), KARAOKE_LINE, 2);
    assert_ne!(first, second);
}

/// A line without markers composes to nothing, silently
#[test]
fn test_compose_withNoSyllables_shouldEmitNothing() {
    let raw = "Dialogue: 0,0:00:01.00,0:00:03.00,Karaoke,,0,0,0,,plain text";
    let lines = compose_with_seed(EffectConfig::default(), raw, 42);
    assert!(lines.is_empty());
}
