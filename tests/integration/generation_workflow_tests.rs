/*!
 * End-to-end tests: script file in, effect lines out
 */

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;

use karafx::app_config::JobConfig;
use karafx::file_utils::{read_script, write_lines};
use karafx::generator::EffectGenerator;
use karafx::style_catalog::StyleCatalog;

use crate::common;

fn generator_for(script: &str, config: &JobConfig) -> EffectGenerator {
    EffectGenerator::new(StyleCatalog::parse(script), config)
}

/// The full pipeline: read script, generate, write, read back
#[test]
fn test_workflow_withSampleScript_shouldWriteEffectLines() -> Result<()> {
    let dir = common::create_temp_dir()?;
    let script_path = common::create_sample_script(&dir)?;
    let output_path = dir.path().join("fx.txt");

    let script = read_script(&script_path)?;
    let config = JobConfig::default();
    let generator = generator_for(&script, &config);

    let mut rng = StdRng::seed_from_u64(99);
    let lines = generator.generate(&script, &mut rng);

    // One karaoke line with "Hi"/" there": 4 + 7 layer lines; the
    // marker-free Default line contributes nothing
    assert_eq!(lines.len(), 11);

    write_lines(&output_path, &lines)?;
    let written = read_script(&output_path)?;
    assert_eq!(written.lines().count(), 11);
    assert!(written.lines().all(|l| l.starts_with("Dialogue: ")));
    Ok(())
}

/// Style filtering drops lines carrying other styles
#[test]
fn test_workflow_withSelectedStyle_shouldFilter() {
    let config = JobConfig {
        selected_style: Some("Default".to_string()),
        ..JobConfig::default()
    };
    let generator = generator_for(common::SAMPLE_SCRIPT, &config);

    let mut rng = StdRng::seed_from_u64(99);
    // The only Default line has no {\k} markers, so nothing is generated
    let lines = generator.generate(common::SAMPLE_SCRIPT, &mut rng);
    assert!(lines.is_empty());
}

/// A fixed seed makes the whole batch reproducible
#[test]
fn test_workflow_withFixedSeed_shouldBeReproducible() {
    let config = JobConfig::default();
    let generator = generator_for(common::SAMPLE_SCRIPT, &config);

    let mut rng_a = StdRng::seed_from_u64(7);
    let mut rng_b = StdRng::seed_from_u64(7);
    let first = generator.generate(common::SAMPLE_SCRIPT, &mut rng_a);
    let second = generator.generate(common::SAMPLE_SCRIPT, &mut rng_b);
    assert_eq!(first, second);
}

/// Malformed and marker-free scripts degrade to empty output, not errors
#[test]
fn test_workflow_withUnusableScript_shouldYieldNothing() {
    let script = "\
[Script Info]
Title: nothing useful

[Events]
Dialogue: not,really,valid
Comment: 0,0:00:00.00,0:00:01.00,Default,,0,0,0,,hello
Dialogue: 0,0:00:00.00,0:00:01.00,Default,,0,0,0,,no markers
";
    let generator = generator_for(script, &JobConfig::default());
    let mut rng = StdRng::seed_from_u64(0);
    assert!(generator.generate(script, &mut rng).is_empty());
}

/// Effect parameters from the hand-off record flow through to the output
#[test]
fn test_workflow_withHandoffConfig_shouldApplyParameters() {
    let config = JobConfig::from_key_values(
        "PRIMARY_COLOR:#00FF00\nFADEOUT_DURATION:150\nSELECTED_STYLE:Karaoke\n",
    );
    let generator = generator_for(common::SAMPLE_SCRIPT, &config);

    let mut rng = StdRng::seed_from_u64(3);
    let lines = generator.generate(common::SAMPLE_SCRIPT, &mut rng);

    assert!(!lines.is_empty());
    let main = lines.iter().find(|l| l.starts_with("Dialogue: 1,")).unwrap();
    assert!(main.contains(r"\c&H0000FF00&"));
    assert!(main.contains(r"\fad(0,150)"));
}
