use log::{debug, info};
use rand::Rng;

use crate::app_config::JobConfig;
use crate::composer::EffectComposer;
use crate::layout::LayoutEngine;
use crate::style_catalog::StyleCatalog;

// @module: Batch generation over a whole script

/// Drives the pipeline over a full script: style catalog, per-line layout,
/// per-line composition.
///
/// Lines are independent of one another, so the driver is a plain
/// sequential loop over read-only inputs.
pub struct EffectGenerator {
    layout: LayoutEngine,
    composer: EffectComposer,
    selected_style: Option<String>,
}

impl EffectGenerator {
    /// Build a generator for one script from its parsed style catalog and
    /// the host's job configuration.
    pub fn new(catalog: StyleCatalog, config: &JobConfig) -> Self {
        EffectGenerator {
            layout: LayoutEngine::new(catalog),
            composer: EffectComposer::new(config.effect.clone()),
            selected_style: config.selected_style.clone(),
        }
    }

    /// Generate the output lines for every karaoke dialogue line of the
    /// script.
    ///
    /// Non-dialogue lines, dialogue lines of other styles, and lines
    /// without karaoke markers are all silently skipped; a script that
    /// yields nothing returns an empty vec and the caller decides how to
    /// surface that.
    pub fn generate<R: Rng + ?Sized>(&self, script: &str, rng: &mut R) -> Vec<String> {
        let mut output = Vec::new();
        let mut processed = 0usize;

        for raw in script.lines() {
            if !raw.trim_start().starts_with("Dialogue:") {
                continue;
            }

            let Some(line) = self.layout.layout(raw) else {
                debug!("Skipping malformed dialogue line");
                continue;
            };

            if let Some(style) = &self.selected_style {
                if &line.dialogue.style != style {
                    continue;
                }
            }

            let generated = self.composer.compose_line(&line, rng);
            if !generated.is_empty() {
                processed += 1;
            }
            output.extend(generated);
        }

        info!(
            "Generated {} effect lines from {} karaoke lines",
            output.len(),
            processed
        );

        output
    }
}
