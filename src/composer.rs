use std::f32::consts::TAU;

use rand::Rng;

use crate::app_config::{EffectConfig, EntryStyle};
use crate::layout::{KaraokeLine, LayoutEngine};
use crate::syllable::Syllable;
use crate::time_codec::format_time;

// @module: Multi-layer karaoke effect synthesis
//
// For every syllable three independently-timed dialogue lines are emitted:
// a static main line (layer 1) that stays until the line ends, one entry
// line per visible character (layer 2), and a highlight line (layer 3)
// covering exactly the syllable's karaoke window. Each emitted line stands
// alone with absolute start/end timestamps.

/// Radius of the circle entry characters are scattered on.
pub const ENTRY_RADIUS: f32 = 50.0;

/// Vertical offset the highlight drops in from.
const HIGHLIGHT_DROP: f32 = 10.0;

/// Composes override-tag output lines from laid-out karaoke lines.
///
/// Randomness for the entry layer comes from an explicitly injected
/// generator so hosts and tests can fix a seed and get byte-identical
/// output.
#[derive(Debug, Clone)]
pub struct EffectComposer {
    config: EffectConfig,
}

impl EffectComposer {
    pub fn new(config: EffectConfig) -> Self {
        EffectComposer { config }
    }

    pub fn config(&self) -> &EffectConfig {
        &self.config
    }

    /// Base presentation tags shared by the main and entry layers.
    fn base_tags(&self) -> String {
        format!(
            "\\blur{}\\bord{}\\shad{}\\3c{}\\c{}",
            self.config.blur,
            self.config.border_size,
            self.config.shadow_size,
            self.config.border_color.to_ass(),
            self.config.primary_color.to_ass(),
        )
    }

    /// Layer 1: the settled syllable, visible from the end of its highlight
    /// until the line ends, fading out over `fade_out_duration`.
    fn main_line(&self, syllable: &Syllable, line: &KaraokeLine) -> String {
        let start_ms = line.start_ms + syllable.start_ms + self.config.highlight_duration;

        let tags = format!(
            "{{\\an5\\pos({:.0},{:.0})\\fad(0,{}){}}}",
            syllable.x,
            syllable.y,
            self.config.fade_out_duration,
            self.base_tags(),
        );

        format!(
            "Dialogue: 1,{},{},{},,0,0,0,fx,{}{}",
            format_time(start_ms),
            line.dialogue.end,
            line.dialogue.style,
            tags,
            syllable.text,
        )
    }

    /// Layer 2: one line per visible character, animating it from an entry
    /// position to its resting position over `entry_duration`.
    fn entry_lines<R: Rng + ?Sized>(
        &self,
        syllable: &Syllable,
        line: &KaraokeLine,
        rng: &mut R,
    ) -> Vec<String> {
        let syl_start_abs = line.start_ms + syllable.start_ms;
        let entry_start = (syl_start_abs - self.config.entry_duration).max(0);
        let duration = self.config.entry_duration;

        let metrics = line.metrics();
        let mut lines = Vec::new();

        for placement in LayoutEngine::char_layout(syllable, &metrics) {
            let rest_x = placement.x;
            let rest_y = syllable.y;

            let tags = match self.config.entry_style {
                EntryStyle::RandomRotate => {
                    // Scatter on a circle around the resting position and
                    // unspin from a random initial rotation
                    let angle = rng.random_range(0.0..TAU);
                    let entry_x = rest_x + ENTRY_RADIUS * angle.cos();
                    let entry_y = rest_y + ENTRY_RADIUS * angle.sin();
                    let rotation: i32 = rng.random_range(-360..=360);

                    format!(
                        "{{{}\\an5\\move({:.0},{:.0},{:.0},{:.0},0,{})\\fad({},0)\\frz{}\\t(0,{},\\frz0)}}",
                        self.base_tags(),
                        entry_x,
                        entry_y,
                        rest_x,
                        rest_y,
                        duration,
                        duration,
                        rotation,
                        duration,
                    )
                }
                EntryStyle::FlyIn => format!(
                    "{{{}\\an5\\move({:.0},{:.0},{:.0},{:.0},0,{})\\fad({},0)}}",
                    self.base_tags(),
                    rest_x,
                    rest_y + ENTRY_RADIUS,
                    rest_x,
                    rest_y,
                    duration,
                    duration,
                ),
                EntryStyle::ScaleIn => format!(
                    "{{{}\\an5\\pos({:.0},{:.0})\\fscx0\\fscy0\\fad({},0)\\t(0,{},\\fscx100\\fscy100)}}",
                    self.base_tags(),
                    rest_x,
                    rest_y,
                    duration,
                    duration,
                ),
            };

            lines.push(format!(
                "Dialogue: 2,{},{},{},,0,0,0,fx,{}{}",
                format_time(entry_start),
                format_time(syl_start_abs),
                line.dialogue.style,
                tags,
                placement.ch,
            ));
        }

        lines
    }

    /// Layer 3: the highlight, covering exactly the syllable's karaoke
    /// window. Drops in from above, holds an enlarged rotated pose for the
    /// first half, settles color in the second half, and resets scale and
    /// rotation from 100 ms in. All `\t` ranges are relative to this
    /// line's own start.
    fn highlight_line(&self, syllable: &Syllable, line: &KaraokeLine) -> String {
        let start_ms = line.start_ms + syllable.start_ms;
        let end_ms = start_ms + self.config.highlight_duration;
        let half = self.config.highlight_duration / 2;

        let tags = format!(
            "{{\\an5\\move({x:.0},{y_above:.0},{x:.0},{y:.0})\
             \\fscx{sx}\\fscy{sy}\
             \\bord3\\blur4\
             \\3c{hl_border}\
             \\xshad0\\yshad-4\
             \\4c{hl_shadow}\
             \\t(0,{half},\\frz{rot}\\fry{persp_y}\\frx{persp_x})\
             \\t({half},{dur},\\c{primary})\
             \\t(100,{dur},\\fscx100\\fscy100\\fry0\\frz0\\frx0)}}",
            x = syllable.x,
            y_above = syllable.y - HIGHLIGHT_DROP,
            y = syllable.y,
            sx = self.config.highlight_scale_x,
            sy = self.config.highlight_scale_y,
            hl_border = self.config.highlight_border_color.to_ass(),
            hl_shadow = self.config.highlight_shadow_color.to_ass(),
            half = half,
            dur = self.config.highlight_duration,
            rot = self.config.highlight_rotation,
            persp_y = self.config.highlight_perspective_y,
            persp_x = self.config.highlight_perspective_x,
            primary = self.config.primary_color.to_ass(),
        );

        format!(
            "Dialogue: 3,{},{},{},,0,0,0,fx,{}{}",
            format_time(start_ms),
            format_time(end_ms),
            line.dialogue.style,
            tags,
            syllable.text,
        )
    }

    /// Compose all output lines for one laid-out karaoke line.
    ///
    /// Layers are interleaved per syllable: main, then the entry line of
    /// every visible character, then the highlight. A line with zero
    /// syllables composes to zero lines; nothing here ever fails.
    pub fn compose_line<R: Rng + ?Sized>(&self, line: &KaraokeLine, rng: &mut R) -> Vec<String> {
        let mut output = Vec::new();

        for syllable in &line.syllables {
            output.push(self.main_line(syllable, line));
            output.extend(self.entry_lines(syllable, line, rng));
            output.push(self.highlight_line(syllable, line));
        }

        output
    }
}
