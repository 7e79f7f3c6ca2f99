/*!
 * # karafx - Multi-layer karaoke effect generator for ASS subtitles
 *
 * A Rust library that turns `{\k}`-timed karaoke dialogue lines into
 * renderer-ready override-tag lines implementing a three-layer animation:
 * per-character entry, per-syllable highlight, and a settled main layer.
 *
 * ## Features
 *
 * - Parse the `[V4+ Styles]` block for font size and spacing metrics
 * - Parse `Dialogue:` lines and their inline `{\k}` duration markers
 * - Heuristic horizontal layout (no font loading or shaping)
 * - Three-layer effect synthesis with seedable entry-layer randomness
 * - Permissive parsing throughout: malformed input degrades to empty
 *   output instead of failing the batch
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `time_codec`: ASS timestamp (`H:MM:SS.CS`) conversion
 * - `style_catalog`: styles block parsing and metric lookup
 * - `dialogue`: structural `Dialogue:` line parsing
 * - `text_metrics`: heuristic character width estimation
 * - `syllable`: karaoke duration marker extraction
 * - `layout`: syllable and per-character positioning
 * - `composer`: multi-layer override-tag synthesis
 * - `generator`: whole-script batch driver
 * - `app_config`: effect/job configuration handling
 * - `file_utils`: script reading and output writing
 * - `errors`: custom error types for the host layer
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod composer;
pub mod dialogue;
pub mod errors;
pub mod file_utils;
pub mod generator;
pub mod layout;
pub mod style_catalog;
pub mod syllable;
pub mod text_metrics;
pub mod time_codec;

// Re-export main types for easier usage
pub use app_config::{EffectConfig, EntryStyle, JobConfig, Rgb};
pub use composer::EffectComposer;
pub use dialogue::DialogueLine;
pub use errors::{AppError, ConfigError};
pub use generator::EffectGenerator;
pub use layout::{KaraokeLine, LayoutEngine};
pub use style_catalog::StyleCatalog;
pub use syllable::Syllable;
pub use text_metrics::TextMetrics;
pub use time_codec::{format_time, parse_time};
