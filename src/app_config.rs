use std::fmt;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use log::warn;
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::ConfigError;

/// Effect configuration module
/// Handles loading and validating the effect parameters supplied by the
/// host, either as JSON or as the flat `KEY:value` hand-off file.
/// A 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// ASS override-tag color form: `&H00BBGGRR&` (blue first, alpha 00).
    pub fn to_ass(self) -> String {
        format!("&H00{:02X}{:02X}{:02X}&", self.b, self.g, self.r)
    }
}

impl FromStr for Rgb {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ConfigError::InvalidColor(s.to_string()));
        }

        // Length and digit class checked above
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap();
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap();
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap();
        Ok(Rgb { r, g, b })
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

/// Entry animation variant for the per-character entry layer.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum EntryStyle {
    // @variant: Characters fly in from a random direction while unspinning
    #[default]
    RandomRotate,
    // @variant: Characters rise from below their resting position
    FlyIn,
    // @variant: Characters grow from zero scale in place
    ScaleIn,
}

impl EntryStyle {
    pub fn to_lowercase_string(&self) -> String {
        match self {
            Self::RandomRotate => "random_rotate".to_string(),
            Self::FlyIn => "fly_in".to_string(),
            Self::ScaleIn => "scale_in".to_string(),
        }
    }
}

impl fmt::Display for EntryStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_lowercase_string())
    }
}

impl FromStr for EntryStyle {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "random_rotate" => Ok(Self::RandomRotate),
            "fly_in" => Ok(Self::FlyIn),
            "scale_in" => Ok(Self::ScaleIn),
            _ => Err(ConfigError::InvalidEntryStyle(s.to_string())),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

/// Presentation and animation parameters for one composition run.
///
/// Immutable once built; supplied entirely by the host. Durations are in
/// milliseconds, scales in percent, rotations and skews in degrees.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EffectConfig {
    /// Primary fill color
    #[serde(default = "default_primary_color")]
    pub primary_color: Rgb,

    /// Secondary fill color
    #[serde(default = "default_secondary_color")]
    pub secondary_color: Rgb,

    /// Border color
    #[serde(default = "default_border_color")]
    pub border_color: Rgb,

    /// Shadow color
    #[serde(default = "default_secondary_color")]
    pub shadow_color: Rgb,

    /// Border color while a syllable is highlighted
    #[serde(default = "default_highlight_border_color")]
    pub highlight_border_color: Rgb,

    /// Shadow color while a syllable is highlighted
    #[serde(default = "default_highlight_shadow_color")]
    pub highlight_shadow_color: Rgb,

    /// Border size
    #[serde(default = "default_border_size")]
    pub border_size: f32,

    /// Shadow size
    #[serde(default)]
    pub shadow_size: f32,

    /// Blur radius
    #[serde(default = "default_blur")]
    pub blur: f32,

    /// Entry animation duration (ms)
    #[serde(default = "default_entry_duration")]
    pub entry_duration: i64,

    /// Highlight duration (ms)
    #[serde(default = "default_highlight_duration")]
    pub highlight_duration: i64,

    /// Fade-out duration at line end (ms)
    #[serde(default = "default_fade_out_duration")]
    pub fade_out_duration: i64,

    /// Entry animation variant
    #[serde(default)]
    pub entry_style: EntryStyle,

    /// Highlight horizontal scale (percent)
    #[serde(default = "default_highlight_scale_x")]
    pub highlight_scale_x: i32,

    /// Highlight vertical scale (percent)
    #[serde(default = "default_highlight_scale_y")]
    pub highlight_scale_y: i32,

    /// Highlight z-rotation (degrees)
    #[serde(default = "default_highlight_rotation")]
    pub highlight_rotation: i32,

    /// Highlight x-axis perspective skew (degrees)
    #[serde(default = "default_highlight_perspective_x")]
    pub highlight_perspective_x: i32,

    /// Highlight y-axis perspective skew (degrees)
    #[serde(default = "default_highlight_perspective_y")]
    pub highlight_perspective_y: i32,
}

impl Default for EffectConfig {
    fn default() -> Self {
        EffectConfig {
            primary_color: default_primary_color(),
            secondary_color: default_secondary_color(),
            border_color: default_border_color(),
            shadow_color: default_secondary_color(),
            highlight_border_color: default_highlight_border_color(),
            highlight_shadow_color: default_highlight_shadow_color(),
            border_size: default_border_size(),
            shadow_size: 0.0,
            blur: default_blur(),
            entry_duration: default_entry_duration(),
            highlight_duration: default_highlight_duration(),
            fade_out_duration: default_fade_out_duration(),
            entry_style: EntryStyle::default(),
            highlight_scale_x: default_highlight_scale_x(),
            highlight_scale_y: default_highlight_scale_y(),
            highlight_rotation: default_highlight_rotation(),
            highlight_perspective_x: default_highlight_perspective_x(),
            highlight_perspective_y: default_highlight_perspective_y(),
        }
    }
}

/// One generation job: the effect parameters plus the host's style
/// selection and log level.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct JobConfig {
    /// Effect parameters
    #[serde(default)]
    pub effect: EffectConfig,

    /// Only dialogue lines carrying this style are processed
    #[serde(default)]
    pub selected_style: Option<String>,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

impl JobConfig {
    /// Load a job configuration from a file.
    ///
    /// `.json` files go through serde; anything else is treated as the flat
    /// `KEY:value` hand-off record written by the host UI.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if path.extension().and_then(|e| e.to_str()) == Some("json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            Ok(Self::from_key_values(&content))
        }
    }

    /// Parse the flat `KEY:value` hand-off format.
    ///
    /// Unknown keys are ignored and malformed values fall back to their
    /// defaults with a warning; a config file never fails the batch.
    pub fn from_key_values(content: &str) -> Self {
        let mut config = JobConfig::default();

        for line in content.lines() {
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            let key = key.trim();
            let value = value.trim();

            match key {
                "PRIMARY_COLOR" => set_color(&mut config.effect.primary_color, key, value),
                "SECONDARY_COLOR" => set_color(&mut config.effect.secondary_color, key, value),
                "BORDER_COLOR" => set_color(&mut config.effect.border_color, key, value),
                "SHADOW_COLOR" => set_color(&mut config.effect.shadow_color, key, value),
                "HIGHLIGHT_BORDER_COLOR" => {
                    set_color(&mut config.effect.highlight_border_color, key, value)
                }
                "HIGHLIGHT_SHADOW_COLOR" => {
                    set_color(&mut config.effect.highlight_shadow_color, key, value)
                }
                "BORDER_SIZE" => set_number(&mut config.effect.border_size, key, value),
                "SHADOW_SIZE" => set_number(&mut config.effect.shadow_size, key, value),
                "BLUR" => set_number(&mut config.effect.blur, key, value),
                "ENTRY_DURATION" => set_number(&mut config.effect.entry_duration, key, value),
                "HIGHLIGHT_DURATION" => {
                    set_number(&mut config.effect.highlight_duration, key, value)
                }
                "FADEOUT_DURATION" => set_number(&mut config.effect.fade_out_duration, key, value),
                "ENTRY_TYPE" => match value.parse() {
                    Ok(style) => config.effect.entry_style = style,
                    Err(e) => warn!("Ignoring invalid ENTRY_TYPE: {}", e),
                },
                "HIGHLIGHT_SCALE_X" => set_number(&mut config.effect.highlight_scale_x, key, value),
                "HIGHLIGHT_SCALE_Y" => set_number(&mut config.effect.highlight_scale_y, key, value),
                "HIGHLIGHT_ROTATION" => {
                    set_number(&mut config.effect.highlight_rotation, key, value)
                }
                "HIGHLIGHT_PERSPECTIVE_X" => {
                    set_number(&mut config.effect.highlight_perspective_x, key, value)
                }
                "HIGHLIGHT_PERSPECTIVE_Y" => {
                    set_number(&mut config.effect.highlight_perspective_y, key, value)
                }
                "SELECTED_STYLE" => {
                    if !value.is_empty() {
                        config.selected_style = Some(value.to_string());
                    }
                }
                _ => {}
            }
        }

        config
    }
}

fn set_color(slot: &mut Rgb, key: &str, value: &str) {
    match value.parse() {
        Ok(color) => *slot = color,
        Err(e) => warn!("Ignoring invalid {}: {}", key, e),
    }
}

fn set_number<T: FromStr>(slot: &mut T, key: &str, value: &str) {
    match value.parse() {
        Ok(n) => *slot = n,
        Err(_) => warn!("Ignoring non-numeric {}: '{}'", key, value),
    }
}

fn default_primary_color() -> Rgb {
    Rgb::new(0xFF, 0xFF, 0xFF)
}

fn default_secondary_color() -> Rgb {
    Rgb::new(0x00, 0x00, 0x00)
}

fn default_border_color() -> Rgb {
    Rgb::new(0xFC, 0x76, 0xF2)
}

fn default_highlight_border_color() -> Rgb {
    Rgb::new(0xFF, 0xD9, 0xC5)
}

fn default_highlight_shadow_color() -> Rgb {
    Rgb::new(0xFF, 0xB7, 0x92)
}

fn default_border_size() -> f32 {
    2.0
}

fn default_blur() -> f32 {
    3.0
}

fn default_entry_duration() -> i64 {
    400
}

fn default_highlight_duration() -> i64 {
    300
}

fn default_fade_out_duration() -> i64 {
    300
}

fn default_highlight_scale_x() -> i32 {
    135
}

fn default_highlight_scale_y() -> i32 {
    150
}

fn default_highlight_rotation() -> i32 {
    10
}

fn default_highlight_perspective_x() -> i32 {
    -30
}

fn default_highlight_perspective_y() -> i32 {
    -40
}
