use once_cell::sync::Lazy;
use regex::Regex;

use crate::time_codec::parse_time;

// @module: Structural parsing of ASS Dialogue lines

// @const: Fixed 10-field Dialogue grammar; free text captures the rest of
// the line, embedded commas included
static DIALOGUE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^Dialogue:\s*(\d+),([^,]+),([^,]+),([^,]*),([^,]*),(\d+),(\d+),(\d+),([^,]*),(.*)$",
    )
    .unwrap()
});

/// One structural `Dialogue:` line, fields split but text left raw.
///
/// The free-text field may still contain override blocks, including the
/// `{\k}` duration markers consumed later by syllable extraction.
#[derive(Debug, Clone, PartialEq)]
pub struct DialogueLine {
    pub layer: u32,
    pub start: String,
    pub end: String,
    pub style: String,
    pub actor: String,
    pub margin_l: u32,
    pub margin_r: u32,
    pub margin_v: u32,
    pub effect: String,
    pub text: String,
}

impl DialogueLine {
    /// Parse one script line against the fixed 10-field grammar.
    ///
    /// Any mismatch yields `None` rather than an error so the caller can
    /// filter comments, headers and other non-dialogue lines uniformly.
    pub fn parse(line: &str) -> Option<Self> {
        let caps = DIALOGUE_REGEX.captures(line.trim_end())?;

        Some(DialogueLine {
            layer: caps[1].parse().unwrap_or(0),
            start: caps[2].to_string(),
            end: caps[3].to_string(),
            style: caps[4].to_string(),
            actor: caps[5].to_string(),
            margin_l: caps[6].parse().unwrap_or(0),
            margin_r: caps[7].parse().unwrap_or(0),
            margin_v: caps[8].parse().unwrap_or(0),
            effect: caps[9].to_string(),
            text: caps[10].to_string(),
        })
    }

    /// Line start in milliseconds.
    pub fn start_ms(&self) -> i64 {
        parse_time(&self.start)
    }

    /// Line end in milliseconds.
    pub fn end_ms(&self) -> i64 {
        parse_time(&self.end)
    }
}
