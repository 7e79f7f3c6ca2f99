use once_cell::sync::Lazy;
use regex::Regex;

// @module: ASS timestamp conversion

// @const: ASS timestamp regex (H:MM:SS.CS, unbounded hours)
static TIME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d+):(\d{2}):(\d{2})\.(\d{2})").unwrap()
});

/// Parse an ASS timestamp (`H:MM:SS.CS`) to milliseconds.
///
/// Parsing is deliberately permissive: anything that does not match the
/// grammar yields 0 so a malformed line degrades instead of aborting the
/// batch.
pub fn parse_time(text: &str) -> i64 {
    match TIME_REGEX.captures(text.trim()) {
        Some(caps) => {
            let h: i64 = caps[1].parse().unwrap_or(0);
            let m: i64 = caps[2].parse().unwrap_or(0);
            let s: i64 = caps[3].parse().unwrap_or(0);
            let cs: i64 = caps[4].parse().unwrap_or(0);
            (h * 3600 + m * 60 + s) * 1000 + cs * 10
        }
        None => 0,
    }
}

/// Format milliseconds as an ASS timestamp (`H:MM:SS.CS`).
///
/// Negative input clamps to 0. Precision is centiseconds, so
/// `parse_time(format_time(ms)) == ms - ms % 10`.
pub fn format_time(ms: i64) -> String {
    let ms = ms.max(0);
    let cs = (ms % 1000) / 10;
    let s = (ms / 1000) % 60;
    let m = (ms / 60000) % 60;
    let h = ms / 3_600_000;
    format!("{}:{:02}:{:02}.{:02}", h, m, s, cs)
}
