use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::fs::File;
use std::io::Write;
use std::path::Path;

// @module: Script file reading and output writing

/// Read a script file as text.
///
/// ASS files in the wild are UTF-8 with a BOM more often than not, and the
/// occasional legacy file is Latin-1. The BOM is stripped; invalid UTF-8
/// falls back to a Latin-1 decode so no file is rejected outright.
pub fn read_script<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read script: {}", path.display()))?;

    let content = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            debug!(
                "Script {} is not valid UTF-8, decoding as Latin-1",
                path.display()
            );
            // Latin-1 maps bytes to the first 256 code points one-to-one
            e.into_bytes().iter().map(|&b| b as char).collect()
        }
    };

    Ok(content.strip_prefix('\u{feff}').unwrap_or(&content).to_string())
}

/// Collect the `Dialogue:` lines of a script in order.
pub fn dialogue_lines(content: &str) -> Vec<&str> {
    content
        .lines()
        .map(|l| l.trim_start())
        .filter(|l| l.starts_with("Dialogue:"))
        .collect()
}

/// Write generated lines to the output file, one per line, creating parent
/// directories as needed.
pub fn write_lines<P: AsRef<Path>>(path: P, lines: &[String]) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
    }

    let mut file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;

    for line in lines {
        writeln!(file, "{}", line)?;
    }

    Ok(())
}
