use std::collections::HashMap;

use log::debug;

// @module: ASS style block parsing

/// Default font size when the style is missing or carries no usable value.
pub const DEFAULT_FONT_SIZE: f32 = 48.0;

/// Default inter-character spacing.
pub const DEFAULT_SPACING: f32 = 0.0;

/// A single parsed style record: declared field name to raw string value.
pub type Style = HashMap<String, String>;

/// Catalog of styles parsed from the `[V4+ Styles]` section of a script.
///
/// Parsing is best-effort throughout: a missing section, a `Style:` line
/// with too few values, or a record without a `Name` all degrade to "no
/// entry" rather than an error. Downstream lookups fall back to default
/// metrics.
#[derive(Debug, Clone, Default)]
pub struct StyleCatalog {
    styles: HashMap<String, Style>,
}

impl StyleCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the styles section out of a full script document.
    ///
    /// The section header match is case-insensitive and accepts both
    /// `[V4 Styles]` and `[V4+ Styles]`; the section runs until the next
    /// `[`-header or end of document. A `Format:` line declares the field
    /// order; each following `Style:` line is accepted only when it supplies
    /// at least as many values as declared fields (trailing extras ignored).
    pub fn parse(document: &str) -> Self {
        let mut styles = HashMap::new();
        let mut in_section = false;
        let mut format_fields: Vec<String> = Vec::new();

        for raw in document.lines() {
            let line = raw.trim();

            if line.starts_with('[') {
                if line.to_ascii_lowercase().starts_with("[v4") {
                    in_section = true;
                    continue;
                }
                if in_section {
                    break;
                }
                continue;
            }

            if !in_section {
                continue;
            }

            if let Some(rest) = line.strip_prefix("Format:") {
                format_fields = rest.split(',').map(|f| f.trim().to_string()).collect();
            } else if let Some(rest) = line.strip_prefix("Style:") {
                if format_fields.is_empty() {
                    debug!("Ignoring Style line before any Format line");
                    continue;
                }

                let values: Vec<&str> = rest.split(',').map(|v| v.trim()).collect();
                if values.len() < format_fields.len() {
                    debug!(
                        "Skipping style record with {} values for {} declared fields",
                        values.len(),
                        format_fields.len()
                    );
                    continue;
                }

                let style: Style = format_fields
                    .iter()
                    .cloned()
                    .zip(values.iter().map(|v| v.to_string()))
                    .collect();

                match style.get("Name") {
                    Some(name) if !name.is_empty() => {
                        styles.insert(name.clone(), style);
                    }
                    _ => debug!("Skipping style record without a Name field"),
                }
            }
        }

        StyleCatalog { styles }
    }

    /// Look up a style record by name.
    pub fn style(&self, name: &str) -> Option<&Style> {
        self.styles.get(name)
    }

    /// Number of parsed styles.
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Whether the catalog holds no styles.
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Names of all parsed styles.
    pub fn style_names(&self) -> Vec<&str> {
        self.styles.keys().map(|s| s.as_str()).collect()
    }

    /// Font size of the named style, falling back to the default when the
    /// style is missing or its `Fontsize` field is not numeric.
    pub fn font_size(&self, name: &str) -> f32 {
        self.styles
            .get(name)
            .and_then(|s| s.get("Fontsize"))
            .and_then(|v| v.parse::<f32>().ok())
            .unwrap_or(DEFAULT_FONT_SIZE)
    }

    /// Inter-character spacing of the named style, with the same fallback
    /// behavior as [`font_size`](Self::font_size).
    pub fn spacing(&self, name: &str) -> f32 {
        self.styles
            .get(name)
            .and_then(|s| s.get("Spacing"))
            .and_then(|v| v.parse::<f32>().ok())
            .unwrap_or(DEFAULT_SPACING)
    }
}
