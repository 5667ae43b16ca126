//! Responsive breakpoints
//!
//! Variant tables live in TOML so tuning animation parameters per breakpoint
//! never touches scene code. The shipped table has the classic two-way split
//! at 768px; hosts can parse their own.

use serde::Deserialize;

use skroll_core::{Result, SkrollError};
use skroll_trigger::Variant;

const DEFAULT_BREAKPOINTS: &str = r#"
[[variant]]
name = "narrow"
max_width = 768.0

[variant.params]
zoom = 80.0
offset = 60.0
stagger = 0.06

[[variant]]
name = "wide"
min_width = 768.0

[variant.params]
zoom = 150.0
offset = 100.0
stagger = 0.1
"#;

#[derive(Debug, Deserialize)]
struct BreakpointFile {
    /// Absent table means no variants, not a parse error
    #[serde(default)]
    variant: Vec<Variant>,
}

/// Parse a variant table from TOML text
pub fn parse_variants(text: &str) -> Result<Vec<Variant>> {
    let file: BreakpointFile =
        toml::from_str(text).map_err(|e| SkrollError::Config(e.to_string()))?;
    if file.variant.is_empty() {
        return Err(SkrollError::NoVariants);
    }
    Ok(file.variant)
}

/// The shipped narrow/wide breakpoint table
pub fn default_variants() -> Vec<Variant> {
    // The embedded table is checked by tests; a parse failure here is a bug
    parse_variants(DEFAULT_BREAKPOINTS).unwrap_or_default()
}
