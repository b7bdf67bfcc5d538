//! Plan file parsing
//!
//! A plan file carries the same keys as `settings.json`. Files ending in
//! `.toml` are parsed as TOML, anything else as JSON.

use super::settings::load_settings;
use super::Settings;
use crate::{Error, Result};
use std::fs;
use std::path::Path;

/// Parse a plan file (TOML or JSON by extension)
pub fn parse_plan_file(path: &Path) -> Result<Settings> {
    let is_toml = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("toml"))
        .unwrap_or(false);

    if is_toml {
        let contents = fs::read_to_string(path).map_err(|e| Error::fs("read plan file", path, e))?;
        parse_toml_string(&contents)
            .map_err(|e| Error::Config(format!("failed to parse {}: {}", path.display(), e)))
    } else {
        load_settings(path)
    }
}

/// Parse TOML plan from string
pub fn parse_toml_string(contents: &str) -> Result<Settings> {
    ::toml::from_str(contents).map_err(|e| Error::Config(format!("invalid TOML plan: {}", e)))
}
