//! `settings.json` persistence
//!
//! After a successful run the settings are written next to the generated
//! tree so the exact same tree can be produced again later.

use super::Settings;
use crate::{Error, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Sidecar file name inside the base directory
pub const SETTINGS_FILENAME: &str = "settings.json";

/// Location of the sidecar for a base directory
pub fn settings_path(base_dir: &Path) -> PathBuf {
    base_dir.join(SETTINGS_FILENAME)
}

/// Load settings from a JSON document
pub fn load_settings(path: &Path) -> Result<Settings> {
    let content = fs::read_to_string(path).map_err(|e| Error::fs("read settings", path, e))?;
    serde_json::from_str(&content).map_err(|source| Error::Settings {
        path: path.to_path_buf(),
        source,
    })
}

/// Save settings as indented JSON (create-or-truncate)
pub fn save_settings(path: &Path, settings: &Settings) -> Result<()> {
    let mut content = serde_json::to_string_pretty(settings).map_err(|source| Error::Settings {
        path: path.to_path_buf(),
        source,
    })?;
    content.push('\n');

    let mut file = fs::File::create(path).map_err(|e| Error::fs("create settings", path, e))?;
    file.write_all(content.as_bytes())
        .map_err(|e| Error::fs("write settings", path, e))
}
