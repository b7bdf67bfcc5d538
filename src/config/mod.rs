//! Configuration module
//!
//! Handles CLI argument parsing, the persisted `settings.json` document,
//! plan files (TOML or JSON) and validation.
//!
//! [`Settings`] is the user-facing, serializable form (sizes as strings).
//! [`GenerationPlan`] is the resolved, immutable form a run is built from.

pub mod cli;
pub mod settings;
pub mod size;
pub mod toml;
pub mod validator;

use crate::random::UNSET_SEED;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Persisted run settings
///
/// Key names match the `settings.json` sidecar written after every run.
/// Missing keys take the CLI defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Number of files to create
    pub files_count: usize,
    /// Number of directories per level
    pub dirs_count: usize,
    /// Total size of all files (e.g. "500mb")
    pub total_size_str: String,
    /// Base directory of the tree
    pub base_dir: PathBuf,
    /// Number of sub-directory levels
    pub levels: usize,
    /// Pattern for directory names
    pub dir_name_pattern: String,
    /// Pattern for file names
    pub file_name_pattern: String,
    /// Value of the `{ext}` placeholder
    pub file_extension: String,
    /// Number of byte-identical files
    pub duplicates: usize,
    /// Seed for the random stream (0 = clock-derived)
    pub seed: i64,
    /// Reject patterns that leave unresolved placeholders
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub strict_patterns: bool,
}

fn default_files_count() -> usize {
    10
}

fn default_dirs_count() -> usize {
    5
}

fn default_total_size() -> String {
    "500mb".to_string()
}

fn default_levels() -> usize {
    1
}

fn default_dir_name_pattern() -> String {
    "dir_{level}_{index}".to_string()
}

fn default_file_name_pattern() -> String {
    "file_{index}.{ext}".to_string()
}

fn default_file_extension() -> String {
    "dat".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            files_count: default_files_count(),
            dirs_count: default_dirs_count(),
            total_size_str: default_total_size(),
            base_dir: PathBuf::new(),
            levels: default_levels(),
            dir_name_pattern: default_dir_name_pattern(),
            file_name_pattern: default_file_name_pattern(),
            file_extension: default_file_extension(),
            duplicates: 0,
            seed: UNSET_SEED,
            strict_patterns: false,
        }
    }
}

/// Resolved, immutable description of one generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationPlan {
    pub files_count: usize,
    pub dirs_count: usize,
    /// Total size in bytes
    pub total_size: u64,
    pub base_dir: PathBuf,
    pub levels: usize,
    pub dir_name_pattern: String,
    pub file_name_pattern: String,
    pub file_extension: String,
    /// Requested duplicates (see [`GenerationPlan::effective_duplicates`])
    pub duplicates: usize,
    pub seed: i64,
    pub strict_patterns: bool,
}

impl GenerationPlan {
    /// Resolve settings into a plan, parsing the size string
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Ok(Self {
            files_count: settings.files_count,
            dirs_count: settings.dirs_count,
            total_size: size::parse_size(&settings.total_size_str)?,
            base_dir: settings.base_dir.clone(),
            levels: settings.levels,
            dir_name_pattern: settings.dir_name_pattern.clone(),
            file_name_pattern: settings.file_name_pattern.clone(),
            file_extension: settings.file_extension.clone(),
            duplicates: settings.duplicates,
            seed: settings.seed,
            strict_patterns: settings.strict_patterns,
        })
    }

    /// Duplicates actually written, capped at `files_count`
    pub fn effective_duplicates(&self) -> usize {
        self.duplicates.min(self.files_count)
    }

    /// Bytes missing from the total when every file is a duplicate
    ///
    /// Duplicates all share `total_size / files_count`, so an all-duplicate
    /// run writes `total_size % files_count` bytes less than requested.
    pub fn duplicate_shortfall(&self) -> u64 {
        if self.files_count > 0 && self.effective_duplicates() == self.files_count {
            self.total_size % self.files_count as u64
        } else {
            0
        }
    }

    /// Number of directories the tree will hold (base directory excluded)
    pub fn expected_dir_count(&self) -> usize {
        (1..=self.levels)
            .map(|level| self.dirs_count.saturating_pow(level as u32))
            .fold(0usize, |acc, n| acc.saturating_add(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.files_count, 10);
        assert_eq!(settings.dirs_count, 5);
        assert_eq!(settings.total_size_str, "500mb");
        assert_eq!(settings.levels, 1);
        assert_eq!(settings.dir_name_pattern, "dir_{level}_{index}");
        assert_eq!(settings.file_name_pattern, "file_{index}.{ext}");
        assert_eq!(settings.file_extension, "dat");
        assert_eq!(settings.duplicates, 0);
        assert_eq!(settings.seed, 0);
    }

    #[test]
    fn test_plan_from_settings() {
        let settings = Settings {
            base_dir: PathBuf::from("/tmp/out"),
            total_size_str: "2mb".to_string(),
            ..Settings::default()
        };
        let plan = GenerationPlan::from_settings(&settings).unwrap();
        assert_eq!(plan.total_size, 2 * 1024 * 1024);
        assert_eq!(plan.base_dir, PathBuf::from("/tmp/out"));
    }

    #[test]
    fn test_plan_from_bad_size() {
        let settings = Settings {
            total_size_str: "lots".to_string(),
            ..Settings::default()
        };
        assert!(matches!(
            GenerationPlan::from_settings(&settings),
            Err(crate::Error::Config(_))
        ));
    }

    #[test]
    fn test_effective_duplicates() {
        let mut plan = GenerationPlan::from_settings(&Settings::default()).unwrap();
        plan.files_count = 5;
        plan.duplicates = 3;
        assert_eq!(plan.effective_duplicates(), 3);
        plan.duplicates = 5;
        assert_eq!(plan.effective_duplicates(), 5);
        plan.duplicates = 9;
        assert_eq!(plan.effective_duplicates(), 5);
        plan.files_count = 1;
        assert_eq!(plan.effective_duplicates(), 1);
        plan.files_count = 0;
        assert_eq!(plan.effective_duplicates(), 0);
    }

    #[test]
    fn test_duplicate_shortfall() {
        let mut plan = GenerationPlan::from_settings(&Settings::default()).unwrap();
        plan.files_count = 3;
        plan.total_size = 1000;
        plan.duplicates = 2;
        assert_eq!(plan.duplicate_shortfall(), 0);
        plan.duplicates = 3;
        assert_eq!(plan.duplicate_shortfall(), 1);
        plan.total_size = 999;
        assert_eq!(plan.duplicate_shortfall(), 0);
    }

    #[test]
    fn test_expected_dir_count() {
        let mut plan = GenerationPlan::from_settings(&Settings::default()).unwrap();
        plan.dirs_count = 2;
        plan.levels = 2;
        assert_eq!(plan.expected_dir_count(), 6);
        plan.levels = 0;
        assert_eq!(plan.expected_dir_count(), 0);
    }
}
