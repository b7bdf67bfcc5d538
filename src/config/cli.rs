//! CLI argument parsing using clap

use super::settings::{load_settings, settings_path};
use super::toml::parse_plan_file;
use super::Settings;
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};

/// treegen - deterministic synthetic directory tree generator
///
/// Generates directory trees and files of configurable size, count and
/// naming pattern for testing backup/restore tooling or simulating
/// filesystem load. Runs with the same non-zero seed produce identical
/// trees.
///
/// Naming patterns accept {index}, {random}, {timestamp}, {date}, {time},
/// {uuid}, {randstr:N}, plus {level} for directories and {ext} for files.
#[derive(Parser, Debug, Default)]
#[command(name = "treegen")]
#[command(version, about, long_about)]
pub struct Cli {
    /// Base directory for file and directory creation (required)
    #[arg(short = 'b', long = "dir", value_name = "PATH")]
    pub base_dir: Option<PathBuf>,

    /// Number of files to create [default: 10]
    #[arg(short = 'f', long = "files")]
    pub files_count: Option<usize>,

    /// Number of directories per level [default: 5]
    #[arg(short = 'd', long = "dirs")]
    pub dirs_count: Option<usize>,

    /// Total size of all files, e.g. 500mb, 1.5gb [default: 500mb]
    #[arg(short = 's', long = "size")]
    pub total_size: Option<String>,

    /// Number of subdirectory levels [default: 1]
    #[arg(short = 'l', long)]
    pub levels: Option<usize>,

    /// Pattern for directory names [default: dir_{level}_{index}]
    #[arg(short = 'D', long)]
    pub dir_name_pattern: Option<String>,

    /// Pattern for file names [default: file_{index}.{ext}]
    #[arg(short = 'F', long)]
    pub file_name_pattern: Option<String>,

    /// File extension for generated files [default: dat]
    #[arg(short = 'e', long)]
    pub file_extension: Option<String>,

    /// Number of byte-identical duplicate files [default: 0]
    #[arg(short = 'u', long)]
    pub duplicates: Option<usize>,

    /// Seed for the random generator; 0 derives one from the clock [default: 0]
    #[arg(short = 'S', long, allow_negative_numbers = true)]
    pub seed: Option<i64>,

    /// Fail on placeholders left unresolved after expansion
    #[arg(long)]
    pub strict_patterns: bool,

    /// Load settings from a plan file (TOML or JSON); flags override its values
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Recreate the tree from settings.json found in the base directory
    #[arg(long)]
    pub reuse_settings: bool,

    /// Show what would be generated without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Write a layout manifest (one "path size" line per file)
    #[arg(long, value_name = "FILE")]
    pub export_manifest: Option<PathBuf>,

    /// Do not write settings.json after the run
    #[arg(long)]
    pub no_save_settings: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Work out the settings for this run
    ///
    /// `--reuse-settings` replaces every flag with `settings.json` from the
    /// base directory; without that file it warns and falls back to the
    /// flags. Otherwise explicit flags are layered over a `--config` plan
    /// file, or over the defaults.
    pub fn resolve(&self) -> anyhow::Result<Settings> {
        if self.reuse_settings {
            if let Some(ref dir) = self.base_dir {
                let path = settings_path(dir);
                if path.exists() {
                    let settings = load_settings(&path).with_context(|| {
                        format!("Error loading settings from {}", path.display())
                    })?;
                    info!(path = %path.display(), "creating files based on saved settings");
                    return Ok(settings);
                }
                warn!(
                    path = %path.display(),
                    "no saved settings found; using command-line arguments"
                );
            }
        }

        let base = match self.config {
            Some(ref path) => parse_plan_file(path)
                .with_context(|| format!("Failed to load plan file: {}", path.display()))?,
            None => Settings::default(),
        };

        Ok(self.apply_to(base))
    }

    /// Overlay explicitly given flags on top of `base`
    pub fn apply_to(&self, mut base: Settings) -> Settings {
        if let Some(ref dir) = self.base_dir {
            base.base_dir = dir.clone();
        }
        if let Some(n) = self.files_count {
            base.files_count = n;
        }
        if let Some(n) = self.dirs_count {
            base.dirs_count = n;
        }
        if let Some(ref size) = self.total_size {
            base.total_size_str = size.clone();
        }
        if let Some(n) = self.levels {
            base.levels = n;
        }
        if let Some(ref pattern) = self.dir_name_pattern {
            base.dir_name_pattern = pattern.clone();
        }
        if let Some(ref pattern) = self.file_name_pattern {
            base.file_name_pattern = pattern.clone();
        }
        if let Some(ref ext) = self.file_extension {
            base.file_extension = ext.clone();
        }
        if let Some(n) = self.duplicates {
            base.duplicates = n;
        }
        if let Some(seed) = self.seed {
            base.seed = seed;
        }
        if self.strict_patterns {
            base.strict_patterns = true;
        }
        base
    }

    /// Validate CLI arguments
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.base_dir.is_none() && self.config.is_none() {
            anyhow::bail!(
                "the output directory must be specified using --dir (or a --config plan file)"
            );
        }
        if self.reuse_settings && self.base_dir.is_none() {
            anyhow::bail!("--reuse-settings needs --dir to locate settings.json");
        }
        Ok(())
    }
}
