//! Layout manifest file handling
//!
//! A layout manifest is a text file listing every generated file (relative
//! to the base directory) with its size, preceded by `#` header comments
//! describing the run. It lets a restore be checked against what was
//! generated without re-running the generator.

use crate::layout::GenerationReport;
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};

/// File entry with path and size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    /// File path (relative to the base directory)
    pub path: PathBuf,
    /// File size in bytes
    pub size: u64,
}

/// Manifest header with generation metadata
#[derive(Debug, Clone)]
pub struct ManifestHeader {
    /// When the manifest was generated
    pub generated_at: DateTime<Utc>,
    /// Seed of the run (None when clock-derived)
    pub seed: Option<i64>,
    /// Total number of directories
    pub total_directories: usize,
    /// Total number of files
    pub total_files: usize,
    /// Sum of all file sizes
    pub total_bytes: u64,
}

/// Layout manifest containing the file list
#[derive(Debug, Clone)]
pub struct LayoutManifest {
    pub header: ManifestHeader,
    pub entries: Vec<ManifestEntry>,
}

impl LayoutManifest {
    /// Build from a finished run
    pub fn from_report(report: &GenerationReport) -> Self {
        let entries = report
            .files
            .iter()
            .map(|f| ManifestEntry {
                path: f
                    .path
                    .strip_prefix(&report.base_dir)
                    .unwrap_or(&f.path)
                    .to_path_buf(),
                size: f.size,
            })
            .collect();

        Self {
            header: ManifestHeader {
                generated_at: Utc::now(),
                seed: report.reproducible.then_some(report.resolved_seed as i64),
                total_directories: report.dir_count(),
                total_files: report.file_count(),
                total_bytes: report.total_bytes(),
            },
            entries,
        }
    }

    /// Parse layout manifest from string
    ///
    /// Header lines other than the totals are informational and skipped.
    pub fn from_string(content: &str) -> Result<Self> {
        let mut header = ManifestHeader {
            generated_at: Utc::now(),
            seed: None,
            total_directories: 0,
            total_files: 0,
            total_bytes: 0,
        };
        let mut entries = Vec::new();

        for (lineno, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if let Some(comment) = line.strip_prefix('#') {
                let comment = comment.trim();
                if let Some(v) = comment.strip_prefix("Seed:") {
                    header.seed = v.trim().parse().ok();
                } else if let Some(v) = comment.strip_prefix("Total directories:") {
                    header.total_directories = v.trim().parse().unwrap_or(0);
                } else if let Some(v) = comment.strip_prefix("Total files:") {
                    header.total_files = v.trim().parse().unwrap_or(0);
                } else if let Some(v) = comment.strip_prefix("Total bytes:") {
                    header.total_bytes = v.trim().parse().unwrap_or(0);
                }
                continue;
            }

            // Paths may contain spaces; the size is the last field
            let (path, size) = line
                .rsplit_once(' ')
                .and_then(|(p, s)| s.parse::<u64>().ok().map(|s| (p, s)))
                .ok_or_else(|| {
                    Error::Config(format!("manifest line {}: expected '<path> <size>'", lineno + 1))
                })?;

            entries.push(ManifestEntry {
                path: PathBuf::from(path),
                size,
            });
        }

        if header.total_files == 0 {
            header.total_files = entries.len();
        }

        Ok(Self { header, entries })
    }

    /// Export layout manifest to file
    pub fn to_file(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_string()).map_err(|e| Error::fs("write manifest", path, e))
    }

    /// Total number of files listed
    pub fn file_count(&self) -> usize {
        self.entries.len()
    }
}

impl std::fmt::Display for LayoutManifest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "# treegen Layout Manifest")?;
        writeln!(
            f,
            "# Generated: {}",
            self.header.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        match self.header.seed {
            Some(seed) => writeln!(f, "# Seed: {}", seed)?,
            None => writeln!(f, "# Seed: none")?,
        }
        writeln!(f, "# Total directories: {}", self.header.total_directories)?;
        writeln!(f, "# Total files: {}", self.header.total_files)?;
        writeln!(f, "# Total bytes: {}", self.header.total_bytes)?;
        writeln!(f, "#")?;

        for entry in &self.entries {
            writeln!(f, "{} {}", entry.path.display(), entry.size)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{FileEntry, GenerationReport, MetadataStats};
    use std::time::Duration;
    use tempfile::TempDir;

    fn report() -> GenerationReport {
        GenerationReport {
            base_dir: PathBuf::from("/base"),
            resolved_seed: 42,
            reproducible: true,
            dirs: vec![PathBuf::from("/base/dir_0_0"), PathBuf::from("/base/dir_0_1")],
            files: vec![
                FileEntry {
                    path: PathBuf::from("/base/dir_0_0/file_0.dat"),
                    size: 4096,
                    duplicate: false,
                },
                FileEntry {
                    path: PathBuf::from("/base/dir_0_1/my file_1.dat"),
                    size: 10,
                    duplicate: false,
                },
            ],
            stats: MetadataStats::default(),
            elapsed: Duration::from_millis(5),
        }
    }

    #[test]
    fn test_manifest_export() {
        let content = LayoutManifest::from_report(&report()).to_string();

        assert!(content.contains("# treegen Layout Manifest"));
        assert!(content.contains("# Seed: 42"));
        assert!(content.contains("# Total files: 2"));
        assert!(content.contains("# Total bytes: 4106"));
        assert!(content.contains("dir_0_0/file_0.dat 4096\n"));
        assert!(!content.contains("/base/"));
    }

    #[test]
    fn test_manifest_parse_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("layout.manifest");

        let original = LayoutManifest::from_report(&report());
        original.to_file(&path).unwrap();

        let parsed = LayoutManifest::from_string(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed.entries, original.entries);
        assert_eq!(parsed.header.seed, Some(42));
        assert_eq!(parsed.header.total_directories, 2);
        assert_eq!(parsed.header.total_bytes, 4106);
    }

    #[test]
    fn test_manifest_parse_rejects_bad_line() {
        assert!(LayoutManifest::from_string("# header\nno_size_here\n").is_err());
    }
}
