//! Generation statistics and results

use std::path::PathBuf;
use std::time::Duration;

/// Metadata operation statistics
#[derive(Debug, Default, Clone)]
pub struct MetadataStats {
    /// Number of mkdir operations
    pub mkdir_count: u64,

    /// Total mkdir latency (nanoseconds)
    pub mkdir_latency_ns: u64,

    /// Number of file create operations
    pub create_count: u64,

    /// Total create latency (nanoseconds), including content writes
    pub create_latency_ns: u64,

    /// Bytes written across all files
    pub bytes_written: u64,
}

impl MetadataStats {
    /// Get average mkdir latency in nanoseconds
    pub fn avg_mkdir_latency_ns(&self) -> u64 {
        if self.mkdir_count > 0 {
            self.mkdir_latency_ns / self.mkdir_count
        } else {
            0
        }
    }

    /// Get average create latency in nanoseconds
    pub fn avg_create_latency_ns(&self) -> u64 {
        if self.create_count > 0 {
            self.create_latency_ns / self.create_count
        } else {
            0
        }
    }
}

/// One generated file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Full path (base directory included)
    pub path: PathBuf,
    /// Size in bytes
    pub size: u64,
    /// Whether the content is the shared duplicate buffer
    pub duplicate: bool,
}

/// Outcome of a generation run
#[derive(Debug, Clone)]
pub struct GenerationReport {
    /// Base directory of the tree
    pub base_dir: PathBuf,
    /// Seed fed to the random stream
    pub resolved_seed: u64,
    /// Whether the run can be reproduced from its settings
    pub reproducible: bool,
    /// Directories in creation order (base directory only when no levels)
    pub dirs: Vec<PathBuf>,
    /// Files in slot order
    pub files: Vec<FileEntry>,
    /// Metadata operation counters
    pub stats: MetadataStats,
    /// Wall-clock duration of the run
    pub elapsed: Duration,
}

impl GenerationReport {
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn dir_count(&self) -> usize {
        self.dirs.len()
    }

    pub fn duplicate_count(&self) -> usize {
        self.files.iter().filter(|f| f.duplicate).count()
    }

    /// Sum of all file sizes
    pub fn total_bytes(&self) -> u64 {
        self.files.iter().map(|f| f.size).sum()
    }
}
