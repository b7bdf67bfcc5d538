//! Dry-run target
//!
//! Accepts every request and discards content. The random stream is still
//! consumed exactly as in a real run, so the directory and file names a dry
//! run reports are the ones a real run with the same seed would produce.

use super::Target;
use crate::Result;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Target that records requested paths and writes nothing
#[derive(Debug, Default)]
pub struct DryRunTarget {
    dirs: Vec<PathBuf>,
    files: Vec<PathBuf>,
}

impl DryRunTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }
}

impl Target for DryRunTarget {
    fn name(&self) -> &'static str {
        "dry-run"
    }

    fn create_dir_all(&mut self, path: &Path) -> Result<()> {
        self.dirs.push(path.to_path_buf());
        Ok(())
    }

    fn create_file(&mut self, path: &Path) -> Result<Box<dyn Write + '_>> {
        self.files.push(path.to_path_buf());
        Ok(Box::new(io::sink()))
    }
}
