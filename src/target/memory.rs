//! In-memory target
//!
//! Keeps the generated tree in ordered maps so tests can compare two runs
//! without touching the disk. Enforces the same ordering rule as a real
//! filesystem: a file can only be created inside an existing directory.

use super::Target;
use crate::{Error, Result};
use std::collections::{BTreeMap, BTreeSet};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Target holding directories and file contents in memory
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemoryTarget {
    dirs: BTreeSet<PathBuf>,
    files: BTreeMap<PathBuf, Vec<u8>>,
}

impl MemoryTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every directory created so far (including implied parents)
    pub fn dirs(&self) -> &BTreeSet<PathBuf> {
        &self.dirs
    }

    /// Every file and its content
    pub fn files(&self) -> &BTreeMap<PathBuf, Vec<u8>> {
        &self.files
    }

    /// Content of a single file
    pub fn file(&self, path: &Path) -> Option<&[u8]> {
        self.files.get(path).map(|v| v.as_slice())
    }

    /// Total bytes held across all files
    pub fn total_bytes(&self) -> u64 {
        self.files.values().map(|v| v.len() as u64).sum()
    }
}

impl Target for MemoryTarget {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn create_dir_all(&mut self, path: &Path) -> Result<()> {
        if self.files.contains_key(path) {
            return Err(Error::fs(
                "create directory",
                path,
                io::Error::new(io::ErrorKind::AlreadyExists, "a file exists at this path"),
            ));
        }
        for ancestor in path.ancestors() {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            self.dirs.insert(ancestor.to_path_buf());
        }
        Ok(())
    }

    fn create_file(&mut self, path: &Path) -> Result<Box<dyn Write + '_>> {
        let parent_exists = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => self.dirs.contains(parent),
            _ => true,
        };
        if !parent_exists {
            return Err(Error::fs(
                "create file",
                path,
                io::Error::new(io::ErrorKind::NotFound, "parent directory does not exist"),
            ));
        }
        if self.dirs.contains(path) {
            return Err(Error::fs(
                "create file",
                path,
                io::Error::new(io::ErrorKind::AlreadyExists, "a directory exists at this path"),
            ));
        }

        let buf = self.files.entry(path.to_path_buf()).or_default();
        buf.clear();
        Ok(Box::new(buf))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_target_records_ancestors() {
        let mut target = MemoryTarget::new();
        target.create_dir_all(Path::new("/base/a/b")).unwrap();

        assert!(target.dirs().contains(Path::new("/base")));
        assert!(target.dirs().contains(Path::new("/base/a")));
        assert!(target.dirs().contains(Path::new("/base/a/b")));
    }

    #[test]
    fn test_memory_target_requires_parent() {
        let mut target = MemoryTarget::new();
        assert!(target.create_file(Path::new("/nope/file.dat")).is_err());

        target.create_dir_all(Path::new("/yes")).unwrap();
        assert!(target.create_file(Path::new("/yes/file.dat")).is_ok());
    }

    #[test]
    fn test_memory_target_truncates_on_create() {
        let mut target = MemoryTarget::new();
        target.create_dir_all(Path::new("/d")).unwrap();
        let path = Path::new("/d/f");

        target.create_file(path).unwrap().write_all(b"long content").unwrap();
        target.create_file(path).unwrap().write_all(b"short").unwrap();

        assert_eq!(target.file(path), Some(&b"short"[..]));
        assert_eq!(target.total_bytes(), 5);
    }
}
