//! Target abstraction
//!
//! A target is the filesystem collaborator of a generation run. The
//! generator never touches `std::fs` directly: it asks the target to create
//! directories and files and writes content through the returned handle.
//! Dropping the handle closes the file.
//!
//! # Target Types
//!
//! - **Local**: real directories and files on disk ([`local::LocalTarget`])
//! - **Memory**: an in-memory tree, used for tests and determinism checks
//!   ([`memory::MemoryTarget`])
//! - **Dry run**: accepts every request and stores nothing
//!   ([`dry_run::DryRunTarget`])
//!
//! # Example
//!
//! ```
//! use treegen::target::{memory::MemoryTarget, Target};
//! use std::io::Write;
//! use std::path::Path;
//!
//! let mut target = MemoryTarget::new();
//! target.create_dir_all(Path::new("/data/dir_0_0")).unwrap();
//! let mut file = target.create_file(Path::new("/data/dir_0_0/file_0.dat")).unwrap();
//! file.write_all(b"hello").unwrap();
//! drop(file);
//! assert_eq!(target.file(Path::new("/data/dir_0_0/file_0.dat")), Some(&b"hello"[..]));
//! ```

pub mod dry_run;
pub mod local;
pub mod memory;

use crate::Result;
use std::io::Write;
use std::path::Path;

/// Filesystem collaborator receiving directory and file requests
///
/// # Lifecycle
///
/// 1. `create_dir_all()` for every directory, parents first
/// 2. `create_file()` for every file (create-or-truncate)
/// 3. write through the handle, then drop it to close the file
pub trait Target {
    /// Short name used in logs and the run summary
    fn name(&self) -> &'static str;

    /// Create `path` and any missing parent directories
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Filesystem`] if the directory cannot be created.
    fn create_dir_all(&mut self, path: &Path) -> Result<()>;

    /// Create or truncate the file at `path`
    ///
    /// The parent directory must already exist.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Filesystem`] if the file cannot be created.
    fn create_file(&mut self, path: &Path) -> Result<Box<dyn Write + '_>>;
}
