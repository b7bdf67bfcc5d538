//! Local filesystem target

use super::Target;
use crate::{Error, Result};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Target writing real directories and files through `std::fs`
#[derive(Debug, Default)]
pub struct LocalTarget;

impl LocalTarget {
    pub fn new() -> Self {
        Self
    }
}

impl Target for LocalTarget {
    fn name(&self) -> &'static str {
        "local"
    }

    fn create_dir_all(&mut self, path: &Path) -> Result<()> {
        fs::create_dir_all(path).map_err(|e| Error::fs("create directory", path, e))
    }

    fn create_file(&mut self, path: &Path) -> Result<Box<dyn Write + '_>> {
        let file = fs::File::create(path).map_err(|e| Error::fs("create file", path, e))?;
        Ok(Box::new(file))
    }
}
