//! File placement and content emission
//!
//! For every slot the emitter picks a directory at random, expands the file
//! name pattern and writes either the shared duplicate buffer or a fresh
//! stream of pseudo-random bytes of the allocated size.

use super::pattern::{PatternExpander, PlaceholderContext};
use super::report::{FileEntry, MetadataStats};
use super::snapshot::TimeSnapshot;
use super::tree::RANDOM_PLACEHOLDER_BOUND;
use crate::random::{deterministic_uuid, SeededStream};
use crate::target::Target;
use crate::{Error, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, trace};

/// Working buffer size for random content
pub const CHUNK_SIZE: usize = 1024 * 1024;

/// File naming and duplicate configuration
#[derive(Debug, Clone)]
pub struct EmitConfig<'a> {
    /// File name pattern
    pub pattern: &'a str,

    /// Value of the `{ext}` placeholder
    pub extension: &'a str,

    /// Number of leading slots that receive the duplicate buffer
    pub duplicates: usize,
}

/// Writes one file per slot into the generated tree
pub struct DataEmitter<'a> {
    config: EmitConfig<'a>,
    expander: PatternExpander,
    snapshot: &'a TimeSnapshot,
}

impl<'a> DataEmitter<'a> {
    pub fn new(
        config: EmitConfig<'a>,
        expander: PatternExpander,
        snapshot: &'a TimeSnapshot,
    ) -> Self {
        Self {
            config,
            expander,
            snapshot,
        }
    }

    /// Emit one file per entry of `sizes`
    ///
    /// `dirs` must be non-empty and already created. `duplicate` must be
    /// present whenever `config.duplicates > 0`; its bytes are written
    /// verbatim for every duplicate slot. The first failing write aborts
    /// the loop.
    pub fn emit(
        &self,
        target: &mut dyn Target,
        stream: &mut SeededStream,
        dirs: &[PathBuf],
        sizes: &[u64],
        duplicate: Option<&[u8]>,
        stats: &mut MetadataStats,
    ) -> Result<Vec<FileEntry>> {
        if dirs.is_empty() && !sizes.is_empty() {
            return Err(Error::Config("no directory available to place files in".to_string()));
        }

        let largest = sizes.iter().copied().max().unwrap_or(0);
        let mut chunk = vec![0u8; CHUNK_SIZE.min(largest as usize)];
        let mut entries = Vec::with_capacity(sizes.len());

        for (index, &size) in sizes.iter().enumerate() {
            let dir = &dirs[stream.next_int(dirs.len() as u64) as usize];
            let ctx = self.context(index, stream)?;
            let name = self.expander.expand(self.config.pattern, &ctx, stream)?;
            let path = dir.join(name);

            let start = Instant::now();
            let entry = match duplicate.filter(|_| index < self.config.duplicates) {
                Some(content) => {
                    write_content(target, &path, content)?;
                    FileEntry {
                        path,
                        size: content.len() as u64,
                        duplicate: true,
                    }
                }
                None => {
                    write_random(target, &path, size, &mut chunk, stream)?;
                    FileEntry {
                        path,
                        size,
                        duplicate: false,
                    }
                }
            };
            stats.create_latency_ns += start.elapsed().as_nanos() as u64;
            stats.create_count += 1;
            stats.bytes_written += entry.size;

            trace!(
                path = %entry.path.display(),
                size = entry.size,
                duplicate = entry.duplicate,
                "file written"
            );
            entries.push(entry);
        }

        debug!(files = entries.len(), bytes = stats.bytes_written, "files emitted");
        Ok(entries)
    }

    fn context(&self, index: usize, stream: &mut SeededStream) -> Result<PlaceholderContext> {
        let random = stream.next_int(RANDOM_PLACEHOLDER_BOUND);
        let uuid = deterministic_uuid(stream)?;

        Ok(PlaceholderContext::new()
            .with("index", index)
            .with("random", random)
            .with("timestamp", self.snapshot.timestamp)
            .with("date", self.snapshot.date.as_str())
            .with("time", self.snapshot.time.as_str())
            .with("uuid", uuid)
            .with("ext", self.config.extension))
    }
}

/// Draw the shared duplicate buffer
pub fn duplicate_buffer(size: u64, stream: &mut SeededStream) -> Result<Vec<u8>> {
    let mut buf = vec![0u8; size as usize];
    stream.fill_bytes(&mut buf)?;
    Ok(buf)
}

fn write_content(target: &mut dyn Target, path: &Path, content: &[u8]) -> Result<()> {
    let mut file = target.create_file(path)?;
    file.write_all(content)
        .and_then(|_| file.flush())
        .map_err(|e| Error::fs("write file", path, e))
}

fn write_random(
    target: &mut dyn Target,
    path: &Path,
    size: u64,
    chunk: &mut [u8],
    stream: &mut SeededStream,
) -> Result<()> {
    let mut file = target.create_file(path)?;
    let mut written = 0u64;

    while written < size {
        let n = (size - written).min(chunk.len() as u64) as usize;
        let buf = &mut chunk[..n];
        stream.fill_bytes(buf)?;
        file.write_all(buf).map_err(|e| Error::fs("write file", path, e))?;
        written += n as u64;
    }

    file.flush().map_err(|e| Error::fs("write file", path, e))
}
