//! Directory tree construction
//!
//! Builds the tree breadth-first: every directory of one level gets
//! `dirs_count` children before the next level starts. Names come from the
//! directory pattern, expanded with `{level}`, `{index}`, `{random}`,
//! `{timestamp}`, `{date}`, `{time}` and `{uuid}`.

use super::pattern::{PatternExpander, PlaceholderContext};
use super::report::MetadataStats;
use super::snapshot::TimeSnapshot;
use crate::random::{deterministic_uuid, SeededStream};
use crate::target::Target;
use crate::Result;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::debug;

/// Upper bound (exclusive) of the `{random}` placeholder
pub const RANDOM_PLACEHOLDER_BOUND: u64 = 100_000;

/// Directory tree configuration
#[derive(Debug, Clone)]
pub struct TreeConfig<'a> {
    /// Root of the tree
    pub base_dir: &'a Path,

    /// Children created under every directory of the previous level
    pub dirs_count: usize,

    /// Number of nested levels below the base directory
    pub levels: usize,

    /// Directory name pattern
    pub pattern: &'a str,
}

/// Directory tree builder
pub struct TreeBuilder<'a> {
    config: TreeConfig<'a>,
    expander: PatternExpander,
    snapshot: &'a TimeSnapshot,
}

impl<'a> TreeBuilder<'a> {
    pub fn new(
        config: TreeConfig<'a>,
        expander: PatternExpander,
        snapshot: &'a TimeSnapshot,
    ) -> Self {
        Self {
            config,
            expander,
            snapshot,
        }
    }

    /// Create the tree and return every directory, level by level
    ///
    /// The base directory is created first. If no sub-directory is created
    /// (zero levels or zero width) the returned set is just the base
    /// directory, so files always have somewhere to go.
    pub fn build(
        &self,
        target: &mut dyn Target,
        stream: &mut SeededStream,
        stats: &mut MetadataStats,
    ) -> Result<Vec<PathBuf>> {
        let base = self.config.base_dir;
        make_dir(target, base, stats)?;

        let mut all_dirs = Vec::new();
        let mut parents = vec![base.to_path_buf()];

        for level in 0..self.config.levels {
            let mut children = Vec::new();

            for parent in &parents {
                for index in 0..self.config.dirs_count {
                    let ctx = self.context(level, index, stream)?;
                    let name = self.expander.expand(self.config.pattern, &ctx, stream)?;
                    let path = parent.join(name);

                    make_dir(target, &path, stats)?;
                    children.push(path);
                }
            }

            debug!(level, created = children.len(), "directory level created");
            all_dirs.extend(children.iter().cloned());
            parents = children;
        }

        if all_dirs.is_empty() {
            all_dirs.push(base.to_path_buf());
        }

        Ok(all_dirs)
    }

    fn context(
        &self,
        level: usize,
        index: usize,
        stream: &mut SeededStream,
    ) -> Result<PlaceholderContext> {
        let random = stream.next_int(RANDOM_PLACEHOLDER_BOUND);
        let uuid = deterministic_uuid(stream)?;

        Ok(PlaceholderContext::new()
            .with("level", level)
            .with("index", index)
            .with("random", random)
            .with("timestamp", self.snapshot.timestamp)
            .with("date", self.snapshot.date.as_str())
            .with("time", self.snapshot.time.as_str())
            .with("uuid", uuid))
    }
}

fn make_dir(target: &mut dyn Target, path: &Path, stats: &mut MetadataStats) -> Result<()> {
    let start = Instant::now();
    target.create_dir_all(path)?;
    stats.mkdir_latency_ns += start.elapsed().as_nanos() as u64;
    stats.mkdir_count += 1;
    Ok(())
}
