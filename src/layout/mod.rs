//! Deterministic layout generation
//!
//! A run draws from one [`SeededStream`] in a fixed order:
//!
//! 1. directory names, level by level ([`tree`])
//! 2. file sizes ([`allocator`])
//! 3. the shared duplicate buffer, when duplicates are requested
//! 4. file placement, names and content, slot by slot ([`emitter`])
//!
//! Keeping that order is what makes a seeded run reproducible byte for byte.

pub mod allocator;
pub mod emitter;
pub mod pattern;
pub mod report;
pub mod snapshot;
pub mod tree;

pub use report::{FileEntry, GenerationReport, MetadataStats};

use crate::config::GenerationPlan;
use crate::random::SeededStream;
use crate::target::Target;
use crate::Result;
use emitter::{DataEmitter, EmitConfig};
use pattern::PatternExpander;
use snapshot::TimeSnapshot;
use std::time::Instant;
use tracing::{debug, info, warn};
use tree::{TreeBuilder, TreeConfig};

/// Generate the tree described by `plan` into `target`
///
/// Fails fast: the first error aborts the run and whatever was already
/// created stays in place.
pub fn generate(plan: &GenerationPlan, target: &mut dyn Target) -> Result<GenerationReport> {
    let start = Instant::now();
    let mut stream = SeededStream::new(plan.seed);
    let snapshot = TimeSnapshot::for_seed(plan.seed);
    let expander = PatternExpander::new(plan.strict_patterns);
    let mut stats = MetadataStats::default();

    if stream.is_reproducible() {
        info!(seed = plan.seed, target = target.name(), "starting generation");
    } else {
        warn!(
            resolved_seed = stream.resolved_seed(),
            target = target.name(),
            "no seed given; this run is not reproducible"
        );
    }

    let tree = TreeBuilder::new(
        TreeConfig {
            base_dir: &plan.base_dir,
            dirs_count: plan.dirs_count,
            levels: plan.levels,
            pattern: &plan.dir_name_pattern,
        },
        expander,
        &snapshot,
    );
    let dirs = tree.build(target, &mut stream, &mut stats)?;
    info!(dirs = dirs.len(), "directory tree created");

    let duplicates = plan.effective_duplicates();
    let sizes =
        allocator::allocate_sizes(plan.files_count, plan.total_size, duplicates, &mut stream);
    debug!(slots = sizes.len(), total = plan.total_size, "sizes allocated");

    let duplicate = if duplicates > 0 {
        Some(emitter::duplicate_buffer(sizes[0], &mut stream)?)
    } else {
        None
    };

    let data = DataEmitter::new(
        EmitConfig {
            pattern: &plan.file_name_pattern,
            extension: &plan.file_extension,
            duplicates,
        },
        expander,
        &snapshot,
    );
    let files = data.emit(
        target,
        &mut stream,
        &dirs,
        &sizes,
        duplicate.as_deref(),
        &mut stats,
    )?;
    info!(files = files.len(), bytes = stats.bytes_written, "files written");

    Ok(GenerationReport {
        base_dir: plan.base_dir.clone(),
        resolved_seed: stream.resolved_seed(),
        reproducible: stream.is_reproducible(),
        dirs,
        files,
        stats,
        elapsed: start.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::target::memory::MemoryTarget;
    use std::path::PathBuf;

    fn plan(seed: i64) -> GenerationPlan {
        let settings = Settings {
            base_dir: PathBuf::from("/gen"),
            files_count: 12,
            dirs_count: 2,
            levels: 2,
            total_size_str: "3mb".to_string(),
            duplicates: 3,
            seed,
            ..Settings::default()
        };
        GenerationPlan::from_settings(&settings).unwrap()
    }

    #[test]
    fn test_generate_counts_and_sizes() {
        let mut target = MemoryTarget::new();
        let report = generate(&plan(17), &mut target).unwrap();

        assert_eq!(report.dir_count(), 6);
        assert_eq!(report.file_count(), 12);
        assert_eq!(report.duplicate_count(), 3);
        assert_eq!(report.total_bytes(), 3 * 1024 * 1024);
        assert_eq!(target.total_bytes(), 3 * 1024 * 1024);
        assert_eq!(report.stats.bytes_written, 3 * 1024 * 1024);
        assert!(report.reproducible);
    }

    #[test]
    fn test_generate_duplicates_identical() {
        let mut target = MemoryTarget::new();
        let report = generate(&plan(17), &mut target).unwrap();

        let dup_contents: Vec<&[u8]> = report
            .files
            .iter()
            .filter(|f| f.duplicate)
            .map(|f| target.file(&f.path).unwrap())
            .collect();
        assert_eq!(dup_contents.len(), 3);
        assert_eq!(dup_contents[0].len() as u64, (3 * 1024 * 1024) / 12);
        assert!(dup_contents.iter().all(|c| *c == dup_contents[0]));
    }

    #[test]
    fn test_generate_is_deterministic() {
        let mut t1 = MemoryTarget::new();
        let mut t2 = MemoryTarget::new();
        generate(&plan(2024), &mut t1).unwrap();
        generate(&plan(2024), &mut t2).unwrap();
        assert_eq!(t1, t2);

        let mut t3 = MemoryTarget::new();
        generate(&plan(2025), &mut t3).unwrap();
        assert_ne!(t1, t3);
    }

    #[test]
    fn test_generate_no_levels_places_files_in_base() {
        let mut p = plan(5);
        p.levels = 0;
        let mut target = MemoryTarget::new();
        let report = generate(&p, &mut target).unwrap();

        assert_eq!(report.dirs, vec![PathBuf::from("/gen")]);
        for file in &report.files {
            assert_eq!(file.path.parent().unwrap(), PathBuf::from("/gen").as_path());
        }
    }

    #[test]
    fn test_generate_zero_files() {
        let mut p = plan(5);
        p.files_count = 0;
        p.duplicates = 0;
        let mut target = MemoryTarget::new();
        let report = generate(&p, &mut target).unwrap();

        assert_eq!(report.file_count(), 0);
        assert_eq!(report.dir_count(), 6);
    }

    #[test]
    fn test_generate_every_file_duplicate() {
        let mut p = plan(3);
        p.files_count = 4;
        p.duplicates = 4;
        p.total_size = 4 * 1024;
        let mut target = MemoryTarget::new();
        let report = generate(&p, &mut target).unwrap();

        assert_eq!(report.duplicate_count(), 4);
        let first = target.file(&report.files[0].path).unwrap();
        assert_eq!(first.len(), 1024);
        for file in &report.files {
            assert_eq!(target.file(&file.path).unwrap(), first);
        }
        assert_eq!(report.total_bytes(), 4 * 1024);
    }

    #[test]
    fn test_generate_every_file_duplicate_rounds_total_down() {
        let mut p = plan(5);
        p.files_count = 4;
        p.duplicates = 4;
        p.total_size = 4001;
        let report = generate(&p, &mut MemoryTarget::new()).unwrap();

        assert_eq!(report.duplicate_count(), 4);
        assert_eq!(report.total_bytes(), 4001 - p.duplicate_shortfall());
        assert_eq!(report.total_bytes(), 4000);
    }

    #[test]
    fn test_generate_strict_pattern_failure() {
        let mut p = plan(5);
        p.strict_patterns = true;
        p.file_name_pattern = "file_{nope}".to_string();
        let result = generate(&p, &mut MemoryTarget::new());
        assert!(matches!(result, Err(crate::Error::Config(_))));
    }
}
