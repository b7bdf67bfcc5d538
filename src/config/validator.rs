//! Plan validation

use super::GenerationPlan;
use crate::layout::allocator::MIN_FILE_SIZE;
use crate::{Error, Result};
use tracing::warn;

/// Validate a generation plan
///
/// Hard errors stop the run before anything is created. Conditions that
/// only change the outcome (an all-duplicate total rounded down, sizes
/// squeezed below the per-file minimum) are logged as warnings.
pub fn validate_plan(plan: &GenerationPlan) -> Result<()> {
    if plan.base_dir.as_os_str().is_empty() {
        return Err(Error::Config(
            "the output directory must be specified (--dir)".to_string(),
        ));
    }

    if plan.duplicates > plan.files_count {
        return Err(Error::Config(format!(
            "duplicates ({}) cannot exceed files_count ({})",
            plan.duplicates, plan.files_count
        )));
    }

    if plan.files_count > 0 && plan.file_name_pattern.is_empty() {
        return Err(Error::Config("file_name_pattern must not be empty".to_string()));
    }

    if plan.levels > 0 && plan.dirs_count > 0 && plan.dir_name_pattern.is_empty() {
        return Err(Error::Config("dir_name_pattern must not be empty".to_string()));
    }

    let shortfall = plan.duplicate_shortfall();
    if shortfall > 0 {
        warn!(
            total_size = plan.total_size,
            shortfall,
            "every file is a duplicate; the total is rounded down to a multiple of files_count"
        );
    }

    let minimum = (plan.files_count as u64).saturating_mul(MIN_FILE_SIZE);
    if plan.total_size < minimum {
        warn!(
            total_size = plan.total_size,
            minimum,
            "total size is below 1 KiB per file; trailing files will be smaller or empty"
        );
    }

    Ok(())
}
