//! Human-readable text output

use crate::config::size::format_bytes;
use crate::config::GenerationPlan;
use crate::layout::GenerationReport;

/// Print the resolved plan before a run
pub fn print_configuration(plan: &GenerationPlan, dry_run: bool) {
    println!("Configuration:");
    println!("  Base directory: {}", plan.base_dir.display());
    println!("  Tree:");
    println!("    Levels: {}", plan.levels);
    println!("    Directories per level: {}", plan.dirs_count);
    println!("    Directory pattern: {}", plan.dir_name_pattern);
    println!("  Files:");
    println!("    Count: {}", format_number(plan.files_count as u64));
    println!("    Total size: {} ({} bytes)", format_bytes(plan.total_size), plan.total_size);
    println!("    Name pattern: {}", plan.file_name_pattern);
    println!("    Extension: {}", plan.file_extension);
    if plan.duplicates > 0 {
        println!("    Duplicates: {}", plan.effective_duplicates());
    }
    if plan.seed != 0 {
        println!("  Seed: {}", plan.seed);
    } else {
        println!("  Seed: none (clock-derived, not reproducible)");
    }
    if plan.strict_patterns {
        println!("  Strict patterns: enabled");
    }
    if dry_run {
        println!("  Mode: dry run (nothing is written)");
    }
}

/// Print run results to console
pub fn print_results(report: &GenerationReport) {
    println!("═══════════════════════════════════════════════════════════");
    println!("                  GENERATION RESULTS");
    println!("═══════════════════════════════════════════════════════════");
    println!();
    println!("Elapsed Time: {:.3}s", report.elapsed.as_secs_f64());
    println!();
    println!("Output:");
    println!("  Directories: {}", format_number(report.dir_count() as u64));
    println!("  Files:       {}", format_number(report.file_count() as u64));
    if report.duplicate_count() > 0 {
        println!("  Duplicates:  {}", format_number(report.duplicate_count() as u64));
    }
    println!("  Data:        {}", format_bytes(report.total_bytes()));
    println!();

    let stats = &report.stats;
    println!("Metadata Operations:");
    println!(
        "  mkdir:  {} ops, avg {:.2} µs",
        format_number(stats.mkdir_count),
        stats.avg_mkdir_latency_ns() as f64 / 1000.0
    );
    println!(
        "  create: {} ops, avg {:.2} µs (including writes)",
        format_number(stats.create_count),
        stats.avg_create_latency_ns() as f64 / 1000.0
    );
    println!();

    if report.reproducible {
        println!("Seed: {} (reproducible)", report.resolved_seed as i64);
    } else {
        println!("Seed: clock-derived {} (not reproducible)", report.resolved_seed);
    }
    println!("═══════════════════════════════════════════════════════════");
}

/// Format a number with thousands separators
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();

    for (count, c) in s.chars().rev().enumerate() {
        if count > 0 && count % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1234567), "1,234,567");
    }
}
