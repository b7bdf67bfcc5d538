//! Size string parsing and formatting

use crate::{Error, Result};

const KB: u64 = 1024;
const MB: u64 = KB * 1024;
const GB: u64 = MB * 1024;

/// Recognized suffixes, longest first so "kb" wins over "b"
const SUFFIXES: [(&str, u64); 4] = [("kb", KB), ("mb", MB), ("gb", GB), ("b", 1)];

/// Parse a size string (e.g. "500mb", "1.5GB", "4096b") to bytes
///
/// A unit suffix is mandatory. The magnitude may be fractional; the product
/// is truncated to whole bytes.
pub fn parse_size(s: &str) -> Result<u64> {
    let s = s.trim().to_lowercase();

    let (num_str, multiplier) = SUFFIXES
        .iter()
        .find_map(|&(suffix, mult)| s.strip_suffix(suffix).map(|n| (n.trim(), mult)))
        .ok_or_else(|| {
            Error::Config(format!("unknown size suffix in '{}' (use b, kb, mb or gb)", s))
        })?;

    let value: f64 = num_str
        .parse()
        .map_err(|_| Error::Config(format!("invalid size magnitude '{}' in '{}'", num_str, s)))?;

    if !value.is_finite() || value < 0.0 {
        return Err(Error::Config(format!("size must be a non-negative number: '{}'", s)));
    }

    let bytes = value * multiplier as f64;
    if bytes >= u64::MAX as f64 {
        return Err(Error::Config(format!("size '{}' is too large", s)));
    }

    Ok(bytes as u64)
}

/// Format bytes as human-readable string
pub fn format_bytes(bytes: u64) -> String {
    if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
