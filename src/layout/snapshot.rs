//! Run-wide time snapshot for `{timestamp}`, `{date}` and `{time}`
//!
//! Taken once per run so every directory and file shares the same values.
//! A non-zero seed doubles as the snapshot's Unix time, which keeps seeded
//! runs reproducible; formatting is done in UTC.

use crate::random::UNSET_SEED;
use chrono::{DateTime, Utc};

/// Pre-formatted time values shared by every placeholder context of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSnapshot {
    /// Unix seconds
    pub timestamp: i64,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH-MM-SS` (dashes keep it path-safe)
    pub time: String,
}

impl TimeSnapshot {
    /// Snapshot for a run with the given seed
    ///
    /// Seeds outside chrono's representable range fall back to the epoch.
    pub fn for_seed(seed: i64) -> Self {
        if seed == UNSET_SEED {
            Self::from_datetime(Utc::now())
        } else {
            Self::from_datetime(DateTime::from_timestamp(seed, 0).unwrap_or(DateTime::UNIX_EPOCH))
        }
    }

    pub fn from_datetime(at: DateTime<Utc>) -> Self {
        Self {
            timestamp: at.timestamp(),
            date: at.format("%Y-%m-%d").to_string(),
            time: at.format("%H-%M-%S").to_string(),
        }
    }
}
