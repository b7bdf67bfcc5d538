//! treegen - deterministic synthetic directory tree generator
//!
//! treegen creates directory trees and files of configurable size, count and
//! naming pattern, for testing backup/restore tooling or simulating
//! filesystem load. Everything random in a run (directory names, file
//! placement, file sizes, file content) comes from one seeded stream, so the
//! same seed and settings reproduce the same tree byte for byte.
//!
//! # Architecture
//!
//! - **Random stream**: one seeded xoshiro256++ generator per run
//! - **Size allocation**: a fixed total split across file slots
//! - **Naming patterns**: `{placeholder}` and `{randstr:N}` expansion
//! - **Tree builder / data emitter**: directories first, then files
//! - **Targets**: local disk, in-memory, or dry run
//!
//! # Example
//!
//! ```
//! use treegen::config::{GenerationPlan, Settings};
//! use treegen::target::memory::MemoryTarget;
//!
//! let settings = Settings {
//!     base_dir: "/data".into(),
//!     files_count: 4,
//!     total_size_str: "64kb".to_string(),
//!     seed: 42,
//!     ..Settings::default()
//! };
//! let plan = GenerationPlan::from_settings(&settings).unwrap();
//!
//! let mut target = MemoryTarget::new();
//! let report = treegen::generate(&plan, &mut target).unwrap();
//! assert_eq!(report.total_bytes(), 64 * 1024);
//! ```

pub mod config;
pub mod error;
pub mod layout;
pub mod output;
pub mod random;
pub mod target;

// Re-export commonly used types
pub use config::{GenerationPlan, Settings};
pub use error::{Error, Result};
pub use layout::{generate, GenerationReport};
