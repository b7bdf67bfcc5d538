//! Deterministic randomness
//!
//! - [`SeededStream`]: the single pseudo-random source for a run
//! - [`deterministic_uuid`]: UUID-shaped identifiers drawn from that stream

pub mod stream;
pub mod ident;

pub use self::stream::{SeededStream, UNSET_SEED};
pub use self::ident::deterministic_uuid;
