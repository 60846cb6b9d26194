//! Pairwise judging engine
//!
//! The scheduler decides which two teams a judge compares next; the
//! coordinator serializes each judge's requests and caches what they have
//! already judged. Everything here is independent of the HTTP layer.

pub mod coordinator;
pub mod scheduler;

pub use coordinator::{JudgeSession, JudgingCoordinator};
pub use scheduler::{next_unjudged_pair, pair_key, JudgedSet, PairKey};
