//! # meridian-store
//!
//! Three-tier knowledge store: core, extended, temp. Entries live in
//! exactly one tier and move between adjacent tiers one step at a time as
//! feedback arrives. A fixed array of lock shards gives per-key mutual
//! exclusion while distinct keys proceed in parallel; an optional durable
//! medium receives a write-through copy of every mutation.

pub mod medium;
pub mod shard;
pub mod store;

pub use medium::InMemoryMedium;
pub use store::{EntryDraft, FeedbackApplied, TierCounts, TieredStore};
