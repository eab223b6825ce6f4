//! Data models for content API responses and admin helpers.

pub mod partial;
pub mod song;

// Re-exports for convenience
pub use partial::{PartialDateRecord, PartialTimeRecord, Period};
pub use song::{ContentsEnvelope, Rating, Song};
