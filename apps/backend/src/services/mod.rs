//! Services that serialize round submissions per game and drive the engine.

pub mod game_locks;
pub mod scoring;

pub use game_locks::GameLocks;
pub use scoring::{ScoringService, SubmissionOutcome};
