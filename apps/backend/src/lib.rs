#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! Rules engine for a Dutch Blitz scorekeeper.
//!
//! - `domain`: validation, identity resolution, aggregation, finalization
//! - `services`: per-game serialized submission pipeline over a `GameRepo`
//! - `adapters`: repository implementations
//! - `config`: fixed rule constants

pub mod adapters;
pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod repos;
pub mod services;
pub mod telemetry;


// Re-exports for public API
pub use adapters::InMemoryGameRepo;
pub use config::RulesConfig;
pub use domain::{
    aggregate, compute_display_scores, decide_finalization, validate_round, FinalizeDecision,
    Game, PlayerAggregate, ScoreEntry, Standings,
};
pub use error::AppError;
pub use errors::{ErrorCode, ErrorKind, ValidationError};
pub use repos::GameRepo;
pub use services::{ScoringService, SubmissionOutcome};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
