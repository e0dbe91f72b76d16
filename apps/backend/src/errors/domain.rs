//! Round validation errors.
//!
//! This error type is transport- and storage-agnostic. Service code wraps it
//! in `crate::error::AppError` via the provided `From` implementation.

use thiserror::Error;

use crate::domain::identity::PlayerKey;
use crate::errors::error_code::ErrorCode;

/// Broad category of a failure, used by callers to decide who must act.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed numeric input or player reference; rejected before mutation.
    SchemaViolation,
    /// The scores are well-formed but break a game rule; caller corrects and resubmits.
    GameRuleViolation,
    /// Mutation attempted against a terminal game.
    StateViolation,
    /// Stored data could not be interpreted during aggregation. Never returned as `Err`.
    DataIntegrityAnomaly,
}

/// Reason a submitted round was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} {detail}")]
    SchemaViolation { field: &'static str, detail: String },

    #[error("at least one player must blitz (empty their blitz pile) each round")]
    NoBlitz,

    #[error("player {player} blitzed but played {cards_played} cards; at least {required} are required")]
    InsufficientBlitzPlay {
        player: PlayerKey,
        cards_played: i32,
        required: i32,
    },

    #[error("game is already finished")]
    GameAlreadyFinished,
}

impl ValidationError {
    pub fn schema(field: &'static str, detail: impl Into<String>) -> Self {
        Self::SchemaViolation {
            field,
            detail: detail.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::SchemaViolation { .. } => ErrorKind::SchemaViolation,
            Self::NoBlitz | Self::InsufficientBlitzPlay { .. } => ErrorKind::GameRuleViolation,
            Self::GameAlreadyFinished => ErrorKind::StateViolation,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Self::SchemaViolation { .. } => ErrorCode::SchemaViolation,
            Self::NoBlitz => ErrorCode::NoBlitz,
            Self::InsufficientBlitzPlay { .. } => ErrorCode::InsufficientBlitzPlay,
            Self::GameAlreadyFinished => ErrorCode::GameAlreadyFinished,
        }
    }
}
