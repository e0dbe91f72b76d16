use thiserror::Error;

use crate::errors::domain::ValidationError;
use crate::errors::ErrorCode;

/// Error returned by the submission service.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("Not found: {detail}")]
    NotFound { code: ErrorCode, detail: String },
    #[error("Conflict: {detail}")]
    Conflict { code: ErrorCode, detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
}

impl AppError {
    /// Machine-readable code for any error variant
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Validation(err) => err.code(),
            AppError::NotFound { code, .. } => *code,
            AppError::Conflict { code, .. } => *code,
            AppError::Internal { .. } => ErrorCode::Internal,
        }
    }

    /// Human-readable detail for any error variant
    pub fn detail(&self) -> String {
        match self {
            AppError::Validation(err) => err.to_string(),
            AppError::NotFound { detail, .. } => detail.clone(),
            AppError::Conflict { detail, .. } => detail.clone(),
            AppError::Internal { detail } => detail.clone(),
        }
    }

    pub fn game_not_found(game_id: i64) -> Self {
        Self::NotFound {
            code: ErrorCode::GameNotFound,
            detail: format!("Game {game_id} not found"),
        }
    }

    pub fn round_not_found(game_id: i64, round_index: u32) -> Self {
        Self::NotFound {
            code: ErrorCode::RoundNotFound,
            detail: format!("Round {round_index} not found in game {game_id}"),
        }
    }

    pub fn conflict(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Conflict {
            code,
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }
}
