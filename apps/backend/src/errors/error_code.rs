//! Error codes surfaced to callers.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings that
//! callers use to pick an inline message. Add new codes here; never pass
//! ad-hoc strings as error codes.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Round validation
    /// Score field outside its structural bounds, or a malformed player reference
    SchemaViolation,
    /// Nobody emptied their blitz pile
    NoBlitz,
    /// A blitzing player played too few cards
    InsufficientBlitzPlay,

    // Game state
    /// Mutation attempted on a finished game
    GameAlreadyFinished,

    // Resource Not Found
    GameNotFound,
    RoundNotFound,

    // Conflicts
    Conflict,

    // System Errors
    Internal,
}

impl ErrorCode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SchemaViolation => "SCHEMA_VIOLATION",
            Self::NoBlitz => "NO_BLITZ",
            Self::InsufficientBlitzPlay => "INSUFFICIENT_BLITZ_PLAY",

            Self::GameAlreadyFinished => "GAME_ALREADY_FINISHED",

            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::RoundNotFound => "ROUND_NOT_FOUND",

            Self::Conflict => "CONFLICT",

            Self::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
