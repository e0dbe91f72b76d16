// Unit tests for error mapping - pure domain logic without transport or storage dependencies
use crate::domain::identity::PlayerRef;
use crate::errors::domain::{ErrorKind, ValidationError};
use crate::{AppError, ErrorCode};

#[test]
fn maps_schema_violation() {
    let err = ValidationError::schema("blitz_pile_remaining", "must be between 0 and 10, got 11");
    assert_eq!(err.kind(), ErrorKind::SchemaViolation);
    assert_eq!(err.code(), ErrorCode::SchemaViolation);
    assert_eq!(
        err.to_string(),
        "blitz_pile_remaining must be between 0 and 10, got 11"
    );
}

#[test]
fn maps_rule_violations() {
    assert_eq!(ValidationError::NoBlitz.kind(), ErrorKind::GameRuleViolation);
    assert_eq!(ValidationError::NoBlitz.code().as_str(), "NO_BLITZ");

    let insufficient = ValidationError::InsufficientBlitzPlay {
        player: PlayerRef::Registered { id: 7 }.key(),
        cards_played: 5,
        required: 6,
    };
    assert_eq!(insufficient.kind(), ErrorKind::GameRuleViolation);
    assert_eq!(insufficient.code().as_str(), "INSUFFICIENT_BLITZ_PLAY");
    assert!(insufficient.to_string().contains("registered:7"));
}

#[test]
fn maps_state_violation() {
    let err = ValidationError::GameAlreadyFinished;
    assert_eq!(err.kind(), ErrorKind::StateViolation);
    assert_eq!(err.code().as_str(), "GAME_ALREADY_FINISHED");
}

#[test]
fn app_error_preserves_validation_code() {
    let app: AppError = ValidationError::NoBlitz.into();
    assert_eq!(app.code(), ErrorCode::NoBlitz);
    assert!(app.detail().contains("blitz"));
    assert!(matches!(app, AppError::Validation(ValidationError::NoBlitz)));
}

#[test]
fn app_error_not_found_codes() {
    assert_eq!(AppError::game_not_found(3).code(), ErrorCode::GameNotFound);
    let round = AppError::round_not_found(3, 9);
    assert_eq!(round.code().as_str(), "ROUND_NOT_FOUND");
    assert_eq!(round.detail(), "Round 9 not found in game 3");
}
