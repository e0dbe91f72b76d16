//! Property-based tests for round validation.

use proptest::prelude::*;

use crate::config::RulesConfig;
use crate::domain::validation::{validate_round, validate_scores};
use crate::domain::{test_gens, test_prelude, Game, ScoreEntry};
use crate::errors::domain::{ErrorKind, ValidationError};

const RULES: RulesConfig = RulesConfig::STANDARD;

/// Straightforward restatement of the rules used as an oracle.
fn oracle_accepts(scores: &[ScoreEntry]) -> bool {
    let in_bounds = scores.iter().all(|s| {
        (0..=10).contains(&s.blitz_pile_remaining) && (0..=40).contains(&s.total_cards_played)
    });
    let blitzers: Vec<&ScoreEntry> = scores
        .iter()
        .filter(|s| s.blitz_pile_remaining == 0)
        .collect();
    in_bounds && !blitzers.is_empty() && blitzers.iter().all(|s| s.total_cards_played >= 6)
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: validation accepts exactly the rounds the rules allow
    #[test]
    fn prop_accepts_iff_rules_hold(
        (players, scores) in test_gens::roster_and_loose_round(),
    ) {
        let game = Game::new(1, players);
        let result = validate_round(&RULES, &game, &scores);
        prop_assert_eq!(result.is_ok(), oracle_accepts(&scores),
            "scores={:?} result={:?}", scores, result);
    }

    /// Property: validation never mutates its input
    #[test]
    fn prop_does_not_mutate_input(
        (players, scores) in test_gens::roster_and_loose_round(),
    ) {
        let game = Game::new(1, players);
        let game_before = game.clone();
        let scores_before = scores.clone();
        let _ = validate_round(&RULES, &game, &scores);
        prop_assert_eq!(&game, &game_before);
        prop_assert_eq!(&scores, &scores_before);
    }

    /// Property: out-of-bounds input is always reported as a schema violation
    #[test]
    fn prop_out_of_bounds_is_schema_violation(
        (_players, scores) in test_gens::roster_and_loose_round(),
    ) {
        let out_of_bounds = scores.iter().any(|s| {
            !(0..=10).contains(&s.blitz_pile_remaining) || !(0..=40).contains(&s.total_cards_played)
        });
        let result = validate_scores(&RULES, &scores);
        if out_of_bounds {
            let kind = result.as_ref().err().map(ValidationError::kind);
            prop_assert_eq!(kind, Some(ErrorKind::SchemaViolation));
        } else if let Err(err) = result {
            prop_assert_eq!(err.kind(), ErrorKind::GameRuleViolation);
        }
    }

    /// Property: a finished game rejects every submission with a state violation
    #[test]
    fn prop_finished_game_rejects_everything(
        (players, scores) in test_gens::roster_and_bounded_round(),
    ) {
        let mut game = Game::new(1, players);
        game.is_finished = true;
        prop_assert_eq!(
            validate_round(&RULES, &game, &scores),
            Err(ValidationError::GameAlreadyFinished)
        );
    }

    /// Property: validation is deterministic
    #[test]
    fn prop_validation_is_deterministic(
        (players, scores) in test_gens::roster_and_loose_round(),
    ) {
        let game = Game::new(1, players);
        prop_assert_eq!(
            validate_round(&RULES, &game, &scores),
            validate_round(&RULES, &game, &scores)
        );
    }
}
