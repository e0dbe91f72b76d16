//! Round validation rules.
//!
//! Checks run in a fixed order and the first failure is returned:
//! game state, structural bounds, player references, then the two blitz rules.

use std::collections::HashSet;

use tracing::debug;

use crate::config::rules::RulesConfig;
use crate::domain::game::{Game, ScoreEntry};
use crate::errors::domain::ValidationError;

/// Validate a round against a game: state check, roster check, then [`validate_scores`].
pub fn validate_round(
    rules: &RulesConfig,
    game: &Game,
    scores: &[ScoreEntry],
) -> Result<(), ValidationError> {
    check_round(rules, game, scores).inspect_err(|err| {
        debug!(game_id = game.id, code = %err.code(), error = %err, "Round rejected");
    })
}

fn check_round(
    rules: &RulesConfig,
    game: &Game,
    scores: &[ScoreEntry],
) -> Result<(), ValidationError> {
    if game.is_finished {
        return Err(ValidationError::GameAlreadyFinished);
    }

    check_bounds(rules, scores)?;

    let roster = game.roster();
    let mut seen = HashSet::with_capacity(scores.len());
    for entry in scores {
        let key = entry.player.key();
        if !roster.contains(&key) {
            return Err(ValidationError::schema(
                "player",
                format!("{key} is not a player in game {}", game.id),
            ));
        }
        if !seen.insert(key) {
            return Err(ValidationError::schema(
                "player",
                format!("{key} has more than one score in this round"),
            ));
        }
    }

    check_blitz_rules(rules, scores)
}

/// Roster-free checks: structural bounds plus the blitz rules.
pub fn validate_scores(rules: &RulesConfig, scores: &[ScoreEntry]) -> Result<(), ValidationError> {
    check_bounds(rules, scores)?;
    check_blitz_rules(rules, scores)
}

fn check_bounds(rules: &RulesConfig, scores: &[ScoreEntry]) -> Result<(), ValidationError> {
    for entry in scores {
        let pile = rules.blitz_pile_range();
        if !pile.contains(&entry.blitz_pile_remaining) {
            return Err(ValidationError::schema(
                "blitz_pile_remaining",
                format!(
                    "must be between {} and {} for {}, got {}",
                    pile.start(),
                    pile.end(),
                    entry.player.key(),
                    entry.blitz_pile_remaining
                ),
            ));
        }
        let cards = rules.cards_range();
        if !cards.contains(&entry.total_cards_played) {
            return Err(ValidationError::schema(
                "total_cards_played",
                format!(
                    "must be between {} and {} for {}, got {}",
                    cards.start(),
                    cards.end(),
                    entry.player.key(),
                    entry.total_cards_played
                ),
            ));
        }
    }
    Ok(())
}

fn check_blitz_rules(rules: &RulesConfig, scores: &[ScoreEntry]) -> Result<(), ValidationError> {
    let mut blitzers = scores
        .iter()
        .filter(|entry| rules.is_blitz(entry.blitz_pile_remaining))
        .peekable();

    if blitzers.peek().is_none() {
        return Err(ValidationError::NoBlitz);
    }

    for entry in blitzers {
        if entry.total_cards_played < rules.min_cards_on_blitz {
            return Err(ValidationError::InsufficientBlitzPlay {
                player: entry.player.key(),
                cards_played: entry.total_cards_played,
                required: rules.min_cards_on_blitz,
            });
        }
    }
    Ok(())
}
