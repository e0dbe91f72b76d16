//! Game finalization decision.
//!
//! Inspects a fresh aggregation pass and decides whether the game finishes.
//! Persisting the decision and sending notifications is left to the caller.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::aggregation::Standings;
use crate::domain::game::Game;
use crate::domain::identity::PlayerKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalizeDecision {
    pub should_finish: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<PlayerKey>,
}

impl FinalizeDecision {
    pub const fn stay_active() -> Self {
        Self {
            should_finish: false,
            winner: None,
        }
    }

    pub const fn finish(winner: PlayerKey) -> Self {
        Self {
            should_finish: true,
            winner: Some(winner),
        }
    }
}

/// Decide whether `game` finishes given `standings` computed from it.
///
/// - A finished game never re-triggers.
/// - With no threshold crossings the game stays active.
/// - Otherwise the crosser with the highest current total wins; equal totals
///   go to the lowest [`PlayerKey`].
pub fn decide_finalization(game: &Game, standings: &Standings) -> FinalizeDecision {
    if game.is_finished {
        return FinalizeDecision::stay_active();
    }

    let winner = standings
        .crossings
        .iter()
        .filter_map(|c| standings.total_of(&c.player).map(|total| (c.player, total)))
        .min_by(|(a_key, a_total), (b_key, b_total)| {
            b_total.cmp(a_total).then_with(|| a_key.cmp(b_key))
        });

    match winner {
        Some((player, total)) => {
            info!(game_id = game.id, winner = %player, total, "Game reached win threshold");
            FinalizeDecision::finish(player)
        }
        None => FinalizeDecision::stay_active(),
    }
}
