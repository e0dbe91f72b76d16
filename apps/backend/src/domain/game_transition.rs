// apps/backend/src/domain/game_transition.rs

use serde::{Deserialize, Serialize};

use crate::domain::identity::PlayerKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameLifecycleView {
    pub round_count: usize,
    pub is_finished: bool,
    pub winner: Option<PlayerKey>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameTransition {
    /// Edge-triggered: a new round was committed.
    RoundCommitted { round_index: u32 },

    /// Explicit: an existing round was overwritten.
    RoundUpdated { round_index: u32 },

    /// Edge-triggered: Game moved from Active -> Finished
    GameFinished { winner: Option<PlayerKey> },
}

/// Derive domain transitions from before/after lifecycle state.
///
/// Round indices are 1-based and append-only, so new rounds are exactly the
/// positions between the two counts.
pub fn derive_game_transitions(
    before: &GameLifecycleView,
    after: &GameLifecycleView,
) -> Vec<GameTransition> {
    let mut transitions = Vec::new();

    // 1. New rounds
    for idx in before.round_count..after.round_count {
        transitions.push(GameTransition::RoundCommitted {
            round_index: (idx + 1) as u32,
        });
    }

    // 2. Game end (!Finished -> Finished)
    if !before.is_finished && after.is_finished {
        transitions.push(GameTransition::GameFinished {
            winner: after.winner,
        });
    }

    transitions
}
