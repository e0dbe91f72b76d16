//! Game snapshot model: players, committed rounds and the finished flag.
//!
//! This is the shape the persistence layer loads and the engine reasons over.
//! Mutating helpers re-run validation before touching state, so a rejected
//! round never lands in `rounds`.

use serde::{Deserialize, Serialize};

use crate::config::rules::{round_value, RulesConfig};
use crate::domain::finalization::FinalizeDecision;
use crate::domain::game_transition::GameLifecycleView;
use crate::domain::identity::{resolve_score_ref, IdentityAnomaly, Player, PlayerRef, Roster};
use crate::domain::validation::validate_round;
use crate::domain::PlayerKey;
use crate::errors::domain::ValidationError;

/// One player's submitted score for a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub player: PlayerRef,
    pub blitz_pile_remaining: i32,
    pub total_cards_played: i32,
}

impl ScoreEntry {
    pub fn new(player: PlayerRef, blitz_pile_remaining: i32, total_cards_played: i32) -> Self {
        Self {
            player,
            blitz_pile_remaining,
            total_cards_played,
        }
    }

    pub fn round_value(&self) -> i32 {
        round_value(self.blitz_pile_remaining, self.total_cards_played)
    }
}

/// A committed score row. Exactly one of `user_id` / `guest_id` is expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundScore {
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub guest_id: Option<i64>,
    pub blitz_pile_remaining: i32,
    pub total_cards_played: i32,
}

impl RoundScore {
    pub fn player_ref(&self) -> Result<PlayerRef, IdentityAnomaly> {
        resolve_score_ref(self.user_id, self.guest_id)
    }

    pub fn round_value(&self) -> i32 {
        round_value(self.blitz_pile_remaining, self.total_cards_played)
    }
}

impl From<&ScoreEntry> for RoundScore {
    fn from(entry: &ScoreEntry) -> Self {
        let (user_id, guest_id) = entry.player.to_id_pair();
        Self {
            user_id,
            guest_id,
            blitz_pile_remaining: entry.blitz_pile_remaining,
            total_cards_played: entry.total_cards_played,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    /// 1-based commit position.
    pub index: u32,
    pub scores: Vec<RoundScore>,
}

impl Round {
    pub fn from_entries(index: u32, entries: &[ScoreEntry]) -> Self {
        Self {
            index,
            scores: entries.iter().map(RoundScore::from).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: i64,
    pub players: Vec<Player>,
    #[serde(default)]
    pub rounds: Vec<Round>,
    #[serde(default)]
    pub is_finished: bool,
    #[serde(default)]
    pub winner: Option<PlayerKey>,
}

impl Game {
    /// A freshly created game: players chosen, no rounds yet.
    pub fn new(id: i64, players: Vec<Player>) -> Self {
        Self {
            id,
            players,
            rounds: Vec::new(),
            is_finished: false,
            winner: None,
        }
    }

    pub fn roster(&self) -> Roster {
        Roster::resolve(&self.players)
    }

    pub fn round_count(&self) -> usize {
        self.rounds.len()
    }

    pub fn round(&self, index: u32) -> Option<&Round> {
        self.rounds.iter().find(|r| r.index == index)
    }

    /// Index the next committed round will get.
    pub fn next_round_index(&self) -> u32 {
        self.rounds.iter().map(|r| r.index).max().unwrap_or(0) + 1
    }

    /// Validate and append a round.
    pub fn append_round(
        &mut self,
        rules: &RulesConfig,
        scores: &[ScoreEntry],
    ) -> Result<&Round, ValidationError> {
        validate_round(rules, self, scores)?;
        let round = Round::from_entries(self.next_round_index(), scores);
        self.rounds.push(round);
        let pos = self.rounds.len() - 1;
        Ok(&self.rounds[pos])
    }

    /// Re-validate the full round and overwrite the committed one with the same index.
    pub fn update_round(
        &mut self,
        rules: &RulesConfig,
        index: u32,
        scores: &[ScoreEntry],
    ) -> Result<&Round, ValidationError> {
        validate_round(rules, self, scores)?;
        let pos = self
            .rounds
            .iter()
            .position(|r| r.index == index)
            .ok_or_else(|| {
                ValidationError::schema("round_index", format!("{index} is not a committed round"))
            })?;
        self.rounds[pos] = Round::from_entries(index, scores);
        Ok(&self.rounds[pos])
    }

    /// Record a finish decision. Returns `true` only when the game changed state.
    ///
    /// A finished game is absorbing: later decisions never replace the winner.
    pub fn apply_finalization(&mut self, decision: &FinalizeDecision) -> bool {
        if self.is_finished || !decision.should_finish {
            return false;
        }
        self.is_finished = true;
        self.winner = decision.winner;
        true
    }

    pub fn lifecycle_view(&self) -> GameLifecycleView {
        GameLifecycleView {
            round_count: self.rounds.len(),
            is_finished: self.is_finished,
            winner: self.winner,
        }
    }
}
