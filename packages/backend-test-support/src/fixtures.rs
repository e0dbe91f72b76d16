//! Game snapshot builders for integration tests.

use blitz_backend::domain::{Game, Player, PlayerRef, Round, RoundScore, ScoreEntry};

/// Fluent builder for [`Game`] snapshots.
///
/// Rounds added here bypass validation so tests can shape stored data
/// directly, including rows a real submission would reject.
#[derive(Debug, Clone)]
pub struct GameBuilder {
    game: Game,
}

impl GameBuilder {
    pub fn new(id: i64) -> Self {
        Self {
            game: Game::new(id, Vec::new()),
        }
    }

    pub fn registered(mut self, id: i64, name: &str) -> Self {
        self.game.players.push(Player::registered(id, name));
        self
    }

    pub fn guest(mut self, id: i64, name: &str) -> Self {
        self.game.players.push(Player::guest(id, name));
        self
    }

    /// Append a round from `(player, blitz_pile_remaining, total_cards_played)` triples.
    pub fn round(mut self, scores: &[(PlayerRef, i32, i32)]) -> Self {
        let entries: Vec<ScoreEntry> = scores
            .iter()
            .map(|&(player, blitz, cards)| ScoreEntry::new(player, blitz, cards))
            .collect();
        let index = self.game.next_round_index();
        self.game.rounds.push(Round::from_entries(index, &entries));
        self
    }

    /// Append a round of raw stored rows.
    pub fn raw_round(mut self, scores: Vec<RoundScore>) -> Self {
        let index = self.game.next_round_index();
        self.game.rounds.push(Round { index, scores });
        self
    }

    pub fn finished(mut self, winner: PlayerRef) -> Self {
        self.game.is_finished = true;
        self.game.winner = Some(winner.key());
        self
    }

    pub fn build(self) -> Game {
        self.game
    }
}

pub fn reg(id: i64) -> PlayerRef {
    PlayerRef::Registered { id }
}

pub fn guest(id: i64) -> PlayerRef {
    PlayerRef::Guest { id }
}

pub fn entry(player: PlayerRef, blitz: i32, cards: i32) -> ScoreEntry {
    ScoreEntry::new(player, blitz, cards)
}
