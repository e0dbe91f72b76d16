//! Shared helpers for domain unit tests.

use proptest::test_runner::Config;

use crate::domain::game::{Game, Round, RoundScore, ScoreEntry};
use crate::domain::identity::{Player, PlayerRef};

/// Proptest configuration shared by domain property tests.
///
/// `PROPTEST_CASES` overrides the case count.
pub fn proptest_config() -> Config {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(256);
    Config {
        cases,
        failure_persistence: None,
        ..Config::default()
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

/// Game with registered players `1..=n` named `P1..Pn`.
pub fn game_with_players(n: i64) -> Game {
    Game::new(
        1,
        (1..=n)
            .map(|id| Player::registered(id, format!("P{id}")))
            .collect(),
    )
}

/// Push a committed round without validation, for shaping stored data directly.
pub fn push_raw_round(game: &mut Game, scores: Vec<RoundScore>) {
    let index = game.next_round_index();
    game.rounds.push(Round { index, scores });
}

pub fn push_round(game: &mut Game, entries: &[ScoreEntry]) {
    let index = game.next_round_index();
    game.rounds.push(Round::from_entries(index, entries));
}
