//! In-memory adapter for the game repository.
//!
//! Used by the CLI and tests. Writes re-check the finished flag under the
//! map's shard lock, which gives the same compare-and-swap guarantee a
//! database row lock would.

use async_trait::async_trait;
use dashmap::DashMap;

use crate::domain::{Game, PlayerKey, Round};
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::repos::games::GameRepo;

#[derive(Debug, Default)]
pub struct InMemoryGameRepo {
    games: DashMap<i64, Game>,
}

impl InMemoryGameRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store or replace a whole game snapshot.
    pub fn insert_game(&self, game: Game) {
        self.games.insert(game.id, game);
    }

    pub fn get(&self, game_id: i64) -> Option<Game> {
        self.games.get(&game_id).map(|entry| entry.value().clone())
    }
}

fn finished_conflict(game_id: i64) -> AppError {
    AppError::conflict(
        ErrorCode::GameAlreadyFinished,
        format!("Game {game_id} is already finished"),
    )
}

#[async_trait]
impl GameRepo for InMemoryGameRepo {
    async fn load_game(&self, game_id: i64) -> Result<Option<Game>, AppError> {
        Ok(self.get(game_id))
    }

    async fn insert_round(&self, game_id: i64, round: Round) -> Result<(), AppError> {
        let mut game = self
            .games
            .get_mut(&game_id)
            .ok_or_else(|| AppError::game_not_found(game_id))?;
        if game.is_finished {
            return Err(finished_conflict(game_id));
        }
        let expected = game.next_round_index();
        if round.index != expected {
            return Err(AppError::conflict(
                ErrorCode::Conflict,
                format!(
                    "Round {} does not follow the last committed round in game {game_id} (expected {expected})",
                    round.index
                ),
            ));
        }
        game.rounds.push(round);
        Ok(())
    }

    async fn replace_round(&self, game_id: i64, round: Round) -> Result<(), AppError> {
        let mut game = self
            .games
            .get_mut(&game_id)
            .ok_or_else(|| AppError::game_not_found(game_id))?;
        if game.is_finished {
            return Err(finished_conflict(game_id));
        }
        let slot = game
            .rounds
            .iter_mut()
            .find(|r| r.index == round.index)
            .ok_or_else(|| AppError::round_not_found(game_id, round.index))?;
        *slot = round;
        Ok(())
    }

    async fn mark_finished(
        &self,
        game_id: i64,
        winner: Option<PlayerKey>,
    ) -> Result<bool, AppError> {
        let mut game = self
            .games
            .get_mut(&game_id)
            .ok_or_else(|| AppError::game_not_found(game_id))?;
        if game.is_finished {
            return Ok(false);
        }
        game.is_finished = true;
        game.winner = winner;
        Ok(true)
    }
}
