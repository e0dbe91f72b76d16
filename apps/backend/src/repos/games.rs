//! Game repository trait.
//!
//! The engine never persists anything itself. Services load a full game
//! snapshot, decide, and hand mutations back through this trait.

use async_trait::async_trait;

use crate::domain::{Game, PlayerKey, Round};
use crate::error::AppError;

#[async_trait]
pub trait GameRepo: Send + Sync {
    /// Load a game with its rounds in commit order.
    async fn load_game(&self, game_id: i64) -> Result<Option<Game>, AppError>;

    /// Append a validated round. Must fail if the game is already finished.
    async fn insert_round(&self, game_id: i64, round: Round) -> Result<(), AppError>;

    /// Overwrite the committed round with the same index.
    async fn replace_round(&self, game_id: i64, round: Round) -> Result<(), AppError>;

    /// Set the finished flag and winner. Returns `false` if the game was already finished.
    async fn mark_finished(&self, game_id: i64, winner: Option<PlayerKey>)
        -> Result<bool, AppError>;
}
