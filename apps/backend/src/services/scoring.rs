//! Round submission pipeline.
//!
//! validate -> commit -> replay -> decide -> persist finish, all under the
//! per-game lock so a round can never be accepted after a concurrent
//! finalization.
//!
//! A round is reported as committed once the repo has stored it. If the
//! finish cannot be persisted afterwards, the outcome carries
//! `finalize_pending` and the next mutation of that game persists the finish
//! before it is rejected with `GAME_ALREADY_FINISHED`.

use tracing::{debug, error, info};

use crate::config::RulesConfig;
use crate::domain::{
    aggregate, compute_display_scores, decide_finalization, derive_game_transitions,
    FinalizeDecision, Game, GameLifecycleView, GameTransition, PlayerAggregate, Round,
    ScoreEntry, Standings,
};
use crate::error::AppError;
use crate::errors::{ErrorCode, ValidationError};
use crate::repos::games::GameRepo;
use crate::services::game_locks::GameLocks;

/// Everything a caller needs after a successful submission.
#[derive(Debug, Clone)]
pub struct SubmissionOutcome {
    pub round: Round,
    pub standings: Standings,
    pub decision: FinalizeDecision,
    /// Edge-triggered events for notification dispatch.
    pub transitions: Vec<GameTransition>,
    /// The decision says finish but storing it failed; the game is still
    /// active in storage until the next mutation retries the finish.
    pub finalize_pending: bool,
}

pub struct ScoringService<R> {
    repo: R,
    rules: RulesConfig,
    locks: GameLocks,
}

impl<R: GameRepo> ScoringService<R> {
    pub fn new(repo: R) -> Self {
        Self::with_rules(repo, RulesConfig::STANDARD)
    }

    pub fn with_rules(repo: R, rules: RulesConfig) -> Self {
        Self {
            repo,
            rules,
            locks: GameLocks::new(),
        }
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    pub fn rules(&self) -> &RulesConfig {
        &self.rules
    }

    async fn require_game(&self, game_id: i64) -> Result<Game, AppError> {
        self.repo
            .load_game(game_id)
            .await?
            .ok_or_else(|| AppError::game_not_found(game_id))
    }

    /// Validate and commit a new round, then finalize the game if it crossed the threshold.
    pub async fn submit_round(
        &self,
        game_id: i64,
        scores: &[ScoreEntry],
    ) -> Result<SubmissionOutcome, AppError> {
        let result = {
            let _guard = self.locks.acquire(game_id).await;
            self.submit_locked(game_id, scores).await
        };
        self.release_if_finished(game_id, &result);
        result
    }

    async fn submit_locked(
        &self,
        game_id: i64,
        scores: &[ScoreEntry],
    ) -> Result<SubmissionOutcome, AppError> {
        let mut game = self.require_game(game_id).await?;
        self.finish_if_due(&game).await?;
        let before = game.lifecycle_view();

        let round = game.append_round(&self.rules, scores)?.clone();
        self.repo.insert_round(game_id, round.clone()).await?;
        info!(game_id, round = round.index, players = scores.len(), "Round committed");

        self.settle(game, before, round, Vec::new()).await
    }

    /// Re-validate and overwrite a committed round, then re-run finalization.
    pub async fn update_round(
        &self,
        game_id: i64,
        round_index: u32,
        scores: &[ScoreEntry],
    ) -> Result<SubmissionOutcome, AppError> {
        let result = {
            let _guard = self.locks.acquire(game_id).await;
            self.update_locked(game_id, round_index, scores).await
        };
        self.release_if_finished(game_id, &result);
        result
    }

    async fn update_locked(
        &self,
        game_id: i64,
        round_index: u32,
        scores: &[ScoreEntry],
    ) -> Result<SubmissionOutcome, AppError> {
        let mut game = self.require_game(game_id).await?;
        self.finish_if_due(&game).await?;
        if !game.is_finished && game.round(round_index).is_none() {
            return Err(AppError::round_not_found(game_id, round_index));
        }
        let before = game.lifecycle_view();

        let round = game.update_round(&self.rules, round_index, scores)?.clone();
        self.repo.replace_round(game_id, round.clone()).await?;
        info!(game_id, round = round_index, "Round updated");

        let updated = vec![GameTransition::RoundUpdated { round_index }];
        self.settle(game, before, round, updated).await
    }

    /// Persist a finish an earlier submission decided on but failed to store,
    /// then reject the current mutation as if the game had been finished all along.
    async fn finish_if_due(&self, game: &Game) -> Result<(), AppError> {
        let decision = decide_finalization(game, &aggregate(&self.rules, game));
        if !decision.should_finish {
            return Ok(());
        }
        if self.repo.mark_finished(game.id, decision.winner).await? {
            info!(
                game_id = game.id,
                winner = ?decision.winner.map(|w| w.to_string()),
                "Pending game finish persisted"
            );
        }
        Err(ValidationError::GameAlreadyFinished.into())
    }

    /// A finished game takes no more mutations, so its lock entry can go.
    fn release_if_finished(&self, game_id: i64, result: &Result<SubmissionOutcome, AppError>) {
        let finished = match result {
            Ok(outcome) => outcome.decision.should_finish && !outcome.finalize_pending,
            Err(err) => err.code() == ErrorCode::GameAlreadyFinished,
        };
        if finished {
            self.locks.release(game_id);
        }
    }

    /// Replay, decide, and persist a finish if one is due.
    async fn settle(
        &self,
        mut game: Game,
        before: GameLifecycleView,
        round: Round,
        mut transitions: Vec<GameTransition>,
    ) -> Result<SubmissionOutcome, AppError> {
        let game_id = game.id;
        let mut standings = aggregate(&self.rules, &game);
        let decision = decide_finalization(&game, &standings);
        let mut finalize_pending = false;

        if decision.should_finish {
            match self.repo.mark_finished(game_id, decision.winner).await {
                Ok(true) => {
                    game.apply_finalization(&decision);
                    for player in standings.players.iter_mut() {
                        player.is_winner = decision.winner == Some(player.player_id);
                    }
                    info!(
                        game_id,
                        winner = ?decision.winner.map(|w| w.to_string()),
                        "Game finished"
                    );
                }
                Ok(false) => {
                    // Only reachable if something bypassed the per-game lock.
                    return Err(AppError::internal(format!(
                        "Game {game_id} was finished concurrently"
                    )));
                }
                Err(err) => {
                    // The round is already stored; the next mutation retries the finish.
                    error!(game_id, error = %err, "Failed to persist game finish");
                    finalize_pending = true;
                }
            }
        } else {
            debug!(game_id, "Game remains active");
        }

        transitions.extend(derive_game_transitions(&before, &game.lifecycle_view()));
        Ok(SubmissionOutcome {
            round,
            standings,
            decision,
            transitions,
            finalize_pending,
        })
    }

    /// Fresh replay of a stored game.
    pub async fn standings(&self, game_id: i64) -> Result<Standings, AppError> {
        let game = self.require_game(game_id).await?;
        Ok(aggregate(&self.rules, &game))
    }

    /// Display view for a stored game.
    pub async fn display_scores(&self, game_id: i64) -> Result<Vec<PlayerAggregate>, AppError> {
        let game = self.require_game(game_id).await?;
        Ok(compute_display_scores(&self.rules, &game))
    }
}
