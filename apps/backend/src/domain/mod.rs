//! Domain layer: pure scoring rules, aggregation and finalization.

pub mod aggregation;
pub mod finalization;
pub mod game;
pub mod game_transition;
pub mod identity;
pub mod validation;

#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_finalization;
#[cfg(test)]
mod tests_props_aggregation;
#[cfg(test)]
mod tests_props_validation;

// Re-exports for ergonomics
pub use aggregation::{
    aggregate, compute_display_scores, AggregationAnomaly, AnomalyReason, PlayerAggregate,
    Standings, ThresholdCrossing,
};
pub use finalization::{decide_finalization, FinalizeDecision};
pub use game::{Game, Round, RoundScore, ScoreEntry};
pub use game_transition::{derive_game_transitions, GameLifecycleView, GameTransition};
pub use identity::{Player, PlayerKey, PlayerKind, PlayerRef, Roster};
pub use validation::{validate_round, validate_scores};
