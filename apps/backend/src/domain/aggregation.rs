//! Score aggregation by full replay.
//!
//! Every read replays all committed rounds in the order given. Nothing here is
//! cached or persisted; the replay is the source of truth for totals, leaders
//! and threshold crossings.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::rules::RulesConfig;
use crate::domain::game::Game;
use crate::domain::identity::{IdentityAnomaly, PlayerKey, PlayerKind};
use crate::errors::domain::ErrorKind;

/// Derived per-player view. Never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerAggregate {
    pub player_id: PlayerKey,
    pub display_name: String,
    pub kind: PlayerKind,
    /// One value per committed round; 0 where the player had no score.
    pub per_round_values: Vec<i32>,
    /// Cumulative total after each round.
    pub running_totals: Vec<i32>,
    pub total: i32,
    pub is_leader: bool,
    pub is_winner: bool,
}

/// First time a player's running total reached the win threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdCrossing {
    pub player: PlayerKey,
    /// 1-based position of the round in replay order.
    pub round_position: usize,
    pub total_at_crossing: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnomalyReason {
    Identity(IdentityAnomaly),
    /// The row names a player who is not on the roster.
    UnknownPlayer(PlayerKey),
    /// A second row for the same player in one round.
    DuplicateScore(PlayerKey),
    /// Stored values fall outside the structural bounds.
    OutOfBounds {
        player: PlayerKey,
        blitz_pile_remaining: i32,
        total_cards_played: i32,
    },
}

/// A score row skipped during replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregationAnomaly {
    pub round_index: u32,
    pub round_position: usize,
    pub reason: AnomalyReason,
}

impl AggregationAnomaly {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::DataIntegrityAnomaly
    }
}

impl fmt::Display for AggregationAnomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "round {}: ", self.round_index)?;
        match self.reason {
            AnomalyReason::Identity(IdentityAnomaly::Unreferenced) => {
                write!(f, "score row references no player")
            }
            AnomalyReason::Identity(IdentityAnomaly::Ambiguous { user_id, guest_id }) => write!(
                f,
                "score row references both user {user_id} and guest {guest_id}"
            ),
            AnomalyReason::UnknownPlayer(key) => write!(f, "score row for unknown player {key}"),
            AnomalyReason::DuplicateScore(key) => write!(f, "duplicate score row for {key}"),
            AnomalyReason::OutOfBounds {
                player,
                blitz_pile_remaining,
                total_cards_played,
            } => write!(
                f,
                "score row for {player} out of bounds \
                 (blitz pile {blitz_pile_remaining}, cards played {total_cards_played})"
            ),
        }
    }
}

/// Result of one replay pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standings {
    /// Roster order.
    pub players: Vec<PlayerAggregate>,
    /// In order of crossing (round, then roster position).
    pub crossings: Vec<ThresholdCrossing>,
    pub anomalies: Vec<AggregationAnomaly>,
}

impl Standings {
    pub fn get(&self, key: &PlayerKey) -> Option<&PlayerAggregate> {
        self.players.iter().find(|p| &p.player_id == key)
    }

    pub fn total_of(&self, key: &PlayerKey) -> Option<i32> {
        self.get(key).map(|p| p.total)
    }

    pub fn leaders(&self) -> impl Iterator<Item = &PlayerAggregate> {
        self.players.iter().filter(|p| p.is_leader)
    }

    pub fn max_total(&self) -> Option<i32> {
        self.players.iter().map(|p| p.total).max()
    }
}

/// Replay every committed round of `game` and build the standings.
pub fn aggregate(rules: &RulesConfig, game: &Game) -> Standings {
    let roster = game.roster();
    let round_count = game.rounds.len();

    let mut players: Vec<PlayerAggregate> = roster
        .iter()
        .map(|(key, info)| PlayerAggregate {
            player_id: *key,
            display_name: info.display_name.clone(),
            kind: info.kind,
            per_round_values: vec![0; round_count],
            running_totals: Vec::with_capacity(round_count),
            total: 0,
            is_leader: false,
            is_winner: game.winner == Some(*key),
        })
        .collect();
    let mut crossings: Vec<ThresholdCrossing> = Vec::new();
    let mut anomalies: Vec<AggregationAnomaly> = Vec::new();

    for (pos, round) in game.rounds.iter().enumerate() {
        let mut scored = HashSet::with_capacity(round.scores.len());
        let mut skip = |reason: AnomalyReason| {
            let anomaly = AggregationAnomaly {
                round_index: round.index,
                round_position: pos + 1,
                reason,
            };
            warn!(game_id = game.id, %anomaly, "Skipping score row during aggregation");
            anomalies.push(anomaly);
        };

        for score in &round.scores {
            let key = match score.player_ref() {
                Ok(player) => player.key(),
                Err(identity) => {
                    skip(AnomalyReason::Identity(identity));
                    continue;
                }
            };
            let Some(idx) = roster.position(&key) else {
                skip(AnomalyReason::UnknownPlayer(key));
                continue;
            };
            if !rules.in_bounds(score.blitz_pile_remaining, score.total_cards_played) {
                skip(AnomalyReason::OutOfBounds {
                    player: key,
                    blitz_pile_remaining: score.blitz_pile_remaining,
                    total_cards_played: score.total_cards_played,
                });
                continue;
            }
            if !scored.insert(key) {
                skip(AnomalyReason::DuplicateScore(key));
                continue;
            }
            players[idx].per_round_values[pos] = score.round_value();
        }

        for player in players.iter_mut() {
            player.total = player.total.saturating_add(player.per_round_values[pos]);
            player.running_totals.push(player.total);
            let already_crossed = crossings.iter().any(|c| c.player == player.player_id);
            if !already_crossed && rules.reaches_threshold(player.total) {
                crossings.push(ThresholdCrossing {
                    player: player.player_id,
                    round_position: pos + 1,
                    total_at_crossing: player.total,
                });
            }
        }
    }

    if round_count > 0 {
        if let Some(max) = players.iter().map(|p| p.total).max() {
            for player in players.iter_mut() {
                player.is_leader = player.total == max;
            }
        }
    }

    Standings {
        players,
        crossings,
        anomalies,
    }
}

/// Display view of a game: one aggregate per player, in roster order.
pub fn compute_display_scores(rules: &RulesConfig, game: &Game) -> Vec<PlayerAggregate> {
    aggregate(rules, game).players
}
