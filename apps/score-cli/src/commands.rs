//! File-backed commands behind the `blitz-score` binary.

use std::fs;
use std::path::{Path, PathBuf};

use blitz_backend::domain::{aggregate, decide_finalization, validate_round};
use blitz_backend::{FinalizeDecision, Game, PlayerAggregate, RulesConfig, ScoreEntry};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    let raw = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| CliError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_game(path: &Path) -> Result<Game, CliError> {
    let game: Game = load_json(path)?;
    debug!(game_id = game.id, rounds = game.rounds.len(), "Loaded game snapshot");
    Ok(game)
}

pub fn load_round(path: &Path) -> Result<Vec<ScoreEntry>, CliError> {
    load_json(path)
}

#[derive(Debug, Serialize)]
pub struct StandingsReport {
    pub game_id: i64,
    pub players: Vec<PlayerAggregate>,
    pub decision: FinalizeDecision,
    /// Rendered anomaly messages; rows named here were left out of the totals.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped_rows: Vec<String>,
}

pub fn standings_report(rules: &RulesConfig, game: &Game) -> StandingsReport {
    let standings = aggregate(rules, game);
    let decision = decide_finalization(game, &standings);
    let skipped_rows = standings.anomalies.iter().map(|a| a.to_string()).collect();
    StandingsReport {
        game_id: game.id,
        players: standings.players,
        decision,
        skipped_rows,
    }
}

pub fn render_standings(report: &StandingsReport) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Outcome of checking a candidate round without committing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    Rejected { code: String, message: String },
}

impl Verdict {
    pub fn render(&self) -> String {
        match self {
            Verdict::Accepted => "ok".to_string(),
            Verdict::Rejected { code, message } => format!("{code}: {message}"),
        }
    }
}

pub fn check_round(rules: &RulesConfig, game: &Game, scores: &[ScoreEntry]) -> Verdict {
    match validate_round(rules, game, scores) {
        Ok(()) => {
            info!(game_id = game.id, players = scores.len(), "Round accepted");
            Verdict::Accepted
        }
        Err(err) => Verdict::Rejected {
            code: err.code().to_string(),
            message: err.to_string(),
        },
    }
}
