mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use blitz_backend::RulesConfig;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::commands::{
    check_round, load_game, load_round, render_standings, standings_report, CliError, Verdict,
};

#[derive(Parser)]
#[command(name = "blitz-score")]
#[command(about = "Dutch Blitz score sheet tool")]
struct Args {
    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Replay a game snapshot and print standings with the finish decision
    Standings {
        /// Game snapshot JSON
        #[arg(short, long)]
        game: PathBuf,
    },
    /// Check a candidate round against a game snapshot without committing it
    Validate {
        /// Game snapshot JSON
        #[arg(short, long)]
        game: PathBuf,
        /// Array of score entries JSON
        #[arg(short, long)]
        round: PathBuf,
    },
}

fn run(args: Args) -> Result<ExitCode, CliError> {
    let rules = RulesConfig::STANDARD;
    match args.command {
        Command::Standings { game } => {
            let game = load_game(&game)?;
            println!("{}", render_standings(&standings_report(&rules, &game))?);
            Ok(ExitCode::SUCCESS)
        }
        Command::Validate { game, round } => {
            let game = load_game(&game)?;
            let scores = load_round(&round)?;
            let verdict = check_round(&rules, &game, &scores);
            println!("{}", verdict.render());
            Ok(match verdict {
                Verdict::Accepted => ExitCode::SUCCESS,
                Verdict::Rejected { .. } => ExitCode::from(1),
            })
        }
    }
}

fn init_logging(json: bool) {
    if json {
        blitz_backend::telemetry::init_tracing();
        return;
    }
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.log_json);

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(2)
        }
    }
}
