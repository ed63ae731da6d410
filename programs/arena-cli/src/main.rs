//! Prisoner's Arena runner
//!
//! Plays a round-robin tournament over a lineup of built-in strategies and
//! prints the ranking and head-to-head table. `arena duel` plays a single
//! illustrative match instead.

mod report;
mod settings;

use std::path::PathBuf;

use anyhow::{Context, Result};
use arena_core::{build_lineup, run_match, StrategySpec, Tournament};
use clap::{ArgAction, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::settings::{ArenaFile, Overrides};

#[derive(Parser, Debug)]
#[command(
    name = "arena",
    about = "Iterated Prisoner's Dilemma round-robin tournament"
)]
struct Args {
    /// JSON file with rounds, repeat, seed, payoff and lineup
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Rounds per match [default: 200]
    #[arg(short, long)]
    rounds: Option<u32>,

    /// Full round-robin sweeps [default: 5]
    #[arg(long)]
    repeat: Option<u32>,

    /// Seed for stochastic strategies [default: 0]
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Log more (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play a single match and show both move sequences
    Duel {
        /// First player as a JSON strategy spec
        #[arg(long, default_value = r#"{"kind":"always_defect"}"#)]
        first: String,

        /// Second player as a JSON strategy spec
        #[arg(long, default_value = r#"{"kind":"tit_for_tat"}"#)]
        second: String,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_spec(json: &str) -> Result<StrategySpec> {
    serde_json::from_str(json).with_context(|| format!("invalid strategy spec: {}", json))
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let file = match &args.config {
        Some(path) => ArenaFile::load(path)?,
        None => ArenaFile::default(),
    };
    let overrides = Overrides {
        rounds: args.rounds,
        repeat: args.repeat,
        seed: args.seed,
    };

    match args.command {
        Some(Command::Duel { first, second }) => {
            let config = file.duel_config(&overrides)?;
            let a = parse_spec(&first)?.build();
            let b = parse_spec(&second)?.build();
            info!(a = %a.name(), b = %b.name(), rounds = config.rounds, "playing duel");

            let result = run_match(a.as_ref(), b.as_ref(), &config.payoff, config.rounds, config.seed)
                .context("duel failed")?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print!("{}", report::render_match(&result));
            }
        }
        None => {
            let config = file.tournament_config(&overrides)?;
            let lineup = file
                .lineup
                .clone()
                .unwrap_or_else(StrategySpec::default_lineup);
            let tournament = Tournament::new(build_lineup(&lineup), config)
                .context("invalid tournament setup")?;
            let results = tournament.run().context("tournament failed")?;

            if args.json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                print!("{}", report::render_standings(&results.standings));
                print!("{}", report::render_head_to_head(&results.head_to_head));
            }
        }
    }

    Ok(())
}
