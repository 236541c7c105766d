mod play;
mod render;
mod roster;

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand, ValueEnum};
use externality_core::{play_game, GameConfig, GameState};

use crate::roster::StrategyKind;

#[derive(Parser)]
#[command(name = "externality")]
#[command(about = "Classroom game on negative externalities: profit now, pollution for everyone")]
struct Cli {
    /// JSON file overriding the default economy and grading parameters
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Play interactively in the terminal (default)
    Play,

    /// Play a full game with an automated strategy
    Simulate {
        #[arg(short, long, value_enum)]
        strategy: StrategyKind,

        /// Seed for the random strategy
        #[arg(long)]
        seed: Option<u64>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run every strategy and rank them by social welfare
    Compare {
        /// Seed for the random strategy
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn load_config(path: Option<&Path>) -> Result<GameConfig> {
    match path {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("could not use config {}", path.display())),
        None => Ok(GameConfig::default()),
    }
}

fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(|| {
        let seed = rand::random();
        log::info!("using random seed {seed}");
        seed
    })
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => {
            let mut state = GameState::new(config);
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            play::run(&mut state, stdin.lock(), &mut stdout).context("terminal I/O failed")?;
        }
        Command::Simulate {
            strategy,
            seed,
            json,
        } => {
            let mut player = strategy.build(&config, resolve_seed(seed));
            let report = play_game(player.as_mut(), config);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", render::simulation_summary(&report));
            }
        }
        Command::Compare { seed } => {
            let seed = resolve_seed(seed);
            let reports: Vec<_> = StrategyKind::value_variants()
                .iter()
                .map(|kind| {
                    let mut player = kind.build(&config, seed);
                    play_game(player.as_mut(), config.clone())
                })
                .collect();
            print!("{}", render::comparison(&reports));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_simulate() {
        let cli = Cli::parse_from(["externality", "simulate", "-s", "planner", "--json"]);
        match cli.command {
            Some(Command::Simulate {
                strategy,
                seed,
                json,
            }) => {
                assert_eq!(strategy, StrategyKind::Planner);
                assert_eq!(seed, None);
                assert!(json);
            }
            _ => panic!("expected simulate"),
        }
    }

    #[test]
    fn cli_defaults_to_play() {
        let cli = Cli::parse_from(["externality"]);
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn global_config_flag_after_subcommand() {
        let cli = Cli::parse_from(["externality", "compare", "--config", "game.json"]);
        assert_eq!(cli.config, Some(PathBuf::from("game.json")));
    }

    #[test]
    fn missing_config_file_is_reported() {
        let err = load_config(Some(Path::new("/no/such/config.json"))).unwrap_err();
        assert!(err.to_string().contains("could not use config"));
    }

    #[test]
    fn explicit_seed_is_kept() {
        assert_eq!(resolve_seed(Some(9)), 9);
    }
}
