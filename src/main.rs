//! Reversi self-play runner
//!
//! Plays one game between two agents from the standard opening and prints
//! the board after every move.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use reversi::rules::winner;
use reversi::{Agent, EngineConfig, GameState, Player, SearchError};

#[derive(Parser, Debug)]
#[command(name = "reversi")]
#[command(about = "Reversi AI self-play")]
struct Args {
    /// Engine config file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Search at a fixed depth instead of the adaptive schedule
    #[arg(long)]
    depth: Option<u8>,

    /// Search from scratch every turn instead of reusing the tree
    #[arg(long)]
    no_tree: bool,

    /// Stop after this many plies (passes included)
    #[arg(long, default_value_t = 128)]
    max_moves: usize,

    /// Log level, overridden by RUST_LOG
    #[arg(long)]
    log_level: Option<String>,
}

fn init_tracing(level: &str) -> Result<()> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    Ok(())
}

fn load_config(args: &Args) -> Result<EngineConfig> {
    let mut config = match &args.config {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => EngineConfig::default(),
    };

    if let Some(depth) = args.depth {
        config = config.with_fixed_depth(depth);
    }
    if args.no_tree {
        config = config.with_tree(false);
    }
    if let Some(level) = &args.log_level {
        config.log_level = level.clone();
    }

    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = load_config(&args)?;
    init_tracing(&config.log_level)?;

    info!(?config, "starting self-play");

    let mut one = Agent::with_config(config.clone());
    let mut two = Agent::with_config(config);
    let mut state = GameState::initial();
    println!("{}", state.board);

    for ply in 1..=args.max_moves {
        if state.is_game_over() {
            break;
        }

        let agent = match state.turn {
            Player::One => &mut one,
            Player::Two => &mut two,
        };
        let mover = state.turn.number();

        state = match agent.select_move_with_stats(&state) {
            Ok(result) => {
                println!(
                    "{ply}. player {mover} plays {} (score {}, depth {}, {} nodes, {}ms)",
                    result.best_move, result.score, result.depth, result.nodes, result.time_ms
                );
                state.apply_move(result.best_move)?
            }
            Err(SearchError::NoLegalMove(player)) => {
                println!("{ply}. player {} passes", player.number());
                state.pass()
            }
            Err(e) => return Err(e.into()),
        };
        println!("{}", state.board);
    }

    if !state.is_game_over() {
        warn!(max_moves = args.max_moves, "move limit reached before game end");
    }
    let ones = state.board.count(Player::One);
    let twos = state.board.count(Player::Two);
    if !state.is_game_over() {
        println!("Unfinished {ones}-{twos}");
    } else if let Some(p) = winner(&state.board) {
        println!("Player {} wins {ones}-{twos}", p.number());
    } else {
        println!("Draw {ones}-{twos}");
    }

    Ok(())
}
