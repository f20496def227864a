//! Noughts - terminal tic-tac-toe
//!
//! Hot-seat play and a scripted demo over the pure game engine.

#![warn(missing_docs)]

mod cli;

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use noughts::{GameState, MoveError, Position, parse_position};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play => play(),
        Command::Demo => demo(),
    }
}

/// Run an interactive hot-seat game on stdin/stdout.
#[instrument]
fn play() -> Result<()> {
    info!("Starting hot-seat game");

    let mut state = GameState::new_game();
    let mut last_move: Option<usize> = None;
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!("{}", state.render(last_move));

        if state.game_over() {
            break;
        }

        print!("{}> ", state.current_player());
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            println!();
            info!("Input closed, ending game");
            return Ok(());
        };
        let input = line?;

        let position = match parse_position(&input) {
            Ok(position) => position,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };

        let player = state.current_player();
        match state.apply_move(position.to_index(), player) {
            Ok(outcome) => {
                last_move = Some(position.to_index());
                println!("{outcome}");
            }
            Err(err @ MoveError::SquareOccupied(_)) => {
                println!("{err}");
                let open = Position::valid_moves(state.board())
                    .iter()
                    .map(|pos| pos.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                println!("Open squares: {open}");
            }
            Err(err) => println!("{err}"),
        }
    }

    info!("Game over");
    Ok(())
}

/// Play a fixed sequence of moves, rendering after each.
#[instrument]
fn demo() -> Result<()> {
    info!("Starting scripted demo");

    let mut state = GameState::new_game();
    let script = [0usize, 1, 4, 2, 8];

    for position in script {
        let player = state.current_player();
        let outcome = state
            .apply_move(position, player)
            .with_context(|| format!("scripted move at position {position} rejected"))?;

        println!("{player} plays {}", Position::ALL[position]);
        println!("{}", state.render(Some(position)));
        println!("{outcome}");
    }

    Ok(())
}
