//! Two-player terminal chess
//!
//! Plays any `--moves` first, then alternates turns on stdin until
//! checkmate or end of input.

mod config;
mod prompt;
mod render;

use std::io::{self, Write};

use anyhow::{bail, Context, Result};
use chess_rules::{Game, GameStatus, PromotionChoice};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use config::Cli;
use prompt::TerminalPrompt;
use render::render_board;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let mut game = Game::new();
    let fixed = cli.fixed_promotion();
    let interactive = cli.is_interactive();

    for mv in cli.scripted_moves() {
        if !play_move(&mut game, &mv, fixed, interactive) {
            bail!("scripted move {mv:?} was rejected");
        }
        info!("[MOVE] Scripted {:?}", mv);
    }

    if cli.json {
        let snapshot =
            serde_json::to_string_pretty(game.board()).context("serializing board snapshot")?;
        println!("{snapshot}");
        return Ok(());
    }

    if interactive {
        run_interactive(&mut game, fixed)
    } else {
        print!("{}", render_board(game.board()));
        announce_status(&mut game);
        Ok(())
    }
}

fn init_logging(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Apply one move, resolving a promotion from the fixed answer, the terminal or Queen
fn play_move(
    game: &mut Game,
    input: &str,
    fixed: Option<PromotionChoice>,
    interactive: bool,
) -> bool {
    match fixed {
        Some(mut choice) => game.play(input, &mut choice),
        None if interactive => game.play(input, &mut TerminalPrompt::new(io::stdin().lock())),
        None => game.play(input, &mut PromotionChoice::default()),
    }
}

/// Print whose turn it is and any check; returns `false` once the game is over
fn announce_status(game: &mut Game) -> bool {
    let side = game.current_turn();
    println!("{side} to move");
    match game.status() {
        GameStatus::Ongoing => true,
        GameStatus::Check => {
            println!("Check!");
            true
        }
        GameStatus::Checkmate => {
            println!("Check!");
            println!("Checkmate! {} wins.", !side);
            false
        }
    }
}

fn run_interactive(game: &mut Game, fixed: Option<PromotionChoice>) -> Result<()> {
    let stdin = io::stdin();
    loop {
        print!("{}", render_board(game.board()));
        if !announce_status(game) {
            return Ok(());
        }

        print!("Enter your move (e.g. 'e2 e4'): ");
        io::stdout().flush().context("flushing prompt")?;

        let mut line = String::new();
        let read = stdin.read_line(&mut line).context("reading move")?;
        if read == 0 {
            println!();
            info!("[MOVE] End of input, leaving the game");
            return Ok(());
        }

        let input = line.trim();
        match input {
            "" => continue,
            "quit" | "exit" => return Ok(()),
            _ => {}
        }

        if !play_move(game, input, fixed, true) {
            debug!("[MOVE] Rejected {:?}", input);
            println!("Invalid move, try again.");
        }
    }
}
