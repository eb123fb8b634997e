//! Adjudication of two-player chess matches between asynchronous agents.
//!
//! An [`Adjudicator`] resets both agents, then alternates move requests
//! between them, holding each request to a hard deadline. Every reply is
//! checked against the legal moves of the current position and the position
//! is classified after each accepted move, until one side wins, the game is
//! drawn, or the full-move cap runs out.
//!
//! ## Architecture
//!
//! - [`Adjudicator`] - Turn loop, deadline policy, verdict logic
//! - [`Referee`] - Legality and terminal-state queries over a [`MoveHistory`]
//! - [`Rules`] - Contract of the rules engine, implemented by [`ChessRules`]
//! - [`Agent`] - Contract of a move-producing collaborator
//!
//! ## Agents
//!
//! - [`Fish`] - Random legal mover
//! - [`Script`] - Fixed sequence of moves
//! - [`Uci`] - External engine process speaking UCI
//! - [`Seat`] - Textual agent description for command lines
mod adjudicator;
mod agent;
mod agents;
mod chess;
mod config;
mod error;
mod event;
mod history;
mod interrupt;
mod outcome;
mod referee;
mod rules;
mod side;
mod verdict;

pub use adjudicator::*;
pub use agent::*;
pub use agents::*;
pub use chess::*;
pub use config::*;
pub use error::*;
pub use event::*;
pub use history::*;
pub use interrupt::*;
pub use outcome::*;
pub use referee::*;
pub use rules::*;
pub use side::*;
pub use verdict::*;

// ============================================================================
// MATCH PARAMETERS
// ============================================================================
/// Thinking time granted to an agent per move (milliseconds).
pub const MOVE_BUDGET_MS: u64 = 500;
/// Full-move pairs played before an undecided match is abandoned.
pub const FULL_MOVE_CAP: usize = 100;
/// Multiple of the move budget an agent may take before forfeiting.
/// The surplus absorbs latency at the agent's service boundary.
pub const DEADLINE_MARGIN: u32 = 2;

// ============================================================================
// DRAW RULES
// ============================================================================
/// Occurrences of one position that draw the game.
pub const REPETITION_LIMIT: usize = 3;
/// Halfmove clock at which the fifty-move rule draws the game.
pub const FIFTY_MOVE_PLIES: u32 = 100;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() -> anyhow::Result<()> {
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time))?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}

/// Interrupt that fires on Ctrl+C.
/// Matches in flight are abandoned at their next await, without a verdict.
#[cfg(feature = "server")]
pub fn ctrlc() -> Interrupt {
    let (trigger, interrupt) = Interrupt::channel();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            println!();
            log::warn!("interrupt received, abandoning matches in flight");
            let _ = trigger.send(true);
        }
    });
    interrupt
}
