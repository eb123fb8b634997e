//! Arbiter Binary
//!
//! Plays matches between two seats and prints each outcome as a JSON line.
//!
//! Seats: `fish`, `fish:<seed>`, `uci:<path>`

use adjudicator::*;
use clap::Parser;
use std::time::Duration;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, default_value = "fish", help = "Agent playing White")]
    white: Seat,
    #[arg(long, default_value = "fish", help = "Agent playing Black")]
    black: Seat,
    #[arg(long, default_value_t = MOVE_BUDGET_MS, help = "Thinking time per move, in milliseconds")]
    budget: u64,
    #[arg(long, default_value_t = FULL_MOVE_CAP, help = "Full moves before a match is abandoned")]
    moves: usize,
    #[arg(long, default_value_t = 1, help = "Matches to play concurrently")]
    games: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    log()?;
    let args = Args::parse();
    let interrupt = ctrlc();
    let config = MatchConfig::new(Duration::from_millis(args.budget), args.moves);
    log::info!(
        "playing {} matches, {} vs {}, {}ms per move",
        args.games,
        args.white,
        args.black,
        args.budget
    );
    let mut matches = tokio::task::JoinSet::new();
    for _ in 0..args.games {
        let game = Match::new(args.white.agent(), args.black.agent()).with_config(config);
        log::debug!("[match {}] queued", game.id());
        let mut adjudicator = Adjudicator::new(ChessRules).with_interrupt(interrupt.clone());
        matches.spawn(async move { adjudicator.run(game).await });
    }
    let mut tally = std::collections::BTreeMap::<Verdict, usize>::new();
    let mut forfeits = 0;
    let mut aborted = 0;
    while let Some(joined) = matches.join_next().await {
        match joined {
            Ok(Ok(outcome)) => {
                println!("{}", outcome.to_json()?);
                *tally.entry(outcome.verdict).or_default() += 1;
                forfeits += outcome.termination.is_forfeit() as usize;
            }
            Ok(Err(e)) => {
                log::warn!("match aborted: {}", e);
                aborted += 1;
            }
            Err(e) => {
                log::error!("match task crashed: {}", e);
                aborted += 1;
            }
        }
    }
    for (verdict, count) in tally.iter() {
        log::info!("{} {}", verdict, count);
    }
    log::info!("{} decided by forfeit", forfeits);
    if aborted > 0 {
        log::error!("{} of {} matches aborted", aborted, args.games);
        std::process::exit(1);
    }
    Ok(())
}
