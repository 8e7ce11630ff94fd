use bingo::{GameSession, GameStatus, SessionConfig};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

/// Headless auto-play: `sim <seed> [games]` prints a JSON summary.
fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <seed> [games]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let games: usize = match args.get(2) {
        Some(g) => g.parse()?,
        None => 1,
    };

    let rng = SmallRng::seed_from_u64(seed);
    let mut session = GameSession::new(rng, SessionConfig::default());
    let mut calls_to_win = Vec::with_capacity(games);
    let mut exhausted = 0usize;

    for game in 0..games {
        if game > 0 {
            session.new_game();
        }
        while !session.status().is_over() {
            session.call_next().map_err(|e| anyhow::anyhow!(e))?;
        }
        match session.status() {
            GameStatus::Won => calls_to_win.push(session.pool().called_count()),
            _ => exhausted += 1,
        }
        session.drain_events();
    }

    let mean = if calls_to_win.is_empty() {
        None
    } else {
        Some(calls_to_win.iter().sum::<usize>() as f64 / calls_to_win.len() as f64)
    };
    let last_line = session.winning_line().map(|l| l.kind.to_string());

    let result = json!({
        "games": games,
        "wins": calls_to_win.len(),
        "exhausted": exhausted,
        "calls_to_win": calls_to_win,
        "mean_calls_to_win": mean,
        "last_winning_line": last_line,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
