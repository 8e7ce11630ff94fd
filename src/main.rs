use bingo::{
    init_logging, print_card, run_interactive, CliObserver, GameSession, GameStatus, MarkingMode,
    SessionConfig,
};

use clap::{Parser, Subcommand, ValueEnum};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Marking {
    Auto,
    Manual,
}

impl From<Marking> for MarkingMode {
    fn from(m: Marking) -> Self {
        match m {
            Marking::Auto => MarkingMode::Auto,
            Marking::Manual => MarkingMode::Manual,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game in the terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, value_enum, default_value_t = Marking::Auto)]
        marking: Marking,
    },
    /// Call numbers until the game ends, printing every step.
    Auto {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { seed, marking } => {
            let config = SessionConfig {
                marking: marking.into(),
            };
            let mut session = GameSession::new(make_rng(seed), config);
            run_interactive(&mut session)?;
        }
        Commands::Auto { seed } => {
            let mut session = GameSession::new(make_rng(seed), SessionConfig::default());
            let mut observer = CliObserver::new();
            session.dispatch(&mut observer);
            print_card(&session);
            while !session.status().is_over() {
                session
                    .call_next()
                    .map_err(|e| anyhow::anyhow!(e))?;
                session.dispatch(&mut observer);
            }
            print_card(&session);
            if session.status() == GameStatus::Won {
                println!("Won after {} calls", session.pool().called_count());
            }
        }
    }
    Ok(())
}
