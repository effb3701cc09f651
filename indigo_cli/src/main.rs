mod console;
mod render;
mod simulate;

use std::io;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use indigo::{ComputerPlayer, Deck, Table};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::console::{ask_play_first, ConsolePlayer};
use crate::simulate::simulate;

const HUMAN_SEAT: usize = 0;
const COMPUTER_SEAT: usize = 1;

#[derive(Parser)]
struct Args {
    /// Whether you play the first card. Asked at the start when omitted
    #[arg(short, long, value_enum)]
    first: Option<Answer>,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Let two computer players play this many games instead
    #[arg(long)]
    simulate: Option<usize>,

    /// Print the simulation summary as JSON
    #[arg(long, default_value_t = false, requires = "simulate")]
    json: bool,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "warn")]
    log_level: LevelFilter,
}

#[derive(Clone, Copy, ValueEnum)]
enum Answer {
    Yes,
    No,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    // Get a random seed
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);
    let mut rng = StdRng::seed_from_u64(seed);

    match args.simulate {
        Some(0) => anyhow::bail!("--simulate needs at least one game"),
        Some(num_games) => {
            let summary = simulate(num_games, &mut rng)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("{}", summary.report());
            }
            Ok(())
        }
        None => play_interactive(args.first, &mut rng),
    }
}

fn play_interactive(first: Option<Answer>, rng: &mut StdRng) -> anyhow::Result<()> {
    println!("Indigo Card Game");
    let human_first = match first {
        Some(Answer::Yes) => true,
        Some(Answer::No) => false,
        None => ask_play_first(&mut io::stdin().lock(), &mut io::stdout())
            .context("Could not ask who plays first")?
            .context("Input ended before choosing who plays first")?,
    };

    let mut human = ConsolePlayer::new("Player", io::stdin().lock(), io::stdout());
    let mut computer = ComputerPlayer::new("Computer", StdRng::seed_from_u64(rng.gen()));
    let first_seat = if human_first { HUMAN_SEAT } else { COMPUTER_SEAT };
    let mut table = Table::new([&mut human, &mut computer], first_seat, Deck::new(rng));

    println!("{}", render::initial_pile(&table));
    println!("{}", render::pile_status(&table));
    table.run(|table, outcome| println!("{}", render::outcome(table, outcome, HUMAN_SEAT)))?;
    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
