//! Command line blackjack: a scripted player and a human against the house.

use std::io::{self, BufReader};
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use blackjack_sim::{
    BetPolicy, Exhaustion, Interactive, Player, Scripted, Session, Table, TableOptions,
};
use clap::Parser;
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Play blackjack against the house", long_about = None)]
struct Args {
    /// Seed for the shuffles. Defaults to the current time.
    #[arg(long)]
    seed: Option<u64>,
    /// Maximum number of rounds.
    #[arg(long, default_value_t = 10_000)]
    rounds: u32,
    /// Starting balance for every player.
    #[arg(long, default_value_t = 100)]
    balance: i64,
    /// Number of scripted players seated before the human.
    #[arg(long, default_value_t = 1)]
    bots: usize,
    /// Leave the human seat empty and run unattended.
    #[arg(long)]
    no_human: bool,
    /// Only print the end-of-round report, not every turn.
    #[arg(long)]
    quiet: bool,
    /// Packs shuffled together each round.
    #[arg(long, default_value_t = 1)]
    decks: u8,
    /// What to do with a bet outside 0..=balance.
    #[arg(long, value_enum, default_value_t = BetPolicy::Clamp)]
    bet_policy: BetPolicy,
    /// What to do when the deck runs dry mid-round.
    #[arg(long, value_enum, default_value_t = Exhaustion::AddPack)]
    exhaustion: Exhaustion,
    /// Log level written to stderr.
    #[arg(long, default_value_t = LevelFilter::Warn)]
    log_level: LevelFilter,
}

fn main() -> ExitCode {
    let args = Args::parse();
    log(args.log_level);

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    log::info!("seed {seed}");

    let options = TableOptions::default()
        .with_decks(args.decks)
        .with_bet_policy(args.bet_policy)
        .with_exhaustion(args.exhaustion)
        .with_max_rounds(args.rounds);
    let mut table = Table::new(options, seed);

    for index in 0..args.bots {
        let name = if index == 0 {
            "Bruce".to_string()
        } else {
            format!("Bot {}", index + 1)
        };
        table.seat(Player::new(name, args.balance, Scripted::default()));
    }

    let result = if args.no_human {
        Session::<BufReader<io::Stdin>, _>::new(table, io::stdout())
            .with_narration(!args.quiet)
            .run()
    } else {
        // One-byte buffers keep both readers from pulling lines ahead of each
        // other out of the shared stdin buffer.
        let human = Interactive::new(BufReader::with_capacity(1, io::stdin()), io::stdout());
        table.seat(Player::new("Human", args.balance, human));
        Session::new(table, io::stdout())
            .with_prompt(BufReader::with_capacity(1, io::stdin()))
            .with_narration(!args.quiet)
            .run()
    };

    match result {
        Ok(rounds) => {
            log::info!("played {rounds} rounds");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Writes log records at `level` and above to the terminal.
fn log(level: LevelFilter) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();
    let term = simplelog::TermLogger::new(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    if simplelog::CombinedLogger::init(vec![term]).is_err() {
        eprintln!("logger already initialized");
    }
}
