use clap::{Parser, Subcommand};
use desk::{Cents, HotelConfig, HotelService, MarketConfig, MarketService};
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod console;
mod hotel_menu;
mod trade_menu;

use console::Console;

#[derive(Parser)]
#[command(name = "desk-cli")]
#[command(about = "Console front desk for the hotel tracker and the trading simulator")]
struct Cli {
    /// Log service activity at debug level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Hotel room reservations
    Hotel,
    /// Stock trading against a simulated market
    Trade {
        /// Starting cash, e.g. 10000 or 2500.50
        #[arg(short, long, value_parser = parse_cash)]
        cash: Option<Cents>,
        /// Seed for a reproducible price walk
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn parse_cash(s: &str) -> Result<Cents, String> {
    s.parse::<Cents>()
        .map_err(|err| format!("Invalid cash amount: {err}"))
}

fn init_logging(verbose: bool) {
    let default = if verbose { "desk=debug,info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout().lock());

    match cli.command {
        Commands::Hotel => {
            let mut hotel = HotelService::with_config(HotelConfig::default());
            info!(rooms = hotel.rooms().len(), "hotel open");
            hotel_menu::run(&mut hotel, &mut console)?;
        }

        Commands::Trade { cash, seed } => {
            let mut config = MarketConfig::default();
            if let Some(cash) = cash {
                config = config.with_initial_cash(cash);
            }
            info!(cash = %config.initial_cash, ?seed, "market open");

            let mut svc = match seed {
                Some(seed) => MarketService::seeded(config, seed),
                None => MarketService::new(config),
            };
            trade_menu::run(&mut svc, &mut console)?;
        }
    }

    Ok(())
}
