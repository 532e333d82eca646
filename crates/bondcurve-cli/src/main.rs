mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use commands::bond::BondPriceArgs;
use commands::curve::CurveRateArgs;

/// Bond valuation and bid/ask yield curve lookups
#[derive(Parser)]
#[command(
    name = "bondcurve",
    version,
    about = "Bond valuation and bid/ask yield curve lookups",
    long_about = "Values fixed-coupon government bonds (accrued interest, clean and \
                  all-in prices) off a bond-equivalent yield, and reads bid, ask or mid \
                  rates from a dated yield curve with linear interpolation."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Value a bond: accrued interest, clean and all-in prices
    BondPrice(BondPriceArgs),
    /// Read a bid, ask or mid rate from a yield curve
    CurveRate(CurveRateArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
    /// Plain-language sentences
    Text,
}

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::BondPrice(args) => commands::bond::run_bond_price(args),
        Commands::CurveRate(args) => commands::curve::run_curve_rate(args),
        Commands::Version => {
            println!("bondcurve {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
