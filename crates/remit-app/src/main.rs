//! RemitAbeg fee comparison CLI - Entry Point
//!
//! Prints the fee comparison table and savings for a transfer amount,
//! using the same comparator the landing page calculator drives.

use anyhow::Result;
use clap::Parser;
use remit_core::TransferAmount;
use remit_pricing::{FeeComparator, RateTable};
use tracing::info;

/// RemitAbeg fee comparison calculator
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Transfer amount in whole USD (clamped to [100, 10000], step 100)
    #[arg(short, long, default_value_t = 1_000)]
    amount: i64,

    /// Configuration file path (can also be set via REMIT_CONFIG env var)
    #[arg(short, long)]
    config: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    remit_telemetry::init_logging()?;

    info!("Starting remit-app v{}", env!("CARGO_PKG_VERSION"));

    let config = match &args.config {
        Some(path) => remit_app::AppConfig::from_file(path)?,
        None => remit_app::AppConfig::load()?,
    };

    let table = RateTable::try_from(config.pricing)?;
    let comparator = FeeComparator::new(table);

    // CLI input is presentation input: clamp, don't reject.
    let amount = TransferAmount::clamped(args.amount);
    let comparison = comparator.compare(amount);

    println!("Sending {} abroad:\n", amount);
    for quote in &comparison.quotes {
        let marker = if quote.recommended { "*" } else { " " };
        println!(
            "{marker} {:<16} {:>10}  ({}% fee, {})",
            quote.service_name,
            quote.fee_amount.to_string(),
            quote.rate_percent(),
            quote.speed_class,
        );
    }
    println!(
        "\nYou save {} with {} vs {}",
        comparison.savings,
        comparator.table().own().name,
        comparator.table().baseline().name,
    );

    Ok(())
}
