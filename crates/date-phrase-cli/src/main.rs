//! `dphrase` — resolve a Russian "Nth weekday of month" phrase to a date.
//!
//! Prints the resolved date (`YYYY-MM-DD`) or `None` to stdout. Resolution
//! events are routed to two log files in the working directory; see the
//! [`logging`] module.

mod logging;

use anyhow::Result;
use clap::Parser;
use date_phrase::{resolve, TracingReporter};

/// Принимает запрос: день недели месяца. Возвращает дату.
#[derive(Parser, Debug)]
#[command(name = "dphrase", version)]
struct Cli {
    /// Phrase to resolve: "<ordinal> <weekday> <month>", in Russian
    #[arg(short = 'd', long = "date", default_value = "1-й понедельник января")]
    date: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init()?;

    match resolve(&cli.date, &TracingReporter)? {
        Some(resolved) => println!("{}", resolved.date),
        None => println!("None"),
    }
    Ok(())
}
