//! Prints the phase of the Moon for a batch of dates, then for right now.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- --hemisphere southern --date 2024-04-08 --date 2024-04-23
//! ```
//!
//! Set `RUST_LOG=lunfazo=trace` to log each calculation to stderr.

use chrono::{NaiveDate, NaiveTime};
use clap::Parser;
use lunfazo::moon::{self, Hemisphere};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Dates shown when no `--date` is given.
const SAMPLE_DATES: &[(i32, u32, u32)] = &[
    (2020, 7, 27),
    (2020, 7, 28),
    (2020, 8, 3),
    (2020, 8, 11),
    (2020, 8, 19),
];

#[derive(Parser, Debug)]
#[command(name = "lunfazo")]
#[command(about = "Approximate phase of the Moon")]
struct Args {
    /// Hemisphere of the observer (northern or southern).
    #[arg(long, default_value_t = Hemisphere::Northern)]
    hemisphere: Hemisphere,

    /// Dates (YYYY-MM-DD, midnight UTC) to show instead of the samples.
    #[arg(long = "date")]
    dates: Vec<NaiveDate>,
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // build the table before anything is printed
    let table = moon::phase_table();
    debug!(phases = table.len(), "phase table ready");

    let dates = if args.dates.is_empty() {
        SAMPLE_DATES
            .iter()
            .filter_map(|&(y, m, d)| NaiveDate::from_ymd_opt(y, m, d))
            .collect()
    } else {
        args.dates
    };

    println!();
    for date in dates {
        let moment = date.and_time(NaiveTime::MIN).and_utc();
        let result = moon::calculate(moment, args.hemisphere);
        println!("{}", moon::fmt::summary(&result));
    }
    println!();

    println!("{}", moon::now(args.hemisphere));
}
