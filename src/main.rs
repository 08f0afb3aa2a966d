//! Prints the payroll report for the built-in restaurant roster.

use std::io::IsTerminal;

use restaurant_payroll::calculation::summarize;
use restaurant_payroll::config::RosterLoader;
use restaurant_payroll::error::PayrollResult;
use tracing_subscriber::EnvFilter;

fn main() -> PayrollResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .init();

    let loader = RosterLoader::builtin()?;
    let (restaurant_a, restaurant_b) = loader.location_pair()?;

    let summary = summarize(restaurant_a, restaurant_b);
    println!("{summary}");

    Ok(())
}
