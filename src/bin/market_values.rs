// src/bin/market_values.rs
use marketwave::{config::options::ScrapeOptions, runner};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    runner::run_market_values(&ScrapeOptions::default())?;
    Ok(())
}
