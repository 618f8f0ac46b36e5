// src/bin/fm_signal.rs
use marketwave::{config::options::SignalOptions, runner};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    runner::run_fm_signal(&SignalOptions::default())?;
    Ok(())
}
