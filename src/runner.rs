// src/runner.rs
//
// Pipeline entry points. Each takes its inputs explicitly; nothing runs at
// load time.

use crate::{
    chart::BarChart,
    config::options::{ScrapeOptions, SignalOptions},
    core::{net, timer::ScopedTimer},
    error::Result,
    gui,
    signal::{Signal, linspace},
    specs::squad,
    values::{self, MarketValueRecord},
};

/// Fetch → extract → normalize. Rows keep their order; unconvertible
/// values stay in as `None`.
pub fn scrape_market_values(opts: &ScrapeOptions) -> Result<Vec<MarketValueRecord>> {
    let raw = net::fetch_page(&opts.url, &opts.request)?;
    let pairs = squad::extract(&raw)?;

    let records: Vec<MarketValueRecord> = pairs
        .into_iter()
        .map(|(player, text)| MarketValueRecord::from_text(player, &text))
        .collect();

    let missing = records.iter().filter(|r| r.market_value.is_none()).count();
    logf!("Normalized {} records ({} without a value)", records.len(), missing);
    Ok(records)
}

/// Scrape with `scrape_market_values`, print the table, drop missing
/// values, chart the rest.
pub fn run_market_values(opts: &ScrapeOptions) -> Result<()> {
    let records = scrape_market_values(opts)?;
    print!("{}", values::format_table(&records));

    let valued = values::drop_missing(records);
    let chart = BarChart::from_records(&valued, &opts.category_field, &opts.value_field);
    gui::market_chart::show(chart, &opts.window)
}

/// The signal for `opts`, over `linspace(time_start, time_end, samples)`.
pub fn synthesize_signal(opts: &SignalOptions) -> Signal {
    let time = linspace(opts.time_start, opts.time_end, opts.samples);
    logf!(
        "Synthesizing {} samples: fm={} Hz, fc={} Hz, rate={}",
        time.len(), opts.message_frequency, opts.carrier_frequency, opts.sampling_rate
    );
    Signal::new(time, opts.message_frequency, opts.carrier_frequency, opts.sampling_rate)
}

/// Synthesize and plot; the render call is timed.
pub fn run_fm_signal(opts: &SignalOptions) -> Result<()> {
    let signal = synthesize_signal(opts);

    let _timer = ScopedTimer::start("signal render");
    gui::signal_chart::show(signal, &opts.window)
}
