// src/values.rs
//
// Market value records and the text → number conversion.

use std::fmt::Write as _;

use crate::error::{Error, Result};

const CURRENCY_SYMBOLS: [char; 3] = ['€', '$', '£'];
const BILLION: f64 = 1e9;
const MILLION: f64 = 1e6;

/// One qualifying squad row. `market_value` is `None` when the text did
/// not convert.
#[derive(Clone, Debug, PartialEq)]
pub struct MarketValueRecord {
    pub player: String,
    pub market_value: Option<f64>,
}

impl MarketValueRecord {
    pub fn from_text(player: String, market_value_text: &str) -> Self {
        Self { player, market_value: normalize(market_value_text) }
    }
}

/// A record that survived `drop_missing`; the only shape charts accept.
#[derive(Clone, Debug, PartialEq)]
pub struct ValuedRecord {
    pub player: String,
    pub market_value: f64,
}

/// Convert a market value such as `€12.50m`, `€1.20bn` or `€1.500.000`.
///
/// Order of work: strip currency symbols, read a `bn` (×10⁹) or `m` (×10⁶)
/// suffix, drop period thousands separators, turn a comma decimal
/// separator into a period, parse.
///
/// In an abbreviated figure without a comma the period is the decimal
/// point (`€12.50m` is 12.5 million). Space separators, `k` and German
/// suffixes (`Mio.`) are not understood and fail.
pub fn parse_market_value(text: &str) -> Result<f64> {
    let fail = || Error::Parse { text: s!(text) };

    let body = text.replace(CURRENCY_SYMBOLS, "");
    let body = body.trim();

    let (mantissa, scale) = if let Some(m) = body.strip_suffix("bn") {
        (m, BILLION)
    } else if let Some(m) = body.strip_suffix('m') {
        (m, MILLION)
    } else {
        (body, 1.0)
    };

    let number = if mantissa.contains(',') {
        mantissa.replace('.', "").replace(',', ".")
    } else if scale == 1.0 {
        mantissa.replace('.', "")
    } else {
        s!(mantissa)
    };

    let value = number.trim().parse::<f64>().map_err(|_| fail())? * scale;
    if !value.is_finite() {
        return Err(fail());
    }
    Ok(value)
}

/// `parse_market_value` with failures mapped to the missing marker.
pub fn normalize(text: &str) -> Option<f64> {
    match parse_market_value(text) {
        Ok(v) => Some(v),
        Err(e) => {
            logd!("{e}");
            None
        }
    }
}

/// Drop rows whose market value is missing, keeping row order.
pub fn drop_missing(records: Vec<MarketValueRecord>) -> Vec<ValuedRecord> {
    let before = records.len();
    let kept: Vec<ValuedRecord> = records
        .into_iter()
        .filter_map(|r| {
            r.market_value.map(|market_value| ValuedRecord { player: r.player, market_value })
        })
        .collect();
    if kept.len() != before {
        logf!("Dropped {} rows without a market value", before - kept.len());
    }
    kept
}

/// Plain-text table of the records, missing values shown as `NaN`.
pub fn format_table(records: &[MarketValueRecord]) -> String {
    const PLAYER: &str = "Player";
    const VALUE: &str = "MarketValue";

    let values: Vec<String> = records
        .iter()
        .map(|r| match r.market_value {
            Some(v) => format!("{v:.1}"),
            None => s!("NaN"),
        })
        .collect();

    let idx_w = records.len().saturating_sub(1).to_string().len();
    let name_w = records
        .iter()
        .map(|r| r.player.chars().count())
        .chain([PLAYER.len()])
        .max()
        .unwrap_or(PLAYER.len());
    let value_w = values.iter().map(String::len).chain([VALUE.len()]).max().unwrap_or(VALUE.len());

    let mut out = String::new();
    let _ = writeln!(out, "{:idx_w$}  {PLAYER:<name_w$}  {VALUE:>value_w$}", "");
    for (i, (r, v)) in records.iter().zip(&values).enumerate() {
        let _ = writeln!(out, "{i:<idx_w$}  {:<name_w$}  {v:>value_w$}", r.player);
    }
    out
}
