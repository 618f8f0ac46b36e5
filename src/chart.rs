// src/chart.rs
//
// Render-ready chart models. Pure data and axis math; painting lives in
// `gui::plot`.

use std::collections::HashMap;

use crate::values::ValuedRecord;

const MAX_TICKS: usize = 64;

#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BarChart {
    pub title: String,
    pub category_label: String,
    pub value_label: String,
    pub bars: Vec<Bar>,
}

impl BarChart {
    /// One bar per distinct player, in first-occurrence order. A player
    /// listed more than once is charted at the mean of their values.
    pub fn from_records(records: &[ValuedRecord], category_field: &str, value_field: &str) -> Self {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut groups: Vec<(&str, f64, usize)> = Vec::new();

        for r in records {
            match index.get(r.player.as_str()) {
                Some(&i) => {
                    groups[i].1 += r.market_value;
                    groups[i].2 += 1;
                }
                None => {
                    index.insert(r.player.as_str(), groups.len());
                    groups.push((r.player.as_str(), r.market_value, 1));
                }
            }
        }

        let bars = groups
            .into_iter()
            .map(|(label, sum, n)| Bar { label: s!(label), value: sum / n as f64 })
            .collect();

        Self {
            title: join!(value_field, " vs ", category_field),
            category_label: s!(category_field),
            value_label: s!(value_field),
            bars,
        }
    }

    /// Value axis range; always includes zero so bars have a baseline.
    pub fn value_range(&self) -> Range {
        Range::of(self.bars.iter().map(|b| b.value))
            .unwrap_or(Range { min: 0.0, max: 1.0 })
            .include_zero()
            .padded(0.05)
    }
}

/// A single time series with its labels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineChart<'a> {
    pub title: &'a str,
    pub x_label: &'a str,
    pub y_label: &'a str,
    pub xs: &'a [f64],
    pub ys: &'a [f64],
}

impl LineChart<'_> {
    pub fn x_range(&self) -> Range {
        Range::of(self.xs.iter().copied()).unwrap_or(Range { min: 0.0, max: 1.0 }).padded(0.0)
    }

    pub fn y_range(&self) -> Range {
        Range::of(self.ys.iter().copied()).unwrap_or(Range { min: -1.0, max: 1.0 }).padded(0.05)
    }

    /// Points whose coordinates are both finite.
    pub fn finite_points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xs
            .iter()
            .zip(self.ys)
            .map(|(&x, &y)| (x, y))
            .filter(|(x, y)| x.is_finite() && y.is_finite())
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    /// Bounds of the finite values, `None` if there are none.
    pub fn of(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        values
            .into_iter()
            .filter(|v| v.is_finite())
            .fold(None, |acc: Option<Range>, v| match acc {
                None => Some(Range { min: v, max: v }),
                Some(r) => Some(Range { min: r.min.min(v), max: r.max.max(v) }),
            })
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn include_zero(self) -> Self {
        Self { min: self.min.min(0.0), max: self.max.max(0.0) }
    }

    /// Widen both ends by `fraction` of the span. A degenerate range is
    /// widened around its value first.
    pub fn padded(self, fraction: f64) -> Self {
        let mut r = self;
        if r.span() <= 0.0 {
            let half = if r.min == 0.0 { 0.5 } else { r.min.abs() * 0.1 };
            r = Range { min: r.min - half, max: r.max + half };
        }
        let pad = r.span() * fraction;
        Range { min: r.min - pad, max: r.max + pad }
    }

    /// Position of `v` in the range, 0 at `min` and 1 at `max`.
    pub fn fraction(&self, v: f64) -> f64 {
        (v - self.min) / self.span()
    }
}

/// 1-2-5 step giving roughly `target` intervals over `range`.
pub fn tick_step(range: Range, target: usize) -> f64 {
    let raw = range.span() / target.max(1) as f64;
    if !(raw.is_finite() && raw > 0.0) {
        return 1.0;
    }
    let magnitude = 10f64.powi(raw.log10().floor() as i32);
    let norm = raw / magnitude;
    let nice = [1.0, 2.0, 5.0, 10.0].into_iter().find(|&n| n >= norm).unwrap_or(10.0);
    nice * magnitude
}

/// Tick positions that fall inside `range`.
pub fn nice_ticks(range: Range, target: usize) -> Vec<f64> {
    let step = tick_step(range, target);
    let first = (range.min / step).ceil() * step;
    (0..MAX_TICKS)
        .map(|i| first + i as f64 * step)
        .take_while(|&v| v <= range.max + step * 1e-9)
        .map(|v| if v.abs() < step * 1e-9 { 0.0 } else { v })
        .collect()
}

/// Tick label; large values use the `m`/`bn` notation of the squad pages.
pub fn format_tick(v: f64, step: f64) -> String {
    if step >= 1e8 {
        join!(&fixed(v / 1e9, step / 1e9), "bn")
    } else if step >= 1e5 {
        join!(&fixed(v / 1e6, step / 1e6), "m")
    } else {
        fixed(v, step)
    }
}

fn fixed(v: f64, step: f64) -> String {
    let decimals = if step >= 1.0 { 0 } else { (-step.log10()).ceil() as usize };
    format!("{v:.decimals$}")
}
