// src/gui/signal_chart.rs
//
// Two stacked time series: the message and the FM waveform.

use eframe::egui::{self, vec2};

use crate::chart::LineChart;
use crate::config::options::WindowOptions;
use crate::error::Result;
use crate::signal::Signal;

use super::plot;

pub const MESSAGE_TITLE: &str = "Message Signal";
pub const FM_TITLE: &str = "Frequency Modulated Signal";
pub const TIME_LABEL: &str = "Time [s]";
pub const AMPLITUDE_LABEL: &str = "Amplitude";

pub struct SignalChartApp {
    signal: Signal,
}

impl SignalChartApp {
    pub fn new(signal: Signal) -> Self {
        Self { signal }
    }

    /// Charts in top-to-bottom order.
    pub fn charts(&self) -> [LineChart<'_>; 2] {
        let time = self.signal.time();
        [
            LineChart {
                title: MESSAGE_TITLE,
                x_label: TIME_LABEL,
                y_label: AMPLITUDE_LABEL,
                xs: time,
                ys: self.signal.message(),
            },
            LineChart {
                title: FM_TITLE,
                x_label: TIME_LABEL,
                y_label: AMPLITUDE_LABEL,
                xs: time,
                ys: self.signal.fm(),
            },
        ]
    }
}

impl eframe::App for SignalChartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let charts = self.charts();
            let gap = ui.spacing().item_spacing.y;
            let width = ui.available_width();
            let height = ((ui.available_height() - gap) / charts.len() as f32).max(0.0);
            for chart in &charts {
                plot::line_chart(ui, chart, vec2(width, height));
            }
        });
    }
}

/// Show `signal` in a native window; returns when the window is closed.
pub fn show(signal: Signal, window: &WindowOptions) -> Result<()> {
    logf!("Opening signal charts ({} samples)", signal.len());
    super::run_window(window, SignalChartApp::new(signal))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::linspace;

    #[test]
    fn message_chart_sits_above_fm_chart() {
        let app = SignalChartApp::new(Signal::new(linspace(0.0, 1.0, 11), 2.0, 20.0, 1000));
        let [top, bottom] = app.charts();
        assert_eq!(top.title, "Message Signal");
        assert_eq!(bottom.title, "Frequency Modulated Signal");
        assert_eq!((top.x_label, top.y_label), ("Time [s]", "Amplitude"));
        assert_eq!(top.xs.len(), 11);
        assert_eq!(bottom.ys.len(), 11);
    }
}
