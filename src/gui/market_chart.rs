// src/gui/market_chart.rs
//
// Market value window: bar chart in the centre, charted rows on the right.

use eframe::egui::{self, Align, Layout};
use egui_extras::{Column, TableBuilder};

use crate::chart::BarChart;
use crate::config::options::WindowOptions;
use crate::error::Result;

use super::plot;

pub struct MarketChartApp {
    chart: BarChart,
}

impl MarketChartApp {
    pub fn new(chart: BarChart) -> Self {
        Self { chart }
    }
}

impl eframe::App for MarketChartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::right("charted_rows")
            .resizable(true)
            .default_width(280.0)
            .show(ctx, |ui| rows_table(ui, &self.chart));

        egui::CentralPanel::default().show(ctx, |ui| plot::bar_chart(ui, &self.chart));
    }
}

fn rows_table(ui: &mut egui::Ui, chart: &BarChart) {
    TableBuilder::new(ui)
        .striped(true)
        .column(Column::initial(160.0).resizable(true).clip(true).at_least(60.0))
        .column(Column::remainder().at_least(80.0))
        .header(22.0, |mut header| {
            header.col(|ui| {
                ui.strong(&chart.category_label);
            });
            header.col(|ui| {
                ui.strong(&chart.value_label);
            });
        })
        .body(|mut body| {
            for bar in &chart.bars {
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        ui.label(&bar.label);
                    });
                    row.col(|ui| {
                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                            ui.label(format!("{:.0}", bar.value));
                        });
                    });
                });
            }
        });
}

/// Show `chart` in a native window; returns when the window is closed.
pub fn show(chart: BarChart, window: &WindowOptions) -> Result<()> {
    logf!("Opening bar chart '{}' with {} bars", chart.title, chart.bars.len());
    super::run_window(window, MarketChartApp::new(chart))
}
