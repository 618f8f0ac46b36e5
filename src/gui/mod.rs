// src/gui/mod.rs
pub mod market_chart;
pub mod plot;
pub mod signal_chart;

mod icon;

use eframe::egui::ViewportBuilder;

use crate::config::options::WindowOptions;
use crate::error::{Error, Result};

/// Open a native window running `app`; blocks until the window closes.
pub fn run_window<A: eframe::App + 'static>(window: &WindowOptions, app: A) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title(&window.title)
            .with_inner_size([window.width, window.height])
            .with_icon(icon::app_icon()),
        ..Default::default()
    };

    eframe::run_native(
        &window.title,
        options,
        Box::new(move |_cc| Ok(Box::new(app) as Box<dyn eframe::App>)),
    )
    .map_err(|e| {
        loge!("Window '{}' failed: {e}", window.title);
        Error::Render(e.to_string())
    })
}
