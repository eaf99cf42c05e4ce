//! Tunnelview - Pitch Tunneling Statistics Viewer
//!
//! Desktop dashboard over precomputed per-pitch tunneling metrics:
//! summary tables, kernel density comparisons and tunnel ellipse plots.

mod charts;
mod config;
mod data;
mod gui;
mod stats;

use eframe::egui;
use gui::TunnelApp;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([1100.0, 700.0])
            .with_title("Pitch Tunneling"),
        ..Default::default()
    };

    eframe::run_native(
        "Pitch Tunneling",
        options,
        Box::new(|cc| Ok(Box::new(TunnelApp::new(cc)))),
    )
}
