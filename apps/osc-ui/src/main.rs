#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod canvas;
mod config;
mod error;
mod input;
mod logging;
mod pacing;
mod symbols;
mod views;

use app::OscillatorApp;
use clap::Parser;
use config::{Args, UiConfig};
use error::UiResult;

fn main() -> UiResult<()> {
    logging::init();

    let config = UiConfig::try_from(Args::parse())?;
    tracing::info!(?config, "starting");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.width, config.height])
            .with_title("Oscillators"),
        ..Default::default()
    };

    eframe::run_native(
        "Oscillators",
        options,
        Box::new(move |cc| Ok(Box::new(OscillatorApp::new(cc, config)))),
    )?;
    Ok(())
}
