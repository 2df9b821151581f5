// src/main.rs
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
mod gui;
use anyhow::{anyhow, Context, Result};
use eframe::egui;
use ecg_strip::StripConfig;
// Usage: ecg-strip [config.json]
fn main() -> Result<()> {
    env_logger::init();
    let config = match std::env::args().nth(1) {
        Some(path) => StripConfig::load(&path)
            .with_context(|| format!("failed to load strip config from {path}"))?,
        None => StripConfig::default(),
    };
    log::info!(
        "starting viewer: {}x{} px, {} Hz, refresh {} Hz",
        config.width,
        config.height,
        config.sampling_rate,
        config.refresh_hz
    );
    let app = gui::EcgStripApp::new(config.clone()).context("failed to build strip")?;
    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([config.width as f32 + 300.0, config.height as f32 + 40.0])
        .with_min_inner_size([config.width as f32 + 280.0, config.height as f32])
        .with_title("ECG strip");
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    eframe::run_native("ecg-strip", options, Box::new(move |_cc| Box::new(app)))
        .map_err(|err| anyhow!("viewer exited with error: {err}"))
}
