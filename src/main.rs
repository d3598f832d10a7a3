// src/main.rs
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
mod chart;
mod config;
mod context;
mod controller;
mod drivers;
mod gui;
mod scheduler;
mod types;
use std::path::Path;
use anyhow::Context as _;
use eframe::egui;
use log::info;
use crate::config::{AppConfig, DEFAULT_CONFIG_FILE};
use crate::context::AppContext;
use crate::scheduler::FixedIntervalScheduler;
fn main() -> anyhow::Result<()> {
    env_logger::init();
    let config = AppConfig::load_or_default(Path::new(DEFAULT_CONFIG_FILE))
        .with_context(|| format!("failed to load {DEFAULT_CONFIG_FILE}"))?;
    let app_ctx = AppContext::new(config.clone()).context("failed to build chart")?;
    let scheduler = FixedIntervalScheduler::new(config.tick_interval());
    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([config.window.width, config.window.height])
        .with_title(config.window.title.clone());
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    info!("opening window \"{}\"", config.window.title);
    eframe::run_native(
        &config.window.title,
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            Box::new(gui::ChartApp::new(app_ctx, Box::new(scheduler)))
        }),
    )
    .map_err(|err| anyhow::anyhow!("window loop failed: {err}"))?;
    info!("window closed");
    Ok(())
}
