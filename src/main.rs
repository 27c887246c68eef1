// src/main.rs
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
mod config;
mod export;
mod gui;
mod signal;
mod types;
mod visualizer;
use eframe::egui;
// 入口函数
fn main() -> eframe::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();
    let config = config::AppConfig::from_env();
    log::info!(
        "starting with x={:?}@{} h={:?}@{} y_max={}",
        config.x.text,
        config.x.start,
        config.h.text,
        config.h.start,
        config.y_max.get()
    );
    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([1280.0, 900.0])
        .with_min_inner_size([900.0, 600.0])
        .with_title("SignalLab");
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    eframe::run_native(
        "SignalLab",
        options,
        Box::new(move |_cc| Box::new(gui::SignalLabApp::new(config))),
    )
}
