// main.rs - Conway's Game of Life editor on a wraparound grid

use clap::Parser;
use eframe::egui;
use log::{info, warn};

mod app;
mod config;
mod layout;
mod palette;
mod ticker;
mod ui;

use app::GameOfLife;
use config::Config;

// Room for the toolbar rows and the status bar around the board.
const CHROME_WIDTH: f32 = 16.0;
const CHROME_HEIGHT: f32 = 110.0;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::parse();
    let mut app = GameOfLife::new(&config)?;
    if let Some(path) = &config.load {
        if !app.open(path) {
            warn!("starting with an empty grid");
        }
    }

    let (width, height) = config.grid_size();
    info!(
        "{width}x{height} grid, {} ms per generation, {} engine",
        config.interval_ms, config.engine
    );

    let board = app.layout.size();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Conway's Game of Life")
            .with_inner_size([board.x + CHROME_WIDTH, board.y + CHROME_HEIGHT])
            .with_min_inner_size([480.0, 240.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(|_cc| Box::new(app)),
    )?;
    Ok(())
}
