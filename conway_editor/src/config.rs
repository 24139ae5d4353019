use std::{fmt, path::PathBuf, time::Duration};

use clap::{Parser, ValueEnum};

const DEFAULT_WIDTH: u32 = 40;
const DEFAULT_HEIGHT: u32 = 30;
const DEFAULT_CELL_SIZE: u32 = 20;
const DEFAULT_INTERVAL_MS: u64 = 200;

/// Which step engine computes generations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Engine {
    /// Single pass over the grid on the UI thread.
    Serial,
    /// One tokio task per row, joined before the frame continues.
    Coroutine,
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Engine::Serial => "serial",
            Engine::Coroutine => "coroutine",
        })
    }
}

/// Interactive Conway's Game of Life on a wraparound grid.
#[derive(Clone, Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Number of grid columns.
    #[arg(long, value_name = "CELLS", default_value_t = DEFAULT_WIDTH,
          value_parser = clap::value_parser!(u32).range(1..=4096))]
    pub width: u32,
    /// Number of grid rows.
    #[arg(long, value_name = "CELLS", default_value_t = DEFAULT_HEIGHT,
          value_parser = clap::value_parser!(u32).range(1..=4096))]
    pub height: u32,
    /// Edge length of one cell on screen.
    #[arg(long = "cell-size", value_name = "PIXELS", default_value_t = DEFAULT_CELL_SIZE,
          value_parser = clap::value_parser!(u32).range(2..=200))]
    pub cell_size: u32,
    /// Milliseconds between generations while running.
    #[arg(long = "interval-ms", value_name = "MILLISECONDS", default_value_t = DEFAULT_INTERVAL_MS,
          value_parser = clap::value_parser!(u64).range(1..=60_000))]
    pub interval_ms: u64,
    /// Step engine used while running.
    #[arg(long, value_enum, default_value_t = Engine::Serial)]
    pub engine: Engine,
    /// Coordinate-list file to open at startup.
    #[arg(long, value_name = "FILE")]
    pub load: Option<PathBuf>,
}

impl Config {
    pub fn grid_size(&self) -> (usize, usize) {
        (self.width as usize, self.height as usize)
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}
