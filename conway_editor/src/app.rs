// app.rs - Editor state: the grid, the run/pause mode and the file actions

use std::{
    path::Path,
    sync::Arc,
    time::{Duration, Instant},
};

use conway::{CycleDetector, Grid, Simulation, coro, patterns, save_file};
use log::{debug, error, info, warn};

use crate::{
    config::{Config, Engine},
    layout::Layout,
    palette::Rgb,
    ticker::Ticker,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PromptKind {
    Save,
    Open,
}

impl PromptKind {
    pub fn title(self) -> &'static str {
        match self {
            PromptKind::Save => "Save grid",
            PromptKind::Open => "Open grid",
        }
    }
}

/// A pending filename prompt.
#[derive(Clone, Debug)]
pub struct FilePrompt {
    pub kind: PromptKind,
    pub filename: String,
    pub focused: bool,
}

pub struct GameOfLife {
    sim: Simulation,
    engine: Engine,
    runtime: Option<tokio::runtime::Runtime>,
    ticker: Ticker,
    cycles: CycleDetector,
    random_seed: u64,

    pub is_running: bool,
    pub layout: Layout,
    pub live_color: Rgb,
    pub dead_color: Rgb,
    pub grid_color: Rgb,
    pub selected_pattern: usize,
    pub prompt: Option<FilePrompt>,
    pub status: String,
}

impl GameOfLife {
    pub fn new(config: &Config) -> conway::Result<Self> {
        let (width, height) = config.grid_size();
        let runtime = match config.engine {
            Engine::Serial => None,
            Engine::Coroutine => Some(tokio::runtime::Runtime::new()?),
        };
        Ok(Self {
            sim: Simulation::new(width, height)?,
            engine: config.engine,
            runtime,
            ticker: Ticker::new(config.interval(), Instant::now()),
            cycles: CycleDetector::default(),
            random_seed: 0,
            is_running: false,
            layout: Layout::new(config.cell_size as f32, width, height),
            live_color: Rgb::BLACK,
            dead_color: Rgb::WHITE,
            grid_color: Rgb::GRID,
            selected_pattern: 0,
            prompt: None,
            status: String::new(),
        })
    }

    pub fn grid(&self) -> &Grid {
        self.sim.grid()
    }

    pub fn generation(&self) -> u64 {
        self.sim.generation()
    }

    pub fn engine(&self) -> Engine {
        self.engine
    }

    pub fn interval(&self) -> Duration {
        self.ticker.interval()
    }

    pub fn set_interval(&mut self, interval: Duration) {
        self.ticker.set_interval(interval);
    }

    pub fn toggle_running(&mut self, now: Instant) {
        self.is_running = !self.is_running;
        if self.is_running {
            self.prompt = None;
            self.ticker.restart(now);
            self.cycles.reset();
            info!("running from generation {}", self.generation());
        } else {
            info!("paused at generation {}", self.generation());
        }
    }

    /// Sets one cell alive or dead. Works in both modes; the edit lands
    /// between generations because steps and edits share the UI thread.
    pub fn paint(&mut self, x: usize, y: usize, alive: bool) -> bool {
        match self.sim.grid_mut().set(x, y, alive) {
            Ok(()) => true,
            Err(e) => {
                debug!("paint ignored: {e}");
                false
            }
        }
    }

    pub fn clear(&mut self) -> bool {
        if self.is_running {
            return false;
        }
        self.sim.grid_mut().clear();
        self.restart_history();
        true
    }

    pub fn randomize(&mut self) -> bool {
        if self.is_running {
            return false;
        }
        self.random_seed = self.random_seed.wrapping_add(1);
        patterns::random_fill(self.sim.grid_mut(), self.random_seed);
        self.restart_history();
        true
    }

    pub fn apply_selected_pattern(&mut self) -> bool {
        if self.is_running {
            return false;
        }
        let Some(pattern) = patterns::PATTERNS.get(self.selected_pattern) else {
            return false;
        };
        pattern.apply_centered(self.sim.grid_mut());
        self.restart_history();
        self.status = format!("placed {}", pattern.name);
        true
    }

    /// Runs a single generation while paused.
    pub fn step_once(&mut self) -> bool {
        if self.is_running {
            return false;
        }
        self.advance()
    }

    /// Advances one generation if running and the interval has elapsed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.is_running || !self.ticker.poll(now) {
            return false;
        }
        if !self.advance() {
            return false;
        }
        if self.cycles.check(self.sim.grid()) {
            self.is_running = false;
            self.status = format!("pattern repeats, paused at generation {}", self.generation());
            info!("{}", self.status);
        }
        true
    }

    /// Time left before the next generation is due, if running.
    pub fn until_next_tick(&self, now: Instant) -> Option<Duration> {
        self.is_running.then(|| self.ticker.until_next(now))
    }

    pub fn begin_prompt(&mut self, kind: PromptKind) -> bool {
        if self.is_running {
            return false;
        }
        self.prompt = Some(FilePrompt {
            kind,
            filename: String::new(),
            focused: false,
        });
        true
    }

    pub fn confirm_prompt(&mut self) {
        let Some(prompt) = self.prompt.take() else {
            return;
        };
        let filename = prompt.filename.trim();
        if filename.is_empty() {
            self.status = "no file name given".to_owned();
            return;
        }
        match prompt.kind {
            PromptKind::Save => self.save(filename),
            PromptKind::Open => self.open(filename),
        };
    }

    pub fn save(&mut self, path: impl AsRef<Path>) -> bool {
        if self.is_running {
            return false;
        }
        let path = path.as_ref();
        match save_file::save_to_path(self.sim.grid(), path) {
            Ok(()) => {
                self.status = format!("saved {}", path.display());
                info!("{}", self.status);
                true
            }
            Err(e) => {
                self.status = format!("could not save {}: {e}", path.display());
                warn!("{}", self.status);
                false
            }
        }
    }

    /// Clears the grid and loads a coordinate list into it. On failure the
    /// grid stays cleared.
    pub fn open(&mut self, path: impl AsRef<Path>) -> bool {
        if self.is_running {
            return false;
        }
        let path = path.as_ref();
        let result = save_file::load_from_path(self.sim.grid_mut(), path);
        self.restart_history();
        match result {
            Ok(()) => {
                self.status = format!("opened {}", path.display());
                info!("{} ({} cells)", self.status, self.sim.grid().population());
                true
            }
            Err(e) => {
                self.status = format!("could not open {}: {e}", path.display());
                warn!("{}", self.status);
                false
            }
        }
    }

    fn restart_history(&mut self) {
        self.sim.reset_generation();
        self.cycles.reset();
    }

    fn advance(&mut self) -> bool {
        let result = match (&self.runtime, self.engine) {
            (Some(runtime), Engine::Coroutine) => {
                let snapshot = Arc::new(self.sim.grid().clone());
                runtime
                    .block_on(coro::step_rows(snapshot))
                    .and_then(|next| self.sim.replace(next))
            }
            _ => self.sim.advance(),
        };
        if let Err(e) = result {
            self.is_running = false;
            self.status = format!("step failed: {e}");
            error!("{}", self.status);
            return false;
        }
        true
    }
}
