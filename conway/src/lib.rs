//! Conway's Game of Life on a fixed-size torus.
//!
//! [`Grid`] holds the cells, [`step`] and [`Simulation`] compute generations,
//! [`coro::step_rows`] does the same with one tokio task per row, and
//! [`save_file`] reads and writes coordinate lists.

pub mod coro;
mod error;
mod grid;
mod history;
pub mod patterns;
pub mod save_file;
mod step;


pub use crate::{
    error::{ConwayError, Result},
    grid::Grid,
    history::CycleDetector,
    save_file::SaveFile,
    step::{live_neighbors, next_state, step, step_into, Simulation},
};
