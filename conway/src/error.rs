//! Error taxonomy shared by the grid, the step engines and the save files.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConwayError {
    /// A grid needs at least one column and one row.
    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimension { width: i64, height: i64 },

    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: i64,
        y: i64,
        width: usize,
        height: usize,
    },

    /// Ragged rows, or a scratch buffer whose shape differs from the source grid.
    #[error("invalid grid: {0}")]
    InvalidGrid(String),

    #[error("save file is {file_width}x{file_height} but the grid is only {width}x{height}")]
    IncompatibleSaveFile {
        file_width: usize,
        file_height: usize,
        width: usize,
        height: usize,
    },

    #[error("save file line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("row task failed: {0}")]
    RowTask(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, ConwayError>;

impl ConwayError {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}
