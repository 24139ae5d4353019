//! Plain-text coordinate lists.
//!
//! The first line holds `width height`; every following line holds the
//! `x y` of one live cell. Cells that are not listed are dead.

use std::{
    fmt::{self, Display},
    fs,
    path::Path,
    str::FromStr,
};

use log::debug;

use crate::{
    error::{ConwayError, Result},
    grid::Grid,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SaveFile {
    pub width: usize,
    pub height: usize,
    pub cells: Vec<(usize, usize)>,
}

impl SaveFile {
    pub fn from_grid(grid: &Grid) -> Self {
        Self {
            width: grid.width(),
            height: grid.height(),
            cells: grid.live_cells().collect(),
        }
    }

    /// Builds a grid of the configured size holding this file's cells.
    pub fn to_grid(&self, width: usize, height: usize) -> Result<Grid> {
        let mut grid = Grid::new(width, height)?;
        self.apply_to(&mut grid)?;
        Ok(grid)
    }

    /// Clears `grid` and sets every listed cell alive.
    ///
    /// Fails with `IncompatibleSaveFile` when the declared size exceeds the
    /// grid. On any failure the grid is left cleared.
    pub fn apply_to(&self, grid: &mut Grid) -> Result<()> {
        grid.clear();
        if self.width > grid.width() || self.height > grid.height() {
            return Err(ConwayError::IncompatibleSaveFile {
                file_width: self.width,
                file_height: self.height,
                width: grid.width(),
                height: grid.height(),
            });
        }
        for &(x, y) in &self.cells {
            if let Err(e) = grid.set(x, y, true) {
                grid.clear();
                return Err(e);
            }
        }
        Ok(())
    }
}

fn parse_pair(line: usize, text: &str) -> Result<(i64, i64)> {
    let mut fields = text.split_whitespace();
    let mut next = |what: &str| -> Result<i64> {
        let field = fields
            .next()
            .ok_or_else(|| ConwayError::parse(line, format!("missing {what}")))?;
        field
            .parse()
            .map_err(|_| ConwayError::parse(line, format!("{what} {field:?} is not an integer")))
    };
    let pair = (next("first value")?, next("second value")?);
    if let Some(extra) = fields.next() {
        return Err(ConwayError::parse(line, format!("unexpected {extra:?}")));
    }
    Ok(pair)
}

/// Non-blank lines with their 1-based line numbers.
fn content_lines(s: &str) -> impl Iterator<Item = (usize, &str)> {
    s.lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty())
}

impl SaveFile {
    /// Parses a save file destined for a `width x height` grid.
    ///
    /// The header is checked against the grid before any cell line is read,
    /// so an oversized file is always reported as `IncompatibleSaveFile`.
    pub fn parse_for(width: usize, height: usize, s: &str) -> Result<Self> {
        Self::parse(s, Some((width, height)))
    }

    fn parse(s: &str, limit: Option<(usize, usize)>) -> Result<Self> {
        let mut lines = content_lines(s);

        let (n, header) = lines
            .next()
            .ok_or_else(|| ConwayError::parse(1, "missing `width height` header"))?;
        let (width, height) = parse_pair(n, header)?;
        if width <= 0 || height <= 0 {
            return Err(ConwayError::InvalidDimension { width, height });
        }
        let (width, height) = (width as usize, height as usize);
        if let Some((grid_width, grid_height)) = limit {
            if width > grid_width || height > grid_height {
                return Err(ConwayError::IncompatibleSaveFile {
                    file_width: width,
                    file_height: height,
                    width: grid_width,
                    height: grid_height,
                });
            }
        }

        let mut cells = Vec::new();
        for (n, text) in lines {
            let (x, y) = parse_pair(n, text)?;
            if x < 0 || y < 0 || x as usize >= width || y as usize >= height {
                return Err(ConwayError::OutOfBounds {
                    x,
                    y,
                    width,
                    height,
                });
            }
            cells.push((x as usize, y as usize));
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }
}

impl FromStr for SaveFile {
    type Err = ConwayError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s, None)
    }
}

impl Display for SaveFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.width, self.height)?;
        for (x, y) in &self.cells {
            writeln!(f, "{x} {y}")?;
        }
        Ok(())
    }
}

/// Replaces the contents of `grid` with the cells listed in `text`.
///
/// The grid is cleared first and stays cleared if anything goes wrong.
pub fn load_into(grid: &mut Grid, text: &str) -> Result<()> {
    grid.clear();
    let file = SaveFile::parse_for(grid.width(), grid.height(), text)?;
    file.apply_to(grid)
}

pub fn load_from_path(grid: &mut Grid, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    grid.clear();
    let text = fs::read_to_string(path)?;
    load_into(grid, &text)?;
    debug!("loaded {} cells from {}", grid.population(), path.display());
    Ok(())
}

pub fn save_to_path(grid: &Grid, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = SaveFile::from_grid(grid);
    fs::write(path, file.to_string())?;
    debug!("saved {} cells to {}", file.cells.len(), path.display());
    Ok(())
}
