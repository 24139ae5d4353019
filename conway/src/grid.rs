// grid.rs - Toroidal boolean grid for Conway's Game of Life

use std::{
    fmt::{self, Display, Write},
    str::FromStr,
};

use crate::error::{ConwayError, Result};

/// A dense `width x height` matrix of cells, stored row-major.
///
/// Dimensions are chosen at construction and never change afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Creates an all-dead grid.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let len = width.checked_mul(height).filter(|&len| len > 0);
        let Some(len) = len else {
            return Err(ConwayError::InvalidDimension {
                width: i64::try_from(width).unwrap_or(i64::MAX),
                height: i64::try_from(height).unwrap_or(i64::MAX),
            });
        };
        Ok(Self {
            width,
            height,
            cells: vec![false; len],
        })
    }

    /// Builds a grid from rows of cells; `rows[y][x]` is cell `(x, y)`.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 || height == 0 {
            return Err(ConwayError::InvalidGrid(format!(
                "{height} rows of {width} cells"
            )));
        }
        if let Some((y, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != width) {
            return Err(ConwayError::InvalidGrid(format!(
                "row {y} has {} cells, expected {width}",
                row.len()
            )));
        }
        Ok(Self {
            width,
            height,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    pub fn get(&self, x: usize, y: usize) -> Result<bool> {
        let i = self.index(x, y)?;
        Ok(self.cells[i])
    }

    pub fn set(&mut self, x: usize, y: usize, alive: bool) -> Result<()> {
        let i = self.index(x, y)?;
        self.cells[i] = alive;
        Ok(())
    }

    /// Flips one cell and returns its new state.
    pub fn toggle(&mut self, x: usize, y: usize) -> Result<bool> {
        let i = self.index(x, y)?;
        self.cells[i] = !self.cells[i];
        Ok(self.cells[i])
    }

    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    pub fn is_empty(&self) -> bool {
        !self.cells.contains(&true)
    }

    /// Live cells as `(x, y)` in row-major order.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, alive)| **alive)
            .map(move |(i, _)| (i % width, i / width))
    }

    pub fn same_shape(&self, other: &Grid) -> bool {
        self.width == other.width && self.height == other.height
    }

    /// Unchecked read for in-bounds coordinates produced by the step engines.
    pub(crate) fn cell(&self, x: usize, y: usize) -> bool {
        self.cells[y * self.width + x]
    }

    pub(crate) fn row_mut(&mut self, y: usize) -> &mut [bool] {
        let start = y * self.width;
        &mut self.cells[start..start + self.width]
    }

    fn index(&self, x: usize, y: usize) -> Result<usize> {
        if !self.contains(x, y) {
            return Err(ConwayError::OutOfBounds {
                x: x as i64,
                y: y as i64,
                width: self.width,
                height: self.height,
            });
        }
        Ok(y * self.width + x)
    }
}

/// Parses `o` as live and `.` or space as dead, one line per row.
///
/// Short lines are padded with dead cells up to the longest line.
impl FromStr for Grid {
    type Err = ConwayError;

    fn from_str(s: &str) -> Result<Self> {
        let mut rows = Vec::new();
        for (n, line) in s.lines().map(str::trim_end).enumerate() {
            if rows.is_empty() && line.trim().is_empty() {
                continue;
            }
            let row = line
                .chars()
                .map(|c| match c {
                    'o' => Ok(true),
                    '.' | ' ' => Ok(false),
                    _ => Err(ConwayError::parse(n + 1, format!("unexpected character {c:?}"))),
                })
                .collect::<Result<Vec<_>>>()?;
            rows.push(row);
        }
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut rows {
            row.resize(width, false);
        }
        Grid::from_rows(rows)
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width) {
            for &alive in row {
                f.write_char(if alive { 'o' } else { '.' })?;
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_dead() {
        let grid = Grid::new(4, 3).unwrap();
        assert_eq!((grid.width(), grid.height()), (4, 3));
        assert!(grid.is_empty());
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_zero_dimension() {
        for (w, h) in [(0, 5), (5, 0), (0, 0)] {
            assert!(matches!(
                Grid::new(w, h),
                Err(ConwayError::InvalidDimension { .. })
            ));
        }
    }

    #[test]
    fn test_overflowing_dimensions() {
        assert!(matches!(
            Grid::new(1 << 33, 1 << 31),
            Err(ConwayError::InvalidDimension { .. })
        ));
        assert!(matches!(
            Grid::new(usize::MAX, 2),
            Err(ConwayError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_get_set_bounds() {
        let mut grid = Grid::new(3, 2).unwrap();
        grid.set(2, 1, true).unwrap();
        assert!(grid.get(2, 1).unwrap());
        assert!(!grid.get(1, 1).unwrap());
        assert!(matches!(grid.get(3, 0), Err(ConwayError::OutOfBounds { x: 3, y: 0, .. })));
        assert!(matches!(grid.get(0, 2), Err(ConwayError::OutOfBounds { .. })));
        assert!(matches!(grid.set(5, 5, true), Err(ConwayError::OutOfBounds { .. })));
        assert_eq!(grid.population(), 1);
    }

    #[test]
    fn test_toggle_and_clear() {
        let mut grid = Grid::new(2, 2).unwrap();
        assert!(grid.toggle(1, 0).unwrap());
        assert!(grid.toggle(0, 1).unwrap());
        assert!(!grid.toggle(1, 0).unwrap());
        assert_eq!(grid.live_cells().collect::<Vec<_>>(), vec![(0, 1)]);
        grid.clear();
        assert!(grid.is_empty());
    }

    #[test]
    fn test_from_rows_ragged() {
        let rows = vec![vec![true, false], vec![false]];
        assert!(matches!(Grid::from_rows(rows), Err(ConwayError::InvalidGrid(_))));
        assert!(matches!(Grid::from_rows(vec![]), Err(ConwayError::InvalidGrid(_))));
        assert!(matches!(Grid::from_rows(vec![vec![]]), Err(ConwayError::InvalidGrid(_))));
    }

    #[test]
    fn test_parse_and_display() {
        let grid: Grid = "
            .o.
            ..o
            ooo"
        .replace(' ', "")
        .parse()
        .unwrap();
        assert_eq!((grid.width(), grid.height()), (3, 3));
        assert_eq!(
            grid.live_cells().collect::<Vec<_>>(),
            vec![(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)]
        );
        assert_eq!(grid.to_string(), ".o.\n..o\nooo\n");
    }

    #[test]
    fn test_parse_pads_short_lines() {
        let grid: Grid = "o\n..o".parse().unwrap();
        assert_eq!((grid.width(), grid.height()), (3, 2));
        assert_eq!(grid.to_string(), "o..\n..o\n");
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!(matches!(
            "o.x".parse::<Grid>(),
            Err(ConwayError::Parse { line: 1, .. })
        ));
    }
}
