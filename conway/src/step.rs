// step.rs - One generation of B3/S23 on a torus

use log::debug;

use crate::{
    error::{ConwayError, Result},
    grid::Grid,
};

/// Moore neighborhood offsets as `(dx, dy)`.
#[rustfmt::skip]
const NEIGHBORS: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

/// Wraps `v + delta` into `0..len`.
fn wrap(v: usize, delta: isize, len: usize) -> usize {
    (v as isize + delta).rem_euclid(len as isize) as usize
}

/// Counts live neighbors of `(x, y)` with wraparound at every edge.
///
/// On grids narrower than three cells the same neighbor is counted more
/// than once; a 1x1 grid sees its only cell eight times.
pub fn live_neighbors(grid: &Grid, x: usize, y: usize) -> u8 {
    let (width, height) = (grid.width(), grid.height());
    NEIGHBORS
        .iter()
        .filter(|&&(dx, dy)| grid.cell(wrap(x, dx, width), wrap(y, dy, height)))
        .count() as u8
}

/// The next state of a single cell.
pub fn next_state(alive: bool, live_neighbors: u8) -> bool {
    match (live_neighbors, alive) {
        (3, _) => true,     // Birth, or survival at three
        (2, true) => true,  // Survival at two
        _ => false,         // Death or stays dead
    }
}

pub(crate) fn next_row(current: &Grid, y: usize, row: &mut [bool]) {
    for (x, cell) in row.iter_mut().enumerate() {
        *cell = next_state(current.cell(x, y), live_neighbors(current, x, y));
    }
}

/// Writes the generation after `current` into `next`.
///
/// `next` is zeroed first and must have the same shape as `current`. Only
/// `current` is read while computing, so `next` never leaks into the result.
pub fn step_into(current: &Grid, next: &mut Grid) -> Result<()> {
    if !current.same_shape(next) {
        return Err(ConwayError::InvalidGrid(format!(
            "scratch buffer is {}x{}, grid is {}x{}",
            next.width(),
            next.height(),
            current.width(),
            current.height()
        )));
    }
    next.clear();
    for y in 0..current.height() {
        next_row(current, y, next.row_mut(y));
    }
    Ok(())
}

/// Returns the generation after `current`.
pub fn step(current: &Grid) -> Result<Grid> {
    let mut next = Grid::new(current.width(), current.height())?;
    step_into(current, &mut next)?;
    Ok(next)
}

/// Double-buffered simulation: `current` is authoritative, `next` is scratch.
#[derive(Clone, Debug)]
pub struct Simulation {
    current: Grid,
    next: Grid,
    generation: u64,
}

impl Simulation {
    pub fn new(width: usize, height: usize) -> Result<Self> {
        Ok(Self {
            current: Grid::new(width, height)?,
            next: Grid::new(width, height)?,
            generation: 0,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.current
    }

    /// Mutable access for edits. Resets nothing; callers decide whether an
    /// edit restarts the generation count.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.current
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn reset_generation(&mut self) {
        self.generation = 0;
    }

    /// Computes one generation and swaps buffers.
    pub fn advance(&mut self) -> Result<()> {
        step_into(&self.current, &mut self.next)?;
        std::mem::swap(&mut self.current, &mut self.next);
        self.generation += 1;
        debug!(
            "generation {} population {}",
            self.generation,
            self.current.population()
        );
        Ok(())
    }

    /// Installs a grid computed elsewhere as the next generation.
    pub fn replace(&mut self, next: Grid) -> Result<()> {
        if !next.same_shape(&self.current) {
            return Err(ConwayError::InvalidGrid(format!(
                "replacement is {}x{}, grid is {}x{}",
                next.width(),
                next.height(),
                self.current.width(),
                self.current.height()
            )));
        }
        self.next = std::mem::replace(&mut self.current, next);
        self.generation += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(s: &str) -> Grid {
        s.replace(' ', "").parse().unwrap()
    }

    /// 5x5 grid with cell (2, 2) set to `alive` and `n` of its neighbors alive.
    fn with_neighbors(alive: bool, n: usize) -> Grid {
        let mut g = Grid::new(5, 5).unwrap();
        g.set(2, 2, alive).unwrap();
        for &(dx, dy) in NEIGHBORS.iter().take(n) {
            g.set(wrap(2, dx, 5), wrap(2, dy, 5), true).unwrap();
        }
        g
    }

    #[test]
    fn test_rule_table() {
        for n in 0..=8u8 {
            assert_eq!(next_state(true, n), n == 2 || n == 3, "alive with {n}");
            assert_eq!(next_state(false, n), n == 3, "dead with {n}");
        }
    }

    #[test]
    fn test_dead_stays_dead() {
        for (w, h) in [(1, 1), (2, 3), (7, 4), (40, 30)] {
            let g = Grid::new(w, h).unwrap();
            assert!(step(&g).unwrap().is_empty());
        }
    }

    #[test]
    fn test_survival_and_death_by_count() {
        for n in 0..=8 {
            let next = step(&with_neighbors(true, n)).unwrap();
            assert_eq!(next.get(2, 2).unwrap(), n == 2 || n == 3, "{n} neighbors");
        }
    }

    #[test]
    fn test_birth_by_count() {
        for n in 0..=8 {
            let next = step(&with_neighbors(false, n)).unwrap();
            assert_eq!(next.get(2, 2).unwrap(), n == 3, "{n} neighbors");
        }
    }

    #[test]
    fn test_corner_wraps() {
        let mut g = Grid::new(3, 3).unwrap();
        for (x, y) in [(2, 2), (2, 0), (0, 2)] {
            g.set(x, y, true).unwrap();
        }
        assert_eq!(live_neighbors(&g, 0, 0), 3);
        // Every cell on a 3x3 torus neighbors every other cell.
        assert_eq!(live_neighbors(&g, 1, 1), 3);
        assert_eq!(live_neighbors(&g, 2, 2), 2);
    }

    #[test]
    fn test_edge_birth_across_border() {
        let g = grid(
            "
            .....
            .....
            o....
            o....
            o....",
        );
        let next = step(&g).unwrap();
        // The vertical blinker on column 0 turns horizontal, wrapping to column 4.
        assert_eq!(next.live_cells().collect::<Vec<_>>(), vec![(0, 3), (1, 3), (4, 3)]);
    }

    #[test]
    fn test_single_cell_torus() {
        let mut g = Grid::new(1, 1).unwrap();
        assert_eq!(live_neighbors(&g, 0, 0), 0);
        assert!(!step(&g).unwrap().get(0, 0).unwrap());
        g.set(0, 0, true).unwrap();
        assert_eq!(live_neighbors(&g, 0, 0), 8);
        assert!(!step(&g).unwrap().get(0, 0).unwrap());
    }

    #[test]
    fn test_block_still_life() {
        let g = grid(
            "
            ......
            ..oo..
            ..oo..
            ......",
        );
        assert_eq!(step(&g).unwrap(), g);
    }

    #[test]
    fn test_blinker() {
        let horizontal = grid(
            "
            .....
            .....
            .ooo.
            .....
            .....",
        );
        let vertical = grid(
            "
            .....
            ..o..
            ..o..
            ..o..
            .....",
        );
        let once = step(&horizontal).unwrap();
        assert_eq!(once, vertical);
        assert_eq!(step(&once).unwrap(), horizontal);
    }

    #[test]
    fn test_step_into_shape_mismatch() {
        let g = Grid::new(4, 4).unwrap();
        let mut scratch = Grid::new(4, 5).unwrap();
        assert!(matches!(step_into(&g, &mut scratch), Err(ConwayError::InvalidGrid(_))));
    }

    #[test]
    fn test_step_into_ignores_stale_scratch() {
        let g = Grid::new(4, 4).unwrap();
        let mut scratch = grid("oooo\noooo\noooo\noooo");
        step_into(&g, &mut scratch).unwrap();
        assert!(scratch.is_empty());
    }

    #[test]
    fn test_simulation_swaps_buffers() {
        let mut sim = Simulation::new(5, 5).unwrap();
        for x in 1..4 {
            sim.grid_mut().set(x, 2, true).unwrap();
        }
        let start = sim.grid().clone();
        sim.advance().unwrap();
        assert_eq!(sim.generation(), 1);
        assert_ne!(sim.grid(), &start);
        sim.advance().unwrap();
        assert_eq!(sim.generation(), 2);
        assert_eq!(sim.grid(), &start);
        sim.reset_generation();
        assert_eq!(sim.generation(), 0);
    }

    #[test]
    fn test_simulation_replace() {
        let mut sim = Simulation::new(3, 3).unwrap();
        let next = grid("o..\n...\n...");
        sim.replace(next.clone()).unwrap();
        assert_eq!(sim.grid(), &next);
        assert_eq!(sim.generation(), 1);
        assert!(matches!(
            sim.replace(Grid::new(2, 2).unwrap()),
            Err(ConwayError::InvalidGrid(_))
        ));
    }
}
