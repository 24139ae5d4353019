use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::grid::Grid;

const HISTORY_LEN: usize = 10;

/// Remembers the hashes of the last few generations to spot repeats.
#[derive(Clone, Debug, Default)]
pub struct CycleDetector {
    history: [u64; HISTORY_LEN],
    count: usize,
}

fn hash_grid(grid: &Grid) -> u64 {
    let mut hasher = DefaultHasher::new();
    grid.hash(&mut hasher);
    hasher.finish()
}

impl CycleDetector {
    /// Records `grid` and reports whether it matches one of the last ten
    /// recorded generations.
    pub fn check(&mut self, grid: &Grid) -> bool {
        let hash = hash_grid(grid);
        let seen = self.history[..self.count.min(HISTORY_LEN)].contains(&hash);
        self.history[self.count % HISTORY_LEN] = hash;
        self.count += 1;
        seen
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{patterns, step::step};

    #[test]
    fn test_still_life_repeats_immediately() {
        let block: Grid = "....\n.oo.\n.oo.\n....".parse().unwrap();
        let mut detector = CycleDetector::default();
        assert!(!detector.check(&block));
        assert!(detector.check(&step(&block).unwrap()));
    }

    #[test]
    fn test_blinker_repeats_after_two() {
        let mut grid = Grid::new(6, 6).unwrap();
        patterns::find("Blinker").unwrap().apply_centered(&mut grid);
        let mut detector = CycleDetector::default();
        assert!(!detector.check(&grid));
        grid = step(&grid).unwrap();
        assert!(!detector.check(&grid));
        grid = step(&grid).unwrap();
        assert!(detector.check(&grid));
    }

    #[test]
    fn test_forgets_old_generations() {
        // A glider on a 20x20 torus takes 80 generations to come back.
        let mut grid = Grid::new(20, 20).unwrap();
        patterns::find("Glider").unwrap().stamp(&mut grid, 0, 0);
        let mut detector = CycleDetector::default();
        for _ in 0..79 {
            assert!(!detector.check(&grid));
            grid = step(&grid).unwrap();
        }
        detector.reset();
        assert!(!detector.check(&grid));
    }

    #[test]
    fn test_empty_grid_is_not_a_fresh_repeat() {
        // An all-zero history must not match before anything is recorded.
        let grid = Grid::new(3, 3).unwrap();
        let mut detector = CycleDetector::default();
        assert!(!detector.check(&grid));
    }
}
