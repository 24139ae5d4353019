// coro.rs - Generation step with one cooperative task per row

use std::sync::Arc;

use crate::{error::Result, grid::Grid, step::next_row};

/// Row coroutine: computes row `y` of the next generation from the shared snapshot.
async fn process_row(y: usize, current: Arc<Grid>) -> (usize, Vec<bool>) {
    let mut row = vec![false; current.width()];
    next_row(&current, y, &mut row);
    tokio::task::yield_now().await;
    (y, row)
}

/// Computes the next generation by spawning a task per row.
///
/// Every task reads the same immutable snapshot, so rows never observe each
/// other's output. Must run inside a tokio runtime.
pub async fn step_rows(current: Arc<Grid>) -> Result<Grid> {
    let mut next = Grid::new(current.width(), current.height())?;

    let handles: Vec<_> = (0..current.height())
        .map(|y| tokio::spawn(process_row(y, Arc::clone(&current))))
        .collect();

    for handle in handles {
        let (y, row) = handle.await?;
        next.row_mut(y).copy_from_slice(&row);
    }
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{patterns, step::step};

    #[tokio::test]
    async fn test_matches_serial_on_patterns() {
        for pattern in patterns::PATTERNS {
            let mut grid = Grid::new(40, 30).unwrap();
            pattern.apply_centered(&mut grid);
            let mut serial = grid.clone();
            let mut coro = Arc::new(grid);
            for _ in 0..8 {
                serial = step(&serial).unwrap();
                coro = Arc::new(step_rows(coro).await.unwrap());
                assert_eq!(*coro, serial, "{}", pattern.name);
            }
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_matches_serial_on_random_grids() {
        for seed in 0..6 {
            let mut grid = Grid::new(17, 11).unwrap();
            patterns::random_fill(&mut grid, seed);
            let expected = step(&grid).unwrap();
            assert_eq!(step_rows(Arc::new(grid)).await.unwrap(), expected);
        }
    }

    #[tokio::test]
    async fn test_single_cell() {
        let mut grid = Grid::new(1, 1).unwrap();
        grid.set(0, 0, true).unwrap();
        assert!(step_rows(Arc::new(grid)).await.unwrap().is_empty());
    }
}
