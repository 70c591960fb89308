use crate::geometry::{Cell, Grid};
use crate::snake::Snake;
use rand::Rng;

/// Picks a uniformly random grid cell that the snake does not occupy.
///
/// Rejection sampling: draws over every cell of the grid and retries on a hit.
/// Loops forever if the snake fills the whole grid.
pub fn place_apple<R: Rng + ?Sized>(grid: &Grid, snake: &Snake, rng: &mut R) -> Cell {
    loop {
        let column = rng.gen_range(0..grid.columns());
        let row = rng.gen_range(0..grid.rows());
        let p = grid.cell_at(column, row);
        if !snake.contains(p) {
            log::debug!("apple placed at ({}, {})", p.x, p.y);
            return p;
        }
    }
}
