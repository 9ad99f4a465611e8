use rand::prelude::*;

use crate::*;

pub trait FoodPlacer {
    /// Picks a cell of `grid` that `snake` does not occupy.
    fn place(&mut self, grid: Grid, snake: &Snake) -> Result<Cell>;
}

/// Uniform placement by rejection sampling over the whole grid.
#[derive(Clone, Debug)]
pub struct RandomFoodPlacer {
    rng: SmallRng,
}

impl RandomFoodPlacer {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl FoodPlacer for RandomFoodPlacer {
    fn place(&mut self, grid: Grid, snake: &Snake) -> Result<Cell> {
        // a full board would make the sampling below spin forever
        if snake.len() >= grid.total_cells() && grid.cells().all(|cell| snake.occupies(cell)) {
            log::warn!("No free cell left for food, snake length {}", snake.len());
            return Err(GameError::NoFreeCell);
        }

        loop {
            let candidate = Cell::new(
                self.rng.random_range(0..grid.cols),
                self.rng.random_range(0..grid.rows),
            );
            if !snake.occupies(candidate) {
                return Ok(candidate);
            }
        }
    }
}
