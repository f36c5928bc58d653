use std::collections::HashSet;

use rand::rngs::ThreadRng;
use rand::Rng;
use thiserror::Error;

use super::body::Cell;

/// Rejection draws attempted before falling back to enumerating free cells
const MAX_REJECTION_DRAWS: u32 = 64;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpawnError {
    /// Every cell of the grid is occupied by the snake
    #[error("no free cell left on a {grid_size}x{grid_size} grid")]
    GridFull { grid_size: usize },
}

/// Places food on random free cells
///
/// Effectively a pure function of (occupied set, grid size, randomness);
/// the returned cell is a fresh value and the caller stores it.
pub struct FoodSpawner {
    rng: ThreadRng,
}

impl FoodSpawner {
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }

    /// Pick a uniformly random cell not in `occupied`
    pub fn spawn(
        &mut self,
        occupied: &HashSet<Cell>,
        grid_size: usize,
    ) -> Result<Cell, SpawnError> {
        spawn_with(&mut self.rng, occupied, grid_size)
    }
}

/// Spawn core, generic over the RNG so tests can seed it
///
/// Rejection sampling terminates quickly on sparse boards; on dense boards
/// (or after a bounded number of unlucky draws) the free cells are
/// enumerated and indexed directly, so this never loops unbounded.
fn spawn_with<R: Rng>(
    rng: &mut R,
    occupied: &HashSet<Cell>,
    grid_size: usize,
) -> Result<Cell, SpawnError> {
    let total = grid_size * grid_size;
    if occupied.len() >= total {
        return Err(SpawnError::GridFull { grid_size });
    }

    // Worth sampling only while at least half the board is free
    if occupied.len() * 2 < total {
        for _ in 0..MAX_REJECTION_DRAWS {
            let cell = Cell::new(
                rng.gen_range(0..grid_size as i32),
                rng.gen_range(0..grid_size as i32),
            );
            if !occupied.contains(&cell) {
                return Ok(cell);
            }
        }
    }

    let free: Vec<Cell> = (0..grid_size as i32)
        .flat_map(|x| (0..grid_size as i32).map(move |y| Cell::new(x, y)))
        .filter(|c| !occupied.contains(c))
        .collect();

    Ok(free[rng.gen_range(0..free.len())])
}
