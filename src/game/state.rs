use std::collections::HashSet;

use tracing::{debug, info};

use super::body::{Cell, CollisionKind, SnakeBody};
use super::config::GameConfig;
use super::food::{FoodSpawner, SpawnError};
use super::heading::Heading;

/// Whether the game is still accepting ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Running,
    GameOver(CollisionKind),
}

/// What a single tick did, for the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    /// The snake ate the food this tick
    pub ate: bool,
    /// Set on the tick that transitioned to game over
    pub ended: Option<CollisionKind>,
}

/// One full game: snake, food and the running/over state machine
///
/// Owns its sub-entities exclusively; `restart` rebuilds them from scratch
/// rather than mutating anything across the boundary.
pub struct GameState {
    config: GameConfig,
    body: SnakeBody,
    food: Cell,
    spawner: FoodSpawner,
    status: Status,
    score: u32,
}

impl GameState {
    pub fn new(config: GameConfig) -> Result<Self, SpawnError> {
        let body = SnakeBody::at_center(config.grid_size);
        let mut spawner = FoodSpawner::new();
        let occupied: HashSet<Cell> = body.cells().collect();
        let food = spawner.spawn(&occupied, config.grid_size)?;

        Ok(Self {
            config,
            body,
            food,
            spawner,
            status: Status::Running,
            score: 0,
        })
    }

    /// Advance one tick: step, respawn food on growth, then collision check
    ///
    /// A tick while the game is over is a frozen no-op.
    pub fn tick(&mut self) -> Result<TickReport, SpawnError> {
        if let Status::GameOver(_) = self.status {
            return Ok(TickReport {
                ate: false,
                ended: None,
            });
        }

        let outcome = self.body.step(self.food);

        if outcome.grew {
            self.score += 1;
            let occupied: HashSet<Cell> = self.body.cells().collect();
            self.food = self.spawner.spawn(&occupied, self.config.grid_size)?;
            debug!(score = self.score, food = ?self.food, "food eaten, respawned");
        }

        let ended = self.body.check_collision(self.config.grid_size);
        if let Some(kind) = ended {
            self.status = Status::GameOver(kind);
            info!(?kind, score = self.score, "game over");
        }

        Ok(TickReport {
            ate: outcome.grew,
            ended,
        })
    }

    /// Discard the dead game and build a fresh one on the same config
    pub fn restart(&mut self) -> Result<(), SpawnError> {
        *self = Self::new(self.config.clone())?;
        info!("game restarted");
        Ok(())
    }

    /// Forwarded to the snake while running; ignored after game over
    pub fn set_heading(&mut self, heading: Heading) {
        if self.status == Status::Running {
            self.body.set_heading(heading);
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == Status::Running
    }

    /// Foods eaten so far; equals body length minus the starting cell
    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn body(&self) -> &SnakeBody {
        &self.body
    }

    pub fn food(&self) -> Cell {
        self.food
    }

    pub fn grid_size(&self) -> usize {
        self.config.grid_size
    }

    pub fn tick_period(&self) -> std::time::Duration {
        self.config.tick_period()
    }
}
