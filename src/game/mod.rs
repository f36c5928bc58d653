//! Core game logic for Snake
//!
//! Everything in here is free of I/O and rendering concerns: the shell
//! drives it through `GameState::tick` and read-only snapshots.

pub mod body;
pub mod config;
pub mod food;
pub mod heading;
pub mod state;

// Re-export commonly used types
pub use body::{Cell, CollisionKind, SnakeBody, StepOutcome};
pub use config::GameConfig;
pub use food::{FoodSpawner, SpawnError};
pub use heading::Heading;
pub use state::{GameState, Status, TickReport};
