//! Snake for the terminal
//!
//! - Core game logic (game module): snake body, food placement, tick state
//!   machine
//! - Key mapping (input module)
//! - TUI rendering (render module)
//! - In-process session stats (metrics module)
//! - The interactive terminal shell (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
