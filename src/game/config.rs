use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration for one game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side length of the square grid; valid cells are 0..grid_size
    pub grid_size: usize,
    /// Milliseconds between game ticks
    pub tick_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: 20,
            tick_ms: 150,
        }
    }
}

impl GameConfig {
    pub fn new(grid_size: usize, tick_ms: u64) -> Self {
        Self { grid_size, tick_ms }
    }

    /// Small grid for tests
    pub fn small() -> Self {
        Self {
            grid_size: 10,
            ..Default::default()
        }
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid_size, 20);
        assert_eq!(config.tick_ms, 150);
        assert_eq!(config.tick_period(), Duration::from_millis(150));
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(15, 100);
        assert_eq!(config.grid_size, 15);
        assert_eq!(config.tick_ms, 100);
    }
}
