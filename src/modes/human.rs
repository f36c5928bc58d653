use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::interval;
use tracing::debug;

use crate::game::{GameConfig, GameState};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::SessionStats;
use crate::render::Renderer;

pub struct HumanMode {
    game: GameState,
    stats: SessionStats,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig) -> Result<Self> {
        let game = GameState::new(config).context("Failed to set up the game")?;

        Ok(Self {
            game,
            stats: SessionStats::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let mut tick_timer = interval(self.game.tick_period());

        // Render at 30 FPS, independent of the game tick
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event)?;
                    }
                }

                // Game logic tick; frozen while the game-over prompt is up
                _ = tick_timer.tick() => {
                    if self.game.is_running() {
                        self.advance_tick()?;
                    }
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.stats.update();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.game, &self.stats);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) -> Result<()> {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return Ok(());
            }

            match self.input_handler.key_action(key) {
                KeyAction::Heading(heading) => {
                    // Applied in full before the next tick fires; the game
                    // drops reversals and post-game-over requests itself
                    self.game.set_heading(heading);
                }
                KeyAction::Restart => {
                    self.restart_game()?;
                }
                KeyAction::Quit => {
                    self.should_quit = true;
                }
                KeyAction::None => {}
            }
        }

        Ok(())
    }

    fn advance_tick(&mut self) -> Result<()> {
        let report = self
            .game
            .tick()
            .context("Failed to place food on the grid")?;

        if report.ended.is_some() {
            self.stats.on_game_over(self.game.score());
        }

        Ok(())
    }

    fn restart_game(&mut self) -> Result<()> {
        debug!("restart requested");
        self.game
            .restart()
            .context("Failed to restart the game")?;
        self.stats.on_game_start();
        Ok(())
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_starts_running() {
        let mode = HumanMode::new(GameConfig::default()).unwrap();
        assert!(mode.game.is_running());
        assert_eq!(mode.game.score(), 0);
    }

    #[test]
    fn test_restart_resets_game_and_clock() {
        let mut mode = HumanMode::new(GameConfig::small()).unwrap();
        while mode.game.is_running() {
            mode.advance_tick().unwrap();
        }
        assert_eq!(mode.stats.games_played, 1);

        mode.restart_game().unwrap();
        assert!(mode.game.is_running());
        assert_eq!(mode.game.score(), 0);
    }
}
