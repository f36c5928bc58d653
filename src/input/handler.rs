use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::Heading;

/// What a key press means to the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Heading(Heading),
    Restart,
    Quit,
    None,
}

/// Maps raw terminal key events to game actions
///
/// Unrecognized keys map to `KeyAction::None`; the reversal guard is not
/// applied here, that belongs to the snake itself.
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn key_action(&self, key: KeyEvent) -> KeyAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            // Movement - arrow keys
            KeyCode::Up => KeyAction::Heading(Heading::Up),
            KeyCode::Down => KeyAction::Heading(Heading::Down),
            KeyCode::Left => KeyAction::Heading(Heading::Left),
            KeyCode::Right => KeyAction::Heading(Heading::Right),

            // Movement - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => KeyAction::Heading(Heading::Up),
            KeyCode::Char('s') | KeyCode::Char('S') => KeyAction::Heading(Heading::Down),
            KeyCode::Char('a') | KeyCode::Char('A') => KeyAction::Heading(Heading::Left),
            KeyCode::Char('d') | KeyCode::Char('D') => KeyAction::Heading(Heading::Right),

            // Controls
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,
            KeyCode::Char('r') | KeyCode::Char('R') => KeyAction::Restart,

            _ => KeyAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
