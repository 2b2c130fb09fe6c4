//! Keyboard input mapping.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::{Key, Operator};

/// Actions triggered by keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Press a calculator key directly.
    Press(Key),
    /// Move the grid selection up.
    SelectUp,
    /// Move the grid selection down.
    SelectDown,
    /// Move the grid selection left.
    SelectLeft,
    /// Move the grid selection right.
    SelectRight,
    /// Press the selected grid button.
    PressSelected,
    /// Quit the application.
    Quit,
    /// Ignored input.
    None,
}

/// Maps crossterm key events to actions.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action.
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code, modifiers, ..
        } = event;

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char(c @ '0'..='9') => match c.to_digit(10) {
                Some(d) => KeyAction::Press(Key::Digit(d as u8)),
                None => KeyAction::None,
            },
            KeyCode::Char('+') => KeyAction::Press(Key::Op(Operator::Add)),
            KeyCode::Char('-') => KeyAction::Press(Key::Op(Operator::Subtract)),
            KeyCode::Char('*' | 'x') => KeyAction::Press(Key::Op(Operator::Multiply)),
            KeyCode::Char('/') => KeyAction::Press(Key::Op(Operator::Divide)),
            KeyCode::Char(',' | '.') => KeyAction::Press(Key::Separator),
            KeyCode::Char('%') => KeyAction::Press(Key::Percent),
            KeyCode::Char('n') => KeyAction::Press(Key::ToggleSign),
            KeyCode::Char('=') | KeyCode::Enter => KeyAction::Press(Key::Evaluate),
            KeyCode::Backspace => KeyAction::Press(Key::Clear),
            KeyCode::Char(' ') => KeyAction::PressSelected,
            KeyCode::Up => KeyAction::SelectUp,
            KeyCode::Down => KeyAction::SelectDown,
            KeyCode::Left => KeyAction::SelectLeft,
            KeyCode::Right => KeyAction::SelectRight,
            KeyCode::Esc | KeyCode::Char('q') => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }
}
