//! Application state: the display buffer, the keypad, and the keyboard
//! selection.

use crate::core::dispatch::{dispatch, INITIAL_BUFFER};
use crate::core::Key;
use crate::tui::input::KeyAction;
use crate::tui::keypad::{Keypad, COLS, ROWS};

/// Calculator application state.
///
/// The buffer is the only calculator state; every press routes through the
/// pure dispatcher and replaces it wholesale.
#[derive(Debug)]
pub struct CalculatorApp {
    /// The display buffer.
    buffer: String,
    /// The keypad model (pressed flashes live here).
    keypad: Keypad,
    /// Keyboard selection on the grid, as a button index.
    selected: usize,
    /// Whether the app should quit.
    should_quit: bool,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorApp {
    /// Creates a new app showing `"0"`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            buffer: INITIAL_BUFFER.to_string(),
            keypad: Keypad::new(),
            // Start on the "=" button
            selected: ROWS * COLS - 1,
            should_quit: false,
        }
    }

    /// Returns the display buffer.
    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Replaces the buffer directly.
    #[cfg(test)]
    pub fn set_buffer(&mut self, buffer: &str) {
        self.buffer = buffer.to_string();
    }

    /// Returns the keypad model.
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns the selected button index.
    #[must_use]
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Returns whether the app should quit.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Presses a key: rewrites the buffer and flashes the matching button.
    pub fn press(&mut self, key: Key) {
        self.buffer = dispatch(&self.buffer, key);
        self.keypad.highlight_key(key);
    }

    /// Presses the button under the given index (mouse click).
    pub fn press_button(&mut self, index: usize) {
        if let Some(btn) = self.keypad.get_button(index) {
            let key = btn.key;
            self.selected = index;
            self.press(key);
        }
    }

    /// Presses the button under the keyboard selection.
    pub fn press_selected(&mut self) {
        self.press_button(self.selected);
    }

    /// Moves the keyboard selection by (rows, cols), wrapping on the grid.
    pub fn move_selection(&mut self, d_row: isize, d_col: isize) {
        let row = (self.selected / COLS) as isize;
        let col = (self.selected % COLS) as isize;
        let row = (row + d_row).rem_euclid(ROWS as isize) as usize;
        let col = (col + d_col).rem_euclid(COLS as isize) as usize;
        self.selected = row * COLS + col;
        self.keypad.release_all();
    }

    /// Applies a mapped input action.
    pub fn apply(&mut self, action: KeyAction) {
        match action {
            KeyAction::Press(key) => self.press(key),
            KeyAction::SelectUp => self.move_selection(-1, 0),
            KeyAction::SelectDown => self.move_selection(1, 0),
            KeyAction::SelectLeft => self.move_selection(0, -1),
            KeyAction::SelectRight => self.move_selection(0, 1),
            KeyAction::PressSelected => self.press_selected(),
            KeyAction::Quit => self.quit(),
            KeyAction::None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Operator;

    #[test]
    fn test_app_new() {
        let app = CalculatorApp::new();
        assert_eq!(app.buffer(), "0");
        assert!(!app.should_quit());
        assert_eq!(app.keypad().button_count(), 20);
    }

    #[test]
    fn test_app_default() {
        assert_eq!(CalculatorApp::default().buffer(), "0");
    }

    #[test]
    fn test_press_routes_through_dispatcher() {
        let mut app = CalculatorApp::new();
        app.press(Key::Digit(7));
        app.press(Key::Op(Operator::Add));
        app.press(Key::Digit(3));
        assert_eq!(app.buffer(), "7+3");
        app.press(Key::Evaluate);
        assert_eq!(app.buffer(), "10");
    }

    #[test]
    fn test_press_flashes_button() {
        let mut app = CalculatorApp::new();
        app.press(Key::Digit(7));
        let pressed: Vec<_> = app.keypad().buttons().filter(|b| b.pressed).collect();
        assert_eq!(pressed.len(), 1);
        assert_eq!(pressed[0].key, Key::Digit(7));
    }

    #[test]
    fn test_set_buffer() {
        let mut app = CalculatorApp::new();
        app.set_buffer("12,5");
        assert_eq!(app.buffer(), "12,5");
    }

    #[test]
    fn test_quit() {
        let mut app = CalculatorApp::new();
        app.quit();
        assert!(app.should_quit());
    }

    #[test]
    fn test_press_button_by_index() {
        let mut app = CalculatorApp::new();
        // Index 5 is the "8" digit (row 1, col 1)
        app.press_button(5);
        assert_eq!(app.buffer(), "8");
        assert_eq!(app.selected(), 5);
    }

    #[test]
    fn test_press_button_out_of_bounds_ignored() {
        let mut app = CalculatorApp::new();
        app.press_button(99);
        assert_eq!(app.buffer(), "0");
    }

    #[test]
    fn test_selection_starts_on_equals() {
        let app = CalculatorApp::new();
        let btn = app.keypad().get_button(app.selected()).unwrap();
        assert_eq!(btn.key, Key::Evaluate);
    }

    #[test]
    fn test_move_selection_wraps() {
        let mut app = CalculatorApp::new();
        // From "=" (row 4, col 3) moving right wraps to col 0
        app.move_selection(0, 1);
        assert_eq!(app.selected() % COLS, 0);
        // Moving down from row 4 wraps to row 0
        app.move_selection(1, 0);
        assert_eq!(app.selected() / COLS, 0);
    }

    #[test]
    fn test_press_selected() {
        let mut app = CalculatorApp::new();
        app.set_buffer("7+3");
        // Selection starts on "="
        app.press_selected();
        assert_eq!(app.buffer(), "10");
    }

    #[test]
    fn test_apply_actions() {
        let mut app = CalculatorApp::new();
        app.apply(KeyAction::Press(Key::Digit(5)));
        assert_eq!(app.buffer(), "5");
        app.apply(KeyAction::SelectUp);
        app.apply(KeyAction::None);
        assert_eq!(app.buffer(), "5");
        app.apply(KeyAction::Quit);
        assert!(app.should_quit());
    }
}
