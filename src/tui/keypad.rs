//! The 5x4 button grid.
//!
//! Buttons can be pressed with the mouse (hit-testing on the rendered
//! area), navigated with the arrow keys, and flash when their key is
//! pressed on the keyboard.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::core::{Key, Operator};

/// Grid rows.
pub const ROWS: usize = 5;
/// Grid columns.
pub const COLS: usize = 4;

/// A single keypad button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// The text on the button.
    pub label: &'static str,
    /// The key this button presses.
    pub key: Key,
    /// Whether the button is currently flashed as pressed.
    pub pressed: bool,
}

impl KeypadButton {
    fn new(label: &'static str, key: Key) -> Self {
        Self {
            label,
            key,
            pressed: false,
        }
    }
}

/// The keypad layout, mirroring the original hardware-style grid:
/// ```text
/// [ AC ] [ +/− ] [ % ] [ ÷ ]
/// [ 7  ] [ 8   ] [ 9 ] [ × ]
/// [ 4  ] [ 5   ] [ 6 ] [ − ]
/// [ 1  ] [ 2   ] [ 3 ] [ + ]
/// [ CAL] [ 0   ] [ , ] [ = ]
/// ```
#[derive(Debug, Clone)]
pub struct Keypad {
    /// Buttons in row-major order.
    buttons: Vec<KeypadButton>,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

const DIGIT_LABELS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

fn digit(d: u8) -> KeypadButton {
    KeypadButton::new(DIGIT_LABELS[usize::from(d)], Key::Digit(d))
}

impl Keypad {
    /// Creates the standard 20-button keypad.
    #[must_use]
    pub fn new() -> Self {
        let buttons = vec![
            // Row 1: AC +/− % ÷
            KeypadButton::new("AC", Key::Clear),
            KeypadButton::new("+/−", Key::ToggleSign),
            KeypadButton::new("%", Key::Percent),
            KeypadButton::new("÷", Key::Op(Operator::Divide)),
            // Row 2: 7 8 9 ×
            digit(7),
            digit(8),
            digit(9),
            KeypadButton::new("×", Key::Op(Operator::Multiply)),
            // Row 3: 4 5 6 −
            digit(4),
            digit(5),
            digit(6),
            KeypadButton::new("−", Key::Op(Operator::Subtract)),
            // Row 4: 1 2 3 +
            digit(1),
            digit(2),
            digit(3),
            KeypadButton::new("+", Key::Op(Operator::Add)),
            // Row 5: CAL 0 , =
            KeypadButton::new("CAL", Key::Brand),
            digit(0),
            KeypadButton::new(",", Key::Separator),
            KeypadButton::new("=", Key::Evaluate),
        ];

        Self { buttons }
    }

    /// Returns the number of buttons.
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols).
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (ROWS, COLS)
    }

    /// Gets a button by index.
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Gets a button by row and column.
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        if row < ROWS && col < COLS {
            self.buttons.get(row * COLS + col)
        } else {
            None
        }
    }

    /// Finds the index of the button for a key.
    #[must_use]
    pub fn find_button_by_key(&self, key: Key) -> Option<usize> {
        self.buttons.iter().position(|b| b.key == key)
    }

    /// Flashes a single button as pressed, releasing all others.
    pub fn highlight_key(&mut self, key: Key) {
        let idx = self.find_button_by_key(key);
        for (i, btn) in self.buttons.iter_mut().enumerate() {
            btn.pressed = Some(i) == idx;
        }
    }

    /// Releases all buttons.
    pub fn release_all(&mut self) {
        for btn in &mut self.buttons {
            btn.pressed = false;
        }
    }

    /// Returns an iterator over all buttons.
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Returns an iterator over buttons with their (row, col) positions.
    pub fn buttons_with_positions(&self) -> impl Iterator<Item = ((usize, usize), &KeypadButton)> {
        self.buttons
            .iter()
            .enumerate()
            .map(|(i, btn)| ((i / COLS, i % COLS), btn))
    }

    /// Converts a click position inside the rendered area to a button index.
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<usize> {
        if x < area.x || y < area.y || x >= area.x + area.width || y >= area.y + area.height {
            return None;
        }

        let rel_x = x - area.x;
        let rel_y = y - area.y;

        // Account for the border (1 cell on each side)
        if rel_x == 0 || rel_y == 0 || rel_x >= area.width - 1 || rel_y >= area.height - 1 {
            return None;
        }

        let btn_width = (area.width - 2) / COLS as u16;
        let btn_height = (area.height - 2) / ROWS as u16;
        if btn_width == 0 || btn_height == 0 {
            return None;
        }

        let col = usize::from((rel_x - 1) / btn_width);
        let row = usize::from((rel_y - 1) / btn_height);

        if row < ROWS && col < COLS {
            Some(row * COLS + col)
        } else {
            None
        }
    }
}

/// Keypad widget for rendering, with an optional keyboard selection.
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
    selected: Option<usize>,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget.
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self {
            keypad,
            selected: None,
        }
    }

    /// Highlights a button as the keyboard selection.
    #[must_use]
    pub fn selected(mut self, index: usize) -> Self {
        self.selected = Some(index);
        self
    }

    fn button_style(&self, index: usize, btn: &KeypadButton) -> Style {
        if btn.pressed {
            return Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD);
        }
        let base = match btn.key {
            Key::Digit(_) | Key::Separator => Style::default().fg(Color::White),
            Key::Op(_) | Key::Evaluate => Style::default().fg(Color::Yellow),
            Key::Clear => Style::default().fg(Color::Red),
            Key::Brand => Style::default().fg(Color::DarkGray),
            Key::Percent | Key::ToggleSign => Style::default().fg(Color::Cyan),
        };
        if self.selected == Some(index) {
            base.add_modifier(Modifier::REVERSED)
        } else {
            base
        }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keys ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };

        if usize::from(inner.width) < COLS || usize::from(inner.height) < ROWS {
            return; // Too small to render
        }

        let btn_width = inner.width / COLS as u16;
        let btn_height = inner.height / ROWS as u16;

        for (i, ((row, col), btn)) in self.keypad.buttons_with_positions().enumerate() {
            let x = inner.x + col as u16 * btn_width;
            let y = inner.y + row as u16 * btn_height;
            let style = self.button_style(i, btn);

            if btn_width >= 3 {
                let label = format!("[{}]", btn.label);
                let label_x = x + btn_width.saturating_sub(label.chars().count() as u16) / 2;
                let label_y = y + btn_height / 2;

                if label_y < inner.y + inner.height && label_x < inner.x + inner.width {
                    buf.set_span(label_x, label_y, &Span::styled(label, style), btn_width);
                }
            }
        }
    }
}
