//! Frame rendering: the display line above the key grid.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;

/// Help line shown under the grid.
pub const HELP_LINE: &str = " arrows+space press · enter = · backspace AC · n +/− · q quit";

/// Splits the frame into display, keypad, and help areas.
///
/// Exposed so the event loop can hit-test mouse clicks against the same
/// keypad rectangle the renderer used.
#[must_use]
pub fn layout(area: Rect) -> [Rect; 3] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Display
            Constraint::Min(12),    // Keypad
            Constraint::Length(1),  // Help
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2]]
}

/// Renders the calculator UI to the frame.
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let [display_area, keypad_area, help_area] = layout(frame.area());

    // Display: right-aligned, like a desk calculator
    let display = Paragraph::new(Span::styled(
        app.buffer(),
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Right)
    .block(
        Block::default()
            .title(" tapcalc ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );
    frame.render_widget(display, display_area);

    let keypad = KeypadWidget::new(app.keypad()).selected(app.selected());
    frame.render_widget(keypad, keypad_area);

    let help = Paragraph::new(Span::styled(
        HELP_LINE,
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(help, help_area);
}
