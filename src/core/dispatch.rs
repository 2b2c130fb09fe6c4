//! The input dispatcher: a pure rewrite of the display buffer keyed by the
//! pressed symbol.
//!
//! `dispatch` is total. Evaluation failures, unparseable operands, and
//! every other malformed state leave the buffer unchanged; the buffer is
//! never empty.

use crate::core::{evaluator, Key, Operator, SEPARATOR};

/// The buffer shown before any key is pressed, and after a full clear.
pub const INITIAL_BUFFER: &str = "0";

/// Maps (current buffer, pressed key) to the next buffer.
#[must_use]
pub fn dispatch(buffer: &str, key: Key) -> String {
    match key {
        Key::Clear => backspace(buffer),
        Key::Separator => append_separator(buffer),
        Key::Brand => buffer.to_string(),
        Key::Evaluate => evaluate(buffer),
        Key::ToggleSign => toggle_sign(buffer),
        Key::Percent => percent(buffer),
        Key::Digit(_) | Key::Op(_) => match key.glyph() {
            Some(glyph) => push_symbol(buffer, glyph),
            None => buffer.to_string(),
        },
    }
}

/// Formats a result value with the shortest representation that round-trips.
///
/// Negative zero collapses to `"0"` so a cleared-out result never shows a
/// stray sign.
#[must_use]
pub fn format_value(value: f64) -> String {
    if value == 0.0 {
        INITIAL_BUFFER.to_string()
    } else {
        format!("{value}")
    }
}

/// Removes the last character; a single-character buffer resets to `"0"`.
fn backspace(buffer: &str) -> String {
    match buffer.char_indices().last() {
        Some((idx, _)) if idx > 0 => buffer[..idx].to_string(),
        _ => INITIAL_BUFFER.to_string(),
    }
}

/// Byte offset where the current operand begins: just after the last
/// operator glyph, or 0 when the buffer holds a single operand.
fn operand_start(buffer: &str) -> usize {
    buffer
        .char_indices()
        .rev()
        .find(|&(_, c)| Operator::from_glyph(c).is_some())
        .map_or(0, |(idx, c)| idx + c.len_utf8())
}

/// Splits the buffer into (everything before the operand, the operand).
fn split_operand(buffer: &str) -> (&str, &str) {
    buffer.split_at(operand_start(buffer))
}

/// Appends the separator unless the current operand already has one.
///
/// The original scanned the whole buffer, which blocked a second decimal
/// forever once any operand used one; the check is scoped to the trailing
/// operand instead.
fn append_separator(buffer: &str) -> String {
    let (_, operand) = split_operand(buffer);
    if operand.contains(SEPARATOR) {
        buffer.to_string()
    } else {
        format!("{buffer}{SEPARATOR}")
    }
}

/// Rewrites display glyphs to the ASCII the expression engine accepts.
fn normalize(buffer: &str) -> String {
    buffer
        .chars()
        .map(|c| {
            if c == SEPARATOR {
                '.'
            } else {
                Operator::from_glyph(c).map_or(c, Operator::ascii)
            }
        })
        .collect()
}

/// Converts an ASCII-formatted value back to the display convention.
fn localize(text: &str) -> String {
    text.replace('.', ",")
}

/// Evaluates the buffer; malformed expressions leave it unchanged.
fn evaluate(buffer: &str) -> String {
    match evaluator::evaluate_str(&normalize(buffer)) {
        Ok(value) => localize(&format_value(value)),
        Err(_) => buffer.to_string(),
    }
}

/// Parses the operand as a number under the display convention.
fn parse_operand(operand: &str) -> Option<f64> {
    operand.replace(SEPARATOR, ".").parse().ok()
}

/// Flips the sign of the current operand; involution on its output.
fn toggle_sign(buffer: &str) -> String {
    let (head, operand) = split_operand(buffer);
    match flip_operand(operand) {
        Some(flipped) => format!("{head}{flipped}"),
        None => buffer.to_string(),
    }
}

fn flip_operand(operand: &str) -> Option<String> {
    // Unwrap a parenthesized negation
    if let Some(inner) = operand
        .strip_prefix("(-")
        .and_then(|rest| rest.strip_suffix(')'))
    {
        return Some(inner.to_string());
    }
    // Strip a bare leading minus (a previous evaluation result)
    if let Some(rest) = operand.strip_prefix('-') {
        return Some(rest.to_string());
    }
    // Wrap a numeric operand; a trailing separator or anything else
    // non-numeric is left alone
    if !operand.ends_with(|c: char| c.is_ascii_digit()) {
        return None;
    }
    parse_operand(operand).map(|_| format!("(-{operand})"))
}

/// Divides the current operand by 100; no-op if it does not parse.
fn percent(buffer: &str) -> String {
    let (head, operand) = split_operand(buffer);
    match parse_operand(operand) {
        Some(value) => {
            let scaled = localize(&format_value(value / 100.0));
            format!("{head}{scaled}")
        }
        None => buffer.to_string(),
    }
}

/// Appends a digit or operator glyph; the initial `"0"` and a lone
/// operator are replaced rather than extended.
fn push_symbol(buffer: &str, symbol: char) -> String {
    if buffer == INITIAL_BUFFER || is_lone_operator(buffer) {
        symbol.to_string()
    } else {
        format!("{buffer}{symbol}")
    }
}

fn is_lone_operator(buffer: &str) -> bool {
    let mut chars = buffer.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Operator::from_glyph(c).is_some(),
        _ => false,
    }
}
