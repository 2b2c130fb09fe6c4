//! Core calculator logic: the key set, the expression engine errors, and
//! the input dispatcher that rewrites the display buffer.

pub mod dispatch;
pub mod evaluator;
pub mod parser;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The decimal separator shown in the display buffer.
pub const SEPARATOR: char = ',';

/// Result type for expression evaluation.
pub type CalcResult<T> = Result<T, CalcError>;

/// Errors produced by the expression engine.
///
/// The dispatcher swallows all of these (a failed evaluation leaves the
/// buffer unchanged); they are explicit so the engine stays testable on
/// its own.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Division by zero attempted.
    #[error("division by zero")]
    DivisionByZero,
    /// Invalid expression syntax.
    #[error("invalid expression: {0}")]
    Parse(String),
    /// Empty expression provided.
    #[error("empty expression")]
    EmptyExpression,
    /// The result is NaN or infinite.
    #[error("result is not a finite number")]
    NonFinite,
}

/// The four binary operators on the keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`−`)
    Subtract,
    /// Multiplication (`×`)
    Multiply,
    /// Division (`÷`)
    Divide,
}

impl Operator {
    /// All operators, in keypad order.
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// The glyph shown in the display buffer.
    ///
    /// Subtraction uses U+2212 MINUS SIGN, not ASCII `-`; the ASCII form is
    /// reserved for negation markers so the two never collide.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '−',
            Self::Multiply => '×',
            Self::Divide => '÷',
        }
    }

    /// The ASCII equivalent fed to the expression engine.
    #[must_use]
    pub const fn ascii(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Maps a display glyph back to its operator.
    #[must_use]
    pub fn from_glyph(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.glyph() == c)
    }
}

/// One symbol from the fixed button set.
///
/// Every buffer transition is keyed by exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    /// A digit 0-9.
    Digit(u8),
    /// The decimal separator (`,`).
    Separator,
    /// One of the four binary operators.
    Op(Operator),
    /// Divide the current operand by 100.
    Percent,
    /// Flip the sign of the current operand (`+/−`).
    ToggleSign,
    /// Remove the last character; reset to `"0"` when one remains.
    Clear,
    /// Evaluate the buffer (`=`).
    Evaluate,
    /// The branding key (`CAL`); a no-op.
    Brand,
}

impl Key {
    /// The character this key appends to the buffer, if it appends one.
    ///
    /// Editing keys (clear, evaluate, sign flip, percent, brand) return
    /// `None`; they rewrite the buffer instead of extending it.
    #[must_use]
    pub fn glyph(self) -> Option<char> {
        match self {
            Self::Digit(d) => char::from_digit(u32::from(d), 10),
            Self::Separator => Some(SEPARATOR),
            Self::Op(op) => Some(op.glyph()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== CalcError tests =====

    #[test]
    fn test_calc_error_display_division_by_zero() {
        assert_eq!(CalcError::DivisionByZero.to_string(), "division by zero");
    }

    #[test]
    fn test_calc_error_display_parse() {
        let err = CalcError::Parse("unexpected token".into());
        assert_eq!(err.to_string(), "invalid expression: unexpected token");
    }

    #[test]
    fn test_calc_error_display_empty() {
        assert_eq!(CalcError::EmptyExpression.to_string(), "empty expression");
    }

    #[test]
    fn test_calc_error_display_non_finite() {
        assert_eq!(
            CalcError::NonFinite.to_string(),
            "result is not a finite number"
        );
    }

    #[test]
    fn test_calc_error_is_error_trait() {
        let err: Box<dyn std::error::Error> = Box::new(CalcError::DivisionByZero);
        assert!(err.to_string().contains("division"));
    }

    // ===== Operator tests =====

    #[test]
    fn test_operator_glyphs() {
        assert_eq!(Operator::Add.glyph(), '+');
        assert_eq!(Operator::Subtract.glyph(), '−');
        assert_eq!(Operator::Multiply.glyph(), '×');
        assert_eq!(Operator::Divide.glyph(), '÷');
    }

    #[test]
    fn test_operator_ascii() {
        assert_eq!(Operator::Add.ascii(), '+');
        assert_eq!(Operator::Subtract.ascii(), '-');
        assert_eq!(Operator::Multiply.ascii(), '*');
        assert_eq!(Operator::Divide.ascii(), '/');
    }

    #[test]
    fn test_operator_from_glyph_roundtrip() {
        for op in Operator::ALL {
            assert_eq!(Operator::from_glyph(op.glyph()), Some(op));
        }
    }

    #[test]
    fn test_operator_from_glyph_rejects_ascii_minus() {
        // ASCII '-' marks negation, never subtraction
        assert_eq!(Operator::from_glyph('-'), None);
        assert_eq!(Operator::from_glyph('*'), None);
        assert_eq!(Operator::from_glyph('x'), None);
    }

    // ===== Key tests =====

    #[test]
    fn test_key_glyph_digits() {
        for d in 0..=9 {
            let glyph = Key::Digit(d).glyph();
            assert_eq!(glyph, char::from_digit(u32::from(d), 10));
        }
    }

    #[test]
    fn test_key_glyph_separator() {
        assert_eq!(Key::Separator.glyph(), Some(','));
    }

    #[test]
    fn test_key_glyph_operators() {
        assert_eq!(Key::Op(Operator::Divide).glyph(), Some('÷'));
    }

    #[test]
    fn test_key_glyph_editing_keys() {
        for key in [
            Key::Percent,
            Key::ToggleSign,
            Key::Clear,
            Key::Evaluate,
            Key::Brand,
        ] {
            assert_eq!(key.glyph(), None);
        }
    }

    #[test]
    fn test_key_serde_roundtrip() {
        let keys = vec![
            Key::Digit(7),
            Key::Op(Operator::Add),
            Key::Separator,
            Key::Evaluate,
        ];
        let json = serde_json::to_string(&keys).unwrap();
        let back: Vec<Key> = serde_json::from_str(&json).unwrap();
        assert_eq!(keys, back);
    }
}
