//! Tapcalc - a single-screen tap calculator.
//!
//! One read-only display line and a 5x4 button grid. Every button press
//! runs through a pure input dispatcher that maps (current buffer, pressed
//! key) to the next buffer; the presentation layer only renders the result.
//!
//! # Example
//!
//! ```rust
//! use tapcalc::prelude::*;
//!
//! let mut buffer = INITIAL_BUFFER.to_string();
//! for key in [Key::Digit(7), Key::Op(Operator::Add), Key::Digit(3), Key::Evaluate] {
//!     buffer = dispatch(&buffer, key);
//! }
//! assert_eq!(buffer, "10");
//! ```

// Allow common test patterns
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::core::dispatch::{dispatch, format_value, INITIAL_BUFFER};
    pub use crate::core::{CalcError, CalcResult, Key, Operator, SEPARATOR};

    #[cfg(feature = "tui")]
    pub use crate::tui::CalculatorApp;
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_imports() {
        let buffer = dispatch(INITIAL_BUFFER, Key::Digit(5));
        assert_eq!(buffer, "5");
    }

    #[test]
    fn test_engine_direct() {
        let value = crate::core::evaluator::evaluate_str("42*(3+7)").unwrap();
        assert_eq!(value, 420.0);
        assert_eq!(format_value(value), "420");
    }

    #[test]
    fn test_separator_constant() {
        assert_eq!(SEPARATOR, ',');
    }
}
