//! AST evaluation for the four binary operators and unary negation.

use crate::core::parser::{AstNode, Parser};
use crate::core::{CalcError, CalcResult, Operator};

/// Evaluates an AST node to a finite `f64`.
pub fn evaluate(node: &AstNode) -> CalcResult<f64> {
    match node {
        AstNode::Number(n) => Ok(*n),
        AstNode::Negate(inner) => Ok(-evaluate(inner)?),
        AstNode::BinaryOp { left, op, right } => {
            let left = evaluate(left)?;
            let right = evaluate(right)?;
            apply(left, *op, right)
        }
    }
}

/// Parses and evaluates an ASCII-normalized expression string.
pub fn evaluate_str(input: &str) -> CalcResult<f64> {
    let ast = Parser::parse_str(input)?;
    evaluate(&ast)
}

fn apply(a: f64, op: Operator, b: f64) -> CalcResult<f64> {
    let result = match op {
        Operator::Add => a + b,
        Operator::Subtract => a - b,
        Operator::Multiply => a * b,
        Operator::Divide => {
            if b == 0.0 {
                return Err(CalcError::DivisionByZero);
            }
            a / b
        }
    };

    // Overflow to infinity is an error, not a displayable value
    if result.is_finite() {
        Ok(result)
    } else {
        Err(CalcError::NonFinite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_number() {
        assert_eq!(evaluate(&AstNode::number(42.0)), Ok(42.0));
    }

    #[test]
    fn test_evaluate_negation() {
        let ast = AstNode::negate(AstNode::number(5.0));
        assert_eq!(evaluate(&ast), Ok(-5.0));
    }

    #[test]
    fn test_evaluate_double_negation() {
        let ast = AstNode::negate(AstNode::negate(AstNode::number(5.0)));
        assert_eq!(evaluate(&ast), Ok(5.0));
    }

    #[test]
    fn test_evaluate_all_operators() {
        assert_eq!(evaluate_str("10+5"), Ok(15.0));
        assert_eq!(evaluate_str("10-3"), Ok(7.0));
        assert_eq!(evaluate_str("6*7"), Ok(42.0));
        assert_eq!(evaluate_str("20/4"), Ok(5.0));
    }

    #[test]
    fn test_evaluate_precedence() {
        assert_eq!(evaluate_str("2+3*4"), Ok(14.0));
        assert_eq!(evaluate_str("(2+3)*4"), Ok(20.0));
    }

    #[test]
    fn test_evaluate_left_to_right_chain() {
        // The dispatcher appends operands freely; chains must evaluate
        assert_eq!(evaluate_str("10-3-2"), Ok(5.0));
        assert_eq!(evaluate_str("100/10/2"), Ok(5.0));
    }

    #[test]
    fn test_evaluate_parenthesized_negation() {
        assert_eq!(evaluate_str("5+(-8)"), Ok(-3.0));
        assert_eq!(evaluate_str("(-8)"), Ok(-8.0));
    }

    #[test]
    fn test_evaluate_division_by_zero() {
        assert_eq!(evaluate_str("1/0"), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn test_evaluate_division_by_zero_nested() {
        assert!(matches!(
            evaluate_str("5+1/(2-2)"),
            Err(CalcError::DivisionByZero)
        ));
    }

    #[test]
    fn test_evaluate_overflow_is_error() {
        // f64::MAX * 10 overflows to infinity
        let huge = format!("{0}*10", f64::MAX);
        assert!(matches!(evaluate_str(&huge), Err(CalcError::NonFinite)));
    }

    #[test]
    fn test_evaluate_empty() {
        assert!(matches!(evaluate_str(""), Err(CalcError::EmptyExpression)));
    }

    #[test]
    fn test_evaluate_malformed() {
        assert!(matches!(evaluate_str("7+"), Err(CalcError::Parse(_))));
    }

    #[test]
    fn test_evaluate_decimals() {
        assert_eq!(evaluate_str("1.5+2.25"), Ok(3.75));
        assert_eq!(evaluate_str("0.1+0.2"), Ok(0.30000000000000004));
    }
}
