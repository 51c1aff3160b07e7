//! Four-function arithmetic over `f64`.
//!
//! `tokenize` → `parse` → tree walk. Only digits, decimal points and
//! `+ - * /` are understood, with the usual precedence.

pub mod lexer;
pub mod parser;

use crate::app::infrastructure::error::EvalError;
use parser::{Ast, BinaryOp, Operand, Term};

/// Evaluate an arithmetic expression such as `"12+7*3"`.
pub fn evaluate(input: &str) -> Result<f64, EvalError> {
    let tokens = lexer::tokenize(input)?;
    let ast = parser::parse(&tokens)?;
    eval_ast(&ast)
}

fn eval_ast(ast: &Ast) -> Result<f64, EvalError> {
    let mut acc = eval_term(&ast.first)?;
    for (op, term) in &ast.rest {
        let rhs = eval_term(term)?;
        acc = apply(*op, acc, rhs)?;
    }
    Ok(acc)
}

fn eval_term(term: &Term) -> Result<f64, EvalError> {
    let mut acc = eval_operand(term.first)?;
    for (op, operand) in &term.rest {
        let rhs = eval_operand(*operand)?;
        acc = apply(*op, acc, rhs)?;
    }
    Ok(acc)
}

fn eval_operand(operand: Operand) -> Result<f64, EvalError> {
    let value = if operand.negated { -operand.value } else { operand.value };
    finite(value)
}

fn apply(op: BinaryOp, lhs: f64, rhs: f64) -> Result<f64, EvalError> {
    let value = match op {
        BinaryOp::Add => lhs + rhs,
        BinaryOp::Subtract => lhs - rhs,
        BinaryOp::Multiply => lhs * rhs,
        BinaryOp::Divide if rhs == 0.0 => return Err(EvalError::DivisionByZero),
        BinaryOp::Divide => lhs / rhs,
    };
    finite(value)
}

fn finite(value: f64) -> Result<f64, EvalError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EvalError::Overflow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        assert_eq!(evaluate("2+2"), Ok(4.0));
        assert_eq!(evaluate("9-4"), Ok(5.0));
        assert_eq!(evaluate("6*7"), Ok(42.0));
        assert_eq!(evaluate("7/2"), Ok(3.5));
    }

    #[test]
    fn test_precedence_and_associativity() {
        assert_eq!(evaluate("2+3*4"), Ok(14.0));
        assert_eq!(evaluate("2*3+4"), Ok(10.0));
        assert_eq!(evaluate("8-2-1"), Ok(5.0));
        assert_eq!(evaluate("8/2/2"), Ok(2.0));
        assert_eq!(evaluate("10-4/2*3"), Ok(4.0));
    }

    #[test]
    fn test_unary_signs() {
        assert_eq!(evaluate("-5+3"), Ok(-2.0));
        assert_eq!(evaluate("5*-2"), Ok(-10.0));
        assert_eq!(evaluate("--5"), Ok(5.0));
        assert_eq!(evaluate("5--2"), Ok(7.0));
        assert_eq!(evaluate("+3"), Ok(3.0));
    }

    #[test]
    fn test_floating_point_semantics() {
        assert_eq!(evaluate("0.1+0.2"), Ok(0.1 + 0.2));
        assert_eq!(evaluate("1/3"), Ok(1.0 / 3.0));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(evaluate("5/0"), Err(EvalError::DivisionByZero));
        assert_eq!(evaluate("0/0"), Err(EvalError::DivisionByZero));
        assert_eq!(evaluate("5/0.0"), Err(EvalError::DivisionByZero));
        assert_eq!(evaluate("5/-0"), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn test_division_by_computed_zero() {
        assert_eq!(evaluate("5/2*0"), Ok(0.0));
        assert_eq!(evaluate("5/0*2"), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn test_malformed() {
        assert_eq!(evaluate("5*"), Err(EvalError::UnexpectedEnd));
        assert_eq!(evaluate(""), Err(EvalError::EmptyExpression));
        assert_eq!(evaluate("5**2"), Err(EvalError::UnexpectedToken));
        assert_eq!(evaluate("abc"), Err(EvalError::UnexpectedCharacter('a')));
    }

    #[test]
    fn test_overflow() {
        let huge = "9".repeat(400);
        assert_eq!(evaluate(&huge), Err(EvalError::Overflow));

        let big = format!("1{}", "0".repeat(300));
        assert_eq!(evaluate(&format!("{big}*{big}")), Err(EvalError::Overflow));
    }

    #[test]
    fn test_long_sum_chain() {
        let input = format!("{}1", "1+".repeat(100_000));
        assert_eq!(evaluate(&input), Ok(100_001.0));
    }

    #[test]
    fn test_long_product_chain() {
        let input = format!("{}1", "1*".repeat(100_000));
        assert_eq!(evaluate(&input), Ok(1.0));
    }

    #[test]
    fn test_long_sign_run() {
        assert_eq!(evaluate(&format!("{}1", "-".repeat(100_000))), Ok(1.0));
        assert_eq!(evaluate(&format!("{}1", "-".repeat(100_001))), Ok(-1.0));
    }

    #[test]
    fn test_long_malformed_chain_is_an_error() {
        let input = "1+".repeat(100_000);
        assert_eq!(evaluate(&input), Err(EvalError::UnexpectedEnd));
    }
}
