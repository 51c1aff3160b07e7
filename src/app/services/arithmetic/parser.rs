use std::iter::Peekable;
use std::slice::Iter;

use super::lexer::Token;
use crate::app::infrastructure::error::EvalError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

/// A number with its folded run of unary signs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Operand {
    pub negated: bool,
    pub value: f64,
}

/// `operand (('*' | '/') operand)*`
#[derive(Debug, Clone, PartialEq)]
pub struct Term {
    pub first: Operand,
    pub rest: Vec<(BinaryOp, Operand)>,
}

/// `term (('+' | '-') term)*`
///
/// Two precedence levels only, so the tree is flat and its depth does not
/// grow with the length of the input.
#[derive(Debug, Clone, PartialEq)]
pub struct Ast {
    pub first: Term,
    pub rest: Vec<(BinaryOp, Term)>,
}

/// Parse tokens following the grammar
///
/// ```text
/// expr    := term (('+' | '-') term)*
/// term    := operand (('*' | '/') operand)*
/// operand := ('+' | '-')* number
/// ```
pub fn parse(tokens: &[Token]) -> Result<Ast, EvalError> {
    if tokens.is_empty() {
        return Err(EvalError::EmptyExpression);
    }

    let mut parser = Parser {
        tokens: tokens.iter().peekable(),
    };
    let ast = parser.expr()?;
    match parser.tokens.next() {
        None => Ok(ast),
        Some(_) => Err(EvalError::UnexpectedToken),
    }
}

struct Parser<'a> {
    tokens: Peekable<Iter<'a, Token>>,
}

impl Parser<'_> {
    fn expr(&mut self) -> Result<Ast, EvalError> {
        let first = self.term()?;
        let mut rest = Vec::new();
        while let Some(op) = self.next_if_op(|t| match t {
            Token::Plus => Some(BinaryOp::Add),
            Token::Minus => Some(BinaryOp::Subtract),
            _ => None,
        }) {
            rest.push((op, self.term()?));
        }
        Ok(Ast { first, rest })
    }

    fn term(&mut self) -> Result<Term, EvalError> {
        let first = self.operand()?;
        let mut rest = Vec::new();
        while let Some(op) = self.next_if_op(|t| match t {
            Token::Star => Some(BinaryOp::Multiply),
            Token::Slash => Some(BinaryOp::Divide),
            _ => None,
        }) {
            rest.push((op, self.operand()?));
        }
        Ok(Term { first, rest })
    }

    fn operand(&mut self) -> Result<Operand, EvalError> {
        let mut negated = false;
        loop {
            match self.tokens.next() {
                None => return Err(EvalError::UnexpectedEnd),
                Some(Token::Number(n)) => return Ok(Operand { negated, value: *n }),
                Some(Token::Plus) => {}
                Some(Token::Minus) => negated = !negated,
                Some(Token::Star | Token::Slash) => return Err(EvalError::UnexpectedToken),
            }
        }
    }

    fn next_if_op(&mut self, classify: impl Fn(&Token) -> Option<BinaryOp>) -> Option<BinaryOp> {
        let op = classify(*self.tokens.peek()?)?;
        self.tokens.next();
        Some(op)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::services::arithmetic::lexer::tokenize;

    fn parse_str(input: &str) -> Result<Ast, EvalError> {
        parse(&tokenize(input)?)
    }

    fn num(n: f64) -> Operand {
        Operand { negated: false, value: n }
    }

    fn neg(n: f64) -> Operand {
        Operand { negated: true, value: n }
    }

    fn term(first: Operand) -> Term {
        Term { first, rest: Vec::new() }
    }

    #[test]
    fn test_single_number() {
        assert_eq!(
            parse_str("42"),
            Ok(Ast { first: term(num(42.0)), rest: vec![] })
        );
    }

    #[test]
    fn test_multiplication_binds_tighter() {
        assert_eq!(
            parse_str("2+3*4"),
            Ok(Ast {
                first: term(num(2.0)),
                rest: vec![(
                    BinaryOp::Add,
                    Term { first: num(3.0), rest: vec![(BinaryOp::Multiply, num(4.0))] },
                )],
            })
        );
    }

    #[test]
    fn test_chains_stay_in_order() {
        assert_eq!(
            parse_str("8-2-1"),
            Ok(Ast {
                first: term(num(8.0)),
                rest: vec![
                    (BinaryOp::Subtract, term(num(2.0))),
                    (BinaryOp::Subtract, term(num(1.0))),
                ],
            })
        );
    }

    #[test]
    fn test_unary_signs_fold() {
        assert_eq!(parse_str("-5").unwrap().first, term(neg(5.0)));
        assert_eq!(parse_str("+5").unwrap().first, term(num(5.0)));
        assert_eq!(parse_str("--5").unwrap().first, term(num(5.0)));
        assert_eq!(parse_str("-+-5").unwrap().first, term(num(5.0)));
        assert_eq!(
            parse_str("5*-2").unwrap().first,
            Term { first: num(5.0), rest: vec![(BinaryOp::Multiply, neg(2.0))] }
        );
    }

    #[test]
    fn test_long_sign_run() {
        let input = format!("{}1", "-".repeat(100_001));
        assert_eq!(parse_str(&input).unwrap().first, term(neg(1.0)));
    }

    #[test]
    fn test_empty() {
        assert_eq!(parse_str(""), Err(EvalError::EmptyExpression));
    }

    #[test]
    fn test_trailing_operator() {
        assert_eq!(parse_str("5*"), Err(EvalError::UnexpectedEnd));
        assert_eq!(parse_str("5+"), Err(EvalError::UnexpectedEnd));
        assert_eq!(parse_str("-"), Err(EvalError::UnexpectedEnd));
    }

    #[test]
    fn test_misplaced_operator() {
        assert_eq!(parse_str("*5"), Err(EvalError::UnexpectedToken));
        assert_eq!(parse_str("5**2"), Err(EvalError::UnexpectedToken));
        assert_eq!(parse_str("5//2"), Err(EvalError::UnexpectedToken));
    }

    #[test]
    fn test_adjacent_numbers() {
        let tokens = [Token::Number(1.0), Token::Number(2.0)];
        assert_eq!(parse(&tokens), Err(EvalError::UnexpectedToken));
    }
}
