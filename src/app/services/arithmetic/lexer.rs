use std::iter::Peekable;
use std::str::CharIndices;

use crate::app::infrastructure::error::EvalError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
}

/// Split an expression into tokens.
///
/// Accepts digits, `.`, `+ - * /` and ASCII whitespace; anything else is an
/// `UnexpectedCharacter`.
pub fn tokenize(input: &str) -> Result<Vec<Token>, EvalError> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some(&(start, c)) = chars.peek() {
        let token = match c {
            c if c.is_ascii_whitespace() => {
                chars.next();
                continue;
            }
            '0'..='9' | '.' => read_number(input, start, &mut chars)?,
            '+' => single(&mut chars, Token::Plus),
            '-' => single(&mut chars, Token::Minus),
            '*' => single(&mut chars, Token::Star),
            '/' => single(&mut chars, Token::Slash),
            other => return Err(EvalError::UnexpectedCharacter(other)),
        };
        tokens.push(token);
    }

    Ok(tokens)
}

fn single(chars: &mut Peekable<CharIndices<'_>>, token: Token) -> Token {
    chars.next();
    token
}

fn read_number(
    input: &str,
    start: usize,
    chars: &mut Peekable<CharIndices<'_>>,
) -> Result<Token, EvalError> {
    let mut end = start;
    let mut seen_dot = false;
    let mut seen_digit = false;

    while let Some(&(i, c)) = chars.peek() {
        match c {
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            // A second dot belongs to this literal and makes it invalid.
            '.' => {
                let literal = &input[start..=i];
                return Err(EvalError::InvalidNumber(literal.to_string()));
            }
            _ => break,
        }
        end = i + c.len_utf8();
        chars.next();
    }

    let literal = &input[start..end];
    if !seen_digit {
        return Err(EvalError::InvalidNumber(literal.to_string()));
    }

    literal
        .parse::<f64>()
        .map(Token::Number)
        .map_err(|_| EvalError::InvalidNumber(literal.to_string()))
}
