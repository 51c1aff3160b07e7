use crate::app::domain::messages::Message;

/// A button on the calculator keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Digit, decimal point or operator; appended as-is to the expression.
    Token(char),
    Clear,
    Evaluate,
}

impl Key {
    pub const DIGITS: [Key; 10] = [
        Key::Token('0'),
        Key::Token('1'),
        Key::Token('2'),
        Key::Token('3'),
        Key::Token('4'),
        Key::Token('5'),
        Key::Token('6'),
        Key::Token('7'),
        Key::Token('8'),
        Key::Token('9'),
    ];

    pub const OPERATORS: [Key; 4] = [
        Key::Token('+'),
        Key::Token('-'),
        Key::Token('*'),
        Key::Token('/'),
    ];

    /// Map a button label back to its key.
    pub fn from_label(label: &str) -> Option<Key> {
        let mut chars = label.chars();
        let (first, rest) = (chars.next()?, chars.next());
        if rest.is_some() {
            return None;
        }
        match first {
            'C' => Some(Key::Clear),
            '=' => Some(Key::Evaluate),
            '0'..='9' | '.' | '+' | '-' | '*' | '/' => Some(Key::Token(first)),
            _ => None,
        }
    }

    pub fn label(&self) -> String {
        match self {
            Key::Token(c) => c.to_string(),
            Key::Clear => "C".to_string(),
            Key::Evaluate => "=".to_string(),
        }
    }

    pub fn message(&self) -> Message {
        match self {
            Key::Token(c) => Message::Append(*c),
            Key::Clear => Message::Clear,
            Key::Evaluate => Message::Evaluate,
        }
    }

    /// Operator keys get their own colour in the keypad.
    pub fn is_operator(&self) -> bool {
        matches!(self, Key::Token('+' | '-' | '*' | '/'))
    }
}
