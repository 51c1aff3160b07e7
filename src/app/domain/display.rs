use crate::app::domain::expression::Expression;
use crate::app::domain::messages::Message;
use crate::app::infrastructure::error::EvalError;
use crate::app::services::arithmetic;
use crate::app::services::number_format::format_result;

/// Result of an `evaluate()` call.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Value(f64),
    Failed(EvalError),
}

/// Expression buffer plus what the display field should currently show.
///
/// The display text is the buffer itself, except right after a failed
/// evaluation, when it holds an error indicator over an empty buffer.
#[derive(Debug, Clone, Default)]
pub struct DisplayState {
    expression: Expression,
    display: String,
    last_result: Option<f64>,
}

impl DisplayState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expression(&self) -> &str {
        self.expression.as_str()
    }

    /// Text the display field should show.
    pub fn display_text(&self) -> &str {
        &self.display
    }

    /// Value of the most recent successful evaluation.
    pub fn last_result(&self) -> Option<f64> {
        self.last_result
    }

    pub fn append(&mut self, token: &str) {
        self.expression.push_str(token);
        self.refresh();
    }

    pub fn clear(&mut self) {
        self.expression.clear();
        self.refresh();
    }

    /// Evaluate the buffer. On success the buffer becomes the result text;
    /// on failure it is emptied and the display shows an indicator.
    pub fn evaluate(&mut self) -> Outcome {
        match arithmetic::evaluate(self.expression.as_str()) {
            Ok(value) => {
                self.expression.replace(format_result(value));
                self.last_result = Some(value);
                self.refresh();
                Outcome::Value(value)
            }
            Err(err) => {
                self.expression.clear();
                self.display = err.display_message().to_string();
                Outcome::Failed(err)
            }
        }
    }

    /// Apply one keypad message. Returns false for messages that are not
    /// display transitions (window close), leaving the state untouched.
    pub fn apply(&mut self, msg: Message) -> bool {
        match msg {
            Message::Append(c) => {
                let mut buf = [0u8; 4];
                self.append(c.encode_utf8(&mut buf));
            }
            Message::Clear => self.clear(),
            Message::Evaluate => {
                let expression = self.expression().to_string();
                match self.evaluate() {
                    Outcome::Value(value) => tracing::debug!(%expression, value, "evaluated"),
                    Outcome::Failed(err) => tracing::debug!(%expression, error = %err, "evaluation failed"),
                }
            }
            Message::WindowClose => return false,
        }
        true
    }

    fn refresh(&mut self) {
        self.display.clear();
        self.display.push_str(self.expression.as_str());
    }
}
