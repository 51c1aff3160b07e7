/// Text of the arithmetic expression under construction, e.g. `"12+7*"`.
///
/// Nothing here checks syntax; that only happens when the text is evaluated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expression {
    text: String,
}

impl Expression {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn push_str(&mut self, token: &str) {
        self.text.push_str(token);
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Swap the whole buffer for `text`.
    pub fn replace(&mut self, text: String) {
        self.text = text;
    }
}
