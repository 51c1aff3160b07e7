use thiserror::Error;

/// Indicator shown when an expression divides by zero.
pub const DIVISION_BY_ZERO_MESSAGE: &str = "Error: Division by zero";

/// Indicator shown for every other evaluation failure.
pub const GENERIC_ERROR_MESSAGE: &str = "Error";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Settings error: {0}")]
    Settings(String),
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;

/// Why an expression could not be turned into a number.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("empty expression")]
    EmptyExpression,

    #[error("unexpected character '{0}'")]
    UnexpectedCharacter(char),

    #[error("invalid number literal '{0}'")]
    InvalidNumber(String),

    #[error("unexpected token")]
    UnexpectedToken,

    #[error("unexpected end of expression")]
    UnexpectedEnd,

    #[error("result is not a finite number")]
    Overflow,
}

impl EvalError {
    /// Text shown in the display for this failure.
    pub fn display_message(&self) -> &'static str {
        match self {
            EvalError::DivisionByZero => DIVISION_BY_ZERO_MESSAGE,
            _ => GENERIC_ERROR_MESSAGE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
        assert!(app_err.to_string().contains("file not found"));
    }

    #[test]
    fn test_error_display() {
        let err = AppError::Settings("invalid font size".to_string());
        assert_eq!(err.to_string(), "Settings error: invalid font size");

        let err = EvalError::UnexpectedCharacter('x');
        assert_eq!(err.to_string(), "unexpected character 'x'");
    }

    #[test]
    fn test_division_by_zero_has_its_own_message() {
        assert_eq!(
            EvalError::DivisionByZero.display_message(),
            DIVISION_BY_ZERO_MESSAGE
        );
    }

    #[test]
    fn test_other_failures_share_generic_message() {
        let others = [
            EvalError::EmptyExpression,
            EvalError::UnexpectedCharacter('a'),
            EvalError::InvalidNumber("1.2.3".to_string()),
            EvalError::UnexpectedToken,
            EvalError::UnexpectedEnd,
            EvalError::Overflow,
        ];
        for err in others {
            assert_eq!(err.display_message(), GENERIC_ERROR_MESSAGE, "{err:?}");
        }
    }
}
