//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (Expression, DisplayState, Keys, Messages, Settings)
//! - `services/` - Business operations (arithmetic engine, result formatting)
//! - `infrastructure/` - External integrations (platform, logging, error)
//! - `state.rs` - Main application coordinator and message dispatcher

pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod state;

// Re-exports for convenient external access
pub use domain::{AppSettings, DisplayState, Expression, Key, Message, Outcome, ThemeMode};
pub use infrastructure::error::{AppError, EvalError};
pub use infrastructure::platform::detect_system_dark_mode;
pub use services::arithmetic::evaluate;
pub use services::number_format::format_result;
