//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Expression buffer and the display state built on it
//! - Keypad keys
//! - Application settings
//! - Message types for the event system

pub mod display;
pub mod expression;
pub mod keys;
pub mod messages;
pub mod settings;

pub use display::{DisplayState, Outcome};
pub use expression::Expression;
pub use keys::Key;
pub use messages::Message;
pub use settings::{AppSettings, ThemeMode};
