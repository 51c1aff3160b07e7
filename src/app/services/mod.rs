//! Services layer - business operations and utilities.
//!
//! This module contains business logic and operations:
//! - Arithmetic tokenizing, parsing and evaluation
//! - Result formatting

pub mod arithmetic;
pub mod number_format;
