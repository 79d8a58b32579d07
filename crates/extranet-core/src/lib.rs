#![doc = include_str!("../README.md")]

mod error;
mod settings;

/// This module provides the token storage capability and an in-memory
/// implementation of it.
pub mod store;

pub use error::{ApiError, MissingFieldError};
pub use settings::ClientSettings;
