//! Shared types, constants, and errors
//!
//! This module contains common types, the static chain tables, and the
//! error type used throughout the session core.

pub mod constants;
pub mod error;
pub mod types;

// Re-export shared components
pub use constants::*;
pub use error::*;
pub use types::*;
