//! Infrastructure layer - configuration and platform storage
//!
//! This module contains the configuration loader and the file-backed
//! key/value store used outside of tests.

pub mod config;
pub mod platform;

// Re-export infrastructure components
pub use self::config::*;
pub use platform::*;
