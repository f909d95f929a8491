//! Domain layer - entities and repository ports
//!
//! This module contains the session's domain types and the traits the
//! core uses to reach wallets and storage.

pub mod entities;
pub mod repositories;

// Re-export domain components
pub use entities::*;
pub use repositories::*;
