//! Domain repositories
//!
//! Ports onto the external collaborators: wallet providers and the
//! key/value store holding last-used selections.

pub mod storage_repository;
pub mod wallet_provider;

// Re-export repositories
pub use storage_repository::*;
pub use wallet_provider::*;
