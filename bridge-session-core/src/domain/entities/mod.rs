//! Domain entities and value objects
//!
//! This module contains the networks wallets report, the login user,
//! and the record of a rejected login.

pub mod attempt;
pub mod network;
pub mod user;

// Re-export entities
pub use attempt::*;
pub use network::*;
pub use user::*;
