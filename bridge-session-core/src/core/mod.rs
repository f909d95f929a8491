//! Core session functionality
//!
//! This module contains the chain registry, the per-family network
//! resolvers, the session state store, persisted selections and the
//! login controller tying them together.

pub mod auth;
pub mod registry;
pub mod resolver;
pub mod session;
pub mod storage;

pub use auth::{LoginOutcome, LoginSessionController};
pub use resolver::{resolve, resolver_for, NetworkResolver, ResolvedNetwork};
pub use session::{AttemptId, SessionEvent, SessionState, StagedLogin};
pub use storage::{LastSelection, LoginSelection, LoginStorage, MemoryStore};
