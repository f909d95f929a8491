//! Storage repository for persisted session selections
//!
//! A plain string key/value store, the shape of browser local storage.
//! Calls are synchronous and never interleave internally.

use crate::shared::error::SessionError;

/// Key/value store trait
pub trait KeyValueStore: Send + Sync {
    /// Read a value; a key that was never written is `Ok(None)`
    fn get_item(&self, key: &str) -> Result<Option<String>, SessionError>;

    /// Write a value, replacing any previous one
    fn set_item(&self, key: &str, value: &str) -> Result<(), SessionError>;

    /// Delete a value
    fn remove_item(&self, key: &str) -> Result<(), SessionError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for std::sync::Arc<T> {
    fn get_item(&self, key: &str) -> Result<Option<String>, SessionError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), SessionError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), SessionError> {
        (**self).remove_item(key)
    }
}
