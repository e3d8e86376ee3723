use std::sync::Mutex;

use crate::analysis::Advisor;
use crate::error::AdvisorError;
use crate::platform::{KeyValueStore, MemoryStore};

pub struct AppState {
    advisor: Advisor<'static>,
    store: Mutex<Box<dyn KeyValueStore + Send>>,
}

impl AppState {
    pub fn new(store: Box<dyn KeyValueStore + Send>) -> Self {
        Self {
            advisor: Advisor::default(),
            store: Mutex::new(store),
        }
    }

    pub fn new_in_memory() -> Self {
        Self::new(Box::new(MemoryStore::new()))
    }

    pub fn advisor(&self) -> &Advisor<'static> {
        &self.advisor
    }

    /// Run `f` with exclusive access to the key-value store.
    pub fn with_store<T>(
        &self,
        f: impl FnOnce(&mut dyn KeyValueStore) -> Result<T, AdvisorError>,
    ) -> Result<T, AdvisorError> {
        let mut guard = self
            .store
            .lock()
            .map_err(|_| AdvisorError::Storage("state store lock poisoned".to_string()))?;
        f(&mut **guard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_store_round_trip() {
        let state = AppState::new_in_memory();
        state.with_store(|s| s.set("k", "v")).unwrap();
        let value = state.with_store(|s| s.get("k")).unwrap();
        assert_eq!(value.as_deref(), Some("v"));
    }

    #[test]
    fn test_advisor_uses_builtin_catalog() {
        let state = AppState::new_in_memory();
        assert_eq!(state.advisor().profiles().len(), 5);
    }
}
