mod roles;
mod round;
mod setup;

use crate::random::{Randomness, SystemRandomness};
use crate::setup_store::SetupStore;
use crate::storage::MemoryStore;
use crate::types::*;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

/// Shared session state: the setup, the single live round and the
/// end-of-round roles toggle.
///
/// Locks are always taken in the order setup, round, roles_shown. Setup
/// mutations save while still holding the setup write lock, so every save
/// writes the state as it is right now.
#[derive(Clone)]
pub struct AppState {
    pub setup: Arc<RwLock<SetupState>>,
    pub round: Arc<RwLock<Option<Round>>>,
    pub roles_shown: Arc<RwLock<bool>>,
    store: Arc<SetupStore>,
    rng: Arc<Mutex<Box<dyn Randomness>>>,
}

impl AppState {
    /// Start a session from whatever the store holds
    pub fn new(store: SetupStore, rng: Box<dyn Randomness>) -> Self {
        let setup = store.load();
        Self {
            setup: Arc::new(RwLock::new(setup)),
            round: Arc::new(RwLock::new(None)),
            roles_shown: Arc::new(RwLock::new(false)),
            store: Arc::new(store),
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    /// Throwaway session backed by memory, seeded from the OS
    pub fn in_memory() -> Self {
        Self::new(
            SetupStore::new(Box::new(MemoryStore::new())),
            Box::new(SystemRandomness::new()),
        )
    }

    /// Write the given setup, logging instead of failing
    fn persist(&self, setup: &SetupState) {
        if let Err(e) = self.store.save(setup) {
            tracing::warn!("Failed to save setup under '{}': {}", self.store.key(), e);
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::in_memory()
    }
}
