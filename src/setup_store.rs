//! Load and save the setup blob.
//!
//! Loading never fails: anything missing, unparseable or structurally invalid
//! falls back to the built-in defaults.

use crate::defaults::{default_setup, STORAGE_KEY};
use crate::error::{GameError, GameResult};
use crate::storage::{KeyValueStore, StorageResult};
use crate::types::SetupState;
use std::collections::HashSet;

pub struct SetupStore {
    store: Box<dyn KeyValueStore>,
    key: String,
}

impl SetupStore {
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self::with_key(store, STORAGE_KEY)
    }

    pub fn with_key(store: Box<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read the persisted setup, or the defaults when there is nothing usable
    pub fn load(&self) -> SetupState {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::info!("No saved setup under '{}', using defaults", self.key);
                return default_setup();
            }
            Err(e) => {
                tracing::warn!("Failed to read saved setup: {}. Using defaults.", e);
                return default_setup();
            }
        };

        match parse_setup(&raw) {
            Ok(setup) => {
                tracing::debug!(
                    "Loaded setup with {} players and {} categories",
                    setup.players.len(),
                    setup.categories.len()
                );
                setup
            }
            Err(e) => {
                tracing::warn!("{}. Using defaults.", e);
                default_setup()
            }
        }
    }

    /// Overwrite the persisted setup with `setup`
    pub fn save(&self, setup: &SetupState) -> StorageResult<()> {
        let json = serde_json::to_string(setup)?;
        self.store.set(&self.key, &json)
    }
}

/// Parse and validate a raw blob
pub fn parse_setup(raw: &str) -> GameResult<SetupState> {
    let setup: SetupState = serde_json::from_str(raw)
        .map_err(|e| GameError::InvalidPersistedState(format!("unparseable setup: {e}")))?;
    validate_setup(&setup)?;
    Ok(setup)
}

pub fn validate_setup(setup: &SetupState) -> GameResult<()> {
    if setup.players.is_empty() {
        return Err(GameError::InvalidPersistedState("no players".to_string()));
    }
    if setup.categories.is_empty() {
        return Err(GameError::InvalidPersistedState("no categories".to_string()));
    }

    let mut player_ids = HashSet::new();
    if let Some(dup) = setup.players.iter().find(|p| !player_ids.insert(p.id.as_str())) {
        return Err(GameError::InvalidPersistedState(format!(
            "duplicate player id '{}'",
            dup.id
        )));
    }

    let mut category_ids = HashSet::new();
    if let Some(dup) = setup
        .categories
        .iter()
        .find(|c| !category_ids.insert(c.id.as_str()))
    {
        return Err(GameError::InvalidPersistedState(format!(
            "duplicate category id '{}'",
            dup.id
        )));
    }

    Ok(())
}
