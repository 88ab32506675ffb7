use crate::defaults::STORAGE_KEY;
use std::path::PathBuf;

/// Runtime configuration, read from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding the file-backed store
    pub data_dir: PathBuf,
    /// Name of the persisted setup entry
    pub storage_key: String,
    /// Fixed seed for reproducible sessions
    pub rng_seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            storage_key: STORAGE_KEY.to_string(),
            rng_seed: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let data_dir = std::env::var("IMPOSTER_DATA_DIR")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.data_dir);

        let storage_key = std::env::var("IMPOSTER_STORAGE_KEY")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.storage_key);

        let rng_seed = match std::env::var("IMPOSTER_SEED") {
            Ok(raw) => match raw.trim().parse::<u64>() {
                Ok(seed) => Some(seed),
                Err(_) => {
                    tracing::warn!("Ignoring invalid IMPOSTER_SEED '{}'", raw);
                    None
                }
            },
            Err(_) => None,
        };

        Self {
            data_dir,
            storage_key,
            rng_seed,
        }
    }
}
