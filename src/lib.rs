// Public API for integration tests and embedding in a presentation layer

pub mod bridge;
pub mod config;
pub mod defaults;
pub mod engine;
pub mod error;
pub mod handlers;
pub mod protocol;
pub mod random;
pub mod setup_store;
pub mod state;
pub mod storage;
pub mod types;
