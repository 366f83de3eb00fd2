//! Application state management

use mongodb::{Client, Database};

use crate::config::Config;

/// Live handles for the selected storage backend
#[derive(Clone)]
pub enum Storage {
    /// Volatile in-process store
    Memory,
    /// MongoDB-backed store; the client is kept for shutdown cleanup
    Mongo { client: Client, db: Database },
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub storage: Storage,
}
