//! Server state management
//!
//! One shared map behind an RwLock; writers are serialized, so ring adds
//! cannot race each other into duplicate rows.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::auth::AuthConfig;
use crate::store::MapStore;

pub struct ServerState {
    pub store: RwLock<MapStore>,
    pub auth: AuthConfig,
    data_path: Option<PathBuf>,
}

impl ServerState {
    /// In-memory state with a freshly seeded map
    pub fn new(auth: AuthConfig) -> Self {
        let mut store = MapStore::new();
        store.seed_if_empty();
        Self {
            store: RwLock::new(store),
            auth,
            data_path: None,
        }
    }

    /// State backed by a JSON data file, loading it if present
    pub fn with_data_file(auth: AuthConfig, path: PathBuf) -> anyhow::Result<Self> {
        let store = MapStore::load_or_seed(&path)?;
        Ok(Self {
            store: RwLock::new(store),
            auth,
            data_path: Some(path),
        })
    }

    /// Write the store to disk after a mutation. Persistence failures are
    /// logged rather than surfaced — the in-memory state is still correct.
    pub fn persist(&self) {
        let Some(path) = &self.data_path else {
            return;
        };
        let store = self.store.read().unwrap();
        if let Err(e) = store.save(path) {
            tracing::warn!("failed to persist map data to {}: {e}", path.display());
        }
    }
}
