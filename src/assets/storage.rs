//! Named response stores, one per asset version.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use super::network::{AssetRequest, AssetResponse};

type Store = HashMap<AssetRequest, AssetResponse>;

// == Cache Storage ==
/// Process-wide set of named stores. Cloning shares the same stores.
#[derive(Debug, Clone, Default)]
pub struct CacheStorage {
    stores: Arc<RwLock<HashMap<String, Store>>>,
}

impl CacheStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Names of all existing stores, sorted.
    pub async fn keys(&self) -> Vec<String> {
        let mut names: Vec<String> = self.stores.read().await.keys().cloned().collect();
        names.sort();
        names
    }

    pub async fn has(&self, name: &str) -> bool {
        self.stores.read().await.contains_key(name)
    }

    /// Creates `name` (or replaces it) with exactly `entries`, in one step.
    pub async fn replace_all(&self, name: &str, entries: Vec<(AssetRequest, AssetResponse)>) {
        let store: Store = entries.into_iter().collect();
        self.stores.write().await.insert(name.to_string(), store);
    }

    /// Writes one response into an existing store.
    ///
    /// Returns false and writes nothing if the store is gone, so a late write
    /// cannot resurrect a store deleted by activation.
    pub async fn put(&self, name: &str, request: AssetRequest, response: AssetResponse) -> bool {
        match self.stores.write().await.get_mut(name) {
            Some(store) => {
                store.insert(request, response);
                true
            }
            None => false,
        }
    }

    /// Exact-match lookup in one store.
    pub async fn match_request(&self, name: &str, request: &AssetRequest) -> Option<AssetResponse> {
        self.stores
            .read()
            .await
            .get(name)
            .and_then(|store| store.get(request))
            .cloned()
    }

    /// Deletes a store. Returns whether it existed.
    pub async fn delete(&self, name: &str) -> bool {
        self.stores.write().await.remove(name).is_some()
    }

    /// Number of responses in a store, `None` if the store does not exist.
    pub async fn entry_count(&self, name: &str) -> Option<usize> {
        self.stores.read().await.get(name).map(|store| store.len())
    }
}
