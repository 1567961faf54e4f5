//! Versioned, network-first asset cache.
//!
//! Lifecycle per version: `Installing -> Installed -> Activating -> Active`,
//! ending in `Redundant` when a newer version takes over or an install fails.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use super::network::{AssetRequest, AssetResponse, Network};
use super::storage::CacheStorage;
use crate::error::AssetError;

/// Version tag of the bundled shopping-list client.
pub const DEFAULT_ASSET_VERSION: &str = "shopping-app-v7.2.0";

/// Resources every install pre-fetches.
pub const DEFAULT_MANIFEST: &[&str] = &[
    "/",
    "/index.html",
    "/style.css",
    "/script.js",
    "/manifest.json",
];

// == Manifest ==
/// The asset set of one deploy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetManifest {
    /// Store name; must change on every deploy
    pub version: String,
    pub resources: Vec<String>,
}

impl AssetManifest {
    pub fn new<I, S>(version: impl Into<String>, resources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            version: version.into(),
            resources: resources.into_iter().map(Into::into).collect(),
        }
    }
}

impl Default for AssetManifest {
    fn default() -> Self {
        Self::new(DEFAULT_ASSET_VERSION, DEFAULT_MANIFEST.iter().copied())
    }
}

// == Worker State ==
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerState {
    Installing,
    /// Installed and allowed to activate at once
    Installed,
    Activating,
    Active,
    Redundant,
}

#[derive(Debug, Default)]
struct Registry {
    active: Option<String>,
    states: HashMap<String, WorkerState>,
}

// == Asset Cache ==
/// Network-first cache over a set of named, versioned stores.
///
/// Every request goes to the network first. Successful responses are copied
/// into the active store in a detached task; the cached copy is only served
/// when the network fails.
pub struct AssetCache {
    storage: CacheStorage,
    network: Arc<dyn Network>,
    registry: RwLock<Registry>,
}

impl AssetCache {
    pub fn new(network: Arc<dyn Network>) -> Self {
        Self::with_storage(network, CacheStorage::new())
    }

    /// Uses existing stores, e.g. ones left by a previous version.
    pub fn with_storage(network: Arc<dyn Network>, storage: CacheStorage) -> Self {
        Self {
            storage,
            network,
            registry: RwLock::new(Registry::default()),
        }
    }

    pub fn storage(&self) -> &CacheStorage {
        &self.storage
    }

    /// Version currently serving requests.
    pub async fn active_version(&self) -> Option<String> {
        self.registry.read().await.active.clone()
    }

    pub async fn state(&self, version: &str) -> Option<WorkerState> {
        self.registry.read().await.states.get(version).copied()
    }

    async fn set_state(&self, version: &str, state: WorkerState) {
        self.registry
            .write()
            .await
            .states
            .insert(version.to_string(), state);
    }

    // == Install ==
    /// Fetches every manifest resource and stores them under the manifest's
    /// version.
    ///
    /// All or nothing: the first failed fetch or non-success status aborts the
    /// install, nothing is written and the active version keeps serving.
    /// Reinstalling the active version refreshes its store but leaves it
    /// `Active` whatever the outcome.
    pub async fn install(&self, manifest: &AssetManifest) -> Result<(), AssetError> {
        let version = manifest.version.as_str();
        let reinstall = self.active_version().await.as_deref() == Some(version);
        info!("Installing asset version {}", version);
        if !reinstall {
            self.set_state(version, WorkerState::Installing).await;
        }

        let mut entries = Vec::with_capacity(manifest.resources.len());
        for resource in &manifest.resources {
            let request = AssetRequest::get(resource.clone());
            let fetched = self.network.fetch(&request).await;
            let reason = match fetched {
                Ok(response) if response.status.is_success() => {
                    entries.push((request, response));
                    continue;
                }
                Ok(response) => format!("status {}", response.status.as_u16()),
                Err(err) => err.to_string(),
            };

            warn!("Install of {} failed on {}: {}", version, resource, reason);
            if !reinstall {
                self.set_state(version, WorkerState::Redundant).await;
            }
            return Err(AssetError::InstallFailed {
                version: version.to_string(),
                resource: resource.clone(),
                reason,
            });
        }

        self.storage.replace_all(version, entries).await;
        if !reinstall {
            self.set_state(version, WorkerState::Installed).await;
        }
        info!(
            "Installed asset version {} ({} resources)",
            version,
            manifest.resources.len()
        );
        Ok(())
    }

    // == Activate ==
    /// Makes `version` current: every other store is deleted and all clients
    /// are served by `version` from the next request on.
    ///
    /// Returns the names of the deleted stores.
    pub async fn activate(&self, version: &str) -> Result<Vec<String>, AssetError> {
        let installed = matches!(
            self.state(version).await,
            Some(WorkerState::Installed | WorkerState::Active)
        );
        if !installed || !self.storage.has(version).await {
            return Err(AssetError::NotInstalled(version.to_string()));
        }

        info!("Activating asset version {}", version);
        self.set_state(version, WorkerState::Activating).await;

        let mut deleted = Vec::new();
        for name in self.storage.keys().await {
            if name != version && self.storage.delete(&name).await {
                info!("Deleting old cache: {}", name);
                deleted.push(name);
            }
        }

        let mut registry = self.registry.write().await;
        if let Some(previous) = registry.active.replace(version.to_string()) {
            if previous != version {
                registry.states.insert(previous, WorkerState::Redundant);
            }
        }
        registry.states.insert(version.to_string(), WorkerState::Active);
        info!("Asset version {} active, clients claimed", version);

        Ok(deleted)
    }

    // == Handle ==
    /// Serves one request, network first.
    ///
    /// On network success the live response is returned immediately and a
    /// copy is written to the active store in the background. On network
    /// failure the cached response for the exact request is served; with no
    /// cached copy the failure is returned as `NetworkUnavailable`.
    pub async fn handle(&self, request: AssetRequest) -> Result<AssetResponse, AssetError> {
        let active = self.active_version().await;

        let fetched = self.network.fetch(&request).await;
        match fetched {
            Ok(response) => {
                if let Some(version) = active.filter(|_| request.is_cacheable()) {
                    let storage = self.storage.clone();
                    let copy = response.clone();
                    tokio::spawn(async move {
                        if !storage.put(&version, request, copy).await {
                            debug!("Store {} gone before write completed", version);
                        }
                    });
                }
                Ok(response)
            }
            Err(err) => {
                debug!("Network failed for {}: {}", request.url, err);

                if let Some(version) = active {
                    if let Some(cached) = self.storage.match_request(&version, &request).await {
                        debug!("Serving {} from cache {}", request.url, version);
                        return Ok(cached);
                    }
                }

                Err(AssetError::NetworkUnavailable {
                    url: request.url,
                    reason: err.to_string(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_manifest() {
        let manifest = AssetManifest::default();
        assert_eq!(manifest.version, "shopping-app-v7.2.0");
        assert_eq!(manifest.resources.len(), 5);
        assert_eq!(manifest.resources[0], "/");
        assert_eq!(manifest.resources[4], "/manifest.json");
    }

    #[test]
    fn test_manifest_new_accepts_strings() {
        let manifest = AssetManifest::new("v9", vec!["/a".to_string(), "/b".to_string()]);
        assert_eq!(manifest.resources, vec!["/a", "/b"]);
    }
}
