use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use tracing::warn;

/// File-backed collection cache: one JSON file per well-known key. A missing
/// or unreadable file reads as an empty collection, and write failures are
/// logged rather than surfaced, mirroring best-effort local persistence.
pub struct CacheStore {
    dir: PathBuf,
}

impl CacheStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        let path = self.dir.join(format!("{}.json", key));
        match fs::read(&path) {
            Ok(bytes) => serde_json::from_slice(&bytes).unwrap_or_default(),
            Err(_) => Vec::new(),
        }
    }

    pub fn save<T: Serialize>(&self, key: &str, items: &[T]) {
        if let Err(e) = fs::create_dir_all(&self.dir) {
            warn!("Could not create cache directory {:?}: {}", self.dir, e);
            return;
        }

        let path = self.dir.join(format!("{}.json", key));
        match serde_json::to_vec_pretty(items) {
            Ok(bytes) => {
                if let Err(e) = fs::write(&path, bytes) {
                    warn!("Could not write cache file {:?}: {}", path, e);
                }
            }
            Err(e) => warn!("Could not serialize cache for {}: {}", key, e),
        }
    }
}
