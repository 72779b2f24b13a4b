//! TTL-boxed forecast cache
//!
//! The aggregated weather result is cached under a single well-known key so
//! repeated dashboard loads within the TTL window skip the full
//! (mountain x model) fetch fan-out. The store itself is injected: the
//! binary uses the persistent fjall backend, tests use the in-memory one.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;

use chrono::Utc;
use fjall::Keyspace;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::{debug, warn};

use crate::{Result, SnowcastError};

/// Well-known key the aggregated weather is stored under
pub const CACHE_KEY: &str = "weather-cache";

/// Default time-to-live for cached weather (30 minutes)
pub const DEFAULT_TTL: Duration = Duration::from_secs(30 * 60);

/// Key-value store boundary the forecast cache writes JSON strings through
pub trait CacheStore: Send + Sync {
    fn read(&self, key: &str) -> Result<Option<String>>;
    fn write(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// Persistent store backed by a fjall keyspace
pub struct FjallStore {
    store: Keyspace,
}

impl FjallStore {
    /// Open (or create) the store at the given directory
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let db = fjall::Database::builder(&path)
            .open()
            .map_err(|e| SnowcastError::cache(e.to_string()))?;
        let store = db
            .keyspace("cache", fjall::KeyspaceCreateOptions::default)
            .map_err(|e| SnowcastError::cache(e.to_string()))?;
        Ok(Self { store })
    }
}

impl CacheStore for FjallStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .store
            .get(key.as_bytes())
            .map_err(|e| SnowcastError::cache(e.to_string()))?;
        Ok(value.map(|v| String::from_utf8_lossy(&v).into_owned()))
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.store
            .insert(key.as_bytes(), value.as_bytes())
            .map_err(|e| SnowcastError::cache(e.to_string()))?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.store
            .remove(key.as_bytes())
            .map_err(|e| SnowcastError::cache(e.to_string()))?;
        Ok(())
    }
}

/// In-memory store for tests and ephemeral use
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl CacheStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| SnowcastError::cache("memory store poisoned"))?;
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| SnowcastError::cache("memory store poisoned"))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| SnowcastError::cache("memory store poisoned"))?;
        entries.remove(key);
        Ok(())
    }
}

/// Stored envelope: the payload plus its write timestamp
#[derive(Serialize, Deserialize)]
struct CacheEnvelope<T> {
    /// Unix timestamp in milliseconds
    timestamp: i64,
    data: T,
}

impl<T> CacheEnvelope<T> {
    fn is_fresh(&self, now_ms: i64, ttl: Duration) -> bool {
        now_ms.saturating_sub(self.timestamp) <= ttl.as_millis() as i64
    }
}

/// TTL wrapper around an injected [`CacheStore`]
///
/// Every failure mode on the read path (backend error, malformed JSON,
/// expired entry) degrades to a cache miss; writes are best-effort.
pub struct ForecastCache {
    store: Box<dyn CacheStore>,
    ttl: Duration,
}

impl ForecastCache {
    #[must_use]
    pub fn new(store: Box<dyn CacheStore>, ttl: Duration) -> Self {
        Self { store, ttl }
    }

    /// Return the cached value if present and fresh; removes stale entries
    pub fn get<T: DeserializeOwned>(&self) -> Option<T> {
        let raw = match self.store.read(CACHE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!("Cache read failed, treating as miss: {}", e);
                return None;
            }
        };

        let envelope: CacheEnvelope<T> = match serde_json::from_str(&raw) {
            Ok(envelope) => envelope,
            Err(e) => {
                // Corrupted entry is a miss, not a hard error
                debug!("Cache entry malformed, treating as miss: {}", e);
                return None;
            }
        };

        if envelope.is_fresh(Utc::now().timestamp_millis(), self.ttl) {
            debug!("Cache hit under key {}", CACHE_KEY);
            Some(envelope.data)
        } else {
            debug!("Cache entry expired, removing");
            if let Err(e) = self.store.remove(CACHE_KEY) {
                warn!("Failed to remove stale cache entry: {}", e);
            }
            None
        }
    }

    /// Store a value, stamping it with the current time
    pub fn set<T: Serialize>(&self, data: &T) {
        let envelope = CacheEnvelope {
            timestamp: Utc::now().timestamp_millis(),
            data,
        };
        match serde_json::to_string(&envelope) {
            Ok(raw) => {
                if let Err(e) = self.store.write(CACHE_KEY, &raw) {
                    warn!("Cache write failed: {}", e);
                }
            }
            Err(e) => warn!("Cache serialization failed: {}", e),
        }
    }

    /// Remove the cached entry
    pub fn clear(&self) {
        if let Err(e) = self.store.remove(CACHE_KEY) {
            warn!("Cache clear failed: {}", e);
        }
    }
}
