use chrono::{DateTime, Duration, Utc};
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::LeagueApiError;

#[derive(Debug, Clone)]
struct CachedCall {
    body: Value,
    expires_at: DateTime<Utc>,
}

/// In-memory cache of GET responses keyed by full URL.
#[derive(Debug, Default)]
pub struct CallCache {
    entries: Mutex<HashMap<String, CachedCall>>,
}

impl CallCache {
    pub fn new() -> Self {
        CallCache::default()
    }

    pub fn get(&self, url: &str) -> Option<Value> {
        self.get_at(url, Utc::now())
    }

    pub fn put(&self, url: &str, body: Value, ttl_secs: i64) {
        self.put_at(url, body, ttl_secs, Utc::now());
    }

    fn get_at(&self, url: &str, now: DateTime<Utc>) -> Option<Value> {
        let mut entries = self.entries.lock().ok()?;

        match entries.get(url) {
            Some(entry) if entry.expires_at > now => Some(entry.body.clone()),
            Some(_) => {
                entries.remove(url);
                None
            }
            None => None,
        }
    }

    fn put_at(&self, url: &str, body: Value, ttl_secs: i64, now: DateTime<Utc>) {
        if ttl_secs <= 0 {
            return;
        }

        if let Ok(mut entries) = self.entries.lock() {
            entries.retain(|_, entry| entry.expires_at > now);
            entries.insert(
                url.to_string(),
                CachedCall {
                    body,
                    expires_at: now + Duration::seconds(ttl_secs),
                },
            );
        }
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.clear();
        }
    }
}

/// JSON documents persisted under a root directory.
#[derive(Debug, Clone)]
pub struct DiskCache {
    root: PathBuf,
}

impl DiskCache {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        DiskCache { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    pub fn load(&self, key: &str) -> Option<Value> {
        let content = fs::read_to_string(self.path_for(key)).ok()?;

        match serde_json::from_str(&content) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("ignoring unreadable cache entry {}: {}", key, e);
                None
            }
        }
    }

    pub fn save(&self, key: &str, value: &Value) -> Result<(), LeagueApiError> {
        let path = self.path_for(key);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                LeagueApiError::CacheError(format!("Failed to create cache directory: {}", e))
            })?;
        }

        let json = serde_json::to_string(value)
            .map_err(|e| LeagueApiError::JsonError(format!("Failed to serialize cache: {}", e)))?;

        fs::write(&path, json)
            .map_err(|e| LeagueApiError::CacheError(format!("Failed to write cache: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn entries_expire_after_ttl() {
        let cache = CallCache::new();
        let now = Utc::now();

        cache.put_at("u", json!(1), 60, now);

        assert_eq!(cache.get_at("u", now + Duration::seconds(59)), Some(json!(1)));
        assert_eq!(cache.get_at("u", now + Duration::seconds(60)), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn expired_entries_are_swept_on_put() {
        let cache = CallCache::new();
        let now = Utc::now();

        cache.put_at("old-1", json!(1), 10, now);
        cache.put_at("old-2", json!(2), 10, now);
        cache.put_at("fresh", json!(3), 60, now);
        assert_eq!(cache.len(), 3);

        cache.put_at("new", json!(4), 60, now + Duration::seconds(30));

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get_at("fresh", now + Duration::seconds(30)), Some(json!(3)));
    }

    #[test]
    fn zero_ttl_is_never_stored() {
        let cache = CallCache::new();
        cache.put("u", json!({ "a": 1 }), 0);

        assert!(cache.get("u").is_none());
        assert_eq!(cache.len(), 0);
    }

    #[test]
    fn clear_drops_everything() {
        let cache = CallCache::new();
        cache.put("a", json!(1), 10);
        cache.put("b", json!(2), 10);
        assert_eq!(cache.len(), 2);

        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn disk_cache_round_trips_nested_keys() {
        let root = std::env::temp_dir().join(format!("league_api_disk_{}", std::process::id()));
        let cache = DiskCache::new(&root);

        assert!(cache.load("ddragon/14.1.1/en_US/champion").is_none());

        cache
            .save("ddragon/14.1.1/en_US/champion", &json!({ "version": "14.1.1" }))
            .unwrap();
        assert_eq!(
            cache.load("ddragon/14.1.1/en_US/champion"),
            Some(json!({ "version": "14.1.1" }))
        );

        let _ = fs::remove_dir_all(root);
    }

    #[test]
    fn unwritable_root_is_a_cache_error() {
        let file = std::env::temp_dir().join(format!("league_api_not_a_dir_{}", std::process::id()));
        fs::write(&file, "x").unwrap();

        let err = DiskCache::new(&file).save("versions", &json!([])).unwrap_err();

        assert!(matches!(err, LeagueApiError::CacheError(_)));
        let _ = fs::remove_file(file);
    }
}
