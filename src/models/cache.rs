use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use serde_json::Value;

#[derive(Clone, Debug)]
pub struct CacheEntry<T> {
    pub value: T,
    pub expires_at: DateTime<Utc>,
}

impl<T> CacheEntry<T> {
    pub fn new(value: T, ttl_seconds: i64) -> Self {
        Self {
            value,
            expires_at: Utc::now() + Duration::seconds(ttl_seconds),
        }
    }

    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }
}

/// Key-value cache with per-entry expiry. Injected into `AppState` so tests
/// can substitute their own implementation.
pub trait Cache: Send + Sync {
    fn get(&self, key: &str) -> Option<Value>;
    fn set(&self, key: &str, value: Value, ttl_seconds: i64);
    fn clear(&self);
}

/// Process-wide in-memory cache. Entries are overwritten wholesale, never
/// merged; expired entries are evicted lazily on read.
#[derive(Default)]
pub struct MemoryCache {
    entries: DashMap<String, CacheEntry<Value>>,
}

impl Cache for MemoryCache {
    fn get(&self, key: &str) -> Option<Value> {
        let entry = self.entries.get(key)?;
        if entry.is_expired() {
            drop(entry);
            self.entries.remove(key);
            return None;
        }
        Some(entry.value.clone())
    }

    fn set(&self, key: &str, value: Value, ttl_seconds: i64) {
        self.entries
            .insert(key.to_string(), CacheEntry::new(value, ttl_seconds));
    }

    fn clear(&self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn get_returns_none_for_missing_key() {
        let cache = MemoryCache::default();
        assert!(cache.get("DriverStandings_2024").is_none());
    }

    #[test]
    fn set_then_get_returns_value() {
        let cache = MemoryCache::default();
        cache.set("Drivers_2024", json!([{"driverId": "alonso"}]), 3600);
        assert_eq!(
            cache.get("Drivers_2024"),
            Some(json!([{"driverId": "alonso"}]))
        );
    }

    #[test]
    fn expired_entry_is_evicted() {
        let cache = MemoryCache::default();
        cache.set("Schedule_2024", json!([]), -1);
        assert!(cache.get("Schedule_2024").is_none());
    }

    #[test]
    fn set_overwrites_existing_entry() {
        let cache = MemoryCache::default();
        cache.set("Seasons", json!(["2023"]), 3600);
        cache.set("Seasons", json!(["2024"]), 3600);
        assert_eq!(cache.get("Seasons"), Some(json!(["2024"])));
    }

    #[test]
    fn clear_removes_every_entry() {
        let cache = MemoryCache::default();
        cache.set("Circuits_2024", json!([]), 3600);
        cache.set("Results_2024", json!([]), 3600);
        cache.clear();
        assert!(cache.get("Circuits_2024").is_none());
        assert!(cache.get("Results_2024").is_none());
    }

    #[test]
    fn entry_with_positive_ttl_is_not_expired() {
        let entry = CacheEntry::new(json!({}), 60);
        assert!(!entry.is_expired());
    }
}
