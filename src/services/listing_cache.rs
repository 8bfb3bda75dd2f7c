// src/services/listing_cache.rs
// DOCUMENTATION: Simple in-memory cache for assembled listings
// PURPOSE: Let preview and publish share one fetch instead of re-billing the Places API

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use serde::{Serialize, Deserialize};

use crate::models::ListingParams;

/// Cache entry with expiration
#[derive(Clone, Debug)]
struct CacheEntry<T> {
    data: T,
    expires_at: Instant,
}

impl<T> CacheEntry<T> {
    fn new(data: T, ttl: Duration) -> Self {
        Self {
            data,
            expires_at: Instant::now() + ttl,
        }
    }

    fn is_expired(&self) -> bool {
        Instant::now() > self.expires_at
    }
}

/// Simple in-memory cache with TTL
/// DOCUMENTATION: Thread-safe store of serialized listings
pub struct ListingCache {
    store: Arc<RwLock<HashMap<String, CacheEntry<String>>>>,
    default_ttl: Duration,
}

impl ListingCache {
    /// Create new cache with default TTL
    pub fn new(ttl_seconds: u64) -> Self {
        Self {
            store: Arc::new(RwLock::new(HashMap::new())),
            default_ttl: Duration::from_secs(ttl_seconds),
        }
    }

    /// Generate cache key from listing parameters
    /// DOCUMENTATION: Every knob that changes the fetched result is part
    /// of the key, so publish reads exactly what preview stored
    pub fn generate_key(params: &ListingParams) -> String {
        format!(
            "listing:{}:{}:{}:{}:{}:{}",
            params.city.trim().to_ascii_lowercase(),
            params.category.trim().to_ascii_lowercase(),
            params.max_results,
            params.min_reviews,
            params
                .min_rating
                .map(|r| r.to_string())
                .unwrap_or_default(),
            params.custom_query_trimmed().unwrap_or_default()
        )
    }

    /// Get cached value
    pub async fn get(&self, key: &str) -> Option<String> {
        let store = self.store.read().await;

        if let Some(entry) = store.get(key) {
            if !entry.is_expired() {
                log::debug!("Cache HIT for key: {}", key);
                return Some(entry.data.clone());
            } else {
                log::debug!("Cache EXPIRED for key: {}", key);
            }
        } else {
            log::debug!("Cache MISS for key: {}", key);
        }

        None
    }

    /// Set cached value with default TTL
    pub async fn set(&self, key: String, value: String) {
        self.set_with_ttl(key, value, self.default_ttl).await;
    }

    /// Set cached value with custom TTL
    pub async fn set_with_ttl(&self, key: String, value: String, ttl: Duration) {
        let mut store = self.store.write().await;
        store.insert(key.clone(), CacheEntry::new(value, ttl));
        log::debug!("Cache SET for key: {} (TTL: {}s)", key, ttl.as_secs());
    }

    /// Clear expired entries
    pub async fn cleanup(&self) {
        let mut store = self.store.write().await;
        let before_count = store.len();
        store.retain(|_, entry| !entry.is_expired());
        let after_count = store.len();

        if before_count > after_count {
            log::info!(
                "Cache cleanup: removed {} expired entries ({} remaining)",
                before_count - after_count,
                after_count
            );
        }
    }

    /// Get cache statistics
    pub async fn stats(&self) -> CacheStats {
        let store = self.store.read().await;
        let total = store.len();
        let expired = store.values().filter(|e| e.is_expired()).count();

        CacheStats {
            total_entries: total,
            expired_entries: expired,
            active_entries: total - expired,
        }
    }
}

/// Cache statistics
#[derive(Debug, Serialize, Deserialize)]
pub struct CacheStats {
    pub total_entries: usize,
    pub expired_entries: usize,
    pub active_entries: usize,
}

/// Start background cleanup task
/// DOCUMENTATION: Periodically removes expired entries
pub fn start_cleanup_task(cache: Arc<ListingCache>, interval_seconds: u64) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(interval_seconds));

        loop {
            interval.tick().await;
            cache.cleanup().await;
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(city: &str, category: &str) -> ListingParams {
        ListingParams {
            city: city.to_string(),
            category: category.to_string(),
            max_results: 15,
            min_reviews: 200,
            min_rating: None,
            custom_query: None,
        }
    }

    #[tokio::test]
    async fn test_cache_set_get() {
        let cache = ListingCache::new(60);
        let key = "test_key".to_string();
        let value = "test_value".to_string();

        cache.set(key.clone(), value.clone()).await;
        let result = cache.get(&key).await;

        assert_eq!(result, Some(value));
    }

    #[tokio::test]
    async fn test_cache_expiration() {
        let cache = ListingCache::new(1); // 1 second TTL
        let key = "test_key".to_string();
        let value = "test_value".to_string();

        cache.set(key.clone(), value.clone()).await;

        // Should exist immediately
        assert!(cache.get(&key).await.is_some());

        // Wait for expiration
        tokio::time::sleep(Duration::from_secs(2)).await;

        // Should be expired
        assert!(cache.get(&key).await.is_none());
    }

    #[tokio::test]
    async fn test_generate_key() {
        let key1 = ListingCache::generate_key(&params("riyadh", "burger"));
        let key2 = ListingCache::generate_key(&params(" Riyadh ", "BURGER"));
        let key3 = ListingCache::generate_key(&params("jeddah", "burger"));

        assert_eq!(key1, key2); // Key normalization matches preset lookup
        assert_ne!(key1, key3);

        let mut custom = params("riyadh", "burger");
        custom.custom_query = Some("  مطاعم على البحر  ".to_string());
        let key4 = ListingCache::generate_key(&custom);
        assert_ne!(key1, key4);

        let mut rated = params("riyadh", "burger");
        rated.min_rating = Some(4.0);
        assert_ne!(key1, ListingCache::generate_key(&rated));

        // Nearby thresholds filter differently and must not share an entry
        let mut fine = params("riyadh", "burger");
        fine.min_rating = Some(4.25);
        let mut finer = params("riyadh", "burger");
        finer.min_rating = Some(4.21);
        assert_ne!(
            ListingCache::generate_key(&fine),
            ListingCache::generate_key(&finer)
        );
    }

    #[tokio::test]
    async fn test_cache_cleanup() {
        let cache = ListingCache::new(1);

        cache.set("key1".to_string(), "value1".to_string()).await;
        cache.set("key2".to_string(), "value2".to_string()).await;

        tokio::time::sleep(Duration::from_secs(2)).await;

        cache.cleanup().await;

        let stats = cache.stats().await;
        assert_eq!(stats.active_entries, 0);
    }
}
