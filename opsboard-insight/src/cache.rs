// Copyright 2025 Sushanth (https://github.com/sushanthpy)
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Caching layer for generated summaries

use moka::future::Cache;
use opsboard_core::Summary;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Cache for successful summaries
pub struct SummaryCache {
    cache: Cache<CacheKey, Summary>,
    hits: Arc<AtomicU64>,
    misses: Arc<AtomicU64>,
}

impl SummaryCache {
    /// Create a new cache whose entries expire after `ttl`
    pub fn new(ttl: Duration) -> Self {
        let cache = Cache::builder()
            .max_capacity(1_000)
            .time_to_live(ttl)
            .build();

        Self {
            cache,
            hits: Arc::new(AtomicU64::new(0)),
            misses: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Compute cache key for a projected payload and model
    pub fn compute_key(&self, payload: &str, model: &str) -> CacheKey {
        CacheKey::new(payload, model)
    }

    /// Get cached result
    pub async fn get(&self, key: &CacheKey) -> Option<Summary> {
        match self.cache.get(key).await {
            Some(summary) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                Some(summary)
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    /// Set cache entry
    pub async fn set(&self, key: CacheKey, summary: Summary) {
        self.cache.insert(key, summary).await;
    }

    /// Clear entire cache
    pub fn clear(&self) {
        self.cache.invalidate_all();
    }

    /// Get cache statistics
    pub fn stats(&self) -> CacheStats {
        let hits = self.hits.load(Ordering::Relaxed);
        let misses = self.misses.load(Ordering::Relaxed);
        let total = hits + misses;

        CacheStats {
            hits,
            misses,
            hit_rate: if total > 0 {
                hits as f64 / total as f64
            } else {
                0.0
            },
            entry_count: self.cache.entry_count(),
        }
    }
}

/// Cache key based on the projected log payload and the model id
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    payload_hash: u64,
    model_hash: u64,
}

impl CacheKey {
    pub fn new(payload: &str, model: &str) -> Self {
        Self {
            payload_hash: Self::hash_str(payload),
            model_hash: Self::hash_str(model),
        }
    }

    fn hash_str(value: &str) -> u64 {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }
}

/// Cache statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub hit_rate: f64,
    pub entry_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> Summary {
        Summary::new("S", vec!["A".to_string()], vec![])
    }

    #[tokio::test]
    async fn test_cache_set_get() {
        let cache = SummaryCache::new(Duration::from_secs(3600));
        let key = cache.compute_key("[]", "gemini-2.5-flash");

        cache.set(key.clone(), summary()).await;
        assert_eq!(cache.get(&key).await, Some(summary()));

        let other_model = cache.compute_key("[]", "gpt-4o-mini");
        assert!(cache.get(&other_model).await.is_none());
    }

    #[tokio::test]
    async fn test_cache_stats() {
        let cache = SummaryCache::new(Duration::from_secs(3600));
        let key = cache.compute_key("payload", "model");

        // Miss
        cache.get(&key).await;

        // Hit
        cache.set(key.clone(), summary()).await;
        cache.get(&key).await;

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.hit_rate, 0.5);
    }
}
