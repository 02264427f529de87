//! Time-limited cache of analysis results
//!
//! Entries are keyed by the canonical JSON of the request body. The engine
//! is pure, so a cached result is exactly what a fresh analysis would return.
//! The cache holds at most `max_entries` results; inserting into a full cache
//! evicts the oldest entry.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Duration, Utc};
use domain_analysis::AnalysisResult;
use serde::Serialize;
use tracing::debug;

struct CacheEntry {
    result: AnalysisResult,
    stored_at: DateTime<Utc>,
}

/// Analysis results with a fixed time to live
pub struct AnalysisCache {
    ttl: Duration,
    max_entries: usize,
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl AnalysisCache {
    pub fn new(ttl_secs: u64, max_entries: u64) -> Self {
        Self {
            ttl: Duration::seconds(i64::try_from(ttl_secs).unwrap_or(i64::MAX).min(i64::MAX / 1000)),
            max_entries: usize::try_from(max_entries).unwrap_or(usize::MAX).max(1),
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Canonical key for a request body
    pub fn key_for<T: Serialize>(request: &T) -> Result<String, serde_json::Error> {
        serde_json::to_string(request)
    }

    /// Returns a live entry, dropping it if it has expired
    pub fn get(&self, key: &str) -> Option<AnalysisResult> {
        self.get_at(key, Utc::now())
    }

    pub fn insert(&self, key: String, result: AnalysisResult) {
        self.insert_at(key, result, Utc::now());
    }

    fn get_at(&self, key: &str, now: DateTime<Utc>) -> Option<AnalysisResult> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        match entries.get(key) {
            Some(entry) if now - entry.stored_at < self.ttl => {
                debug!("Analysis cache hit");
                Some(entry.result.clone())
            }
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    fn insert_at(&self, key: String, result: AnalysisResult, now: DateTime<Utc>) {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.retain(|_, entry| now - entry.stored_at < self.ttl);
        if !entries.contains_key(&key) && entries.len() >= self.max_entries {
            let oldest = entries
                .iter()
                .min_by_key(|(_, entry)| entry.stored_at)
                .map(|(k, _)| k.clone());
            if let Some(oldest) = oldest {
                debug!("Analysis cache full, evicting oldest entry");
                entries.remove(&oldest);
            }
        }
        entries.insert(
            key,
            CacheEntry {
                result,
                stored_at: now,
            },
        );
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::Money;
    use domain_analysis::{AnalysisEngine, AnalysisRequest, EngineConfig};
    use domain_budget::IncomeExpenseProfile;
    use rust_decimal_macros::dec;

    fn result() -> AnalysisResult {
        let engine = AnalysisEngine::new(EngineConfig::default()).unwrap();
        let profile = IncomeExpenseProfile::new(Money::usd(dec!(3000)));
        engine.analyze(&AnalysisRequest::new(profile)).unwrap()
    }

    #[test]
    fn test_hit_within_ttl() {
        let cache = AnalysisCache::new(300, 16);
        let now = Utc::now();
        cache.insert_at("k".to_string(), result(), now);

        assert!(cache.get_at("k", now + Duration::seconds(299)).is_some());
        assert!(cache.get_at("other", now).is_none());
    }

    #[test]
    fn test_expired_entry_is_evicted() {
        let cache = AnalysisCache::new(300, 16);
        let now = Utc::now();
        cache.insert_at("k".to_string(), result(), now);

        assert!(cache.get_at("k", now + Duration::seconds(300)).is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_full_cache_evicts_oldest() {
        let cache = AnalysisCache::new(300, 2);
        let now = Utc::now();
        cache.insert_at("first".to_string(), result(), now);
        cache.insert_at("second".to_string(), result(), now + Duration::seconds(1));
        cache.insert_at("third".to_string(), result(), now + Duration::seconds(2));

        let later = now + Duration::seconds(3);
        assert_eq!(cache.len(), 2);
        assert!(cache.get_at("first", later).is_none());
        assert!(cache.get_at("second", later).is_some());
        assert!(cache.get_at("third", later).is_some());
    }

    #[test]
    fn test_refreshing_a_key_in_a_full_cache_keeps_the_rest() {
        let cache = AnalysisCache::new(300, 2);
        let now = Utc::now();
        cache.insert_at("a".to_string(), result(), now);
        cache.insert_at("b".to_string(), result(), now);
        cache.insert_at("a".to_string(), result(), now + Duration::seconds(1));

        assert_eq!(cache.len(), 2);
        assert!(cache.get_at("b", now + Duration::seconds(2)).is_some());
    }
}
