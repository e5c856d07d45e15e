//! Process-wide response cache for hot read endpoints.
//!
//! Entries expire a fixed time after they were stored; nothing invalidates
//! them early, so writes become visible to cached readers only after expiry.
//! Concurrent misses for the same key may each compute the value; the last
//! one to finish wins.

use std::collections::HashMap;
use std::future::Future;
use std::time::{Duration, Instant};

use serde_json::Value;
use tokio::sync::RwLock;

/// Cache keys in use.
pub mod keys {
    pub const FEATURED_SERVICES: &str = "services_featured";
    pub const FEATURED_TESTIMONIALS: &str = "testimonials_featured";
    pub const FEATURED_TEAM: &str = "team_featured";
    pub const FEATURED_PORTFOLIO: &str = "portfolio_featured";
    pub const FEATURED_FAQS: &str = "faqs_featured";
    pub const STATS_ALL: &str = "stats_all";
    pub const ABOUT_CURRENT: &str = "about_current";
}

struct Entry {
    stored_at: Instant,
    value: Value,
}

/// Serialized responses keyed by name, each valid for `ttl`.
///
/// Thread-safe via interior `RwLock`; wrapped in `Arc` inside `AppState`.
pub struct ResponseCache {
    ttl: Duration,
    entries: RwLock<HashMap<String, Entry>>,
}

impl ResponseCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// The cached value for `key`, if present and not yet expired.
    pub async fn get(&self, key: &str) -> Option<Value> {
        let entries = self.entries.read().await;
        entries
            .get(key)
            .filter(|entry| entry.stored_at.elapsed() < self.ttl)
            .map(|entry| entry.value.clone())
    }

    pub async fn insert(&self, key: &str, value: Value) {
        let entry = Entry {
            stored_at: Instant::now(),
            value,
        };
        let mut entries = self.entries.write().await;
        entries.retain(|_, e| e.stored_at.elapsed() < self.ttl);
        entries.insert(key.to_string(), entry);
    }

    /// Return the cached value for `key`, or compute, store and return it.
    ///
    /// Errors from `compute` are passed through and nothing is stored.
    pub async fn get_or_try_insert_with<F, Fut, E>(&self, key: &str, compute: F) -> Result<Value, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Value, E>>,
    {
        if let Some(hit) = self.get(key).await {
            tracing::debug!(key, "Response cache hit");
            return Ok(hit);
        }

        let value = compute().await?;
        self.insert(key, value.clone()).await;
        tracing::debug!(key, ttl_secs = self.ttl.as_secs(), "Response cache filled");
        Ok(value)
    }

    /// Number of entries, including expired ones not yet evicted.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
