//! In-memory answer cache with a fixed time-to-live.

use bggovai_application::ports::answer_cache::{AnswerCache, CacheKey};
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing::trace;

pub const DEFAULT_TTL: Duration = Duration::from_secs(900);
pub const DEFAULT_CAPACITY: usize = 256;

#[derive(Debug, Clone)]
struct CachedAnswer {
    answer: String,
    inserted_at: Instant,
}

/// LRU-bounded cache whose entries expire `ttl` after insertion.
pub struct TtlAnswerCache {
    entries: Mutex<LruCache<CacheKey, CachedAnswer>>,
    ttl: Duration,
}

impl TtlAnswerCache {
    /// A capacity of zero is treated as one.
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lookup(&self, key: &CacheKey, now: Instant) -> Option<String> {
        let mut entries = self.entries.lock().ok()?;

        let entry = entries.get(key)?;
        if now.duration_since(entry.inserted_at) < self.ttl {
            return Some(entry.answer.clone());
        }

        trace!("Cached answer expired");
        entries.pop(key);
        None
    }

    fn insert(&self, key: CacheKey, answer: String, now: Instant) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.put(
                key,
                CachedAnswer {
                    answer,
                    inserted_at: now,
                },
            );
        }
    }
}

impl Default for TtlAnswerCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY, DEFAULT_TTL)
    }
}

impl AnswerCache for TtlAnswerCache {
    fn get(&self, key: &CacheKey) -> Option<String> {
        self.lookup(key, Instant::now())
    }

    fn put(&self, key: CacheKey, answer: String) {
        self.insert(key, answer, Instant::now());
    }
}
