//! Answer caching.

mod ttl_cache;

pub use ttl_cache::{DEFAULT_CAPACITY, DEFAULT_TTL, TtlAnswerCache};
