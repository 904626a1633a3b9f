use moka::future::Cache;
use std::future::Future;
use std::hash::{Hash, Hasher};
use std::time::Duration;

/// Cache-aside wrapper over a moka cache with one fixed TTL per instance.
///
/// A hit returns the stored clone without invoking the producer; a miss
/// invokes the producer once and stores the value only on success, so
/// failures are never memoized. There is no stampede protection: concurrent
/// misses for the same key may each run the producer.
pub struct TtlCache<T> {
    inner: Cache<String, T>,
}

impl<T: Clone + Send + Sync + 'static> TtlCache<T> {
    pub fn new(max_capacity: u64, ttl: Duration) -> Self {
        Self {
            inner: Cache::builder()
                .max_capacity(max_capacity)
                .time_to_live(ttl)
                .build(),
        }
    }

    pub async fn get_or_compute<F, Fut, E>(&self, key: String, compute: F) -> Result<T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        if let Some(hit) = self.inner.get(&key).await {
            return Ok(hit);
        }
        let value = compute().await?;
        self.inner.insert(key, value.clone()).await;
        Ok(value)
    }
}

/// Build a cache key from a namespace prefix and a hash of the input, so
/// arbitrary user text never lands in the key space verbatim.
pub fn hashed_key(prefix: &str, input: &str) -> String {
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    input.hash(&mut hasher);
    format!("{}{:x}", prefix, hasher.finish())
}
