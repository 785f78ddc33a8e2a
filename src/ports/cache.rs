use async_trait::async_trait;
use std::hash::Hash;

/// Keyed store for values fetched from the API, e.g. attachment lists per task.
#[async_trait]
pub trait Cache<K, V>: Send + Sync
where
    K: Hash + Eq + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    async fn get(&self, key: &K) -> Option<V>;
    async fn insert(&self, key: K, value: V);
    async fn invalidate(&self, key: &K);
}
