use async_trait::async_trait;
use moka::future::Cache as MokaCache;
use std::hash::Hash;
use std::time::Duration;
use crate::domain::{AttachmentSummary, TaskId};
use crate::ports::Cache;

/// Attachment listings keyed by task.
pub type AttachmentListCache = MokaCacheAdapter<TaskId, Vec<AttachmentSummary>>;

pub struct MokaCacheAdapter<K, V> {
    inner: MokaCache<K, V>,
}

impl<K, V> MokaCacheAdapter<K, V>
where
    K: Hash + Eq + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    pub fn new(ttl_seconds: u64, max_capacity: u64) -> Self {
        let cache = MokaCache::builder()
            .time_to_live(Duration::from_secs(ttl_seconds))
            .max_capacity(max_capacity)
            .build();

        Self { inner: cache }
    }
}

#[async_trait]
impl<K, V> Cache<K, V> for MokaCacheAdapter<K, V>
where
    K: Hash + Eq + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    async fn get(&self, key: &K) -> Option<V> {
        self.inner.get(key).await
    }

    async fn insert(&self, key: K, value: V) {
        self.inner.insert(key, value).await;
    }

    async fn invalidate(&self, key: &K) {
        self.inner.invalidate(key).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(id: &str) -> AttachmentSummary {
        AttachmentSummary {
            file_id: id.into(),
            file_name: format!("{id}.txt"),
            priority: None,
            uploaded_at: String::new(),
            task_id: None,
            file_path: None,
            tags: Vec::new(),
        }
    }

    #[tokio::test]
    async fn test_cache_operations() {
        let cache = AttachmentListCache::new(300, 100);
        let task: TaskId = "t1".into();

        cache.insert(task.clone(), vec![summary("f1")]).await;
        assert_eq!(cache.get(&task).await, Some(vec![summary("f1")]));

        cache.invalidate(&task).await;
        assert_eq!(cache.get(&task).await, None);

        cache.insert("t2".into(), Vec::new()).await;
        assert_eq!(cache.get(&"t2".into()).await, Some(Vec::new()));
    }
}
