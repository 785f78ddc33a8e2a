use std::sync::Arc;
use dashmap::DashMap;
use chrono::{DateTime, Utc};
use crate::domain::*;
use crate::ports::ConfigStore;
use super::{AttachmentService, AppError, AppResult};

pub struct StateManager {
    attachment_service: Arc<AttachmentService>,
    config_store: Arc<dyn ConfigStore>,

    // When each task's attachment list was last fetched from the API
    fetched_at: DashMap<TaskId, DateTime<Utc>>,

    current_task: tokio::sync::RwLock<Option<TaskId>>,
}

impl StateManager {
    pub fn new(attachment_service: Arc<AttachmentService>, config_store: Arc<dyn ConfigStore>) -> Self {
        Self {
            attachment_service,
            config_store,
            fetched_at: DashMap::new(),
            current_task: tokio::sync::RwLock::new(None),
        }
    }

    pub async fn initialize(&self) -> AppResult<()> {
        let config = self.config_store.load_config().await?;

        if let Some(task_id) = config.default_task {
            tracing::info!("Restoring last task: {}", task_id);
            *self.current_task.write().await = Some(task_id);
        }

        Ok(())
    }

    pub async fn get_current_task(&self) -> Option<TaskId> {
        self.current_task.read().await.clone()
    }

    /// Switch the list view to `task_id` and remember it for the next run.
    pub async fn set_current_task(&self, task_id: TaskId) -> AppResult<()> {
        if self.get_current_task().await.as_ref() == Some(&task_id) {
            return Ok(());
        }
        *self.current_task.write().await = Some(task_id.clone());

        let mut config = self.config_store.load_config().await?;
        config.default_task = Some(task_id);
        if let Err(e) = self.config_store.save_config(&config).await {
            tracing::warn!("Failed to save current task: {}", e);
        }

        Ok(())
    }

    pub async fn get_attachments_for_current_task(
        &self,
        use_cache: bool,
    ) -> AppResult<Vec<AttachmentSummary>> {
        let task_id = self
            .get_current_task()
            .await
            .ok_or(AppError::TaskNotSelected)?;
        self.get_attachments(&task_id, use_cache).await
    }

    pub async fn get_attachments(
        &self,
        task_id: &TaskId,
        use_cache: bool,
    ) -> AppResult<Vec<AttachmentSummary>> {
        let listing = self.attachment_service.list(task_id, use_cache).await?;
        if !listing.from_cache {
            self.fetched_at.insert(task_id.clone(), Utc::now());
        }
        Ok(listing.files)
    }

    pub async fn upload(&self, request: &AttachmentUploadRequest) -> AppResult<AttachmentUploadResult> {
        let result = self.attachment_service.upload(request).await?;
        self.fetched_at.remove(&request.task_id);
        Ok(result)
    }

    pub async fn delete(&self, task_id: &TaskId, file_id: &FileId, file_path: &str) -> AppResult<()> {
        self.attachment_service.delete(task_id, file_id, file_path).await?;
        self.fetched_at.remove(task_id);
        Ok(())
    }

    pub fn last_fetched(&self, task_id: &TaskId) -> Option<DateTime<Utc>> {
        self.fetched_at.get(task_id).map(|entry| *entry.value())
    }
}

/// Human readable age of a fetch, e.g. "3 minutes ago".
pub fn time_since(fetched_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(fetched_at);

    if duration.num_days() > 0 {
        format!("{} days ago", duration.num_days())
    } else if duration.num_hours() > 0 {
        format!("{} hours ago", duration.num_hours())
    } else if duration.num_minutes() > 0 {
        format!("{} minutes ago", duration.num_minutes())
    } else {
        "just now".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::cache::AttachmentListCache;
    use crate::ports::{AppConfig, Cache, MockAttachmentRepository, MockConfigStore};
    use chrono::Duration;
    use serde_json::json;

    fn manager(repository: MockAttachmentRepository, config_store: MockConfigStore) -> StateManager {
        manager_with_cache(repository, config_store, Arc::new(AttachmentListCache::new(300, 100)))
    }

    fn manager_with_cache(
        repository: MockAttachmentRepository,
        config_store: MockConfigStore,
        cache: Arc<AttachmentListCache>,
    ) -> StateManager {
        let service = AttachmentService::new(Arc::new(repository), cache);
        StateManager::new(Arc::new(service), Arc::new(config_store))
    }

    #[tokio::test]
    async fn test_initialize_restores_default_task() {
        let mut config_store = MockConfigStore::new();
        config_store.expect_load_config().returning(|| {
            Ok(AppConfig {
                default_task: Some("t7".into()),
                ..Default::default()
            })
        });

        let manager = manager(MockAttachmentRepository::new(), config_store);
        manager.initialize().await.unwrap();

        assert_eq!(manager.get_current_task().await, Some("t7".into()));
    }

    #[tokio::test]
    async fn test_no_current_task_is_an_error() {
        let manager = manager(MockAttachmentRepository::new(), MockConfigStore::new());
        let err = manager.get_attachments_for_current_task(true).await.unwrap_err();
        assert!(matches!(err, AppError::TaskNotSelected));
    }

    #[tokio::test]
    async fn test_set_current_task_persists() {
        let mut config_store = MockConfigStore::new();
        config_store
            .expect_load_config()
            .times(1)
            .returning(|| Ok(AppConfig::default()));
        config_store
            .expect_save_config()
            .withf(|config| config.default_task == Some("t2".into()))
            .times(1)
            .returning(|_| Ok(()));

        let manager = manager(MockAttachmentRepository::new(), config_store);
        manager.set_current_task("t2".into()).await.unwrap();
        // Same task again does not touch the config
        manager.set_current_task("t2".into()).await.unwrap();

        assert_eq!(manager.get_current_task().await, Some("t2".into()));
    }

    #[tokio::test]
    async fn test_fetch_time_tracked_and_cleared_on_upload() {
        let mut repository = MockAttachmentRepository::new();
        repository.expect_list_attachments().returning(|_| Ok(Vec::new()));
        repository
            .expect_upload_attachment()
            .returning(|_| Ok(json!({"fileID": "f1"})));

        let manager = manager(repository, MockConfigStore::new());
        let task: TaskId = "t1".into();

        assert!(manager.last_fetched(&task).is_none());
        manager.get_attachments(&task, true).await.unwrap();
        assert!(manager.last_fetched(&task).is_some());

        let request =
            AttachmentUploadRequest::new("t1", "a.txt", "a.txt", Priority::Medium, vec![]).unwrap();
        manager.upload(&request).await.unwrap();
        assert!(manager.last_fetched(&task).is_none());
    }

    #[tokio::test]
    async fn test_fetch_time_refreshed_when_cache_entry_expired() {
        let mut repository = MockAttachmentRepository::new();
        repository
            .expect_list_attachments()
            .times(2)
            .returning(|_| Ok(Vec::new()));

        let cache = Arc::new(AttachmentListCache::new(300, 100));
        let manager = manager_with_cache(repository, MockConfigStore::new(), cache.clone());
        let task: TaskId = "t1".into();
        let an_hour_ago = Utc::now() - Duration::hours(1);

        manager.get_attachments(&task, true).await.unwrap();
        manager.fetched_at.insert(task.clone(), an_hour_ago);

        // Served from cache: the fetch time stays put
        manager.get_attachments(&task, true).await.unwrap();
        assert_eq!(manager.last_fetched(&task), Some(an_hour_ago));

        // Entry gone, as after the TTL: the API is hit and the time moves
        cache.invalidate(&task).await;
        manager.get_attachments(&task, true).await.unwrap();
        let fetched = manager.last_fetched(&task).unwrap();
        assert!(fetched > an_hour_ago + Duration::minutes(30));
    }

    #[test]
    fn test_time_since() {
        let now = Utc::now();
        assert_eq!(time_since(now, now), "just now");
        assert_eq!(time_since(now - Duration::minutes(3), now), "3 minutes ago");
        assert_eq!(time_since(now - Duration::hours(2), now), "2 hours ago");
        assert_eq!(time_since(now - Duration::days(4), now), "4 days ago");
    }
}
