use super::AppResult;
use crate::domain::*;
use crate::ports::{AttachmentRepository, Cache};
use std::sync::Arc;

/// A task's attachments and whether the API was actually contacted for them.
#[derive(Debug, Clone, PartialEq)]
pub struct AttachmentListing {
    pub files: Vec<AttachmentSummary>,
    pub from_cache: bool,
}

pub struct AttachmentService {
    repository: Arc<dyn AttachmentRepository>,
    list_cache: Arc<dyn Cache<TaskId, Vec<AttachmentSummary>>>,
}

impl AttachmentService {
    pub fn new(
        repository: Arc<dyn AttachmentRepository>,
        list_cache: Arc<dyn Cache<TaskId, Vec<AttachmentSummary>>>,
    ) -> Self {
        Self {
            repository,
            list_cache,
        }
    }

    pub async fn upload(
        &self,
        request: &AttachmentUploadRequest,
    ) -> AppResult<AttachmentUploadResult> {
        request.validate()?;
        let result = match self.repository.upload_attachment(request).await {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!(
                    "Upload to task {} failed (status {:?}): {}",
                    request.task_id,
                    e.status(),
                    e
                );
                return Err(e.into());
            }
        };

        // The listing for this task is stale now
        self.list_cache.invalidate(&request.task_id).await;
        tracing::info!("Uploaded attachment '{}' to task {}", request.file_name, request.task_id);

        Ok(result)
    }

    pub async fn list(&self, task_id: &TaskId, use_cache: bool) -> AppResult<AttachmentListing> {
        if use_cache {
            if let Some(files) = self.list_cache.get(task_id).await {
                tracing::debug!("Attachment list for task {} served from cache", task_id);
                return Ok(AttachmentListing {
                    files,
                    from_cache: true,
                });
            }
        }

        let files = self.repository.list_attachments(task_id).await?;
        self.list_cache.insert(task_id.clone(), files.clone()).await;
        Ok(AttachmentListing {
            files,
            from_cache: false,
        })
    }

    pub async fn delete(&self, task_id: &TaskId, file_id: &FileId, file_path: &str) -> AppResult<()> {
        self.repository
            .delete_attachment(task_id, file_id, file_path)
            .await?;

        self.list_cache.invalidate(task_id).await;
        tracing::info!("Deleted attachment {} from task {}", file_id, task_id);

        Ok(())
    }
}
