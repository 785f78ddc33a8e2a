use async_trait::async_trait;

use super::AttachmentClient;
use crate::{
    domain::{AttachmentSummary, AttachmentUploadRequest, AttachmentUploadResult, FileId, TaskId},
    ports::{AttachmentRepository, RepositoryResult},
};

#[derive(Clone)]
pub struct ApiAttachmentRepository {
    client: AttachmentClient,
}

impl ApiAttachmentRepository {
    pub fn new(client: AttachmentClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AttachmentRepository for ApiAttachmentRepository {
    async fn upload_attachment(
        &self,
        request: &AttachmentUploadRequest,
    ) -> RepositoryResult<AttachmentUploadResult> {
        self.client.upload(request).await
    }

    async fn list_attachments(
        &self,
        task_id: &TaskId,
    ) -> RepositoryResult<Vec<AttachmentSummary>> {
        self.client.list(task_id).await
    }

    async fn delete_attachment(
        &self,
        task_id: &TaskId,
        file_id: &FileId,
        file_path: &str,
    ) -> RepositoryResult<()> {
        self.client.delete(task_id, file_id, file_path).await
    }
}
