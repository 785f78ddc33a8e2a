use crate::domain::{
    AttachmentSummary, AttachmentUploadRequest, AttachmentUploadResult, FileId, TaskId,
};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RepositoryError {
    #[error("Network error: {0}")]
    Transport(String),

    /// The server answered with a non-success status. Displays as the
    /// server's message alone.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl RepositoryError {
    pub fn status(&self) -> Option<u16> {
        match self {
            RepositoryError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AttachmentRepository: Send + Sync {
    async fn upload_attachment(
        &self,
        request: &AttachmentUploadRequest,
    ) -> RepositoryResult<AttachmentUploadResult>;

    async fn list_attachments(&self, task_id: &TaskId)
        -> RepositoryResult<Vec<AttachmentSummary>>;

    async fn delete_attachment(
        &self,
        task_id: &TaskId,
        file_id: &FileId,
        file_path: &str,
    ) -> RepositoryResult<()>;
}
