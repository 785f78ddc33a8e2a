use serde::{Deserialize, Serialize};
use crate::domain::*;

// Request DTOs
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadBodyDto<'a> {
    pub file_name: &'a str,
    pub file_path: &'a str,
    pub priority: Priority,
    pub tags: &'a [String],
}

impl<'a> From<&'a AttachmentUploadRequest> for UploadBodyDto<'a> {
    fn from(request: &'a AttachmentUploadRequest) -> Self {
        Self {
            file_name: &request.file_name,
            file_path: &request.file_path,
            priority: request.priority,
            tags: &request.tags,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteBodyDto<'a> {
    pub file_path: &'a str,
}

// Response DTOs
#[derive(Debug, Deserialize)]
pub struct FilesResponse {
    #[serde(default)]
    pub files: Vec<AttachmentDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentDto {
    #[serde(rename = "fileID")]
    pub file_id: String,
    #[serde(rename = "taskID")]
    pub task_id: Option<String>,
    pub file_name: String,
    pub file_path: Option<String>,
    pub uploaded_at: Option<String>,
    pub priority: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl From<AttachmentDto> for AttachmentSummary {
    fn from(dto: AttachmentDto) -> Self {
        Self {
            file_id: FileId(dto.file_id),
            file_name: dto.file_name,
            priority: dto.priority,
            uploaded_at: dto.uploaded_at.unwrap_or_default(),
            task_id: dto.task_id.map(TaskId),
            file_path: dto.file_path,
            tags: dto.tags,
        }
    }
}
