use serde::de::DeserializeOwned;
use std::sync::Arc;

use super::dto::{DeleteBodyDto, FilesResponse, UploadBodyDto};
use crate::domain::*;
use crate::ports::{
    HttpMethod, HttpRequest, HttpResponse, HttpTransport, RepositoryError, RepositoryResult,
};

/// Everything one upload needs. `token` is sent verbatim when present.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadConfig {
    pub base_url: String,
    pub token: Option<String>,
    pub request: AttachmentUploadRequest,
}

pub fn upload_url(base_url: &str, task_id: &TaskId) -> String {
    format!(
        "{}/tasks/{}/attachments/upload",
        base_url,
        urlencoding::encode(task_id.as_str())
    )
}

pub fn attachments_url(base_url: &str, task_id: &TaskId) -> String {
    format!(
        "{}/tasks/{}/attachments",
        base_url,
        urlencoding::encode(task_id.as_str())
    )
}

pub fn attachment_url(base_url: &str, task_id: &TaskId, file_id: &FileId) -> String {
    format!(
        "{}/{}",
        attachments_url(base_url, task_id),
        urlencoding::encode(&file_id.0)
    )
}

/// Submit attachment metadata for a task in a single POST.
///
/// A non-success status fails with [`RepositoryError::Rejected`] carrying the
/// response text, or `Upload failed ({status})` when the body is empty. A
/// success body is returned as parsed JSON without interpretation.
pub async fn upload_attachment<T>(
    transport: &T,
    config: &UploadConfig,
) -> RepositoryResult<AttachmentUploadResult>
where
    T: HttpTransport + ?Sized,
{
    let url = upload_url(&config.base_url, &config.request.task_id);
    let body = serde_json::to_string(&UploadBodyDto::from(&config.request))
        .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

    let request = HttpRequest::new(HttpMethod::Post, url)
        .json_body(body)
        .authorization(config.token.as_deref());

    let response = transport.send(request).await?;
    parse_json(ensure_success(response, "Upload failed")?)
}

fn ensure_success(response: HttpResponse, fallback: &str) -> RepositoryResult<HttpResponse> {
    if response.is_success() {
        return Ok(response);
    }

    let message = if response.body.is_empty() {
        format!("{} ({})", fallback, response.status)
    } else {
        response.body
    };
    Err(RepositoryError::Rejected {
        status: response.status,
        message,
    })
}

fn parse_json<T: DeserializeOwned>(response: HttpResponse) -> RepositoryResult<T> {
    serde_json::from_str(&response.body).map_err(|e| RepositoryError::Parse(e.to_string()))
}

/// Client for the attachment endpoints of one API root.
#[derive(Clone)]
pub struct AttachmentClient {
    transport: Arc<dyn HttpTransport>,
    base_url: String,
    token: Option<String>,
}

impl AttachmentClient {
    pub fn new(transport: Arc<dyn HttpTransport>, base_url: String, token: Option<String>) -> Self {
        Self {
            transport,
            base_url,
            token,
        }
    }

    pub async fn upload(
        &self,
        request: &AttachmentUploadRequest,
    ) -> RepositoryResult<AttachmentUploadResult> {
        let config = UploadConfig {
            base_url: self.base_url.clone(),
            token: self.token.clone(),
            request: request.clone(),
        };
        upload_attachment(self.transport.as_ref(), &config).await
    }

    pub async fn list(&self, task_id: &TaskId) -> RepositoryResult<Vec<AttachmentSummary>> {
        let request = HttpRequest::new(HttpMethod::Get, attachments_url(&self.base_url, task_id))
            .authorization(self.token.as_deref());

        let response = self.transport.send(request).await?;
        let files: FilesResponse = parse_json(ensure_success(response, "List failed")?)?;
        Ok(files.files.into_iter().map(Into::into).collect())
    }

    pub async fn delete(
        &self,
        task_id: &TaskId,
        file_id: &FileId,
        file_path: &str,
    ) -> RepositoryResult<()> {
        let body = serde_json::to_string(&DeleteBodyDto { file_path })
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;
        let request = HttpRequest::new(
            HttpMethod::Delete,
            attachment_url(&self.base_url, task_id, file_id),
        )
        .json_body(body)
        .authorization(self.token.as_deref());

        let response = self.transport.send(request).await?;
        ensure_success(response, "Delete failed")?;
        Ok(())
    }
}
