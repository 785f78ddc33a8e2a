use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{DomainError, DomainResult, TaskId};

/// Opaque success payload returned by the upload endpoint.
pub type AttachmentUploadResult = serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileId(pub String);

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for FileId {
    fn from(s: String) -> Self {
        FileId(s)
    }
}

impl From<&str> for FileId {
    fn from(s: &str) -> Self {
        FileId(s.to_string())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Priority::Low => Priority::Medium,
            Priority::Medium => Priority::High,
            Priority::High => Priority::Low,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Priority::Low => Priority::High,
            Priority::Medium => Priority::Low,
            Priority::High => Priority::Medium,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            _ => Err(DomainError::InvalidPriority(s.to_string())),
        }
    }
}

/// Split a comma-separated tag list, trimming each entry and dropping empties.
///
/// Order is preserved and duplicates are kept.
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Metadata describing a file to attach to a task. Only the reference in
/// `file_path` is sent, never the file contents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttachmentUploadRequest {
    pub task_id: TaskId,
    pub file_name: String,
    pub file_path: String,
    pub priority: Priority,
    pub tags: Vec<String>,
}

impl AttachmentUploadRequest {
    pub fn new(
        task_id: impl Into<TaskId>,
        file_name: impl Into<String>,
        file_path: impl Into<String>,
        priority: Priority,
        tags: Vec<String>,
    ) -> DomainResult<Self> {
        let request = Self {
            task_id: task_id.into(),
            file_name: file_name.into(),
            file_path: file_path.into(),
            priority,
            tags,
        };
        request.validate()?;
        Ok(request)
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.task_id.is_empty() {
            return Err(DomainError::MissingField("taskID"));
        }
        if self.file_name.is_empty() {
            return Err(DomainError::MissingField("fileName"));
        }
        if self.file_path.is_empty() {
            return Err(DomainError::MissingField("filePath"));
        }
        Ok(())
    }
}

/// One row of a task's attachment listing. Serializes with the API's key
/// names (`fileID`, `fileName`, `uploadedAt`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentSummary {
    #[serde(rename = "fileID")]
    pub file_id: FileId,
    pub file_name: String,
    pub priority: Option<String>,
    pub uploaded_at: String,
    #[serde(rename = "taskID", skip_serializing_if = "Option::is_none")]
    pub task_id: Option<TaskId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl AttachmentSummary {
    /// Priority as shown in the list, `-` when the service sent none.
    pub fn priority_display(&self) -> &str {
        match self.priority.as_deref() {
            Some(p) if !p.is_empty() => p,
            _ => "-",
        }
    }

    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.file_name.to_lowercase().contains(&query)
            || self.tags.iter().any(|t| t.to_lowercase().contains(&query))
    }
}
