use crate::domain::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    TaskId,
    FileName,
    FilePath,
    Priority,
    Tags,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::TaskId,
        FormField::FileName,
        FormField::FilePath,
        FormField::Priority,
        FormField::Tags,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::TaskId => "Task ID",
            FormField::FileName => "File Name",
            FormField::FilePath => "File Path",
            FormField::Priority => "Priority",
            FormField::Tags => "Tags (comma-separated)",
        }
    }

    pub fn is_text(&self) -> bool {
        !matches!(self, FormField::Priority)
    }
}

/// Input state of the upload form. Fields hold raw text until submit.
#[derive(Debug, Clone, PartialEq)]
pub struct AttachmentForm {
    pub task_id: String,
    pub file_name: String,
    pub file_path: String,
    pub priority: Priority,
    pub tags: String,
    focused: usize,
}

impl Default for AttachmentForm {
    fn default() -> Self {
        Self::new("")
    }
}

impl AttachmentForm {
    pub fn new(initial_task_id: &str) -> Self {
        Self {
            task_id: initial_task_id.to_string(),
            file_name: String::new(),
            file_path: String::new(),
            priority: Priority::default(),
            tags: String::new(),
            focused: 0,
        }
    }

    pub fn focused(&self) -> FormField {
        FormField::ALL[self.focused]
    }

    pub fn focus(&mut self, field: FormField) {
        self.focused = FormField::ALL
            .iter()
            .position(|f| *f == field)
            .unwrap_or(0);
    }

    /// Moves focus to the next field. Returns false when it wrapped past the last one.
    pub fn focus_next(&mut self) -> bool {
        self.focused = (self.focused + 1) % FormField::ALL.len();
        self.focused != 0
    }

    /// Moves focus to the previous field. Returns false when it wrapped past the first one.
    pub fn focus_previous(&mut self) -> bool {
        let wrapped = self.focused == 0;
        self.focused = (self.focused + FormField::ALL.len() - 1) % FormField::ALL.len();
        !wrapped
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::TaskId => &self.task_id,
            FormField::FileName => &self.file_name,
            FormField::FilePath => &self.file_path,
            FormField::Priority => self.priority.label(),
            FormField::Tags => &self.tags,
        }
    }

    fn text_mut(&mut self) -> Option<&mut String> {
        match self.focused() {
            FormField::TaskId => Some(&mut self.task_id),
            FormField::FileName => Some(&mut self.file_name),
            FormField::FilePath => Some(&mut self.file_path),
            FormField::Tags => Some(&mut self.tags),
            FormField::Priority => None,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        if let Some(text) = self.text_mut() {
            text.push(c);
        }
    }

    pub fn delete_char(&mut self) {
        if let Some(text) = self.text_mut() {
            text.pop();
        }
    }

    pub fn next_priority(&mut self) {
        self.priority = self.priority.next();
    }

    pub fn previous_priority(&mut self) {
        self.priority = self.priority.previous();
    }

    pub fn to_request(&self) -> DomainResult<AttachmentUploadRequest> {
        AttachmentUploadRequest::new(
            self.task_id.as_str(),
            self.file_name.as_str(),
            self.file_path.as_str(),
            self.priority,
            parse_tags(&self.tags),
        )
    }

    /// Clears every field back to its default, including the task id.
    pub fn reset(&mut self) {
        *self = Self::new("");
    }
}
