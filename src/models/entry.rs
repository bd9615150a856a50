use serde::{Deserialize, Serialize};

/// One proposed interval of work, in local wall-clock time
///
/// `start` and `end` are kept as the raw `HH:MM` strings produced by the model
/// or typed by the user; nothing guarantees they are well formed until the
/// sequence has gone through [`crate::core::validate_entries`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEntry {
    pub start: String,
    pub end: String,
    pub description: String,
    /// Project the entry is booked against, `None` means no project
    #[serde(rename = "projectId", default)]
    pub project_id: Option<String>,
}

impl TimeEntry {
    pub fn new(
        description: impl Into<String>,
        start: impl Into<String>,
        end: impl Into<String>,
    ) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            description: description.into(),
            project_id: None,
        }
    }

    /// Builder-style project assignment
    pub fn with_project(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }
}
