//! Common test utilities

use std::cell::RefCell;

use lazyclock::core::{NewTimeEntry, TextOracle, TimeTracker};
use lazyclock::error::{ClockifyError, GeminiError};
use lazyclock::models::{Config, ConfigOverrides, Project};

/// Tracking service double that records every creation request
pub struct FakeTracker {
    projects: Option<Vec<Project>>,
    /// Descriptions the service rejects with a 400
    rejected: Vec<String>,
    pub received: RefCell<Vec<NewTimeEntry>>,
}

impl FakeTracker {
    pub fn with_projects(projects: &[(&str, &str)]) -> Self {
        Self {
            projects: Some(
                projects
                    .iter()
                    .map(|(name, id)| Project {
                        id: id.to_string(),
                        name: name.to_string(),
                    })
                    .collect(),
            ),
            rejected: Vec::new(),
            received: RefCell::new(Vec::new()),
        }
    }

    /// Project listing answers 401
    pub fn unauthorized() -> Self {
        Self {
            projects: None,
            rejected: Vec::new(),
            received: RefCell::new(Vec::new()),
        }
    }

    pub fn rejecting(mut self, description: &str) -> Self {
        self.rejected.push(description.to_string());
        self
    }

    pub fn received_descriptions(&self) -> Vec<String> {
        self.received
            .borrow()
            .iter()
            .map(|e| e.description.clone())
            .collect()
    }
}

impl TimeTracker for FakeTracker {
    async fn fetch_projects(&self) -> Result<Vec<Project>, ClockifyError> {
        self.projects.clone().ok_or(ClockifyError::HttpError {
            status: 401,
            message: "Unauthorized".to_string(),
        })
    }

    async fn create_time_entry(&self, entry: &NewTimeEntry) -> Result<(), ClockifyError> {
        self.received.borrow_mut().push(entry.clone());
        if self.rejected.contains(&entry.description) {
            return Err(ClockifyError::HttpError {
                status: 400,
                message: "Invalid entry".to_string(),
            });
        }
        Ok(())
    }
}

/// Model double returning a fixed reply (or HTTP status) and recording prompts
pub struct CannedOracle {
    reply: Result<String, u16>,
    pub prompts: RefCell<Vec<String>>,
}

impl CannedOracle {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            prompts: RefCell::new(Vec::new()),
        }
    }

    pub fn failing(status: u16) -> Self {
        Self {
            reply: Err(status),
            prompts: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.prompts.borrow().len()
    }
}

impl TextOracle for CannedOracle {
    async fn generate(&self, prompt: &str) -> Result<String, GeminiError> {
        self.prompts.borrow_mut().push(prompt.to_string());
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(status) => Err(GeminiError::HttpError {
                status: *status,
                message: "upstream unavailable".to_string(),
            }),
        }
    }
}

/// Config with every credential set and local time at UTC-3
pub fn test_config() -> Config {
    Config::default().with_overrides(ConfigOverrides {
        gemini_api_key: Some("gemini-key".to_string()),
        clockify_api_key: Some("clockify-key".to_string()),
        workspace_id: Some("ws-1".to_string()),
        user_id: Some("user-1".to_string()),
        utc_offset_minutes: Some(-180),
        ..Default::default()
    })
}

/// Model reply for a three-entry day, fenced the way models like to
pub const THREE_ENTRY_REPLY: &str = r#"```json
[
  {"start": "09:00", "end": "10:00", "description": "Team meeting", "projectId": "p-1"},
  {"start": "10:00", "end": "12:00", "description": "Development", "projectId": "p-2"},
  {"start": "12:00", "end": "13:00", "description": "Lunch", "projectId": null}
]
```"#;
