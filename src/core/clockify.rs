use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

use crate::error::ClockifyError;
use crate::models::{ClockifyConfig, Project};

/// The time-tracking service: a project listing source and an entry sink
#[allow(async_fn_in_trait)]
pub trait TimeTracker {
    /// List the projects entries can be booked against
    async fn fetch_projects(&self) -> Result<Vec<Project>, ClockifyError>;

    /// Create one time entry
    async fn create_time_entry(&self, entry: &NewTimeEntry) -> Result<(), ClockifyError>;
}

/// Request body for the time-entry creation endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTimeEntry {
    /// UTC instant, `YYYY-MM-DDTHH:MM:00.000Z`
    pub start: String,
    pub end: String,
    pub description: String,
    pub billable: bool,
    pub user_id: String,
    pub project_id: Option<String>,
}

/// Clockify API client
pub struct ClockifyClient {
    client: Client,
    config: ClockifyConfig,
}

impl ClockifyClient {
    /// Create a new Clockify client with the given configuration
    pub fn new(config: ClockifyConfig) -> Result<Self, ClockifyError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| ClockifyError::RequestFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn workspace_url(&self, path: &str) -> String {
        format!(
            "{}/workspaces/{}/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.workspace_id,
            path
        )
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        builder.header("X-Api-Key", self.config.api_key.as_str())
    }

    fn map_send_error(&self, e: reqwest::Error) -> ClockifyError {
        if e.is_timeout() {
            ClockifyError::Timeout(self.config.timeout_seconds)
        } else {
            ClockifyError::from(e)
        }
    }
}

impl TimeTracker for ClockifyClient {
    async fn fetch_projects(&self) -> Result<Vec<Project>, ClockifyError> {
        let url = self.workspace_url("projects");
        debug!("Fetching projects from {}", url);

        let mut request = self.authorized(self.client.get(&url));
        match &self.config.client_id {
            Some(client_id) => request = request.query(&[("clients", client_id.as_str())]),
            None => debug!("No client filter configured, listing every workspace project"),
        }

        let response = request.send().await.map_err(|e| self.map_send_error(e))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(ClockifyError::HttpError { status, message });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ClockifyError::ParseError(e.to_string()))
    }

    async fn create_time_entry(&self, entry: &NewTimeEntry) -> Result<(), ClockifyError> {
        let url = self.workspace_url("time-entries");
        debug!("Posting time entry '{}' to {}", entry.description, url);

        let response = self
            .authorized(self.client.post(&url))
            .json(entry)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        match response.status() {
            StatusCode::OK | StatusCode::CREATED => Ok(()),
            status => {
                let message = response.text().await.unwrap_or_default();
                Err(ClockifyError::HttpError {
                    status: status.as_u16(),
                    message,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::test_server::serve_once;

    #[test]
    fn test_new_time_entry_serialization() {
        let entry = NewTimeEntry {
            start: "2024-01-01T12:00:00.000Z".to_string(),
            end: "2024-01-01T13:00:00.000Z".to_string(),
            description: "Standup".to_string(),
            billable: false,
            user_id: "user-1".to_string(),
            project_id: Some("p-1".to_string()),
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["start"], "2024-01-01T12:00:00.000Z");
        assert_eq!(json["billable"], false);
        assert_eq!(json["userId"], "user-1");
        assert_eq!(json["projectId"], "p-1");
    }

    #[test]
    fn test_missing_project_serializes_as_null() {
        let entry = NewTimeEntry {
            start: String::new(),
            end: String::new(),
            description: "Lunch".to_string(),
            billable: false,
            user_id: "user-1".to_string(),
            project_id: None,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert!(json["projectId"].is_null());
        assert!(json.as_object().unwrap().contains_key("projectId"));
    }

    #[test]
    fn test_workspace_url() {
        let client = ClockifyClient::new(ClockifyConfig {
            workspace_id: "ws-1".to_string(),
            base_url: "https://api.example.test/v1/".to_string(),
            ..ClockifyConfig::default()
        })
        .unwrap();
        assert_eq!(
            client.workspace_url("time-entries"),
            "https://api.example.test/v1/workspaces/ws-1/time-entries"
        );
    }

    fn client_for(base_url: &str, client_id: Option<&str>) -> ClockifyClient {
        ClockifyClient::new(ClockifyConfig {
            api_key: "clockify-key".to_string(),
            workspace_id: "ws-1".to_string(),
            user_id: "user-1".to_string(),
            client_id: client_id.map(str::to_string),
            base_url: format!("{}/v1", base_url),
            timeout_seconds: 5,
        })
        .unwrap()
    }

    fn standup() -> NewTimeEntry {
        NewTimeEntry {
            start: "2024-01-01T12:00:00.000Z".to_string(),
            end: "2024-01-01T12:15:00.000Z".to_string(),
            description: "Standup".to_string(),
            billable: false,
            user_id: "user-1".to_string(),
            project_id: None,
        }
    }

    #[tokio::test]
    async fn test_fetch_projects_filters_by_client() {
        let reply = r#"[{"id":"p-1","name":"Backend","archived":false},{"id":"p-2","name":"Frontend"}]"#;
        let (base_url, server) = serve_once("200 OK", reply).await;

        let projects = client_for(&base_url, Some("client-1"))
            .fetch_projects()
            .await
            .unwrap();
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].id, "p-1");
        assert_eq!(projects[1].name, "Frontend");

        let request = server.await.unwrap();
        assert_eq!(
            request.request_line(),
            "GET /v1/workspaces/ws-1/projects?clients=client-1 HTTP/1.1"
        );
        assert_eq!(request.header("x-api-key"), Some("clockify-key"));
    }

    #[tokio::test]
    async fn test_fetch_projects_without_client_sends_no_query() {
        let (base_url, server) = serve_once("200 OK", "[]").await;

        let projects = client_for(&base_url, None).fetch_projects().await.unwrap();
        assert!(projects.is_empty());

        let request = server.await.unwrap();
        assert_eq!(request.request_line(), "GET /v1/workspaces/ws-1/projects HTTP/1.1");
    }

    #[tokio::test]
    async fn test_fetch_projects_unauthorized() {
        let (base_url, server) = serve_once("401 Unauthorized", r#"{"message":"bad key"}"#).await;

        let result = client_for(&base_url, None).fetch_projects().await;
        assert!(matches!(result, Err(ClockifyError::HttpError { status: 401, .. })));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_create_time_entry_posts_body() {
        let (base_url, server) = serve_once("201 Created", r#"{"id":"te-1"}"#).await;

        client_for(&base_url, None)
            .create_time_entry(&standup())
            .await
            .unwrap();

        let request = server.await.unwrap();
        assert_eq!(request.request_line(), "POST /v1/workspaces/ws-1/time-entries HTTP/1.1");
        assert_eq!(request.header("x-api-key"), Some("clockify-key"));
        let body: serde_json::Value = serde_json::from_str(&request.body).unwrap();
        assert_eq!(body["billable"], false);
        assert_eq!(body["userId"], "user-1");
        assert_eq!(body["start"], "2024-01-01T12:00:00.000Z");
        assert!(body["projectId"].is_null());
    }

    #[tokio::test]
    async fn test_create_time_entry_rejected() {
        let (base_url, server) = serve_once("400 Bad Request", r#"{"message":"overlap"}"#).await;

        match client_for(&base_url, None).create_time_entry(&standup()).await {
            Err(ClockifyError::HttpError { status, message }) => {
                assert_eq!(status, 400);
                assert_eq!(message, r#"{"message":"overlap"}"#);
            }
            other => panic!("Expected HttpError, got {:?}", other),
        }
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_create_time_entry_only_ok_or_created_succeed() {
        let (base_url, server) = serve_once("202 Accepted", "{}").await;

        let result = client_for(&base_url, None).create_time_entry(&standup()).await;
        assert!(matches!(result, Err(ClockifyError::HttpError { status: 202, .. })));
        server.await.unwrap();
    }
}
