//! Client core for the task list app: the HTTP client for the remote `/tasks`
//! resource, the controller that drives the mutate -> fetch -> publish cycle,
//! and the pure completion statistics.

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use shared::{
    domain::{Task, TaskId},
    protocol::TaskPayload,
};
use thiserror::Error;

pub mod controller;
pub mod stats;

pub use controller::{ClientEvent, TaskListController};
pub use stats::CompletionStats;

/// Rejected task text: empty once surrounding whitespace is stripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("task name must not be empty")]
pub struct InvalidTaskText;

/// Trims `input` and rejects it when nothing remains.
///
/// Every code path that submits task text goes through this before a request
/// is issued; the remote resource never sees an empty task name.
pub fn validated_task_text(input: &str) -> Result<&str, InvalidTaskText> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        Err(InvalidTaskText)
    } else {
        Ok(trimmed)
    }
}

/// Operations against the remote task resource.
///
/// `TaskClient` is the production implementation; tests substitute recording
/// doubles behind this trait.
#[async_trait]
pub trait TaskApi: Send + Sync {
    async fn list_tasks(&self) -> Result<Vec<Task>>;
    async fn create_task(&self, payload: &TaskPayload) -> Result<()>;
    async fn replace_task(&self, task_id: TaskId, payload: &TaskPayload) -> Result<()>;
    async fn delete_task(&self, task_id: TaskId) -> Result<()>;
}

/// `reqwest`-backed client for the `/tasks` CRUD resource.
///
/// Any non-success status is surfaced uniformly through `error_for_status`;
/// the status code ends up in the logged error but is never branched on.
pub struct TaskClient {
    http: Client,
    server_url: String,
}

impl TaskClient {
    pub fn new(server_url: impl Into<String>) -> Self {
        let server_url = server_url.into();
        Self {
            http: Client::new(),
            server_url: server_url.trim_end_matches('/').to_string(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/tasks", self.server_url)
    }

    fn item_url(&self, task_id: TaskId) -> String {
        format!("{}/tasks/{}", self.server_url, task_id.0)
    }
}

#[async_trait]
impl TaskApi for TaskClient {
    async fn list_tasks(&self) -> Result<Vec<Task>> {
        let tasks = self
            .http
            .get(self.collection_url())
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(tasks)
    }

    async fn create_task(&self, payload: &TaskPayload) -> Result<()> {
        self.http
            .post(self.collection_url())
            .json(payload)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn replace_task(&self, task_id: TaskId, payload: &TaskPayload) -> Result<()> {
        self.http
            .put(self.item_url(task_id))
            .json(payload)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn delete_task(&self, task_id: TaskId) -> Result<()> {
        self.http
            .delete(self.item_url(task_id))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
