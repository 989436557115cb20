//! Controller driving the render/sync cycle.
//!
//! The remote resource is the single source of truth: every successful
//! mutation is followed by a full re-fetch (read-after-write), never by a
//! local state patch. Subscribers receive a fresh snapshot on each reload and
//! replace their entire rendered list with it.

use anyhow::Result;
use shared::{
    domain::{Task, TaskId},
    protocol::TaskPayload,
};
use tokio::sync::broadcast;
use tracing::debug;

use crate::{stats::CompletionStats, validated_task_text, TaskApi};

/// Events published after successful controller operations.
#[derive(Debug, Clone)]
pub enum ClientEvent {
    /// A fresh snapshot of the full collection plus its derived stats.
    TasksLoaded {
        tasks: Vec<Task>,
        stats: CompletionStats,
    },
    /// The create request was accepted; the input field may be cleared.
    TaskCreated,
}

pub struct TaskListController<A: TaskApi> {
    api: A,
    events: broadcast::Sender<ClientEvent>,
}

impl<A: TaskApi> TaskListController<A> {
    pub fn new(api: A) -> Self {
        let (events, _) = broadcast::channel(64);
        Self { api, events }
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<ClientEvent> {
        self.events.subscribe()
    }

    /// Fetches the full collection and publishes a fresh snapshot.
    ///
    /// The sole re-entry point after any mutation. On failure no snapshot is
    /// published, so the previously rendered list stays visible; the caller
    /// logs the error and abandons the operation without retry.
    pub async fn refresh(&self) -> Result<()> {
        let tasks = self.api.list_tasks().await?;
        let stats = CompletionStats::from_tasks(&tasks);
        let _ = self.events.send(ClientEvent::TasksLoaded { tasks, stats });
        Ok(())
    }

    /// Creates a task from `text` and reloads.
    ///
    /// Whitespace-only input fails with [`crate::InvalidTaskText`] before any
    /// request is sent. New tasks always start incomplete.
    pub async fn create_task(&self, text: &str) -> Result<()> {
        let text = validated_task_text(text)?;
        self.api.create_task(&TaskPayload::draft(text)).await?;
        let _ = self.events.send(ClientEvent::TaskCreated);
        self.refresh().await
    }

    /// Full-replacement update flipping `completed` while keeping the text.
    ///
    /// No optimistic flip: the change becomes visible only once the round
    /// trip and the follow-up fetch both succeed.
    pub async fn toggle_completion(&self, task: &Task) -> Result<()> {
        self.api.replace_task(task.id, &task.toggled()).await?;
        self.refresh().await
    }

    /// Renames a task, preserving its completion flag.
    ///
    /// An empty trimmed value is silently ignored: no request goes out and no
    /// snapshot is published, so a row mid-edit stays in edit mode.
    pub async fn edit_task(&self, task_id: TaskId, new_text: &str, completed: bool) -> Result<()> {
        let Ok(text) = validated_task_text(new_text) else {
            debug!(task_id = task_id.0, "ignoring edit with empty task name");
            return Ok(());
        };
        let payload = TaskPayload {
            task: text.to_string(),
            completed,
        };
        self.api.replace_task(task_id, &payload).await?;
        self.refresh().await
    }

    pub async fn delete_task(&self, task_id: TaskId) -> Result<()> {
        self.api.delete_task(task_id).await?;
        self.refresh().await
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
