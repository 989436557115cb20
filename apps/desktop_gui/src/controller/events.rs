//! UI/backend events and error modeling for the desktop GUI.

use client_core::CompletionStats;
use shared::domain::Task;

pub enum UiEvent {
    /// Fresh snapshot of the full list; replaces everything rendered so far
    /// and collapses any row that was in edit mode.
    TasksLoaded {
        tasks: Vec<Task>,
        stats: CompletionStats,
    },
    /// Create confirmed by the server; the input field may be cleared.
    TaskCreated,
    Error(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Transport,
    Validation,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    FetchTasks,
    CreateTask,
    ToggleTask,
    EditTask,
    DeleteTask,
}

impl UiErrorContext {
    pub fn describe(self) -> &'static str {
        match self {
            Self::BackendStartup => "starting the backend worker",
            Self::FetchTasks => "loading tasks",
            Self::CreateTask => "creating a task",
            Self::ToggleTask => "updating a task",
            Self::EditTask => "renaming a task",
            Self::DeleteTask => "deleting a task",
        }
    }
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        let message = message.into();
        let message_lower = message.to_ascii_lowercase();
        let category = if message_lower.contains("empty")
            || message_lower.contains("invalid")
            || message_lower.contains("malformed")
        {
            UiErrorCategory::Validation
        } else if message_lower.contains("timeout")
            || message_lower.contains("timed out")
            || message_lower.contains("connection")
            || message_lower.contains("network")
            || message_lower.contains("dns")
            || message_lower.contains("status")
            || message_lower.contains("unavailable")
        {
            UiErrorCategory::Transport
        } else {
            UiErrorCategory::Unknown
        };

        Self {
            category,
            context,
            message,
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_failures_are_classified_as_transport() {
        let err = UiError::from_message(
            UiErrorContext::FetchTasks,
            "error sending request: connection refused",
        );
        assert_eq!(err.category(), UiErrorCategory::Transport);
        assert_eq!(err.context(), UiErrorContext::FetchTasks);
    }

    #[test]
    fn non_success_statuses_are_classified_as_transport() {
        let err = UiError::from_message(
            UiErrorContext::ToggleTask,
            "HTTP status server error (500 Internal Server Error)",
        );
        assert_eq!(err.category(), UiErrorCategory::Transport);
    }

    #[test]
    fn empty_task_name_is_classified_as_validation() {
        let err = UiError::from_message(UiErrorContext::CreateTask, "task name must not be empty");
        assert_eq!(err.category(), UiErrorCategory::Validation);
    }

    #[test]
    fn unrecognized_messages_fall_back_to_unknown() {
        let err = UiError::from_message(UiErrorContext::DeleteTask, "something odd happened");
        assert_eq!(err.category(), UiErrorCategory::Unknown);
        assert_eq!(err.message(), "something odd happened");
    }
}
