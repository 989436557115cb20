use serde::{Deserialize, Serialize};

use crate::domain::Task;

/// Request body for `POST /tasks` and `PUT /tasks/{id}`.
///
/// Updates carry full replacement semantics, so the body always holds both
/// fields. The server owns `id`; it never appears in a request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskPayload {
    pub task: String,
    pub completed: bool,
}

impl TaskPayload {
    /// Body for a brand-new task. New tasks always start incomplete.
    pub fn draft(task: impl Into<String>) -> Self {
        Self {
            task: task.into(),
            completed: false,
        }
    }
}

impl Task {
    /// Replacement body that flips only the completion flag.
    pub fn toggled(&self) -> TaskPayload {
        TaskPayload {
            task: self.task.clone(),
            completed: !self.completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TaskId;

    #[test]
    fn task_payload_wire_shape_matches_resource_contract() {
        let encoded = serde_json::to_value(TaskPayload::draft("Buy milk")).unwrap();
        assert_eq!(
            encoded,
            serde_json::json!({ "task": "Buy milk", "completed": false })
        );
    }

    #[test]
    fn task_decodes_from_resource_response() {
        let task: Task =
            serde_json::from_str(r#"{"id": 3, "task": "Water plants", "completed": true}"#)
                .unwrap();
        assert_eq!(task.id, TaskId(3));
        assert_eq!(task.task, "Water plants");
        assert!(task.completed);
    }

    #[test]
    fn toggled_preserves_text_and_flips_flag() {
        let task = Task {
            id: TaskId(1),
            task: "Buy milk".to_string(),
            completed: false,
        };
        let payload = task.toggled();
        assert_eq!(payload.task, "Buy milk");
        assert!(payload.completed);
    }
}
