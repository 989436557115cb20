//! Backend commands queued from UI to backend worker.

use shared::domain::{Task, TaskId};

pub enum BackendCommand {
    RefreshTasks,
    CreateTask {
        text: String,
    },
    ToggleTask {
        task: Task,
    },
    EditTask {
        task_id: TaskId,
        text: String,
        completed: bool,
    },
    DeleteTask {
        task_id: TaskId,
    },
}
