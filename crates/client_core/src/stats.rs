//! Derived completion summary over a fetched task snapshot.

use shared::domain::Task;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompletionStats {
    pub completed: usize,
    pub total: usize,
}

impl CompletionStats {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        Self {
            completed: tasks.iter().filter(|task| task.completed).count(),
            total: tasks.len(),
        }
    }

    /// Completion percentage; 0 for an empty collection.
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.completed as f64 / self.total as f64 * 100.0
        }
    }

    /// Headline text: celebratory at exactly 100%, rounded percentage
    /// otherwise.
    pub fn summary_label(&self) -> String {
        if self.total > 0 && self.completed == self.total {
            "All tasks completed!".to_string()
        } else {
            format!("Completed: {}%", self.percentage().round())
        }
    }

    pub fn ratio_label(&self) -> String {
        format!("{} / {}", self.completed, self.total)
    }
}
