use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable task identity, assigned once at creation and never reused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which derived group a task is shown in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Group {
    Ongoing,
    Done,
}

/// A single todo item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    /// Trimmed, never empty
    pub text: String,
    pub done: bool,
}

impl Task {
    pub fn new(id: TaskId, text: impl Into<String>) -> Self {
        Task {
            id,
            text: text.into(),
            done: false,
        }
    }

    pub fn group(&self) -> Group {
        if self.done { Group::Done } else { Group::Ongoing }
    }

    /// The markdown-style checkbox shown next to the task
    pub fn checkbox(&self) -> &'static str {
        if self.done { "[x]" } else { "[ ]" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_task_is_ongoing() {
        let task = Task::new(TaskId(1), "Buy milk");
        assert!(!task.done);
        assert_eq!(task.group(), Group::Ongoing);
        assert_eq!(task.checkbox(), "[ ]");
    }

    #[test]
    fn done_task_group_and_checkbox() {
        let mut task = Task::new(TaskId(2), "Walk dog");
        task.done = true;
        assert_eq!(task.group(), Group::Done);
        assert_eq!(task.checkbox(), "[x]");
    }

    #[test]
    fn task_id_serializes_as_number() {
        let task = Task::new(TaskId(7), "x");
        let json = serde_json::to_string(&task).unwrap();
        assert_eq!(json, r#"{"id":7,"text":"x","done":false}"#);
    }
}
