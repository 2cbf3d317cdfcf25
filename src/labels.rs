//! User-visible strings shared by the terminal UI and the text output.

use crate::model::Group;

pub const APP_TITLE: &str = "Todo List App";
pub const ADD: &str = "Add";
pub const SAVE: &str = "Save";
pub const TASK_DELETED: &str = "Task deleted";
pub const UNDO: &str = "Undo";
pub const EMPTY_STATE: &str = "No tasks yet. Add some tasks to get started!";

/// Section heading with its task count, e.g. `Ongoing Tasks (2)`
pub fn group_heading(group: Group, count: usize) -> String {
    let name = match group {
        Group::Ongoing => "Ongoing",
        Group::Done => "Done",
    };
    format!("{} Tasks ({})", name, count)
}
