use std::fmt::Write;
use std::time::Instant;

use serde::Serialize;

use crate::labels;
use crate::model::{Group, Task, Variant};
use crate::ops::todo_list::TodoList;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct ListJson {
    pub variant: Variant,
    pub tasks: Vec<Task>,
    pub ongoing_count: usize,
    pub done_count: usize,
    pub draft: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editing: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_undo: Option<PendingUndoJson>,
}

#[derive(Serialize)]
pub struct PendingUndoJson {
    pub task: Task,
    pub remaining_ms: u64,
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

pub fn list_to_json(list: &TodoList, now: Instant) -> ListJson {
    ListJson {
        variant: list.variant(),
        tasks: list.tasks().to_vec(),
        ongoing_count: list.ongoing_count(),
        done_count: list.done_count(),
        draft: list.draft().to_string(),
        editing: list.editing().map(|id| id.0),
        error: list
            .has_error()
            .then(|| list.variant().empty_draft_message()),
        pending_undo: list.pending_undo().map(|p| PendingUndoJson {
            task: p.task.clone(),
            remaining_ms: p.timer.remaining(now).as_millis() as u64,
        }),
    }
}

// ---------------------------------------------------------------------------
// Text output
// ---------------------------------------------------------------------------

fn push_task(out: &mut String, task: &Task) {
    let _ = writeln!(out, "  {} {}  {}", task.checkbox(), task.id, task.text);
}

/// Plain-text rendering of the list, using the same labels as the TUI
pub fn format_list(list: &TodoList, now: Instant) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", labels::APP_TITLE);

    if let Some(id) = list.editing() {
        let _ = writeln!(out, "Editing {}: {}", id, list.draft());
    } else if !list.draft().is_empty() {
        let _ = writeln!(out, "Draft: {}", list.draft());
    }
    if list.has_error() {
        let _ = writeln!(out, "{}", list.variant().empty_draft_message());
    }

    let features = list.features();
    if list.is_empty() {
        if features.empty_state {
            let _ = writeln!(out, "{}", labels::EMPTY_STATE);
        }
    } else if features.sections {
        for group in [Group::Ongoing, Group::Done] {
            let count = list.group_count(group);
            if count > 0 {
                let _ = writeln!(out, "{}", labels::group_heading(group, count));
                list.in_group(group).for_each(|t| push_task(&mut out, t));
            }
        }
    } else {
        list.tasks().iter().for_each(|t| push_task(&mut out, t));
    }

    if let Some(pending) = list.pending_undo() {
        let remaining = pending.timer.remaining(now);
        let _ = writeln!(
            out,
            "{}: {}  [{}] {:.1}s",
            labels::TASK_DELETED,
            pending.task.text,
            labels::UNDO,
            remaining.as_secs_f64()
        );
    }
    out
}
