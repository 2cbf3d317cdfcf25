use std::time::{Duration, Instant};

use tracing::debug;

use crate::model::config::Config;
use crate::model::{Features, Group, Task, TaskId, Variant};

pub const DEFAULT_UNDO_TIMEOUT: Duration = Duration::from_millis(3000);

/// Whether a task is currently being edited through the draft input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditState {
    #[default]
    Idle,
    Editing(TaskId),
}

/// Validation state of the draft input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputError {
    #[default]
    None,
    EmptyDraft,
}

/// What a submit did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Added(TaskId),
    Edited(TaskId),
    /// Draft was empty or whitespace; the error flag is now set
    Rejected,
}

/// Deadline for the undo affordance. Each delete issues a new generation,
/// so a timer from an earlier delete can never dismiss a later one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoTimer {
    pub deadline: Instant,
    pub generation: u64,
}

impl UndoTimer {
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.deadline
    }

    pub fn remaining(&self, now: Instant) -> Duration {
        self.deadline.saturating_duration_since(now)
    }
}

/// The most recently deleted task and the timer that will discard it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingUndo {
    pub task: Task,
    pub timer: UndoTimer,
}

/// Presentation-agnostic todo list state and the intents that mutate it.
///
/// Every intent is infallible: stale ids and intents the variant does not
/// offer are absorbed as no-ops. Renderers read the state through the
/// accessors and derived views and never mutate it directly.
#[derive(Debug, Clone)]
pub struct TodoList {
    variant: Variant,
    features: Features,
    undo_timeout: Duration,
    tasks: Vec<Task>,
    draft: String,
    edit: EditState,
    error: InputError,
    pending_undo: Option<PendingUndo>,
    next_id: u64,
    timer_generation: u64,
}

impl TodoList {
    pub fn new(variant: Variant) -> Self {
        TodoList {
            variant,
            features: variant.features(),
            undo_timeout: DEFAULT_UNDO_TIMEOUT,
            tasks: Vec::new(),
            draft: String::new(),
            edit: EditState::Idle,
            error: InputError::None,
            pending_undo: None,
            next_id: 1,
            timer_generation: 0,
        }
    }

    /// A list set up from the loaded configuration
    pub fn from_config(config: &Config) -> Self {
        TodoList::new(config.variant)
            .with_undo_timeout(Duration::from_millis(config.undo_timeout_ms))
    }

    pub fn with_undo_timeout(mut self, timeout: Duration) -> Self {
        self.undo_timeout = timeout;
        self
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn features(&self) -> Features {
        self.features
    }

    pub fn undo_timeout(&self) -> Duration {
        self.undo_timeout
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn edit_state(&self) -> EditState {
        self.edit
    }

    /// The task being edited, if any
    pub fn editing(&self) -> Option<TaskId> {
        match self.edit {
            EditState::Idle => None,
            EditState::Editing(id) => Some(id),
        }
    }

    pub fn input_error(&self) -> InputError {
        self.error
    }

    pub fn has_error(&self) -> bool {
        self.error == InputError::EmptyDraft
    }

    pub fn pending_undo(&self) -> Option<&PendingUndo> {
        self.pending_undo.as_ref()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    // -----------------------------------------------------------------------
    // Derived views (recomputed on every call)
    // -----------------------------------------------------------------------

    /// Tasks of one group, in list order
    pub fn in_group(&self, group: Group) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(move |t| t.group() == group)
    }

    pub fn group_count(&self, group: Group) -> usize {
        self.in_group(group).count()
    }

    pub fn ongoing(&self) -> impl Iterator<Item = &Task> {
        self.in_group(Group::Ongoing)
    }

    pub fn done(&self) -> impl Iterator<Item = &Task> {
        self.in_group(Group::Done)
    }

    pub fn ongoing_count(&self) -> usize {
        self.group_count(Group::Ongoing)
    }

    pub fn done_count(&self) -> usize {
        self.group_count(Group::Done)
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Task ids in on-screen order: ongoing then done when the variant
    /// splits sections, plain list order otherwise.
    pub fn display_order(&self) -> Vec<TaskId> {
        if self.features.sections {
            self.ongoing().chain(self.done()).map(|t| t.id).collect()
        } else {
            self.tasks.iter().map(|t| t.id).collect()
        }
    }

    /// Whether the edit/delete affordances are shown for `id`. While an edit
    /// is in progress only the edited task keeps them.
    pub fn can_modify(&self, id: TaskId) -> bool {
        match self.edit {
            EditState::Idle => true,
            EditState::Editing(target) => target == id,
        }
    }

    // -----------------------------------------------------------------------
    // Intents
    // -----------------------------------------------------------------------

    /// Replace the draft text and clear any validation error
    pub fn update_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
        self.error = InputError::None;
    }

    /// Add the draft as a new task, or save it into the task being edited
    pub fn submit(&mut self) -> SubmitOutcome {
        let text = self.draft.trim();
        if text.is_empty() {
            debug!("rejected empty draft");
            self.error = InputError::EmptyDraft;
            return SubmitOutcome::Rejected;
        }
        let text = text.to_string();
        self.draft.clear();
        self.error = InputError::None;

        if let EditState::Editing(id) = std::mem::take(&mut self.edit)
            && let Some(task) = self.tasks.iter_mut().find(|t| t.id == id)
        {
            debug!(task = %id, "edited task");
            task.text = text;
            return SubmitOutcome::Edited(id);
        }

        let id = TaskId(self.next_id);
        self.next_id += 1;
        debug!(task = %id, "added task");
        self.tasks.push(Task::new(id, text));
        SubmitOutcome::Added(id)
    }

    /// Flip the done flag. Returns false for an unknown id.
    pub fn toggle_done(&mut self, id: TaskId) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.done = !task.done;
                debug!(task = %id, done = task.done, "toggled task");
                true
            }
            None => false,
        }
    }

    /// Remove a task. When the variant offers undo, the removed task becomes
    /// the pending undo and a fresh timer supersedes any earlier one.
    ///
    /// Deleting the task under edit also ends the edit and clears the draft.
    /// Other tasks cannot be deleted while an edit is in progress.
    pub fn delete(&mut self, id: TaskId, now: Instant) -> bool {
        if !self.can_modify(id) {
            debug!(task = %id, "delete ignored while editing another task");
            return false;
        }
        let Some(pos) = self.position(id) else {
            return false;
        };
        let task = self.tasks.remove(pos);

        if self.edit == EditState::Editing(id) {
            self.edit = EditState::Idle;
            self.draft.clear();
            self.error = InputError::None;
        }

        if self.features.undo {
            self.timer_generation += 1;
            self.pending_undo = Some(PendingUndo {
                task,
                timer: UndoTimer {
                    deadline: now + self.undo_timeout,
                    generation: self.timer_generation,
                },
            });
        }
        debug!(task = %id, "deleted task");
        true
    }

    /// Re-append the pending deleted task at the end of the list.
    /// Its original position is not restored.
    pub fn undo_delete(&mut self) -> Option<TaskId> {
        let pending = self.pending_undo.take()?;
        let id = pending.task.id;
        self.tasks.push(pending.task);
        debug!(task = %id, generation = pending.timer.generation, "undid delete");
        Some(id)
    }

    /// Start editing a task: the draft is seeded with its text. Only one task
    /// can be edited at a time, and only the styled variant edits at all.
    pub fn begin_edit(&mut self, id: TaskId) -> bool {
        if !self.features.editing || self.edit != EditState::Idle {
            return false;
        }
        let Some(task) = self.get(id) else {
            return false;
        };
        self.draft = task.text.clone();
        self.edit = EditState::Editing(id);
        self.error = InputError::None;
        debug!(task = %id, "began edit");
        true
    }

    /// Expire the pending undo once its deadline has passed.
    /// Returns true when the undo affordance was dismissed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match &self.pending_undo {
            Some(pending) if pending.timer.is_expired(now) => {
                debug!(generation = pending.timer.generation, "undo window elapsed");
                self.pending_undo = None;
                true
            }
            _ => false,
        }
    }
}
