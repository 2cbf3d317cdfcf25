use std::time::Instant;

use tracing::{debug, info};

use crate::ops::todo_list::{SubmitOutcome, TodoList};
use crate::parse::{Intent, Step};

/// Apply one intent to the list at virtual time `now`. `Wait` advances the
/// clock and then lets the undo timer expire.
pub fn apply_intent(list: &mut TodoList, intent: &Intent, now: &mut Instant) {
    match intent {
        Intent::Draft(text) => list.update_draft(text.as_str()),
        Intent::Submit => {
            list.submit();
        }
        Intent::Add(text) => {
            list.update_draft(text.as_str());
            if list.submit() == SubmitOutcome::Rejected {
                debug!("add with empty text left the error flag set");
            }
        }
        Intent::Toggle(id) => {
            list.toggle_done(*id);
        }
        Intent::Delete(id) => {
            list.delete(*id, *now);
        }
        Intent::Undo => {
            list.undo_delete();
        }
        Intent::Edit(id) => {
            list.begin_edit(*id);
        }
        Intent::Wait(dur) => {
            *now += *dur;
            list.tick(*now);
        }
    }
}

/// Run every step against `list` on a virtual clock starting at `start`.
/// Returns the clock value after the last step.
pub fn run_steps(list: &mut TodoList, steps: &[Step], start: Instant) -> Instant {
    let mut now = start;
    for step in steps {
        debug!(line = step.line, intent = ?step.intent, "replaying");
        apply_intent(list, &step.intent, &mut now);
    }
    info!(
        steps = steps.len(),
        tasks = list.tasks().len(),
        "replay finished"
    );
    now
}
