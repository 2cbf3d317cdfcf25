use std::time::Duration;

use crate::model::TaskId;

/// Error raised while reading a replay script
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("line {line}: unknown command `{command}`")]
    UnknownCommand { line: usize, command: String },
    #[error("line {line}: `{command}` expects {expected}")]
    BadArgument {
        line: usize,
        command: &'static str,
        expected: &'static str,
    },
}

/// One user intent from a script line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// `draft <text>`; the text is kept verbatim, including surrounding spaces
    Draft(String),
    Submit,
    /// `add <text>`: draft followed by submit
    Add(String),
    Toggle(TaskId),
    Delete(TaskId),
    Undo,
    Edit(TaskId),
    /// Advance the virtual clock, then expire the undo window if due
    Wait(Duration),
}

/// An intent together with the 1-based line it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub line: usize,
    pub intent: Intent,
}

/// Parse a replay script. Blank lines and `#` comments are skipped.
///
/// ```text
/// add Buy milk
/// toggle 1
/// delete 1
/// wait 3000
/// ```
pub fn parse_script(source: &str) -> Result<Vec<Step>, ScriptError> {
    let mut steps = Vec::new();
    for (idx, raw) in source.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim_start();
        if trimmed.trim_end().is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let (command, rest) = match trimmed.split_once(' ') {
            Some((c, r)) => (c, r),
            None => (trimmed.trim_end(), ""),
        };
        let intent = match command {
            "draft" => Intent::Draft(rest.to_string()),
            "submit" => no_args(rest, line, "submit", Intent::Submit)?,
            "add" => Intent::Add(rest.to_string()),
            "toggle" => Intent::Toggle(parse_id(rest, line, "toggle")?),
            "delete" => Intent::Delete(parse_id(rest, line, "delete")?),
            "edit" => Intent::Edit(parse_id(rest, line, "edit")?),
            "undo" => no_args(rest, line, "undo", Intent::Undo)?,
            "wait" => Intent::Wait(parse_millis(rest, line)?),
            other => {
                return Err(ScriptError::UnknownCommand {
                    line,
                    command: other.to_string(),
                });
            }
        };
        steps.push(Step { line, intent });
    }
    Ok(steps)
}

fn no_args(
    arg: &str,
    line: usize,
    command: &'static str,
    intent: Intent,
) -> Result<Intent, ScriptError> {
    if arg.trim().is_empty() {
        Ok(intent)
    } else {
        Err(ScriptError::BadArgument {
            line,
            command,
            expected: "no arguments",
        })
    }
}

fn parse_id(arg: &str, line: usize, command: &'static str) -> Result<TaskId, ScriptError> {
    arg.trim()
        .parse::<u64>()
        .map(TaskId)
        .map_err(|_| ScriptError::BadArgument {
            line,
            command,
            expected: "a task id",
        })
}

fn parse_millis(arg: &str, line: usize) -> Result<Duration, ScriptError> {
    arg.trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|_| ScriptError::BadArgument {
            line,
            command: "wait",
            expected: "a duration in milliseconds",
        })
}
