// Backing file operations

use crate::error::TaskError;
use crate::task::Task;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Read the full task list from `path`.
///
/// A missing file is created holding an empty list. An existing file must
/// parse as a JSON array of tasks; a malformed file surfaces as
/// [`TaskError::Parse`] with nothing recovered from it.
pub fn read_tasks(path: &Path) -> Result<Vec<Task>, TaskError> {
    if !path.exists() {
        debug!(file = ?path, "Task file missing, creating empty list");
        write_tasks(path, &[])?;
        return Ok(Vec::new());
    }

    let data = fs::read_to_string(path).map_err(|source| TaskError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let tasks: Vec<Task> = serde_json::from_str(&data).map_err(|source| TaskError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(file = ?path, count = tasks.len(), "Loaded task list");
    Ok(tasks)
}

/// Overwrite `path` with the full task list.
///
/// Full replace, never an append; the previous content is gone after this
/// returns.
pub fn write_tasks(path: &Path, tasks: &[Task]) -> Result<(), TaskError> {
    let json = serde_json::to_string_pretty(tasks).map_err(TaskError::Serialize)?;

    fs::write(path, json).map_err(|source| TaskError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(file = ?path, count = tasks.len(), "Wrote task list");
    Ok(())
}
