// Error kinds for task operations

use crate::task::MIN_DESCRIPTION_LEN;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong while loading, mutating, or persisting tasks.
///
/// All variants are recovered at the command dispatch boundary: the message
/// goes to stderr and the command ends without crashing the process.
#[derive(Debug, Error)]
pub enum TaskError {
    /// The backing file exists but does not hold a valid task list.
    #[error("task file {} is not a valid task list", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The backing file could not be read.
    #[error("failed to read task file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The backing file could not be written.
    #[error("failed to write task file {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The task list could not be serialized.
    #[error("failed to serialize task list")]
    Serialize(#[source] serde_json::Error),

    /// No task carries the requested id.
    #[error("no task with id {0}")]
    NotFound(u32),

    /// The description was rejected before any mutation was attempted.
    #[error("description must be at least {min} characters", min = MIN_DESCRIPTION_LEN)]
    DescriptionTooShort,

    /// The user declined the delete confirmation.
    #[error("deletion cancelled")]
    Cancelled,
}
