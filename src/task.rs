// Data model for tracked tasks

use crate::error::TaskError;
use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Minimum description length, counted in characters.
pub const MIN_DESCRIPTION_LEN: usize = 3;

/// One tracked unit of work
///
/// Serialized with camelCase field names; `created_at` is set once and never
/// touched again, `updated_at` moves on every mutation. A record persisted
/// without an id, or with a null one, reads back as 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(default, deserialize_with = "id_or_zero")]
    pub id: u32,
    pub description: String,
    pub status: Status,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// `default` covers a missing id; this covers an explicit null.
fn id_or_zero<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let id = Option::<u32>::deserialize(deserializer)?;
    Ok(id.unwrap_or(0))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    #[default]
    Todo,
    InProgress,
    Done,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Todo => "todo",
            Status::InProgress => "in-progress",
            Status::Done => "done",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Check a description before any task is created from it.
///
/// Callers run this at the input boundary; the store itself does not
/// re-validate.
pub fn validate_description(description: &str) -> Result<(), TaskError> {
    if description.chars().count() < MIN_DESCRIPTION_LEN {
        return Err(TaskError::DescriptionTooShort);
    }
    Ok(())
}
