// crates/tasks-core/src/note.rs - The note entity and its workflow status

use chrono::{Local, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Format used for `createdAt` / `updatedAt`, both on disk and in listings
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// Errors that can occur while interpreting a status string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatusError {
    #[error("Status should be todo, in-progress or done")]
    Invalid(String),
}

/// Workflow stage of a note
///
/// Serialized in kebab-case so the storage file reads `"todo"`,
/// `"in-progress"` and `"done"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    #[default]
    Todo,
    InProgress,
    Done,
}

impl Status {
    /// Every status, in workflow order
    pub const ALL: [Status; 3] = [Status::Todo, Status::InProgress, Status::Done];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in-progress",
            Self::Done => "done",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = StatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Status::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| StatusError::Invalid(s.to_string()))
    }
}

/// A single task record
///
/// Field order matches the storage layout: `id`, `status`, `content`,
/// `createdAt`, `updatedAt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: u64,
    pub status: Status,
    pub content: String,
    #[serde(with = "time_of_day")]
    pub created_at: NaiveTime,
    #[serde(with = "time_of_day")]
    pub updated_at: NaiveTime,
}

impl Note {
    /// Create a fresh `todo` note whose timestamps are both `now`
    pub fn new<S: Into<String>>(id: u64, content: S, now: NaiveTime) -> Self {
        Self {
            id,
            status: Status::Todo,
            content: content.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the content and refresh `updated_at`
    pub fn set_content<S: Into<String>>(&mut self, content: S, now: NaiveTime) {
        self.content = content.into();
        self.updated_at = now;
    }

    /// Move to another status and refresh `updated_at`
    pub fn set_status(&mut self, status: Status, now: NaiveTime) {
        self.status = status;
        self.updated_at = now;
    }
}

/// One listing line: `[<id>] <status> "<content>" created at <t> updated at <t>`
impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} \"{}\" created at {} updated at {}",
            self.id,
            self.status,
            self.content,
            self.created_at.format(TIME_FORMAT),
            self.updated_at.format(TIME_FORMAT)
        )
    }
}

/// Current local time of day, truncated to whole seconds
pub fn now() -> NaiveTime {
    truncate_to_seconds(Local::now().time())
}

/// Drop sub-second precision so in-memory values equal what the file stores
pub fn truncate_to_seconds(time: NaiveTime) -> NaiveTime {
    time.with_nanosecond(0).unwrap_or(time)
}

/// Serde adapter storing a `NaiveTime` as `HH:MM:SS`
mod time_of_day {
    use super::TIME_FORMAT;
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&time.format(TIME_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, TIME_FORMAT).map_err(de::Error::custom)
    }
}
