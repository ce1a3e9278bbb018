//! Task record model.
//!
//! # Responsibility
//! - Define the canonical task record shared by collection, query and stats.
//! - Validate text/id invariants at construction time.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `text` is never empty or whitespace-only once constructed.
//! - `created_at` is assigned once and never changes.
//!
//! # See also
//! - docs/architecture/data-model.md

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a task record.
///
/// Generated as UUIDv7 so identifiers are monotonic-time-derived and sort in
/// creation order, while staying collision-safe across sessions.
pub type TaskId = Uuid;

/// Urgency level attached to every task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_keyword(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    pub fn from_keyword(value: &str) -> Option<Self> {
        match value {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

/// Validation failure raised when constructing a task record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Task text is empty or whitespace-only after trimming.
    EmptyText,
    /// Caller-provided identifier is the nil UUID.
    NilId,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText => write!(f, "task text cannot be empty"),
            Self::NilId => write!(f, "task id cannot be the nil uuid"),
        }
    }
}

impl Error for TaskValidationError {}

/// Canonical task record.
///
/// Field names follow the persisted wire shape (camelCase, lowercase
/// priority, RFC 3339 `createdAt`); `category` is omitted when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Stable global ID used for toggling, deletion and persistence.
    pub id: TaskId,
    /// Trimmed task text; never empty once stored.
    pub text: String,
    /// Completion flag, flipped only via collection toggle.
    pub completed: bool,
    /// Creation instant; immutable after construction.
    pub created_at: DateTime<Utc>,
    pub priority: Priority,
    /// Optional free-form grouping label; blank input normalizes to `None`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Task {
    /// Creates a new task with a fresh time-ordered ID and current timestamp.
    ///
    /// # Errors
    /// - `EmptyText` when `text` trims to nothing.
    pub fn new(
        text: impl Into<String>,
        priority: Priority,
        category: Option<&str>,
    ) -> Result<Self, TaskValidationError> {
        Self::with_id(Uuid::now_v7(), text, priority, category)
    }

    /// Creates a task with a caller-provided ID.
    ///
    /// Used by load/import paths where identity already exists.
    ///
    /// # Errors
    /// - `NilId` when `id` is the nil UUID.
    /// - `EmptyText` when `text` trims to nothing.
    pub fn with_id(
        id: TaskId,
        text: impl Into<String>,
        priority: Priority,
        category: Option<&str>,
    ) -> Result<Self, TaskValidationError> {
        if id.is_nil() {
            return Err(TaskValidationError::NilId);
        }

        let text = text.into().trim().to_string();
        if text.is_empty() {
            return Err(TaskValidationError::EmptyText);
        }

        let category = category
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string);

        Ok(Self {
            id,
            text,
            completed: false,
            created_at: Utc::now(),
            priority,
            category,
        })
    }

    /// Returns whether this task still needs doing.
    pub fn is_pending(&self) -> bool {
        !self.completed
    }
}
