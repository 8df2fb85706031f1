//! Task domain model and save-time validation.
//!
//! # Responsibility
//! - Define the task record carried by every column.
//! - Provide the draft/real visibility predicate shared by analytics
//!   and export.
//! - Validate proposed saves field by field before the engine commits
//!   them.
//!
//! # Invariants
//! - `id` is generated once at creation and never reused or mutated.
//! - `created_at` is set once and never mutated.
//! - `is_editing` is transient UI state: `true` right after creation,
//!   cleared on the first successful save.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a task.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// Unit of work held by a column.
///
/// Wire fields are camelCase to stay byte-compatible with snapshots
/// written by earlier sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Stable id, unique across the whole board.
    pub id: TaskId,
    pub title: String,
    pub description: String,
    /// Absent means "no deadline".
    #[serde(default)]
    pub deadline: Option<DateTime<Utc>>,
    /// Set once at creation, never mutated afterwards.
    pub created_at: DateTime<Utc>,
    /// Transient edit flag, not part of the task's persisted identity.
    #[serde(default)]
    pub is_editing: bool,
}

impl Task {
    /// Creates a fresh draft: empty content, no deadline, edit mode on.
    pub fn new_draft(now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: String::new(),
            description: String::new(),
            deadline: None,
            created_at: now,
            is_editing: true,
        }
    }

    /// Returns whether this task is "real": countable and renderable.
    ///
    /// A task is real when any of title/description/deadline carries
    /// content, or when it is actively being edited.
    pub fn is_real(&self) -> bool {
        self.is_editing
            || !self.title.is_empty()
            || !self.description.is_empty()
            || self.deadline.is_some()
    }

    /// Returns whether this task is a transient draft.
    ///
    /// Drafts are excluded from analytics counts and export rows, and
    /// exist only while the user fills in the creation form.
    pub fn is_draft(&self) -> bool {
        !self.is_real()
    }

    /// Applies a validated save: replaces content fields and leaves
    /// edit mode. Identity fields (`id`, `created_at`) are preserved.
    pub(crate) fn apply_patch(&mut self, patch: &TaskPatch) {
        self.title = patch.title.clone();
        self.description = patch.description.clone();
        self.deadline = patch.deadline;
        self.is_editing = false;
    }
}

/// Task field names used for field-level validation messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskField {
    Title,
    Description,
    Deadline,
}

impl TaskField {
    /// Human message shown next to the offending form field.
    pub fn message(self) -> &'static str {
        match self {
            Self::Title => "Title is required",
            Self::Description => "Description is required",
            Self::Deadline => "Deadline is required",
        }
    }
}

impl Display for TaskField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Title => write!(f, "title"),
            Self::Description => write!(f, "description"),
            Self::Deadline => write!(f, "deadline"),
        }
    }
}

/// Validation failure for a proposed task save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    /// One or more required fields are empty after trimming.
    MissingFields(Vec<TaskField>),
    /// Deadline text could not be parsed as a timestamp.
    InvalidDeadline(String),
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingFields(fields) => {
                let mut first = true;
                for field in fields {
                    if !first {
                        write!(f, "; ")?;
                    }
                    write!(f, "{}", field.message())?;
                    first = false;
                }
                Ok(())
            }
            Self::InvalidDeadline(value) => write!(f, "invalid deadline: `{value}`"),
        }
    }
}

impl Error for TaskValidationError {}

/// Proposed content for a task save.
///
/// Carries exactly the fields the user can edit; identity fields are
/// never part of a patch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskPatch {
    pub title: String,
    pub description: String,
    pub deadline: Option<DateTime<Utc>>,
}

impl TaskPatch {
    /// Builds a patch from plain field values.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        deadline: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            deadline,
        }
    }

    /// Builds a patch parsing the deadline from RFC 3339 text.
    ///
    /// # Errors
    /// Returns `InvalidDeadline` when the text is not a valid timestamp.
    pub fn with_deadline_str(
        title: impl Into<String>,
        description: impl Into<String>,
        deadline: &str,
    ) -> Result<Self, TaskValidationError> {
        let parsed = parse_deadline(deadline)?;
        Ok(Self::new(title, description, Some(parsed)))
    }

    /// Checks that every required field is present.
    ///
    /// All three fields are required for a save; the error lists every
    /// missing field so the form can display per-field messages.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        let mut missing = Vec::new();
        if self.title.trim().is_empty() {
            missing.push(TaskField::Title);
        }
        if self.description.trim().is_empty() {
            missing.push(TaskField::Description);
        }
        if self.deadline.is_none() {
            missing.push(TaskField::Deadline);
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(TaskValidationError::MissingFields(missing))
        }
    }
}

/// Parses user-entered deadline text as an RFC 3339 timestamp in UTC.
pub fn parse_deadline(value: &str) -> Result<DateTime<Utc>, TaskValidationError> {
    DateTime::parse_from_rfc3339(value.trim())
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|_| TaskValidationError::InvalidDeadline(value.to_string()))
}
