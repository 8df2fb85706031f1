//! Column and board value shapes.
//!
//! # Responsibility
//! - Define the fixed workflow stages and the ordered board value.
//! - Provide the lookup helpers the engine and aggregator build on.
//!
//! # Invariants
//! - Column identity is drawn from a closed, order-significant set.
//! - The board serializes as a bare column array, matching snapshots
//!   produced by earlier sessions.

use crate::model::task::{Task, TaskId};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Fixed workflow stage identity.
///
/// The set is closed and its declaration order is the board order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColumnId {
    Todo,
    InProgress,
    Review,
    Done,
}

impl ColumnId {
    /// All stages in board order.
    pub const ALL: [ColumnId; 4] = [
        ColumnId::Todo,
        ColumnId::InProgress,
        ColumnId::Review,
        ColumnId::Done,
    ];

    /// Stable string id used on the wire and as a drop-target key.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in-progress",
            Self::Review => "review",
            Self::Done => "done",
        }
    }

    /// Parses a stable string id back into a stage.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "todo" => Some(Self::Todo),
            "in-progress" => Some(Self::InProgress),
            "review" => Some(Self::Review),
            "done" => Some(Self::Done),
            _ => None,
        }
    }

    /// Default display label for the stage.
    pub fn default_title(self) -> &'static str {
        match self {
            Self::Todo => "To Do",
            Self::InProgress => "In Progress",
            Self::Review => "Review",
            Self::Done => "Done",
        }
    }
}

impl Display for ColumnId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named workflow stage holding an ordered task list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    /// Display label; defaults per stage but survives snapshots as-is.
    pub title: String,
    pub tasks: Vec<Task>,
}

impl Column {
    /// Creates an empty column with the stage's default label.
    pub fn empty(id: ColumnId) -> Self {
        Self {
            id,
            title: id.default_title().to_string(),
            tasks: Vec::new(),
        }
    }

    /// Number of real (countable) tasks in this column.
    pub fn real_task_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.is_real()).count()
    }
}

/// Full ordered set of columns and their tasks.
///
/// Serializes transparently as the column array so snapshots match the
/// original `boardState` payload shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    pub columns: Vec<Column>,
}

impl Default for Board {
    /// Four empty standard columns in board order.
    fn default() -> Self {
        Self {
            columns: ColumnId::ALL.iter().copied().map(Column::empty).collect(),
        }
    }
}

impl Board {
    /// Returns the column with the given stage id, if present.
    pub fn column(&self, id: ColumnId) -> Option<&Column> {
        self.columns.iter().find(|column| column.id == id)
    }

    pub(crate) fn column_mut(&mut self, id: ColumnId) -> Option<&mut Column> {
        self.columns.iter_mut().find(|column| column.id == id)
    }

    /// Locates a task by scanning all columns.
    ///
    /// Returns the owning stage and the task's index within it.
    pub fn find_task(&self, task_id: TaskId) -> Option<(ColumnId, usize)> {
        for column in &self.columns {
            if let Some(index) = column.tasks.iter().position(|task| task.id == task_id) {
                return Some((column.id, index));
            }
        }
        None
    }

    /// Returns a task by id regardless of which column owns it.
    pub fn task(&self, task_id: TaskId) -> Option<&Task> {
        self.columns
            .iter()
            .flat_map(|column| column.tasks.iter())
            .find(|task| task.id == task_id)
    }

    /// Iterates every task in deterministic order: column order, then
    /// in-column order. Export and analytics rely on this order.
    pub fn iter_tasks(&self) -> impl Iterator<Item = (&Column, &Task)> {
        self.columns
            .iter()
            .flat_map(|column| column.tasks.iter().map(move |task| (column, task)))
    }

    /// Total number of real tasks on the board.
    pub fn real_task_count(&self) -> usize {
        self.columns
            .iter()
            .map(|column| column.real_task_count())
            .sum()
    }
}
