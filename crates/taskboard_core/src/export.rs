//! Tabular export projection.
//!
//! # Responsibility
//! - Flatten the board into one row per real task, in a deterministic
//!   order: column order, then in-column task order.
//!
//! The export collaborator owns CSV quoting and file delivery; the
//! core only provides the cells and their order.

use crate::model::board::Board;
use chrono::{DateTime, Utc};

/// Header cells matching [`ExportRow::fields`] order.
pub const EXPORT_HEADER: [&str; 5] = ["Column", "Task ID", "Title", "Description", "Deadline"];

const DEADLINE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One exported task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRow {
    pub column_title: String,
    pub task_id: String,
    pub title: String,
    pub description: String,
    /// Formatted deadline, or empty when the task has none.
    pub deadline: String,
}

impl ExportRow {
    /// The five cells in header order.
    pub fn fields(&self) -> [&str; 5] {
        [
            &self.column_title,
            &self.task_id,
            &self.title,
            &self.description,
            &self.deadline,
        ]
    }
}

/// Projects every real task into an export row.
///
/// Drafts are skipped; row order follows the board's deterministic
/// iteration order.
pub fn export_rows(board: &Board) -> Vec<ExportRow> {
    board
        .iter_tasks()
        .filter(|(_, task)| task.is_real())
        .map(|(column, task)| ExportRow {
            column_title: column.title.clone(),
            task_id: task.id.to_string(),
            title: task.title.clone(),
            description: task.description.clone(),
            deadline: format_deadline(task.deadline),
        })
        .collect()
}

fn format_deadline(deadline: Option<DateTime<Utc>>) -> String {
    match deadline {
        Some(value) => value.format(DEADLINE_FORMAT).to_string(),
        None => String::new(),
    }
}
