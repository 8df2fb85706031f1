//! Derived board statistics.
//!
//! # Responsibility
//! - Aggregate read-only counters from the current board value.
//!
//! # Invariants
//! - Only real tasks count; drafts are invisible to every metric.
//! - The aggregation is a pure function of `(board, now)`, so results
//!   are point-in-time, not archival: "completed early" compares the
//!   deadline against `now`, not against when the task was finished.

use crate::model::board::{Board, ColumnId};
use chrono::{DateTime, Utc};

/// Read-only statistics derived from one board value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoardAnalytics {
    pub total_tasks: usize,
    pub todo_tasks: usize,
    pub in_progress_tasks: usize,
    pub review_tasks: usize,
    /// Real tasks in the `done` column.
    pub completed_tasks: usize,
    /// round(completed / total * 100); 0 when the board is empty.
    pub completion_percentage: u32,
    /// Deadline strictly in the past, outside `done`.
    pub overdue_tasks: usize,
    /// Deadline strictly in the future, inside `done`.
    pub completed_early_tasks: usize,
}

impl BoardAnalytics {
    /// Computes analytics for `board` as observed at `now`.
    pub fn compute(board: &Board, now: DateTime<Utc>) -> Self {
        let mut stats = Self::default();

        for (column, task) in board.iter_tasks() {
            if !task.is_real() {
                continue;
            }

            stats.total_tasks += 1;
            match column.id {
                ColumnId::Todo => stats.todo_tasks += 1,
                ColumnId::InProgress => stats.in_progress_tasks += 1,
                ColumnId::Review => stats.review_tasks += 1,
                ColumnId::Done => stats.completed_tasks += 1,
            }

            if let Some(deadline) = task.deadline {
                if column.id == ColumnId::Done {
                    if deadline > now {
                        stats.completed_early_tasks += 1;
                    }
                } else if deadline < now {
                    stats.overdue_tasks += 1;
                }
            }
        }

        if stats.total_tasks > 0 {
            let ratio = stats.completed_tasks as f64 / stats.total_tasks as f64;
            stats.completion_percentage = (ratio * 100.0).round() as u32;
        }

        stats
    }

    /// Convenience wrapper computing against the current instant.
    pub fn current(board: &Board) -> Self {
        Self::compute(board, Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::BoardAnalytics;
    use crate::model::board::Board;
    use chrono::{TimeZone, Utc};

    #[test]
    fn empty_board_reports_zero_without_dividing_by_zero() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let stats = BoardAnalytics::compute(&Board::default(), now);
        assert_eq!(stats.total_tasks, 0);
        assert_eq!(stats.completion_percentage, 0);
    }
}
