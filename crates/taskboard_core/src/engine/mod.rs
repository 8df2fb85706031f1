//! Move engine: every board state transition lives here.
//!
//! # Responsibility
//! - Compute a new board value from the previous one plus a user
//!   intent (add/update/delete/move/clear).
//! - Re-apply the deadline policy wherever membership or content
//!   changed; honor manual ordering on same-column reorders.
//!
//! # Invariants
//! - Operations never mutate the caller's board; they return a fresh
//!   value or an error with the original untouched.
//! - Lookup failures are recoverable no-ops, except `add_task` with an
//!   unknown column, which fails fast.
//! - Validation rejects a save before any state changes.

pub mod drag;

use crate::model::board::{Board, ColumnId};
use crate::model::task::{Task, TaskId, TaskPatch, TaskValidationError};
use crate::policy::sort_by_deadline;
use chrono::{DateTime, Utc};
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type EngineResult<T> = Result<T, EngineError>;

/// Errors surfaced by board state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The referenced column is absent from this board. Signals a
    /// programming/config error rather than a race, hence fail-fast.
    ColumnNotFound(ColumnId),
    /// The referenced task could not be located.
    TaskNotFound(TaskId),
    /// The proposed save is incomplete; the board stays unchanged.
    Validation(TaskValidationError),
}

impl Display for EngineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ColumnNotFound(id) => write!(f, "column not found: {id}"),
            Self::TaskNotFound(id) => write!(f, "task not found: {id}"),
            Self::Validation(err) => write!(f, "{err}"),
        }
    }
}

impl Error for EngineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<TaskValidationError> for EngineError {
    fn from(value: TaskValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Inserts a fresh draft task into `column_id`.
///
/// The draft starts in edit mode with empty content and no deadline,
/// so it settles at the end of the no-deadline tail once the column is
/// re-sorted.
///
/// # Errors
/// `ColumnNotFound` when the board has no such column.
pub fn add_task(
    board: &Board,
    column_id: ColumnId,
    now: DateTime<Utc>,
) -> EngineResult<(Board, TaskId)> {
    let mut next = board.clone();
    let column = next
        .column_mut(column_id)
        .ok_or(EngineError::ColumnNotFound(column_id))?;

    let draft = Task::new_draft(now);
    let task_id = draft.id;
    column.tasks.push(draft);
    sort_by_deadline(&mut column.tasks);

    debug!("event=task_added module=engine status=ok column={column_id} task={task_id}");
    Ok((next, task_id))
}

/// Saves edited content into an existing task.
///
/// Validation runs before any state change: a patch missing title,
/// description, or deadline is rejected with field-level issues and
/// the board value stays exactly as it was. On success the task leaves
/// edit mode and its column is re-sorted, since the deadline may have
/// moved.
///
/// # Errors
/// - `Validation` when required fields are missing.
/// - `TaskNotFound` when the task is absent from that column.
pub fn update_task(
    board: &Board,
    column_id: ColumnId,
    task_id: TaskId,
    patch: &TaskPatch,
) -> EngineResult<Board> {
    patch.validate()?;

    let mut next = board.clone();
    let column = next
        .column_mut(column_id)
        .ok_or(EngineError::TaskNotFound(task_id))?;
    let task = column
        .tasks
        .iter_mut()
        .find(|task| task.id == task_id)
        .ok_or(EngineError::TaskNotFound(task_id))?;

    task.apply_patch(patch);
    sort_by_deadline(&mut column.tasks);

    debug!("event=task_updated module=engine status=ok column={column_id} task={task_id}");
    Ok(next)
}

/// Removes a task from a column.
///
/// Deleting a task that is already gone is a silent no-op, not an
/// error; removal preserves the relative order of the rest.
pub fn delete_task(board: &Board, column_id: ColumnId, task_id: TaskId) -> Board {
    let mut next = board.clone();
    if let Some(column) = next.column_mut(column_id) {
        let before = column.tasks.len();
        column.tasks.retain(|task| task.id != task_id);
        if column.tasks.len() != before {
            debug!("event=task_deleted module=engine status=ok column={column_id} task={task_id}");
        }
    }
    next
}

/// Moves a task, the drag-and-drop commit primitive.
///
/// - Same column with an explicit `target_index`: manual reorder. The
///   task is removed and re-inserted at the index with every other
///   task's relative order preserved; the deadline policy is
///   deliberately bypassed.
/// - Different column: the task is removed from its source (which
///   needs no resort) and appended to the target, which is then
///   re-sorted by deadline. Any `target_index` is ignored.
/// - Same column without an index, same index, or a target column the
///   board does not carry: no-op returning an unchanged board value.
///
/// # Errors
/// `TaskNotFound` when the dragged id is nowhere on the board.
pub fn move_task(
    board: &Board,
    task_id: TaskId,
    target_column: ColumnId,
    target_index: Option<usize>,
) -> EngineResult<Board> {
    let (source_column, source_index) = board
        .find_task(task_id)
        .ok_or(EngineError::TaskNotFound(task_id))?;

    if source_column == target_column {
        let Some(target_index) = target_index else {
            return Ok(board.clone());
        };
        if target_index == source_index {
            return Ok(board.clone());
        }

        let mut next = board.clone();
        if let Some(column) = next.column_mut(source_column) {
            let task = column.tasks.remove(source_index);
            let insert_at = target_index.min(column.tasks.len());
            column.tasks.insert(insert_at, task);
        }
        info!(
            "event=task_reordered module=engine status=ok column={source_column} \
             task={task_id} from={source_index} to={target_index}"
        );
        return Ok(next);
    }

    // Unknown target columns are recoverable: the drop dissolves into
    // a no-op rather than an error.
    if board.column(target_column).is_none() {
        return Ok(board.clone());
    }

    let mut next = board.clone();
    let task = match next.column_mut(source_column) {
        Some(column) => column.tasks.remove(source_index),
        None => return Ok(board.clone()),
    };
    if let Some(column) = next.column_mut(target_column) {
        column.tasks.push(task);
        sort_by_deadline(&mut column.tasks);
    }

    info!(
        "event=task_moved module=engine status=ok task={task_id} \
         from={source_column} to={target_column}"
    );
    Ok(next)
}

/// Empties every column's task list; column identities and order stay.
pub fn clear_all_tasks(board: &Board) -> Board {
    let mut next = board.clone();
    for column in &mut next.columns {
        column.tasks.clear();
    }
    info!("event=board_cleared module=engine status=ok");
    next
}
