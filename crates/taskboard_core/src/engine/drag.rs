//! Three-phase drag intent: begin, hover, commit.
//!
//! # Responsibility
//! - Resolve raw drop-target ids into column/task targets.
//! - Track the active drag so only the terminal drop commits a board
//!   transition; hover stays strictly non-committing.
//!
//! # Invariants
//! - A raw id matching a column id resolves as "drop on column"
//!   (append semantics) before task containment is consulted.
//! - Cancelled drags, self-drops, and unresolvable targets commit a
//!   no-op, never an error.

use crate::engine::{move_task, EngineResult};
use crate::model::board::{Board, ColumnId};
use crate::model::task::TaskId;
use log::debug;
use uuid::Uuid;

/// Resolved drop destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropTarget {
    /// Drop on a column body: append to that column.
    Column(ColumnId),
    /// Drop on another task: reorder relative to it.
    Task(TaskId),
}

/// Resolves a raw drop id against the current board.
///
/// Column ids win ties; anything else is looked up by task-id
/// containment. Returns `None` when the id matches neither.
pub fn resolve_drop_target(board: &Board, raw_id: &str) -> Option<DropTarget> {
    if let Some(column_id) = ColumnId::parse(raw_id) {
        return Some(DropTarget::Column(column_id));
    }
    let task_id = Uuid::parse_str(raw_id).ok()?;
    board.find_task(task_id).map(|_| DropTarget::Task(task_id))
}

/// One drag gesture from pointer-down to drop or cancel.
///
/// Intermediate hover events only feed transient highlighting; board
/// state changes happen exclusively in [`DragSession::commit`].
#[derive(Debug, Default)]
pub struct DragSession {
    active: Option<TaskId>,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a drag for `task_id`.
    ///
    /// Unknown ids fail soft: no session starts and a later commit is
    /// a no-op.
    pub fn begin(&mut self, board: &Board, task_id: TaskId) {
        if board.find_task(task_id).is_some() {
            self.active = Some(task_id);
            debug!("event=drag_begin module=drag status=ok task={task_id}");
        } else {
            self.active = None;
            debug!("event=drag_begin module=drag status=ignored task={task_id}");
        }
    }

    /// The task currently being dragged, if any.
    pub fn active(&self) -> Option<TaskId> {
        self.active
    }

    /// Previews where a drop would land, for highlighting only.
    ///
    /// Never touches board state; a `None` preview means releasing
    /// here would be a no-op.
    pub fn hover(&self, board: &Board, raw_target_id: &str) -> Option<DropTarget> {
        self.active?;
        resolve_drop_target(board, raw_target_id)
    }

    /// Terminal drop: resolves the target and applies the move.
    ///
    /// The session ends regardless of outcome. Without an active drag,
    /// with an unresolvable target, or on a self-drop the board comes
    /// back unchanged.
    pub fn commit(&mut self, board: &Board, raw_target_id: &str) -> EngineResult<Board> {
        let Some(task_id) = self.active.take() else {
            return Ok(board.clone());
        };
        let Some(target) = resolve_drop_target(board, raw_target_id) else {
            debug!("event=drag_commit module=drag status=unresolved task={task_id}");
            return Ok(board.clone());
        };
        apply_drop(board, task_id, target)
    }

    /// Releases the drag without committing anything.
    pub fn cancel(&mut self) {
        if let Some(task_id) = self.active.take() {
            debug!("event=drag_cancel module=drag status=ok task={task_id}");
        }
    }
}

/// Applies a resolved drop target through the move engine.
///
/// Drop on a column appends there; drop on a task in the same column
/// reorders to that task's position; drop on a task in another column
/// moves across with append-and-resort semantics. A self-drop is a
/// no-op.
pub fn apply_drop(board: &Board, task_id: TaskId, target: DropTarget) -> EngineResult<Board> {
    match target {
        DropTarget::Column(column_id) => move_task(board, task_id, column_id, None),
        DropTarget::Task(over_id) => {
            if over_id == task_id {
                return Ok(board.clone());
            }
            let Some((over_column, over_index)) = board.find_task(over_id) else {
                return Ok(board.clone());
            };
            move_task(board, task_id, over_column, Some(over_index))
        }
    }
}
