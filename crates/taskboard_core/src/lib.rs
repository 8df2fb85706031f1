//! Board state engine for a kanban-style task board.
//! This crate is the single source of truth for board invariants:
//! presentation, theming, and file delivery live in collaborators that
//! call into these operations and render the resulting state.

pub mod analytics;
pub mod engine;
pub mod export;
pub mod logging;
pub mod model;
pub mod policy;
pub mod snapshot;

pub use analytics::BoardAnalytics;
pub use engine::drag::{apply_drop, resolve_drop_target, DragSession, DropTarget};
pub use engine::{
    add_task, clear_all_tasks, delete_task, move_task, update_task, EngineError, EngineResult,
};
pub use export::{export_rows, ExportRow, EXPORT_HEADER};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::board::{Board, Column, ColumnId};
pub use model::task::{
    parse_deadline, Task, TaskField, TaskId, TaskPatch, TaskValidationError,
};
pub use policy::{deadline_order, sort_by_deadline};
pub use snapshot::{
    KeyValueStore, MemoryStore, SnapshotError, SnapshotResult, SnapshotStore, ThemePreference,
    BOARD_STATE_KEY, DARK_MODE_KEY,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
