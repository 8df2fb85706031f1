use chrono::{TimeZone, Utc};
use taskboard_core::{Board, Column, ColumnId, Task};
use uuid::Uuid;

#[test]
fn new_draft_sets_defaults() {
    let created_at = Utc.with_ymd_and_hms(2024, 1, 2, 9, 30, 0).unwrap();
    let task = Task::new_draft(created_at);

    assert!(!task.id.is_nil());
    assert_eq!(task.title, "");
    assert_eq!(task.description, "");
    assert_eq!(task.deadline, None);
    assert_eq!(task.created_at, created_at);
    assert!(task.is_editing);
}

#[test]
fn draft_becomes_real_only_through_content_or_editing() {
    let created_at = Utc.with_ymd_and_hms(2024, 1, 2, 9, 30, 0).unwrap();
    let mut task = Task::new_draft(created_at);

    // Fresh drafts are being edited, so they stay visible.
    assert!(task.is_real());

    // Editing cancelled without content: transient draft.
    task.is_editing = false;
    assert!(task.is_draft());

    task.title = "write release notes".to_string();
    assert!(task.is_real());

    task.title.clear();
    task.deadline = Some(Utc.with_ymd_and_hms(2024, 2, 1, 12, 0, 0).unwrap());
    assert!(task.is_real());
}

#[test]
fn task_serialization_uses_camel_case_wire_fields() {
    let created_at = Utc.with_ymd_and_hms(2024, 1, 2, 9, 30, 0).unwrap();
    let mut task = Task::new_draft(created_at);
    task.id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    task.title = "ship v1".to_string();
    task.description = "cut the release".to_string();
    task.deadline = Some(Utc.with_ymd_and_hms(2024, 1, 10, 12, 0, 0).unwrap());
    task.is_editing = false;

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["id"], "11111111-2222-4333-8444-555555555555");
    assert_eq!(json["title"], "ship v1");
    assert_eq!(json["description"], "cut the release");
    assert_eq!(json["deadline"], "2024-01-10T12:00:00Z");
    assert_eq!(json["createdAt"], "2024-01-02T09:30:00Z");
    assert_eq!(json["isEditing"], false);

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}

#[test]
fn column_ids_serialize_as_kebab_case_stage_names() {
    let json = serde_json::to_value(Column::empty(ColumnId::InProgress)).unwrap();
    assert_eq!(json["id"], "in-progress");
    assert_eq!(json["title"], "In Progress");
    assert_eq!(json["tasks"], serde_json::json!([]));
}

#[test]
fn board_serializes_transparently_as_column_array() {
    let payload = serde_json::to_string(&Board::default()).unwrap();
    assert!(payload.starts_with('['));

    let decoded: Board = serde_json::from_str(&payload).unwrap();
    assert_eq!(decoded, Board::default());
}

#[test]
fn real_task_counts_skip_abandoned_drafts() {
    let created_at = Utc.with_ymd_and_hms(2024, 1, 2, 9, 30, 0).unwrap();
    let mut board = Board::default();

    let mut real = Task::new_draft(created_at);
    real.title = "visible".to_string();
    real.is_editing = false;
    board.columns[0].tasks.push(real);

    let mut abandoned = Task::new_draft(created_at);
    abandoned.is_editing = false;
    board.columns[0].tasks.push(abandoned);

    assert_eq!(board.column(ColumnId::Todo).unwrap().real_task_count(), 1);
    assert_eq!(board.real_task_count(), 1);
}

#[test]
fn find_task_scans_all_columns() {
    let created_at = Utc.with_ymd_and_hms(2024, 1, 2, 9, 30, 0).unwrap();
    let mut board = Board::default();
    let mut task = Task::new_draft(created_at);
    task.title = "review the design".to_string();
    task.is_editing = false;
    let task_id = task.id;
    board.columns[2].tasks.push(task);

    assert_eq!(board.find_task(task_id), Some((ColumnId::Review, 0)));
    assert_eq!(board.find_task(Uuid::new_v4()), None);
    assert_eq!(board.task(task_id).unwrap().title, "review the design");
}
