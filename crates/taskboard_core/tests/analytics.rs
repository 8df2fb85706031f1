use chrono::{DateTime, Duration, TimeZone, Utc};
use taskboard_core::{clear_all_tasks, Board, BoardAnalytics, ColumnId, Task};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

fn real_task(title: &str, due: Option<DateTime<Utc>>) -> Task {
    let mut task = Task::new_draft(now() - Duration::days(7));
    task.title = title.to_string();
    task.description = format!("{title} details");
    task.deadline = due;
    task.is_editing = false;
    task
}

fn column_index(id: ColumnId) -> usize {
    ColumnId::ALL.iter().position(|candidate| *candidate == id).unwrap()
}

fn push(board: &mut Board, column: ColumnId, task: Task) {
    board.columns[column_index(column)].tasks.push(task);
}

#[test]
fn per_column_counts_and_completion_percentage() {
    let mut board = Board::default();
    push(&mut board, ColumnId::Todo, real_task("t1", None));
    push(&mut board, ColumnId::InProgress, real_task("p1", None));
    push(&mut board, ColumnId::Review, real_task("r1", None));
    push(&mut board, ColumnId::Done, real_task("d1", None));
    push(&mut board, ColumnId::Done, real_task("d2", None));
    push(&mut board, ColumnId::Todo, real_task("t2", None));

    let stats = BoardAnalytics::compute(&board, now());
    assert_eq!(stats.total_tasks, 6);
    assert_eq!(stats.todo_tasks, 2);
    assert_eq!(stats.in_progress_tasks, 1);
    assert_eq!(stats.review_tasks, 1);
    assert_eq!(stats.completed_tasks, 2);
    // round(2 / 6 * 100) = 33
    assert_eq!(stats.completion_percentage, 33);
}

#[test]
fn completion_percentage_rounds_to_nearest() {
    let mut board = Board::default();
    push(&mut board, ColumnId::Todo, real_task("t1", None));
    push(&mut board, ColumnId::Done, real_task("d1", None));
    push(&mut board, ColumnId::Done, real_task("d2", None));

    let stats = BoardAnalytics::compute(&board, now());
    // round(2 / 3 * 100) = 67
    assert_eq!(stats.completion_percentage, 67);
}

#[test]
fn overdue_counts_past_deadlines_outside_done_only() {
    let past = now() - Duration::hours(2);
    let future = now() + Duration::hours(2);

    let mut board = Board::default();
    push(&mut board, ColumnId::Todo, real_task("late", Some(past)));
    push(&mut board, ColumnId::Review, real_task("also late", Some(past)));
    push(&mut board, ColumnId::Todo, real_task("on track", Some(future)));
    // Past deadline in done is finished work, not overdue.
    push(&mut board, ColumnId::Done, real_task("shipped late", Some(past)));

    let stats = BoardAnalytics::compute(&board, now());
    assert_eq!(stats.overdue_tasks, 2);
}

#[test]
fn done_task_with_future_deadline_counts_as_completed_early() {
    let mut board = Board::default();
    push(
        &mut board,
        ColumnId::Done,
        real_task("ahead of schedule", Some(now() + Duration::hours(1))),
    );

    let stats = BoardAnalytics::compute(&board, now());
    assert_eq!(stats.completed_early_tasks, 1);
    assert_eq!(stats.overdue_tasks, 0);
}

#[test]
fn drafts_are_invisible_to_every_metric() {
    let mut board = Board::default();
    let mut abandoned_draft = Task::new_draft(now());
    abandoned_draft.is_editing = false;
    push(&mut board, ColumnId::Todo, abandoned_draft);

    // A draft still being edited does count: it is visible to the user.
    push(&mut board, ColumnId::Todo, Task::new_draft(now()));

    let stats = BoardAnalytics::compute(&board, now());
    assert_eq!(stats.total_tasks, 1);
    assert_eq!(stats.todo_tasks, 1);
}

#[test]
fn cleared_board_reports_zero_totals_and_percentage() {
    let mut board = Board::default();
    push(&mut board, ColumnId::Done, real_task("done", None));
    push(&mut board, ColumnId::Todo, real_task("todo", None));

    let stats = BoardAnalytics::compute(&clear_all_tasks(&board), now());
    assert_eq!(stats.total_tasks, 0);
    assert_eq!(stats.completion_percentage, 0);
}
