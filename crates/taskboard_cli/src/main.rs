//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `taskboard_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use taskboard_core::{Board, BoardAnalytics};

fn main() {
    let board = Board::default();
    let stats = BoardAnalytics::current(&board);

    println!("taskboard_core version={}", taskboard_core::core_version());
    println!(
        "default_board columns={} total_tasks={} completion={}%",
        board.columns.len(),
        stats.total_tasks,
        stats.completion_percentage
    );
}
