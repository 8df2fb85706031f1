//! Deadline sort policy.
//!
//! # Responsibility
//! - Define the total order a column's task list settles into after
//!   any membership or deadline change.
//!
//! # Invariants
//! - Deadlined tasks precede tasks without a deadline.
//! - Among deadlined tasks, earliest due comes first.
//! - Ties and no-deadline tasks keep their encounter order (the sort
//!   is stable and the comparator returns `Equal`, never a forced
//!   tie-break).

use crate::model::task::Task;
use std::cmp::Ordering;

/// Comparator implementing the deadline policy as a strict weak order.
pub fn deadline_order(a: &Task, b: &Task) -> Ordering {
    match (a.deadline, b.deadline) {
        (Some(left), Some(right)) => left.cmp(&right),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Normalizes a task list in place under the deadline policy.
///
/// Manual same-column reorders bypass this on purpose; everything else
/// that touches membership or deadlines re-applies it.
pub fn sort_by_deadline(tasks: &mut [Task]) {
    tasks.sort_by(deadline_order);
}
