//! Board domain model.
//!
//! # Responsibility
//! - Define the canonical task/column/board value shapes.
//! - Keep visibility ("real" vs draft) a derived predicate, not a flag.
//!
//! # Invariants
//! - Every task id is stable and unique across the whole board.
//! - A task belongs to exactly one column at a time.
//! - Board values are never mutated in place by engine operations.

pub mod board;
pub mod task;
