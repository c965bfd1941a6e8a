pub mod partition;
pub mod score;
pub mod seating;

use thiserror::Error;

/// Refusals raised by the partitioner and the layout builders. All are
/// recoverable: the caller re-prompts for parameters or adds students.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssignmentError {
    #[error("no students available; add students before assigning")]
    EmptyRoster,

    #[error("group dimensions must be at least 1 (requested {group_count} groups of {group_size})")]
    InvalidDimensions { group_count: usize, group_size: usize },

    #[error(
        "{group_count} groups of {group_size} hold {capacity} students but the roster has {roster}; \
         use at least {min_group_count} groups or {min_group_size} students per group"
    )]
    Capacity {
        roster: usize,
        group_count: usize,
        group_size: usize,
        capacity: usize,
        min_group_count: usize,
        min_group_size: usize,
    },

    #[error("a {rows}x{cols} grid seats {capacity} students but the roster has {roster}")]
    GridCapacity {
        roster: usize,
        rows: usize,
        cols: usize,
        capacity: usize,
    },
}
