//! Error types for task domain validation and transitions.

use super::{Direction, Stage, TaskId};
use crate::validation::FieldErrors;
use thiserror::Error;

/// Errors returned while constructing or transitioning task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// One or more task form fields failed validation.
    #[error("task is invalid: {0}")]
    Validation(FieldErrors),

    /// The task identifier is empty.
    #[error("task identifier must not be empty")]
    EmptyTaskId,

    /// The stage number is outside the board.
    #[error("unknown stage {0}, expected 0 to 3")]
    InvalidStage(u8),

    /// The priority value is not recognised.
    #[error("unknown priority '{0}', expected low, medium or high")]
    InvalidPriority(String),

    /// The move offset is not a single step.
    #[error("invalid move direction {0}, expected -1 or 1")]
    InvalidDirection(i8),

    /// The move would take the task past the first or last stage.
    #[error("task {task_id} cannot move {direction} from stage {from}")]
    StageOutOfRange {
        /// Task that was asked to move.
        task_id: TaskId,
        /// Stage the task currently occupies.
        from: Stage,
        /// Requested direction.
        direction: Direction,
    },
}

/// Errors returned when a drag gesture event does not fit the current state.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum GestureError {
    /// A drag was started while another gesture is still in progress.
    #[error("a drag gesture is already in progress")]
    AlreadyActive,

    /// A release arrived without a drag in progress.
    #[error("no task is being dragged")]
    NotDragging,

    /// A settle arrived without a drop awaiting completion.
    #[error("no drop is pending")]
    NoPendingDrop,
}
