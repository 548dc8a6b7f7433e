//! Drag and drop gesture state machine.
//!
//! The board feeds discrete gesture events into [`DragGesture`] instead of
//! reacting to rendering-library callbacks directly:
//!
//! ```text
//! Idle --start--> Dragging --release(column != current)--> DropPending --settle--> Idle
//!                    |      --release(trash)------------> DropPending
//!                    +------ release(none | current) ---> Idle
//! ```
//!
//! A drop onto the trash never deletes anything by itself: the resulting
//! [`DropOutcome::ConfirmDelete`] asks the caller to run the confirmation
//! step first.

use super::{GestureError, Stage, TaskId};

/// Where a dragged task was released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DropTarget {
    /// A board column.
    Column(Stage),
    /// The trash zone shown while dragging.
    Trash,
}

/// Current phase of the drag gesture.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragState {
    /// No drag in progress.
    #[default]
    Idle,
    /// A task is being dragged out of `source`.
    Dragging {
        /// Dragged task.
        task_id: TaskId,
        /// Column the drag started from.
        source: Stage,
    },
    /// A drop was accepted and its follow-up has not completed yet.
    DropPending {
        /// Dropped task.
        task_id: TaskId,
        /// Column the drag started from.
        source: Stage,
        /// Where the task was released.
        target: DropTarget,
    },
}

/// What the caller must do after a release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// Released outside every target; nothing to do.
    Cancelled,
    /// Released on its own column; nothing to do.
    Unchanged,
    /// Released on another column; the task should move there.
    Move {
        /// Task to move.
        task_id: TaskId,
        /// Current stage.
        from: Stage,
        /// Requested stage.
        to: Stage,
    },
    /// Released on the trash; deletion needs confirmation.
    ConfirmDelete {
        /// Task proposed for deletion.
        task_id: TaskId,
    },
}

/// Drag gesture state machine for one board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragGesture {
    state: DragState,
}

impl DragGesture {
    /// Creates an idle gesture.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn state(&self) -> &DragState {
        &self.state
    }

    /// Returns `true` while the trash zone should be shown.
    #[must_use]
    pub const fn trash_visible(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Starts dragging `task_id` out of `source`.
    ///
    /// # Errors
    ///
    /// Returns [`GestureError::AlreadyActive`] unless the gesture is idle.
    pub fn start(&mut self, task_id: TaskId, source: Stage) -> Result<(), GestureError> {
        if self.state != DragState::Idle {
            return Err(GestureError::AlreadyActive);
        }
        self.state = DragState::Dragging { task_id, source };
        Ok(())
    }

    /// Releases the dragged task over `target`, or outside every target
    /// when `None`.
    ///
    /// `current` is the task's stage at release time. It can differ from
    /// the drag's source when the task was moved by other means mid-drag,
    /// and it alone decides whether a column drop is a move.
    ///
    /// Cancelled and same-column releases return straight to idle; other
    /// releases leave the gesture pending until [`Self::settle`].
    ///
    /// # Errors
    ///
    /// Returns [`GestureError::NotDragging`] unless a drag is in progress.
    pub fn release(
        &mut self,
        target: Option<DropTarget>,
        current: Stage,
    ) -> Result<DropOutcome, GestureError> {
        let DragState::Dragging {
            task_id: dragged,
            source: origin,
        } = &self.state
        else {
            return Err(GestureError::NotDragging);
        };
        let (task_id, source) = (dragged.clone(), *origin);

        let (outcome, next) = match target {
            None => (DropOutcome::Cancelled, DragState::Idle),
            Some(DropTarget::Column(stage)) if stage == current => {
                (DropOutcome::Unchanged, DragState::Idle)
            }
            Some(pending @ DropTarget::Column(to)) => (
                DropOutcome::Move {
                    task_id: task_id.clone(),
                    from: current,
                    to,
                },
                DragState::DropPending {
                    task_id,
                    source,
                    target: pending,
                },
            ),
            Some(DropTarget::Trash) => (
                DropOutcome::ConfirmDelete {
                    task_id: task_id.clone(),
                },
                DragState::DropPending {
                    task_id,
                    source,
                    target: DropTarget::Trash,
                },
            ),
        };
        self.state = next;
        Ok(outcome)
    }

    /// Completes a pending drop and returns to idle.
    ///
    /// # Errors
    ///
    /// Returns [`GestureError::NoPendingDrop`] unless a drop is pending.
    pub fn settle(&mut self) -> Result<(), GestureError> {
        if !matches!(self.state, DragState::DropPending { .. }) {
            return Err(GestureError::NoPendingDrop);
        }
        self.state = DragState::Idle;
        Ok(())
    }
}
