//! Domain model for the task board.
//!
//! The task domain models validated task records, the ordered task store,
//! stage ordering, and the drag gesture state machine while keeping all
//! persistence concerns outside of the domain boundary.

mod error;
mod gesture;
mod ids;
mod stage;
mod store;
mod task;

pub use error::{GestureError, TaskDomainError};
pub use gesture::{DragGesture, DragState, DropOutcome, DropTarget};
pub use ids::TaskId;
pub use stage::{Direction, Stage};
pub use store::{TaskAction, TaskStore, TaskStoreError};
pub use task::{PersistedTaskData, Priority, Task, TaskDraft, TaskFields, TaskName, TaskPatch};
