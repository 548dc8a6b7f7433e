//! Application services for the task board.

mod board;
mod dashboard;

pub use board::{BoardError, BoardResult, BoardService};
pub use dashboard::{BoardStats, load_stats};
