//! Board stages and their ordering.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four ordered board columns a task occupies.
///
/// Persisted as its index, `0` for [`Stage::Backlog`] through `3` for
/// [`Stage::Done`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum Stage {
    /// Captured but not yet planned. Every new task starts here.
    #[default]
    Backlog,
    /// Planned for upcoming work.
    ToDo,
    /// Being worked on.
    Ongoing,
    /// Completed.
    Done,
}

impl Stage {
    /// All stages in board order.
    pub const ALL: [Self; 4] = [Self::Backlog, Self::ToDo, Self::Ongoing, Self::Done];

    /// Returns the stage index used in persisted records.
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Self::Backlog => 0,
            Self::ToDo => 1,
            Self::Ongoing => 2,
            Self::Done => 3,
        }
    }

    /// Returns the column title shown on the board.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Backlog => "Backlog",
            Self::ToDo => "To Do",
            Self::Ongoing => "Ongoing",
            Self::Done => "Done",
        }
    }

    /// Returns the neighbouring stage in `direction`, or `None` past either
    /// end of the board.
    #[must_use]
    pub fn step(self, direction: Direction) -> Option<Self> {
        self.index()
            .checked_add_signed(direction.offset())
            .and_then(|index| Self::try_from(index).ok())
    }

    /// Returns `true` when a move in `direction` stays on the board.
    #[must_use]
    pub fn can_move(self, direction: Direction) -> bool {
        self.step(direction).is_some()
    }
}

impl TryFrom<u8> for Stage {
    type Error = TaskDomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Backlog),
            1 => Ok(Self::ToDo),
            2 => Ok(Self::Ongoing),
            3 => Ok(Self::Done),
            other => Err(TaskDomainError::InvalidStage(other)),
        }
    }
}

impl From<Stage> for u8 {
    fn from(stage: Stage) -> Self {
        stage.index()
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Single-step move requested by the back and forward controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// One stage towards Backlog.
    Back,
    /// One stage towards Done.
    Forward,
}

impl Direction {
    /// Returns the signed stage offset.
    #[must_use]
    pub const fn offset(self) -> i8 {
        match self {
            Self::Back => -1,
            Self::Forward => 1,
        }
    }
}

impl TryFrom<i8> for Direction {
    type Error = TaskDomainError;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Self::Back),
            1 => Ok(Self::Forward),
            other => Err(TaskDomainError::InvalidDirection(other)),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Back => "back",
            Self::Forward => "forward",
        })
    }
}
