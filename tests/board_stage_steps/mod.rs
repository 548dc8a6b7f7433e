//! Step definitions for board stage scenarios.

pub mod world;

mod given;
