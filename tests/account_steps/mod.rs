//! Step definitions for account scenarios.

pub mod world;

mod given;
mod then;
