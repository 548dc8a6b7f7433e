//! Task board management for Taskboard.
//!
//! This module holds a user's tasks in an ordered in-memory store, mirrors
//! every change to a per-user persistence boundary, and enforces how tasks
//! move between the four board stages, whether by the forward/back controls
//! or by drag and drop. Store mutations are applied only after the boundary
//! confirms the corresponding call. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
