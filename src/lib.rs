//! Taskboard: per-user task tracking with a four-stage kanban board.
//!
//! This crate provides the state engine behind a task-tracking client:
//! account registration and login, an in-memory task collection mirrored to
//! a key-value persistence boundary, and the rules that move tasks between
//! the Backlog, To Do, Ongoing and Done stages.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (JSON blob storage)
//!
//! # Modules
//!
//! - [`account`]: Registration, credential checks and sessions
//! - [`task`]: Task records, the task store and stage transitions
//! - [`storage`]: Key-value blob storage backing both repositories
//! - [`app`]: View routing guarded by the current session
//! - [`config`]: Layered application configuration
//! - [`validation`]: Field-level form error reporting

pub mod account;
pub mod app;
pub mod config;
pub mod storage;
pub mod task;
pub mod validation;

#[cfg(test)]
mod test_support;
