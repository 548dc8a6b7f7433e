//! Adapter implementations for task persistence.

pub mod blob;
