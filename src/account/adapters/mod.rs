//! Adapter implementations for account persistence.

pub mod blob;
