//! Account registration, credential checks and sessions.
//!
//! Accounts are created once at registration and never mutated. Login checks
//! an identifier (email or username) and password against the stored bcrypt
//! hash and issues a [`domain::Session`]. The module follows hexagonal
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
