//! Application layer services implementing business logic.
//!
//! Orchestrates domain operations by coordinating codec and repository calls.
//! Services consume repository traits and provide a clean API for HTTP
//! handlers.

pub mod services;
