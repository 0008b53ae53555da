//! HTTP layer translating requests into domain operations.
//!
//! # Modules
//!
//! - [`dto`] - Request/response serialization types
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing middleware

pub mod dto;
pub mod handlers;
pub mod middleware;
