//! Utility functions shared across the application.
//!
//! - [`url_validator`] - Syntactic URL plausibility checking

pub mod url_validator;
