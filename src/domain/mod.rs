//! Domain layer containing business entities and core logic.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`token_codec`] - Reversible id ⇄ token mapping
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers; repository traits define contracts implemented by
//! [`crate::infrastructure`].

pub mod entities;
pub mod repositories;
pub mod token_codec;
