//! Data access trait definitions.
//!
//! Repository traits define the storage contract implemented by the
//! infrastructure layer and mocked in service unit tests.

pub mod link_repository;

pub use link_repository::LinkRepository;

#[cfg(test)]
pub use link_repository::MockLinkRepository;
