//! Application services.
//!
//! - [`link_service::LinkService`] - Short link creation and resolution

pub mod link_service;

pub use link_service::LinkService;
