//! Core domain entities.
//!
//! The service has a single entity: [`ShortLink`], the persisted mapping
//! between a store-assigned id and its original URL. Everything else
//! (tokens, short URLs) is derived on demand.

pub mod link;

pub use link::ShortLink;
