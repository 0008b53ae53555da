//! ShortLink entity representing a stored URL mapping.

use chrono::{DateTime, Utc};

/// A persisted short link.
///
/// The id is assigned by the store on creation and is the sole source of the
/// public token (see [`crate::domain::token_codec::TokenCodec`]). The source
/// URL is immutable once stored; there are no update or delete operations.
#[derive(Debug, Clone)]
pub struct ShortLink {
    pub id: i64,
    pub source_url: String,
    pub created_at: DateTime<Utc>,
}

impl ShortLink {
    /// Creates a new ShortLink instance.
    pub fn new(id: i64, source_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            source_url,
            created_at,
        }
    }
}
