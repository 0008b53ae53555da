//! Repository trait for short link data access.

use crate::domain::entities::ShortLink;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for storing and retrieving short links.
///
/// The store is the only shared mutable resource in the system. Id assignment
/// is delegated entirely to the store's own atomic guarantee (auto-increment);
/// callers never supply ids.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Persists a new link and returns the stored record with its assigned id.
    ///
    /// Exactly one row is created per successful call. The same URL submitted
    /// twice creates two distinct records.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, source_url: &str) -> Result<ShortLink, AppError>;

    /// Finds a link by its store-assigned id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(ShortLink))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<ShortLink>, AppError>;
}
