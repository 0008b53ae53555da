//! Short link creation and resolution service.

use std::sync::Arc;

use crate::domain::entities::ShortLink;
use crate::domain::repositories::LinkRepository;
use crate::domain::token_codec::TokenCodec;
use crate::error::AppError;
use crate::utils::url_validator::looks_like_url;

/// Service implementing the two core operations: Create and Resolve.
///
/// Owns the token codec (an explicit value, not a global) and a handle to the
/// link repository. Each call is a single independent read or write against
/// the store; there is no shared mutable state at this layer.
pub struct LinkService<R: LinkRepository> {
    repository: Arc<R>,
    codec: TokenCodec,
    base_url: String,
}

impl<R: LinkRepository> LinkService<R> {
    /// Creates a new link service.
    ///
    /// `base_url` is the public address short links are served from, e.g.
    /// `https://s.example.com`; a trailing slash is tolerated.
    pub fn new(repository: Arc<R>, codec: TokenCodec, base_url: String) -> Self {
        Self {
            repository,
            codec,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Validates and stores a URL, returning the new record.
    ///
    /// Validation order, first failure wins:
    /// 1. empty input → validation error ("missing url")
    /// 2. not a plausible HTTP(S) URL → validation error ("invalid url")
    ///
    /// The input is stored verbatim. No deduplication: the same URL submitted
    /// twice creates two records with two distinct tokens.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] on bad input and
    /// [`AppError::Internal`] on store failures.
    pub async fn shorten(&self, source_url: &str) -> Result<ShortLink, AppError> {
        if source_url.is_empty() {
            return Err(AppError::bad_request("Missing url parameter"));
        }

        if !looks_like_url(source_url) {
            return Err(AppError::bad_request("Invalid url"));
        }

        self.repository.create(source_url).await
    }

    /// Resolves a public token to its stored link.
    ///
    /// A token that cannot be decoded is reported exactly like a missing
    /// record: callers cannot distinguish "malformed token" from "no such
    /// link". Decoded ids outside the store-assigned range (zero or negative)
    /// are rejected without a lookup.
    ///
    /// Read-only: resolving never mutates the store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for undecodable tokens and unknown ids,
    /// [`AppError::Internal`] on store failures.
    pub async fn resolve(&self, token: &str) -> Result<ShortLink, AppError> {
        let id = match self.codec.decode(token) {
            Ok(id) if id > 0 => id,
            Ok(_) => return Err(AppError::not_found("Short link not found")),
            Err(e) => {
                tracing::debug!(token, error = %e, "token failed to decode");
                return Err(AppError::not_found("Short link not found"));
            }
        };

        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found"))
    }

    /// Builds the fully-qualified short URL for a stored link.
    pub fn short_url(&self, id: i64) -> String {
        format!("{}/{}", self.base_url, self.codec.encode(id))
    }
}
