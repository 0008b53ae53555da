//! DTOs for the link shortening endpoint.

use serde::{Deserialize, Serialize};

/// Form body for `POST /`.
///
/// The `url` field is optional at the serde level so that a missing field
/// reaches the handler's own validation (and its 400 body) instead of a
/// generic deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct ShortenForm {
    #[serde(default)]
    pub url: Option<String>,
}

/// Success payload: the fully-qualified short URL.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub url: String,
}
