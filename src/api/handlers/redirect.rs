//! Handler for short link resolution.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short token to its original URL.
///
/// # Endpoint
///
/// `GET /{token}`
///
/// # Request Flow
///
/// 1. Decode the token to an id (failure is reported as 404)
/// 2. Look up the link by id
/// 3. Respond with `301 Moved Permanently` and the stored URL in `Location`
///
/// The 301 is built explicitly: axum's named `Redirect` constructors emit
/// 307/308, and the contract here is a permanent redirect in its classic
/// form. No validation is re-applied to the stored URL and nothing is
/// mutated on resolve.
///
/// # Errors
///
/// Returns 404 Not Found for both undecodable tokens and unknown ids; the
/// two cases are deliberately indistinguishable to the caller.
pub async fn redirect_handler(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let link = state.link_service.resolve(&token).await?;

    Ok((
        StatusCode::MOVED_PERMANENTLY,
        [(header::LOCATION, link.source_url)],
    ))
}
