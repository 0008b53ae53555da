//! Handler for the link creation endpoint.

use axum::{Form, Json, extract::State, http::StatusCode};

use crate::api::dto::shorten::{ShortenForm, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Stores a URL and returns its short link.
///
/// # Endpoint
///
/// `POST /` with form field `url`
///
/// # Response
///
/// `201 Created` with:
///
/// ```json
/// { "url": "https://s.example.com/MTA" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request with `{"status": 400, "message": "..."}` when the
/// `url` field is missing, empty, or not a plausible HTTP(S) URL. Exactly one
/// record is created per successful call.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Form(form): Form<ShortenForm>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let source_url = form.url.unwrap_or_default();

    let link = state.link_service.shorten(&source_url).await?;

    tracing::info!(id = link.id, "short link created");

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            url: state.link_service.short_url(link.id),
        }),
    ))
}
