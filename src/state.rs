//! Shared application state injected into handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::application::services::LinkService;
use crate::infrastructure::persistence::PgLinkRepository;

/// State shared by all request handlers.
///
/// Constructed once at startup; the pool and service handles are long-lived
/// and never re-acquired per request.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub link_service: Arc<LinkService<PgLinkRepository>>,
}
