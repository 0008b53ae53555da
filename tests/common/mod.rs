#![allow(dead_code)]

use sqlx::PgPool;
use std::sync::Arc;

use minilink::application::services::LinkService;
use minilink::domain::token_codec::TokenCodec;
use minilink::infrastructure::persistence::PgLinkRepository;
use minilink::state::AppState;

pub const TEST_BASE_URL: &str = "https://s.test.com";

pub fn create_test_state(pool: PgPool) -> AppState {
    let link_repository = Arc::new(PgLinkRepository::new(Arc::new(pool.clone())));
    let link_service = Arc::new(LinkService::new(
        link_repository,
        TokenCodec::new(),
        TEST_BASE_URL.to_string(),
    ));

    AppState {
        db: pool,
        link_service,
    }
}

pub async fn insert_test_link(pool: &PgPool, url: &str) -> i64 {
    sqlx::query_scalar::<_, i64>("INSERT INTO links (source_url) VALUES ($1) RETURNING id")
        .bind(url)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_links(pool: &PgPool) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM links")
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Extracts the token from a returned short URL.
pub fn token_from_short_url(short_url: &str) -> &str {
    short_url.rsplit('/').next().unwrap()
}
