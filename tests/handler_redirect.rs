mod common;

use axum::{Router, http::StatusCode, routing::get};
use axum_test::TestServer;
use minilink::api::handlers::redirect_handler;
use minilink::domain::token_codec::TokenCodec;
use sqlx::PgPool;

fn redirect_app(state: minilink::AppState) -> Router {
    Router::new()
        .route("/{token}", get(redirect_handler))
        .with_state(state)
}

#[sqlx::test]
async fn test_redirect_success(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    let server = TestServer::new(redirect_app(state)).unwrap();

    let id = common::insert_test_link(&pool, "https://example.com/target").await;
    let token = TokenCodec::new().encode(id);

    let response = server.get(&format!("/{token}")).await;

    assert_eq!(response.status_code(), StatusCode::MOVED_PERMANENTLY);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[sqlx::test]
async fn test_redirect_unknown_id(pool: PgPool) {
    let state = common::create_test_state(pool);
    let server = TestServer::new(redirect_app(state)).unwrap();

    // Well-formed token for an id that was never created.
    let token = TokenCodec::new().encode(999_999_999);

    let response = server.get(&format!("/{token}")).await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], 404);
}

#[sqlx::test]
async fn test_redirect_malformed_token(pool: PgPool) {
    let state = common::create_test_state(pool);
    let server = TestServer::new(redirect_app(state)).unwrap();

    // Tokens with characters outside the base64url alphabet must be a clean
    // 404, never a 500 or a panic. "%25" reaches the handler as "%".
    for path in ["/%25zz", "/ab=cd", "/!!!"] {
        let response = server.get(path).await;
        response.assert_status_not_found();
    }
}

#[sqlx::test]
async fn test_redirect_is_idempotent(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    let server = TestServer::new(redirect_app(state)).unwrap();

    let id = common::insert_test_link(&pool, "https://example.com/page").await;
    let token = TokenCodec::new().encode(id);

    let first = server.get(&format!("/{token}")).await;
    let second = server.get(&format!("/{token}")).await;

    assert_eq!(first.status_code(), StatusCode::MOVED_PERMANENTLY);
    assert_eq!(second.status_code(), StatusCode::MOVED_PERMANENTLY);
    assert_eq!(first.header("location"), second.header("location"));

    // Resolving is read-only.
    assert_eq!(common::count_links(&pool).await, 1);
}

#[sqlx::test]
async fn test_redirect_does_not_revalidate_stored_url(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    let server = TestServer::new(redirect_app(state)).unwrap();

    // A URL valid at creation time is trusted thereafter; resolution issues
    // the redirect verbatim.
    let id = common::insert_test_link(&pool, "https://example.com/page?q=1#frag").await;
    let token = TokenCodec::new().encode(id);

    let response = server.get(&format!("/{token}")).await;

    assert_eq!(response.status_code(), StatusCode::MOVED_PERMANENTLY);
    assert_eq!(
        response.header("location"),
        "https://example.com/page?q=1#frag"
    );
}
