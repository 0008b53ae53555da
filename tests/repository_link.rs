mod common;

use minilink::domain::repositories::LinkRepository;
use minilink::infrastructure::persistence::PgLinkRepository;
use sqlx::PgPool;
use std::sync::Arc;

#[sqlx::test]
async fn test_create_assigns_increasing_ids(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    let first = repo.create("https://example.com/1").await.unwrap();
    let second = repo.create("https://example.com/2").await.unwrap();

    assert!(first.id > 0);
    assert!(second.id > first.id);
    assert_eq!(first.source_url, "https://example.com/1");
    assert_eq!(second.source_url, "https://example.com/2");
}

#[sqlx::test]
async fn test_create_stores_duplicates(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool.clone()));

    let first = repo.create("https://example.com").await.unwrap();
    let second = repo.create("https://example.com").await.unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(common::count_links(&pool).await, 2);
}

#[sqlx::test]
async fn test_find_by_id(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    let created = repo.create("https://example.com/page").await.unwrap();

    let found = repo.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(found.id, created.id);
    assert_eq!(found.source_url, "https://example.com/page");
    assert_eq!(found.created_at, created.created_at);
}

#[sqlx::test]
async fn test_find_by_id_missing(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    let found = repo.find_by_id(999_999_999).await.unwrap();
    assert!(found.is_none());
}
