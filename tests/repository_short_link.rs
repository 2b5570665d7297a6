//! PostgreSQL repository tests.
//!
//! Require a running PostgreSQL reachable through `DATABASE_URL`:
//!
//! ```bash
//! cargo test --test repository_short_link -- --ignored
//! ```

use shortlink::domain::entities::NewShortLink;
use shortlink::domain::repositories::ShortLinkRepository;
use shortlink::error::AppError;
use shortlink::infrastructure::persistence::PgShortLinkRepository;
use sqlx::PgPool;
use std::sync::Arc;

#[sqlx::test]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_create_and_find(pool: PgPool) {
    let repo = PgShortLinkRepository::new(Arc::new(pool));

    let record = repo
        .create(NewShortLink {
            short_code: "abc123".to_string(),
            long_url: "https://example.com".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(record.short_code, "abc123");
    assert_eq!(record.long_url, "https://example.com");

    let found = repo.find_long_url("abc123").await.unwrap();
    assert_eq!(found.as_deref(), Some("https://example.com"));
}

#[sqlx::test]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_find_missing_code(pool: PgPool) {
    let repo = PgShortLinkRepository::new(Arc::new(pool));

    let found = repo.find_long_url("notfound").await.unwrap();

    assert!(found.is_none());
}

#[sqlx::test]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_duplicate_code_is_conflict(pool: PgPool) {
    let repo = PgShortLinkRepository::new(Arc::new(pool));
    let new_link = NewShortLink {
        short_code: "dup123".to_string(),
        long_url: "https://example.com/a".to_string(),
    };

    repo.create(new_link.clone()).await.unwrap();
    let err = repo
        .create(NewShortLink {
            long_url: "https://example.com/b".to_string(),
            ..new_link
        })
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Conflict { .. }));
}

#[sqlx::test]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_lookup_is_exact_match(pool: PgPool) {
    let repo = PgShortLinkRepository::new(Arc::new(pool));
    repo.create(NewShortLink {
        short_code: "AbC123".to_string(),
        long_url: "https://example.com".to_string(),
    })
    .await
    .unwrap();

    assert!(repo.find_long_url("abc123").await.unwrap().is_none());
    assert!(repo.find_long_url("AbC12").await.unwrap().is_none());
}

#[sqlx::test]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_very_long_url_is_stored(pool: PgPool) {
    let repo = PgShortLinkRepository::new(Arc::new(pool));
    let long_url = format!(
        "https://example.com/{}",
        shortlink::utils::code_generator::generate_code(16 * 1024)
    );

    repo.create(NewShortLink {
        short_code: "long01".to_string(),
        long_url: long_url.clone(),
    })
    .await
    .unwrap();

    let found = repo.find_long_url("long01").await.unwrap();
    assert_eq!(found.as_deref(), Some(long_url.as_str()));
}
