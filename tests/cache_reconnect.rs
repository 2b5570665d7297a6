mod common;

use common::{InMemoryCache, InMemoryRepository};
use shortlink::application::services::{CachePolicy, ResolvedFrom, ResolverService};
use shortlink::infrastructure::cache::{
    CacheError, CacheService, NullCache, SwappableCache, reconnect_in_background,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

#[tokio::test]
async fn test_resolver_resumes_caching_once_cache_is_reachable() {
    let repo = InMemoryRepository::new();
    let cache = InMemoryCache::new();
    repo.insert("db_code", "https://db-found.com");

    let handle = Arc::new(SwappableCache::new(Arc::new(NullCache::new())));
    let resolver = ResolverService::new(repo.clone(), handle.clone(), CachePolicy::default());

    for _ in 0..2 {
        let resolved = resolver.resolve("db_code").await.unwrap();
        assert_eq!(resolved.source, ResolvedFrom::Store);
    }
    assert_eq!(repo.lookups(), 2);

    let attempts = Arc::new(AtomicUsize::new(0));
    let task = reconnect_in_background(handle.clone(), Duration::from_millis(10), {
        let cache = cache.clone();
        let attempts = attempts.clone();
        move || {
            let cache = cache.clone();
            let attempt = attempts.fetch_add(1, Ordering::SeqCst);
            async move {
                if attempt < 2 {
                    Err(CacheError::ConnectionError("connection refused".to_string()))
                } else {
                    Ok(cache as Arc<dyn CacheService>)
                }
            }
        }
    });
    task.await.unwrap();

    assert_eq!(attempts.load(Ordering::SeqCst), 3);

    let refill = resolver.resolve("db_code").await.unwrap();
    let cached = resolver.resolve("db_code").await.unwrap();

    assert_eq!(refill.source, ResolvedFrom::Store);
    assert_eq!(cached.source, ResolvedFrom::Cache);
    assert_eq!(cached.long_url, "https://db-found.com");
    assert_eq!(repo.lookups(), 3);
    assert_eq!(
        cache.raw_get("url:db_code"),
        Some(("https://db-found.com".to_string(), 3600))
    );
}

#[tokio::test]
async fn test_reconnect_can_be_stopped() {
    let handle = Arc::new(SwappableCache::new(Arc::new(NullCache::new())));

    let task = reconnect_in_background(handle.clone(), Duration::from_millis(10), || async {
        Err::<Arc<dyn CacheService>, _>(CacheError::ConnectionError(
            "connection refused".to_string(),
        ))
    });
    tokio::time::sleep(Duration::from_millis(50)).await;
    task.abort();

    assert!(task.await.unwrap_err().is_cancelled());
    assert_eq!(handle.get_url("db_code").await.unwrap(), None);
}
