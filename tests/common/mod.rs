#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::Utc;
use shortlink::application::services::{CachePolicy, MintService, ResolverService};
use shortlink::domain::entities::{NewShortLink, ShortLinkRecord};
use shortlink::domain::repositories::ShortLinkRepository;
use shortlink::error::AppError;
use shortlink::infrastructure::cache::{CacheError, CacheResult, CacheService, cache_key};
use shortlink::routes::{minter_router, resolver_router};
use shortlink::state::{MinterState, ResolverState};
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};

/// Key-value cache keeping raw keys, values and the TTL of the last write.
#[derive(Default)]
pub struct InMemoryCache {
    entries: Mutex<HashMap<String, (String, u64)>>,
    gets: AtomicUsize,
    sets: AtomicUsize,
    unavailable: AtomicBool,
    fail_writes: AtomicBool,
}

impl InMemoryCache {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Seeds `url:<short_code>` as if a previous resolution had written it.
    pub fn seed(&self, short_code: &str, long_url: &str, ttl_seconds: u64) {
        self.entries
            .lock()
            .unwrap()
            .insert(cache_key(short_code), (long_url.to_string(), ttl_seconds));
    }

    /// Direct read by raw key, bypassing the service trait.
    pub fn raw_get(&self, key: &str) -> Option<(String, u64)> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn gets(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }

    pub fn sets(&self) -> usize {
        self.sets.load(Ordering::SeqCst)
    }

    /// Makes every call fail as if the connection were refused.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Makes only SETEX fail.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl CacheService for InMemoryCache {
    async fn get_url(&self, short_code: &str) -> CacheResult<Option<String>> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(CacheError::ConnectionError("connection refused".to_string()));
        }

        Ok(self
            .entries
            .lock()
            .unwrap()
            .get(&cache_key(short_code))
            .map(|(url, _)| url.clone()))
    }

    async fn set_url(&self, short_code: &str, long_url: &str, ttl_seconds: u64) -> CacheResult<()> {
        self.sets.fetch_add(1, Ordering::SeqCst);
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(CacheError::ConnectionError("connection refused".to_string()));
        }
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(CacheError::OperationError("OOM command not allowed".to_string()));
        }

        self.entries
            .lock()
            .unwrap()
            .insert(cache_key(short_code), (long_url.to_string(), ttl_seconds));
        Ok(())
    }
}

/// Store fake that counts lookups and can be switched off.
pub struct InMemoryRepository {
    rows: Mutex<Vec<ShortLinkRecord>>,
    next_id: AtomicI64,
    lookups: AtomicUsize,
    unavailable: AtomicBool,
}

impl InMemoryRepository {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            rows: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
            lookups: AtomicUsize::new(0),
            unavailable: AtomicBool::new(false),
        })
    }

    /// Inserts a row directly, as the minter would have.
    pub fn insert(&self, short_code: &str, long_url: &str) {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.rows.lock().unwrap().push(ShortLinkRecord::new(
            id,
            short_code.to_string(),
            long_url.to_string(),
            Utc::now(),
        ));
    }

    pub fn rows(&self) -> Vec<ShortLinkRecord> {
        self.rows.lock().unwrap().clone()
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }
}

#[async_trait]
impl ShortLinkRepository for InMemoryRepository {
    async fn create(&self, new_link: NewShortLink) -> Result<ShortLinkRecord, AppError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(AppError::upstream_unavailable("Persistent store unavailable"));
        }

        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|r| r.short_code == new_link.short_code) {
            return Err(AppError::conflict("Short code already exists"));
        }

        let record = ShortLinkRecord::new(
            self.next_id.fetch_add(1, Ordering::SeqCst),
            new_link.short_code,
            new_link.long_url,
            Utc::now(),
        );
        rows.push(record.clone());
        Ok(record)
    }

    async fn find_long_url(&self, short_code: &str) -> Result<Option<String>, AppError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(AppError::upstream_unavailable("Persistent store unavailable"));
        }

        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.short_code == short_code)
            .map(|r| r.long_url.clone()))
    }
}

pub fn create_resolver(
    repository: Arc<InMemoryRepository>,
    cache: Arc<InMemoryCache>,
) -> Arc<ResolverService> {
    Arc::new(ResolverService::new(
        repository,
        cache,
        CachePolicy::default(),
    ))
}

pub fn resolver_server(
    repository: Arc<InMemoryRepository>,
    cache: Arc<InMemoryCache>,
) -> TestServer {
    let state = ResolverState::new(create_resolver(repository, cache));
    TestServer::new(resolver_router(state)).unwrap()
}

pub fn minter_server(repository: Arc<InMemoryRepository>) -> TestServer {
    let state = MinterState::new(Arc::new(MintService::new(repository)));
    TestServer::new(minter_router(state)).unwrap()
}
