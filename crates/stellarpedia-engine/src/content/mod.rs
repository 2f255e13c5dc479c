//! # Content
//!
//! The content tree is fetched from a [`ContentRepository`] once per session
//! and cached for good. [`ContentCache::load`] is single-flight: callers that
//! arrive while a fetch is running await that same fetch, and all of them see
//! its result. A failed fetch is not cached, so the next call starts over.

use std::sync::Arc;

use async_trait::async_trait;
use futures::future::{BoxFuture, FutureExt, Shared};
use parking_lot::Mutex;

use crate::{error::ContentError, models::ContentTree};

/// Source of the raw content tree.
#[async_trait]
pub trait ContentRepository: Send + Sync {
    async fn load_all(&self) -> Result<ContentTree, ContentError>;
}

/// A repository serving a tree that is already in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    tree: ContentTree,
}

impl InMemoryRepository {
    pub fn new(tree: ContentTree) -> Self {
        Self { tree }
    }
}

#[async_trait]
impl ContentRepository for InMemoryRepository {
    async fn load_all(&self) -> Result<ContentTree, ContentError> {
        Ok(self.tree.clone())
    }
}

pub type LoadResult = Result<Arc<ContentTree>, ContentError>;

type InFlight = Shared<BoxFuture<'static, LoadResult>>;

enum CacheState {
    Empty,
    Loading { generation: u64, flight: InFlight },
    Ready(Arc<ContentTree>),
}

struct Inner {
    state: CacheState,
    generation: u64,
}

pub struct ContentCache {
    repository: Arc<dyn ContentRepository>,
    inner: Mutex<Inner>,
}

impl ContentCache {
    pub fn new(repository: Arc<dyn ContentRepository>) -> Self {
        Self {
            repository,
            inner: Mutex::new(Inner {
                state: CacheState::Empty,
                generation: 0,
            }),
        }
    }

    /// Returns the cached tree without triggering a load.
    pub fn peek(&self) -> Option<Arc<ContentTree>> {
        match &self.inner.lock().state {
            CacheState::Ready(tree) => Some(Arc::clone(tree)),
            _ => None,
        }
    }

    /// Returns the content tree, fetching it first if nothing is cached.
    pub async fn load(&self) -> LoadResult {
        let (generation, flight) = {
            let mut guard = self.inner.lock();
            let inner = &mut *guard;
            match &inner.state {
                CacheState::Ready(tree) => return Ok(Arc::clone(tree)),
                CacheState::Loading { generation, flight } => (*generation, flight.clone()),
                CacheState::Empty => {
                    inner.generation += 1;
                    let generation = inner.generation;
                    let repository = Arc::clone(&self.repository);
                    let flight = async move { repository.load_all().await.map(Arc::new) }
                        .boxed()
                        .shared();
                    inner.state = CacheState::Loading {
                        generation,
                        flight: flight.clone(),
                    };
                    (generation, flight)
                }
            }
        };

        let result = flight.await;

        let mut inner = self.inner.lock();
        if matches!(&inner.state, CacheState::Loading { generation: g, .. } if *g == generation) {
            match &result {
                Ok(tree) => {
                    inner.state = CacheState::Ready(Arc::clone(tree));
                    log::info!("Stellarpedia initialized.");
                }
                Err(e) => {
                    inner.state = CacheState::Empty;
                    log::error!("Unable to load Stellarpedia: {e}");
                }
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::sample_tree;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingRepository {
        calls: AtomicUsize,
        fail: bool,
    }

    #[async_trait]
    impl ContentRepository for CountingRepository {
        async fn load_all(&self) -> Result<ContentTree, ContentError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::task::yield_now().await;
            if self.fail {
                Err(ContentError::Io("offline".to_string()))
            } else {
                Ok(sample_tree())
            }
        }
    }

    #[tokio::test]
    async fn concurrent_loads_share_one_fetch() {
        let repository = Arc::new(CountingRepository::default());
        let cache = ContentCache::new(repository.clone());

        let (a, b) = tokio::join!(cache.load(), cache.load());

        assert_eq!(repository.calls.load(Ordering::SeqCst), 1);
        assert!(Arc::ptr_eq(&a.unwrap(), &b.unwrap()));
    }

    #[tokio::test]
    async fn loaded_tree_is_cached() {
        let repository = Arc::new(CountingRepository::default());
        let cache = ContentCache::new(repository.clone());
        assert!(cache.peek().is_none());

        let first = cache.load().await.unwrap();
        let second = cache.load().await.unwrap();

        assert_eq!(repository.calls.load(Ordering::SeqCst), 1);
        assert!(Arc::ptr_eq(&first, &second));
        assert!(Arc::ptr_eq(&first, &cache.peek().unwrap()));
    }

    #[tokio::test]
    async fn failed_load_reaches_every_waiter_and_is_retried() {
        let repository = Arc::new(CountingRepository {
            fail: true,
            ..Default::default()
        });
        let cache = ContentCache::new(repository.clone());

        let (a, b) = tokio::join!(cache.load(), cache.load());
        assert_eq!(a.unwrap_err(), ContentError::Io("offline".to_string()));
        assert_eq!(b.unwrap_err(), ContentError::Io("offline".to_string()));
        assert_eq!(repository.calls.load(Ordering::SeqCst), 1);
        assert!(cache.peek().is_none());

        assert!(cache.load().await.is_err());
        assert_eq!(repository.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn in_memory_repository_serves_its_tree() {
        let cache = ContentCache::new(Arc::new(InMemoryRepository::new(sample_tree())));
        let tree = cache.load().await.unwrap();
        assert!(tree.book("basic-rules").is_some());
    }
}
