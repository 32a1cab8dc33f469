//! Session cache for summaries
//!
//! Every interaction re-renders every lookup panel, so the same request is
//! asked for over and over. Successful summaries are kept for the rest of
//! the session; failures are not, so a later render retries them.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::trace;
use volcano_core::{LookupError, LookupRequest};

use crate::source::SummarySource;

/// Memoizing wrapper around another [`SummarySource`]
///
/// Uses `DashMap` so concurrent panel lookups never block each other.
#[derive(Debug)]
pub struct CachedSource<S> {
    inner: S,
    entries: DashMap<LookupRequest, String>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl<S: SummarySource> CachedSource<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            entries: DashMap::new(),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Number of cached summaries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Requests answered from the cache
    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    /// Requests passed through to the inner source
    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    pub fn clear(&self) {
        self.entries.clear();
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

#[async_trait]
impl<S: SummarySource> SummarySource for CachedSource<S> {
    async fn summary(&self, request: &LookupRequest) -> Result<String, LookupError> {
        if let Some(text) = self.entries.get(request) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            trace!(topic = %request.topic, "Summary cache hit");
            return Ok(text.clone());
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let text = self.inner.summary(request).await?;
        self.entries.insert(request.clone(), text.clone());
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    /// Counts calls and fails for topics starting with "bad"
    #[derive(Default)]
    struct CountingSource {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl SummarySource for CountingSource {
        async fn summary(&self, request: &LookupRequest) -> Result<String, LookupError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if request.topic.starts_with("bad") {
                Err(LookupError::Network("timed out".into()))
            } else {
                Ok(format!("{} ({})", request.topic, request.sentences))
            }
        }
    }

    #[tokio::test]
    async fn test_repeat_request_hits_cache() {
        let cache = CachedSource::new(CountingSource::default());
        let request = LookupRequest::new("volcano", 4);

        assert_eq!(cache.summary(&request).await.unwrap(), "volcano (4)");
        assert_eq!(cache.summary(&request).await.unwrap(), "volcano (4)");

        assert_eq!(cache.inner().calls.load(Ordering::SeqCst), 1);
        assert_eq!(cache.hits(), 1);
        assert_eq!(cache.misses(), 1);
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test]
    async fn test_sentence_count_is_part_of_key() {
        let cache = CachedSource::new(CountingSource::default());
        cache.summary(&LookupRequest::new("volcano", 4)).await.unwrap();
        cache.summary(&LookupRequest::new("volcano", 3)).await.unwrap();
        assert_eq!(cache.len(), 2);
    }

    #[tokio::test]
    async fn test_failures_are_not_cached() {
        let cache = CachedSource::new(CountingSource::default());
        let request = LookupRequest::new("bad topic", 3);

        assert!(cache.summary(&request).await.is_err());
        assert!(cache.summary(&request).await.is_err());

        assert_eq!(cache.inner().calls.load(Ordering::SeqCst), 2);
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn test_clear() {
        let cache = CachedSource::new(CountingSource::default());
        let request = LookupRequest::new("Etna Volcano", 3);
        cache.summary(&request).await.unwrap();
        cache.clear();
        cache.summary(&request).await.unwrap();
        assert_eq!(cache.inner().calls.load(Ordering::SeqCst), 2);
    }
}
