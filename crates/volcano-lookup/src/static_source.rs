//! Fixed, in-memory summaries

use std::collections::HashMap;

use async_trait::async_trait;
use volcano_core::{LookupError, LookupRequest};

use crate::source::{first_sentences, SummarySource};

/// Summaries from a fixed topic table
///
/// Topics match case-insensitively. Stored text is cut to the requested
/// sentence count. A miss is [`LookupError::PageNotFound`], or
/// [`LookupError::Offline`] for a source built with [`StaticSource::offline`].
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    entries: HashMap<String, String>,
    offline: bool,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Source that stands in for a disabled network
    pub fn offline() -> Self {
        Self {
            entries: HashMap::new(),
            offline: true,
        }
    }

    /// Add a topic (builder style)
    pub fn with_summary(mut self, topic: impl AsRef<str>, text: impl Into<String>) -> Self {
        self.insert(topic, text);
        self
    }

    pub fn insert(&mut self, topic: impl AsRef<str>, text: impl Into<String>) {
        self.entries.insert(key(topic.as_ref()), text.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn key(topic: &str) -> String {
    topic.trim().to_lowercase()
}

#[async_trait]
impl SummarySource for StaticSource {
    async fn summary(&self, request: &LookupRequest) -> Result<String, LookupError> {
        match self.entries.get(&key(&request.topic)) {
            Some(text) => Ok(first_sentences(text, request.sentences).to_string()),
            None if self.offline => Err(LookupError::Offline),
            None => Err(LookupError::PageNotFound(request.topic.clone())),
        }
    }
}
