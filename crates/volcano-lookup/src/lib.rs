//! # Volcano Lookup
//!
//! Short encyclopedia summaries for the dashboard's text panels.
//!
//! - [`SummarySource`]: async trait every backend implements
//! - [`WikipediaClient`]: MediaWiki API over HTTP
//! - [`CachedSource`]: session cache in front of any source
//! - [`StaticSource`]: fixed topic table for tests and offline mode
//!
//! [`build_source`] picks the right stack for a [`LookupConfig`].

pub mod cache;
pub mod config;
pub mod source;
pub mod static_source;
pub mod wikipedia;

use std::sync::Arc;

pub use cache::CachedSource;
pub use config::LookupConfig;
pub use source::{first_sentences, SummarySource};
pub use static_source::StaticSource;
pub use volcano_core::{LookupError, LookupRequest};
pub use wikipedia::WikipediaClient;

/// Build the summary source described by the configuration
///
/// Offline mode answers every request with [`LookupError::Offline`];
/// otherwise Wikipedia is queried through a session cache.
pub fn build_source(config: &LookupConfig) -> Result<Arc<dyn SummarySource>, LookupError> {
    if config.offline {
        tracing::info!("Encyclopedia lookups disabled (offline mode)");
        return Ok(Arc::new(StaticSource::offline()));
    }

    let client = WikipediaClient::new(config)?;
    tracing::info!(endpoint = %config.endpoint, "Using Wikipedia for summaries");
    Ok(Arc::new(CachedSource::new(client)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_offline_source_refuses_lookups() {
        let config = LookupConfig {
            offline: true,
            ..LookupConfig::default()
        };
        let source = build_source(&config).unwrap();
        let err = source
            .summary(&LookupRequest::new("volcano", 4))
            .await
            .unwrap_err();
        assert_eq!(err, LookupError::Offline);
    }

    #[test]
    fn test_online_source_builds() {
        assert!(build_source(&LookupConfig::default()).is_ok());
    }
}
