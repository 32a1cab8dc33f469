//! Wikipedia summaries over the MediaWiki action API
//!
//! A lookup takes two requests: a full-text search that resolves the
//! topic to a page title (first hit, or the search suggestion when nothing
//! matches), then an intro extract of that page in plain text, cut to the
//! requested number of sentences and following redirects.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use volcano_core::{LookupError, LookupRequest};

use crate::config::LookupConfig;
use crate::source::SummarySource;

/// Candidate titles kept from a disambiguation page
const MAX_DISAMBIGUATION_OPTIONS: usize = 10;

/// Client for a MediaWiki `api.php` endpoint
#[derive(Debug, Clone)]
pub struct WikipediaClient {
    http: reqwest::Client,
    endpoint: String,
}

impl WikipediaClient {
    pub fn new(config: &LookupConfig) -> Result<Self, LookupError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout())
            .build()
            .map_err(network_error)?;
        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
        })
    }

    /// Resolve a free-text topic to a page title
    pub async fn search(&self, topic: &str) -> Result<String, LookupError> {
        let response: SearchResponse = self
            .query(&[
                ("list", "search"),
                ("srsearch", topic),
                ("srlimit", "1"),
                ("srinfo", "suggestion"),
                ("srprop", ""),
            ])
            .await?;
        parse_search(response, topic)
    }

    /// Plain-text intro of a page, at most `sentences` sentences
    pub async fn extract(&self, title: &str, sentences: u8) -> Result<String, LookupError> {
        let sentences = sentences.to_string();
        let response: ExtractResponse = self
            .query(&[
                ("prop", "extracts|pageprops"),
                ("ppprop", "disambiguation"),
                ("exintro", "1"),
                ("explaintext", "1"),
                ("exsentences", sentences.as_str()),
                ("redirects", "1"),
                ("titles", title),
            ])
            .await?;
        parse_extract(response, title)
    }

    async fn lookup(&self, request: &LookupRequest) -> Result<String, LookupError> {
        let title = self.search(&request.topic).await?;
        self.extract(&title, request.sentences).await
    }

    async fn query<T: DeserializeOwned>(&self, params: &[(&str, &str)]) -> Result<T, LookupError> {
        let response = self
            .http
            .get(&self.endpoint)
            .query(&[("action", "query"), ("format", "json"), ("formatversion", "2")])
            .query(params)
            .send()
            .await
            .map_err(network_error)?
            .error_for_status()
            .map_err(network_error)?;

        let body = response.text().await.map_err(network_error)?;
        serde_json::from_str(&body).map_err(|e| LookupError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl SummarySource for WikipediaClient {
    async fn summary(&self, request: &LookupRequest) -> Result<String, LookupError> {
        debug!(topic = %request.topic, sentences = request.sentences, "Looking up summary");
        let result = self.lookup(request).await;
        if let Err(e) = &result {
            warn!(topic = %request.topic, error = %e, "Summary lookup failed");
        }
        result
    }
}

fn network_error(e: reqwest::Error) -> LookupError {
    LookupError::Network(e.to_string())
}

#[derive(Debug, Deserialize)]
struct ApiError {
    #[serde(default)]
    code: String,
    #[serde(default)]
    info: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    error: Option<ApiError>,
    query: Option<SearchQuery>,
}

#[derive(Debug, Deserialize)]
struct SearchQuery {
    #[serde(default)]
    searchinfo: Option<SearchInfo>,
    #[serde(default)]
    search: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchInfo {
    suggestion: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    title: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ExtractResponse {
    error: Option<ApiError>,
    query: Option<ExtractQuery>,
}

#[derive(Debug, Deserialize)]
struct ExtractQuery {
    #[serde(default)]
    pages: Vec<Page>,
}

#[derive(Debug, Deserialize)]
struct Page {
    title: String,
    #[serde(default)]
    missing: bool,
    #[serde(default)]
    invalid: bool,
    extract: Option<String>,
    #[serde(default)]
    pageprops: HashMap<String, serde_json::Value>,
}

fn api_error(error: ApiError) -> LookupError {
    LookupError::InvalidResponse(format!("{}: {}", error.code, error.info))
}

/// Page title for a topic: the first search hit, else the search suggestion
///
/// Hits win over the suggestion. Classic auto-suggest does the reverse
/// and prefers the suggestion whenever the search offers one.
pub(crate) fn parse_search(response: SearchResponse, topic: &str) -> Result<String, LookupError> {
    if let Some(error) = response.error {
        return Err(api_error(error));
    }
    let query = response
        .query
        .ok_or_else(|| LookupError::InvalidResponse("search response has no query".into()))?;

    query
        .search
        .into_iter()
        .next()
        .map(|hit| hit.title)
        .or_else(|| query.searchinfo.and_then(|info| info.suggestion))
        .ok_or_else(|| LookupError::PageNotFound(topic.to_string()))
}

pub(crate) fn parse_extract(response: ExtractResponse, title: &str) -> Result<String, LookupError> {
    if let Some(error) = response.error {
        return Err(api_error(error));
    }
    let page = response
        .query
        .and_then(|q| q.pages.into_iter().next())
        .ok_or_else(|| LookupError::InvalidResponse("extract response has no pages".into()))?;

    if page.missing || page.invalid {
        return Err(LookupError::PageNotFound(title.to_string()));
    }

    let extract = page.extract.unwrap_or_default();
    if page.pageprops.contains_key("disambiguation") {
        return Err(LookupError::Disambiguation {
            topic: page.title,
            options: disambiguation_options(&extract),
        });
    }

    let extract = extract.trim();
    if extract.is_empty() {
        return Err(LookupError::PageNotFound(title.to_string()));
    }
    Ok(extract.to_string())
}

/// Entries listed under "... may refer to:"
fn disambiguation_options(extract: &str) -> Vec<String> {
    extract
        .lines()
        .skip(1)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .take(MAX_DISAMBIGUATION_OPTIONS)
        .collect()
}
