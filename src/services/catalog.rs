//! Upstream catalog client.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::core::normalize::{FieldMap, RawRecord};
use crate::services::provider::{DetailLookup, Provider, ProviderProfile};
use crate::{Error, Result};

/// Freshness window for cached upstream responses.
const CACHE_TTL: Duration = Duration::from_secs(3600);

/// The lookup operations the curator needs from an upstream catalog.
///
/// Implemented by [`CatalogClient`] for real providers and by in-memory
/// fakes in tests.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Field-extraction table matching the records this catalog returns.
    fn fields(&self) -> &'static FieldMap;

    /// Search for movies by keyword. "No results" is an empty vec, not an
    /// error.
    async fn search(&self, keyword: &str) -> Result<Vec<RawRecord>>;

    /// Fetch a single record by identifier.
    async fn get_by_id(&self, id: &str) -> Result<RawRecord>;
}

/// HTTP client for one upstream catalog provider.
///
/// Provider specifics (URL layout, parameter names, record shape) come
/// from the profile chosen at construction time.
pub struct CatalogClient {
    profile: &'static ProviderProfile,
    api_key: Option<String>,
    client: reqwest::Client,
    cache: ResponseCache,
}

impl CatalogClient {
    /// Create a client for the given provider.
    ///
    /// A missing API key is not an error here; each call fails with
    /// [`Error::ApiKeyMissing`] before any network attempt.
    pub fn new(provider: Provider, api_key: Option<String>) -> Self {
        Self {
            profile: provider.profile(),
            api_key,
            client: reqwest::Client::new(),
            cache: ResponseCache::new(CACHE_TTL),
        }
    }

    fn api_key(&self) -> Result<&str> {
        self.api_key.as_deref().ok_or(Error::ApiKeyMissing)
    }

    /// Issue a GET request, serving from the response cache when fresh.
    async fn get_json(&self, url: &str) -> Result<Value> {
        if let Some(cached) = self.cache.get(url) {
            debug!(provider = self.profile.id, "cache hit");
            return Ok(cached);
        }

        let resp = self.client.get(url).send().await?;
        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Upstream(format!("{status}: {body}")));
        }

        let value: Value = resp.json().await?;
        self.cache.put(url, value.clone());
        Ok(value)
    }

    /// Provider-reported error message, when the response carries one.
    fn error_message(&self, value: &Value) -> String {
        value
            .get(self.profile.error_field)
            .and_then(Value::as_str)
            .unwrap_or("unknown upstream error")
            .to_string()
    }

    /// Whether the response's status field reports failure.
    ///
    /// This is the provider's application-level "no results"/"not found"
    /// signal, distinct from HTTP errors.
    fn reports_failure(&self, value: &Value) -> bool {
        let Some(status_field) = self.profile.status_field else {
            return false;
        };
        value.get(status_field).and_then(Value::as_str) == Some(self.profile.status_failure)
    }
}

#[async_trait]
impl Catalog for CatalogClient {
    fn fields(&self) -> &'static FieldMap {
        &self.profile.fields
    }

    async fn search(&self, keyword: &str) -> Result<Vec<RawRecord>> {
        let api_key = self.api_key()?;
        let p = self.profile;

        let mut url = format!(
            "{}{}?{}={}&{}={}",
            p.base_url,
            p.search_path,
            p.search_param,
            urlencoding::encode(keyword),
            p.key_param,
            api_key,
        );
        for (name, value) in p.search_extra {
            url.push_str(&format!("&{name}={value}"));
        }

        let value = self.get_json(&url).await?;
        if self.reports_failure(&value) {
            debug!(keyword, "no results: {}", self.error_message(&value));
            return Ok(Vec::new());
        }

        let records = value
            .get(p.results_field)
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(|item| item.as_object().cloned())
                    .collect()
            })
            .unwrap_or_default();
        Ok(records)
    }

    async fn get_by_id(&self, id: &str) -> Result<RawRecord> {
        let api_key = self.api_key()?;
        let p = self.profile;
        let id = p.canonical_id(id);

        let url = match &p.detail {
            DetailLookup::QueryParam(param) => {
                format!("{}?{}={}&{}={}", p.base_url, param, id, p.key_param, api_key)
            }
            DetailLookup::PathSegment(segment) => {
                format!("{}{}/{}?{}={}", p.base_url, segment, id, p.key_param, api_key)
            }
        };
        let url = p.detail_extra.iter().fold(url, |mut url, (name, value)| {
            url.push_str(&format!("&{name}={value}"));
            url
        });

        let value = self.get_json(&url).await?;
        if self.reports_failure(&value) {
            return Err(Error::NotFound(self.error_message(&value)));
        }

        value
            .as_object()
            .cloned()
            .ok_or_else(|| Error::Upstream("detail response is not a JSON object".to_string()))
    }
}

/// Time-bounded response cache, keyed by request URL.
///
/// Populate-on-miss; stale entries are replaced on the next fetch.
/// Staleness within the window is acceptable, this is a performance
/// concern only.
struct ResponseCache {
    ttl: Duration,
    entries: Mutex<HashMap<String, (Instant, Value)>>,
}

impl ResponseCache {
    fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    fn get(&self, url: &str) -> Option<Value> {
        let entries = self.entries.lock().expect("cache lock poisoned");
        let (stored_at, value) = entries.get(url)?;
        if stored_at.elapsed() < self.ttl {
            Some(value.clone())
        } else {
            None
        }
    }

    fn put(&self, url: &str, value: Value) {
        let mut entries = self.entries.lock().expect("cache lock poisoned");
        entries.insert(url.to_string(), (Instant::now(), value));
    }
}
