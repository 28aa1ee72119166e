//! Integration tests for the curator.
//!
//! Tests cover:
//! - Per-keyword cap and validity filtering
//! - Stable, order-preserving deduplication
//! - Category cap
//! - Error propagation policy (upstream swallowed, configuration fatal)
//! - Idempotence of category assembly

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use cinedash::core::curate::Curator;
use cinedash::core::normalize::{FieldMap, RawRecord};
use cinedash::models::config::CategoryConfig;
use cinedash::services::catalog::Catalog;
use cinedash::services::provider::OMDB;
use cinedash::{Error, Result};
use serde_json::json;

/// Canned response for one keyword or id.
enum Canned {
    Records(Vec<RawRecord>),
    Upstream,
    ApiKeyMissing,
}

/// In-memory catalog double that records every lookup.
struct MockCatalog {
    searches: HashMap<String, Canned>,
    details: HashMap<String, RawRecord>,
    calls: Mutex<Vec<String>>,
}

impl MockCatalog {
    fn new() -> Self {
        Self {
            searches: HashMap::new(),
            details: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn with_search(mut self, keyword: &str, canned: Canned) -> Self {
        self.searches.insert(keyword.to_string(), canned);
        self
    }

    fn with_detail(mut self, id: &str, record: RawRecord) -> Self {
        self.details.insert(id.to_string(), record);
        self
    }
}

#[async_trait]
impl Catalog for MockCatalog {
    fn fields(&self) -> &'static FieldMap {
        &OMDB.fields
    }

    async fn search(&self, keyword: &str) -> Result<Vec<RawRecord>> {
        self.calls.lock().unwrap().push(keyword.to_string());
        match self.searches.get(keyword) {
            Some(Canned::Records(records)) => Ok(records.clone()),
            Some(Canned::Upstream) => Err(Error::Upstream("503: unavailable".to_string())),
            Some(Canned::ApiKeyMissing) => Err(Error::ApiKeyMissing),
            None => Ok(Vec::new()),
        }
    }

    async fn get_by_id(&self, id: &str) -> Result<RawRecord> {
        self.calls.lock().unwrap().push(format!("detail:{id}"));
        self.details
            .get(id)
            .cloned()
            .ok_or_else(|| Error::NotFound(id.to_string()))
    }
}

fn record(id: &str, title: &str) -> RawRecord {
    json!({
        "imdbID": id,
        "Title": title,
        "Year": "2010",
        "Poster": format!("https://img.example/{id}.jpg")
    })
    .as_object()
    .unwrap()
    .clone()
}

fn record_without_poster(id: &str, title: &str) -> RawRecord {
    json!({ "imdbID": id, "Title": title, "Year": "2010", "Poster": "N/A" })
        .as_object()
        .unwrap()
        .clone()
}

fn category(name: &str, keywords: &[&str]) -> CategoryConfig {
    CategoryConfig {
        name: name.to_string(),
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
    }
}

// ========== PER-KEYWORD CAP AND VALIDITY ==========

#[tokio::test]
async fn test_three_valid_records_kept_per_keyword() {
    // 5 raw records, 4 valid: exactly the first 3 valid survive, in
    // upstream order.
    let catalog = MockCatalog::new().with_search(
        "inception",
        Canned::Records(vec![
            record("tt1", "One"),
            record_without_poster("tt2", "Two"),
            record("tt3", "Three"),
            record("tt4", "Four"),
            record("tt5", "Five"),
        ]),
    );
    let curator = Curator::new(catalog, vec![category("Popular Movies", &["inception"])]);

    let list = curator.get_category("Popular Movies").await.unwrap();
    let ids: Vec<&str> = list.movies.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, ["tt1", "tt3", "tt4"]);
}

// ========== DEDUPLICATION ==========

#[tokio::test]
async fn test_dedup_is_stable_and_first_seen_wins() {
    // Keyword order decides precedence, not completion order: the "b"
    // instance of tt9 carries a different title and must lose.
    let catalog = MockCatalog::new()
        .with_search("a", Canned::Records(vec![record("tt9", "From A")]))
        .with_search("b", Canned::Records(vec![record("tt9", "From B"), record("tt10", "Ten")]));
    let curator = Curator::new(catalog, vec![category("Mixed", &["a", "b"])]);

    let list = curator.get_category("Mixed").await.unwrap();
    assert_eq!(list.movies.len(), 2);
    assert_eq!(list.movies[0].id, "tt9");
    assert_eq!(list.movies[0].title, "From A");
    assert_eq!(list.movies[1].id, "tt10");
}

#[tokio::test]
async fn test_ids_are_pairwise_distinct() {
    let shared = vec![record("tt1", "Dup"), record("tt2", "Also Dup")];
    let catalog = MockCatalog::new()
        .with_search("a", Canned::Records(shared.clone()))
        .with_search("b", Canned::Records(shared));
    let curator = Curator::new(catalog, vec![category("Mixed", &["a", "b"])]);

    let list = curator.get_category("Mixed").await.unwrap();
    let mut ids: Vec<&str> = list.movies.iter().map(|m| m.id.as_str()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), list.movies.len());
}

// ========== CATEGORY CAP ==========

#[tokio::test]
async fn test_category_is_capped_at_twenty() {
    let mut catalog = MockCatalog::new();
    let mut keywords = Vec::new();
    for k in 0..8 {
        let keyword = format!("kw{k}");
        let records = (0..3)
            .map(|i| record(&format!("tt{k}_{i}"), "Movie"))
            .collect();
        catalog = catalog.with_search(&keyword, Canned::Records(records));
        keywords.push(keyword);
    }
    let keyword_refs: Vec<&str> = keywords.iter().map(String::as_str).collect();
    let curator = Curator::new(catalog, vec![category("Big", &keyword_refs)]);

    let list = curator.get_category("Big").await.unwrap();
    assert_eq!(list.movies.len(), 20);
}

// ========== ERROR PROPAGATION ==========

#[tokio::test]
async fn test_one_failing_keyword_does_not_fail_the_category() {
    let catalog = MockCatalog::new()
        .with_search("good", Canned::Records(vec![record("tt1", "One")]))
        .with_search("bad", Canned::Upstream)
        .with_search("fine", Canned::Records(vec![record("tt2", "Two")]));
    let curator = Curator::new(catalog, vec![category("Top Rated", &["good", "bad", "fine"])]);

    let list = curator.get_category("Top Rated").await.unwrap();
    let ids: Vec<&str> = list.movies.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, ["tt1", "tt2"]);
}

#[tokio::test]
async fn test_configuration_error_is_not_swallowed() {
    let catalog = MockCatalog::new()
        .with_search("a", Canned::ApiKeyMissing)
        .with_search("b", Canned::Records(vec![record("tt1", "One")]));
    let curator = Curator::new(catalog, vec![category("Popular Movies", &["a", "b"])]);

    let err = curator.get_category("Popular Movies").await.unwrap_err();
    assert!(err.is_configuration());
}

#[tokio::test]
async fn test_home_categories_omit_failed_category() {
    let catalog = MockCatalog::new()
        .with_search("ok", Canned::Records(vec![record("tt1", "One")]))
        .with_search("broken", Canned::Upstream);
    let curator = Curator::new(
        catalog,
        vec![
            category("Popular Movies", &["ok"]),
            category("Now Playing", &["broken", "broken"]),
        ],
    );

    let lists = curator.home_categories().await.unwrap();
    // "Now Playing" failed nowhere fatal; its keywords were swallowed so it
    // comes back empty rather than omitted.
    assert_eq!(lists.len(), 2);
    assert_eq!(lists[0].name, "Popular Movies");
    assert_eq!(lists[0].movies.len(), 1);
    assert!(lists[1].is_empty());
}

#[tokio::test]
async fn test_home_categories_propagate_configuration_error() {
    let catalog = MockCatalog::new().with_search("a", Canned::ApiKeyMissing);
    let curator = Curator::new(catalog, vec![category("Popular Movies", &["a"])]);

    let err = curator.home_categories().await.unwrap_err();
    assert!(err.is_configuration());
}

#[tokio::test]
async fn test_unknown_category_is_not_found() {
    let curator = Curator::new(MockCatalog::new(), vec![category("Popular Movies", &["a"])]);
    let err = curator.get_category("Nope").await.unwrap_err();
    assert!(err.is_not_found());
}

// ========== IDEMPOTENCE ==========

#[tokio::test]
async fn test_get_category_is_idempotent() {
    let catalog = MockCatalog::new()
        .with_search("a", Canned::Records(vec![record("tt1", "One"), record("tt2", "Two")]))
        .with_search("b", Canned::Records(vec![record("tt2", "Two"), record("tt3", "Three")]));
    let curator = Curator::new(catalog, vec![category("Popular Movies", &["a", "b"])]);

    let first = curator.get_category("Popular Movies").await.unwrap();
    let second = curator.get_category("Popular Movies").await.unwrap();
    let first_ids: Vec<&str> = first.movies.iter().map(|m| m.id.as_str()).collect();
    let second_ids: Vec<&str> = second.movies.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(first_ids, second_ids);
}

#[tokio::test]
async fn test_every_keyword_is_searched_once_per_assembly() {
    let catalog = MockCatalog::new()
        .with_search("a", Canned::Records(vec![record("tt1", "One")]))
        .with_search("b", Canned::Upstream);
    let curator = Curator::new(catalog, vec![category("Popular Movies", &["a", "b"])]);

    curator.get_category("Popular Movies").await.unwrap();
    let calls = curator.catalog().calls.lock().unwrap();
    assert_eq!(calls.len(), 2);
    assert!(calls.contains(&"a".to_string()));
    assert!(calls.contains(&"b".to_string()));
}

// ========== DETAIL LOOKUP ==========

#[tokio::test]
async fn test_detail_lookup_normalizes_and_propagates_not_found() {
    let detail_record = json!({
        "imdbID": "tt1375666",
        "Title": "Inception",
        "Runtime": "148 min",
        "Genre": "Action, Sci-Fi"
    })
    .as_object()
    .unwrap()
    .clone();
    let catalog = MockCatalog::new().with_detail("tt1375666", detail_record);
    let curator = Curator::new(catalog, Vec::new());

    let detail = curator.get_detail("tt1375666").await.unwrap();
    assert_eq!(detail.movie.title, "Inception");
    assert_eq!(detail.runtime_minutes, Some(148));

    let err = curator.get_detail("tt0000000").await.unwrap_err();
    assert!(err.is_not_found());
}
