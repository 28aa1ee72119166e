//! List curation.
//!
//! Assembles the bounded, deduplicated, validity-filtered movie lists the
//! dashboard renders. Per category: search every configured keyword
//! concurrently, normalize, drop records without usable artwork, keep a
//! few per keyword so no single keyword dominates, then dedupe by id in
//! keyword order and truncate.

use futures::future;
use tracing::warn;

use crate::core::normalize::{normalize_detail, normalize_movie};
use crate::models::config::CategoryConfig;
use crate::models::movie::{CuratedList, Movie, MovieDetail};
use crate::services::catalog::Catalog;
use crate::{Error, Result};

/// Valid records kept per search keyword.
const PER_KEYWORD_LIMIT: usize = 3;

/// Maximum movies per curated list.
const CATEGORY_CAP: usize = 20;

/// Curates movie lists from an upstream catalog.
pub struct Curator<C> {
    catalog: C,
    categories: Vec<CategoryConfig>,
}

impl<C: Catalog> Curator<C> {
    pub fn new(catalog: C, categories: Vec<CategoryConfig>) -> Self {
        Self {
            catalog,
            categories,
        }
    }

    /// Access the underlying catalog.
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Names of the configured categories, in configuration order.
    pub fn category_names(&self) -> Vec<String> {
        self.categories.iter().map(|c| c.name.clone()).collect()
    }

    /// Assemble the curated list for one named category.
    pub async fn get_category(&self, name: &str) -> Result<CuratedList> {
        let category = self
            .categories
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::UnknownCategory(name.to_string()))?;
        self.assemble(category).await
    }

    /// Fetch every configured category concurrently.
    ///
    /// A category whose assembly fails is omitted so the rest of the page
    /// still renders; a configuration error is global and propagates.
    pub async fn home_categories(&self) -> Result<Vec<CuratedList>> {
        let results =
            future::join_all(self.categories.iter().map(|c| self.assemble(c))).await;

        let mut lists = Vec::with_capacity(results.len());
        for (category, result) in self.categories.iter().zip(results) {
            match result {
                Ok(list) => lists.push(list),
                Err(err) if err.is_configuration() => return Err(err),
                Err(err) => {
                    warn!(category = %category.name, %err, "category failed, omitting");
                }
            }
        }
        Ok(lists)
    }

    /// Fetch and normalize one movie's detail record.
    ///
    /// All failures propagate unchanged: no retry, no fallback.
    pub async fn get_detail(&self, id: &str) -> Result<MovieDetail> {
        let raw = self.catalog.get_by_id(id).await?;
        Ok(normalize_detail(&raw, self.catalog.fields()))
    }

    async fn assemble(&self, category: &CategoryConfig) -> Result<CuratedList> {
        // join_all returns completions in argument order, so the dedup
        // precedence below follows the configured keyword order no matter
        // which search finishes first.
        let results = future::join_all(
            category
                .keywords
                .iter()
                .map(|keyword| self.catalog.search(keyword)),
        )
        .await;

        let mut picked: Vec<Movie> = Vec::new();
        for (keyword, result) in category.keywords.iter().zip(results) {
            match result {
                Ok(records) => {
                    picked.extend(
                        records
                            .iter()
                            .map(|raw| normalize_movie(raw, self.catalog.fields()))
                            .filter(is_renderable)
                            .take(PER_KEYWORD_LIMIT),
                    );
                }
                Err(err) if err.is_configuration() => return Err(err),
                Err(err) => {
                    // One bad keyword never fails the whole category.
                    warn!(%keyword, %err, "keyword search failed, skipping");
                }
            }
        }

        let mut seen = std::collections::HashSet::new();
        let mut movies: Vec<Movie> = picked
            .into_iter()
            .filter(|movie| seen.insert(movie.id.clone()))
            .collect();
        movies.truncate(CATEGORY_CAP);

        Ok(CuratedList {
            name: category.name.clone(),
            movies,
        })
    }
}

/// Whether a movie is eligible for curation.
///
/// Requires a non-empty id and title plus a usable poster. Inline `data:`
/// URLs are reserved for fallback rendering and do not qualify.
fn is_renderable(movie: &Movie) -> bool {
    !movie.id.is_empty()
        && !movie.title.is_empty()
        && movie.poster_url.as_deref().is_some_and(is_usable_poster)
}

/// Whether a poster URL is fit to curate on: absolute `http(s)` and not a
/// known placeholder asset.
fn is_usable_poster(url: &str) -> bool {
    let is_http = url.starts_with("http://") || url.starts_with("https://");
    is_http && !url.contains("placeholder") && !url.contains("no-poster")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: &str, title: &str, poster: Option<&str>) -> Movie {
        Movie {
            id: id.to_string(),
            title: title.to_string(),
            poster_url: poster.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn renderable_requires_id_title_and_poster() {
        let poster = Some("https://img.example/p.jpg");
        assert!(is_renderable(&movie("tt1", "Inception", poster)));
        assert!(!is_renderable(&movie("", "Inception", poster)));
        assert!(!is_renderable(&movie("tt1", "", poster)));
        assert!(!is_renderable(&movie("tt1", "Inception", None)));
    }

    #[test]
    fn data_urls_and_placeholders_are_not_curatable() {
        assert!(!is_usable_poster("data:image/png;base64,AAAA"));
        assert!(!is_usable_poster("https://img.example/placeholder.jpg"));
        assert!(!is_usable_poster("https://img.example/no-poster.png"));
        assert!(!is_usable_poster("/relative/p.jpg"));
        assert!(is_usable_poster("http://img.example/p.jpg"));
    }
}
