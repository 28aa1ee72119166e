//! Canonical movie models.
//!
//! Every renderer and every curation step works on these types. Raw
//! provider records never escape the normalizer, so the rest of the
//! crate is provider-agnostic.

use serde::{Deserialize, Serialize};

/// Canonical movie representation (search-result depth).
///
/// Image URL fields, when present, are either absolute `http(s)` URLs or
/// inline `data:` URLs. The normalizer maps provider sentinels ("N/A"),
/// empty strings, and relative paths it cannot resolve to `None`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Movie {
    /// Stable provider identifier (e.g. an IMDb id like "tt1375666").
    pub id: String,
    /// Primary title. Empty when the provider supplied none; such records
    /// fail the curation validity predicate.
    pub title: String,
    pub poster_url: Option<String>,
    pub backdrop_url: Option<String>,
    pub overview: Option<String>,
    pub release_year: Option<String>,
    /// Average rating on a 0-10 scale.
    pub rating_average: Option<f64>,
    pub rating_count: Option<u64>,
}

/// Canonical movie representation (detail depth).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MovieDetail {
    #[serde(flatten)]
    pub movie: Movie,
    pub tagline: Option<String>,
    pub status: Option<String>,
    pub runtime_minutes: Option<u64>,
    pub genres: Option<Vec<Genre>>,
    pub director: Option<String>,
    pub writer: Option<String>,
    pub cast: Option<String>,
    pub awards: Option<String>,
    pub box_office: Option<String>,
    pub budget: Option<u64>,
    pub revenue: Option<u64>,
}

/// Genre entry. Ids are unique within one movie's genre list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

/// A bounded, deduplicated, validity-filtered list of movies for one
/// named category.
///
/// Invariant: all `id` values are pairwise distinct and the list holds at
/// most the category cap (20). An empty list is valid; renderers omit the
/// section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CuratedList {
    pub name: String,
    pub movies: Vec<Movie>,
}

impl CuratedList {
    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}
