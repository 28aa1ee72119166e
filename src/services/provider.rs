//! Upstream provider profiles.
//!
//! The two supported catalog providers return entirely different JSON
//! shapes for the same logical record. Everything provider-specific lives
//! here as static data: how to build request URLs, how the provider
//! signals "no results", and which raw fields feed each canonical field.
//! The client and the normalizer stay free of provider branches; adding a
//! provider means adding a profile.

use crate::core::normalize::FieldMap;
use crate::Error;

/// Supported upstream catalog providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    /// OMDb (http://www.omdbapi.com): flat records, capitalized field
    /// names, "N/A" sentinels, IMDb identifiers.
    Omdb,
    /// TMDB-shaped records: snake_case fields, numeric ids, relative
    /// image paths.
    Tmdb,
}

impl Provider {
    /// Look up a provider by its configuration identifier.
    pub fn from_id(id: &str) -> crate::Result<Self> {
        match id {
            "omdb" => Ok(Provider::Omdb),
            "tmdb" => Ok(Provider::Tmdb),
            other => Err(Error::UnknownProvider(other.to_string())),
        }
    }

    pub fn profile(self) -> &'static ProviderProfile {
        match self {
            Provider::Omdb => &OMDB,
            Provider::Tmdb => &TMDB,
        }
    }
}

/// Static description of one upstream provider.
pub struct ProviderProfile {
    pub id: &'static str,
    pub base_url: &'static str,
    /// Query parameter carrying the API key.
    pub key_param: &'static str,
    /// Path appended to `base_url` for keyword search ("" for OMDb).
    pub search_path: &'static str,
    /// Query parameter carrying the search keyword.
    pub search_param: &'static str,
    /// Extra query parameters sent with every search (media type filter).
    pub search_extra: &'static [(&'static str, &'static str)],
    /// Detail lookup style: either a query parameter holding the id, or a
    /// path segment the id is appended to.
    pub detail: DetailLookup,
    /// Extra query parameters sent with every detail lookup (plot
    /// verbosity and the like).
    pub detail_extra: &'static [(&'static str, &'static str)],
    /// Required identifier prefix, prepended when absent ("tt" for IMDb
    /// ids).
    pub id_prefix: Option<&'static str>,
    /// Field distinguishing "no results" from structural success, with the
    /// value that signals failure, and the field carrying the provider's
    /// textual error message.
    pub status_field: Option<&'static str>,
    pub status_failure: &'static str,
    pub error_field: &'static str,
    /// Field holding the array of search-result records.
    pub results_field: &'static str,
    /// Field-extraction table for the normalizer.
    pub fields: FieldMap,
}

/// How a provider addresses a single record.
pub enum DetailLookup {
    /// `?i=<id>` style.
    QueryParam(&'static str),
    /// `/movie/<id>` style.
    PathSegment(&'static str),
}

impl ProviderProfile {
    /// Coerce an identifier into the provider's required format.
    ///
    /// OMDb only accepts IMDb ids ("tt" + digits); a bare numeric id like
    /// "770" goes out as "tt770".
    pub fn canonical_id(&self, id: &str) -> String {
        match self.id_prefix {
            Some(prefix) if !id.starts_with(prefix) => format!("{prefix}{id}"),
            _ => id.to_string(),
        }
    }
}

/// OMDb profile.
pub static OMDB: ProviderProfile = ProviderProfile {
    id: "omdb",
    base_url: "http://www.omdbapi.com/",
    key_param: "apikey",
    search_path: "",
    search_param: "s",
    search_extra: &[("type", "movie")],
    detail: DetailLookup::QueryParam("i"),
    detail_extra: &[("plot", "full")],
    id_prefix: Some("tt"),
    status_field: Some("Response"),
    status_failure: "False",
    error_field: "Error",
    results_field: "Search",
    fields: FieldMap {
        id: &["imdbID"],
        title: &["Title"],
        poster: &["Poster"],
        backdrop: &[],
        overview: &["Plot"],
        year: &["Year"],
        release_date: &["Released"],
        rating_average: &["imdbRating"],
        rating_count: &["imdbVotes"],
        runtime: &["Runtime"],
        genres: &["Genre"],
        tagline: &[],
        status: &[],
        director: &["Director"],
        writer: &["Writer"],
        cast: &["Actors"],
        awards: &["Awards"],
        box_office: &["BoxOffice"],
        budget: &[],
        revenue: &[],
        image_base: None,
    },
};

/// TMDB profile.
pub static TMDB: ProviderProfile = ProviderProfile {
    id: "tmdb",
    base_url: "https://api.themoviedb.org/3",
    key_param: "api_key",
    search_path: "/search/movie",
    search_param: "query",
    search_extra: &[("include_adult", "false")],
    detail: DetailLookup::PathSegment("/movie"),
    detail_extra: &[],
    id_prefix: None,
    status_field: None,
    status_failure: "",
    error_field: "status_message",
    results_field: "results",
    fields: FieldMap {
        id: &["id"],
        title: &["title"],
        poster: &["poster_path"],
        backdrop: &["backdrop_path"],
        overview: &["overview"],
        year: &[],
        release_date: &["release_date"],
        rating_average: &["vote_average"],
        rating_count: &["vote_count"],
        runtime: &["runtime"],
        genres: &["genres"],
        tagline: &["tagline"],
        status: &["status"],
        director: &[],
        writer: &[],
        cast: &[],
        awards: &[],
        box_office: &[],
        budget: &["budget"],
        revenue: &["revenue"],
        image_base: Some("https://image.tmdb.org/t/p/w500"),
    },
};
