//! Raw record normalization.
//!
//! Pure mapping from provider-shaped JSON records to the canonical movie
//! models. Every input field is optional: a missing field, the provider
//! sentinel "N/A", or an unparsable value degrades to `None` (or an empty
//! string for required text fields). Normalization never fails.
//!
//! Which raw fields feed which canonical fields is data, not code: each
//! provider ships a [`FieldMap`] listing candidate source fields per
//! canonical field, in preference order.

use serde_json::{Map, Value};

use crate::models::movie::{Genre, Movie, MovieDetail};

/// A raw catalog record as returned by the upstream provider.
///
/// Untrusted, partial input. Consumed by this module and nowhere else.
pub type RawRecord = Map<String, Value>;

/// Provider sentinel meaning "field intentionally absent".
///
/// Exact, case-sensitive match; "n/a" inside a plot summary is data.
const SENTINEL: &str = "N/A";

/// Candidate source fields per canonical field, in preference order.
///
/// An empty slice means the provider never supplies that field.
pub struct FieldMap {
    pub id: &'static [&'static str],
    pub title: &'static [&'static str],
    pub poster: &'static [&'static str],
    pub backdrop: &'static [&'static str],
    pub overview: &'static [&'static str],
    pub year: &'static [&'static str],
    pub release_date: &'static [&'static str],
    pub rating_average: &'static [&'static str],
    pub rating_count: &'static [&'static str],
    pub runtime: &'static [&'static str],
    pub genres: &'static [&'static str],
    pub tagline: &'static [&'static str],
    pub status: &'static [&'static str],
    pub director: &'static [&'static str],
    pub writer: &'static [&'static str],
    pub cast: &'static [&'static str],
    pub awards: &'static [&'static str],
    pub box_office: &'static [&'static str],
    pub budget: &'static [&'static str],
    pub revenue: &'static [&'static str],
    /// Base URL prepended to relative image paths (TMDB-style providers).
    pub image_base: Option<&'static str>,
}

/// Map a raw search-result record to a canonical movie.
pub fn normalize_movie(raw: &RawRecord, fields: &FieldMap) -> Movie {
    Movie {
        id: text(raw, fields.id).unwrap_or_default(),
        title: text(raw, fields.title).unwrap_or_default(),
        poster_url: image_url(raw, fields.poster, fields.image_base),
        backdrop_url: image_url(raw, fields.backdrop, fields.image_base),
        overview: text(raw, fields.overview),
        release_year: release_year(raw, fields),
        rating_average: float(raw, fields.rating_average),
        rating_count: count(raw, fields.rating_count),
    }
}

/// Map a raw detail record to a canonical movie detail.
pub fn normalize_detail(raw: &RawRecord, fields: &FieldMap) -> MovieDetail {
    MovieDetail {
        movie: normalize_movie(raw, fields),
        tagline: text(raw, fields.tagline),
        status: text(raw, fields.status),
        runtime_minutes: runtime_minutes(raw, fields.runtime),
        genres: genres(raw, fields.genres),
        director: text(raw, fields.director),
        writer: text(raw, fields.writer),
        cast: text(raw, fields.cast),
        awards: text(raw, fields.awards),
        box_office: text(raw, fields.box_office),
        budget: count(raw, fields.budget),
        revenue: count(raw, fields.revenue),
    }
}

/// First candidate field present in the record.
fn field<'a>(raw: &'a RawRecord, candidates: &[&str]) -> Option<&'a Value> {
    candidates
        .iter()
        .find_map(|name| raw.get(*name))
        .filter(|v| !v.is_null())
}

/// Text value of the first usable candidate field.
///
/// Numbers stringify (TMDB ids are numeric); empty strings and the
/// sentinel read as absent.
fn text(raw: &RawRecord, candidates: &[&str]) -> Option<String> {
    for name in candidates {
        let cleaned = match raw.get(*name) {
            Some(Value::String(s)) => clean(s),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        };
        if cleaned.is_some() {
            return cleaned;
        }
    }
    None
}

/// Strip the sentinel and whitespace-only strings.
fn clean(s: &str) -> Option<String> {
    if s.trim().is_empty() || s == SENTINEL {
        None
    } else {
        Some(s.to_string())
    }
}

/// First candidate field holding a usable image URL.
///
/// A usable URL is absolute `http(s)` or inline `data:`. Relative paths
/// resolve against `image_base` when the provider defines one, otherwise
/// they fall through to the next candidate, ultimately `None`.
fn image_url(raw: &RawRecord, candidates: &[&str], image_base: Option<&str>) -> Option<String> {
    for name in candidates {
        let Some(Value::String(s)) = raw.get(*name) else {
            continue;
        };
        let Some(cleaned) = clean(s) else {
            continue;
        };
        if is_absolute_url(&cleaned) {
            return Some(cleaned);
        }
        if let Some(base) = image_base {
            if cleaned.starts_with('/') {
                return Some(format!("{base}{cleaned}"));
            }
        }
    }
    None
}

fn is_absolute_url(s: &str) -> bool {
    s.starts_with("http://") || s.starts_with("https://") || s.starts_with("data:")
}

/// Release year, preferring a dedicated year field and falling back to
/// the year component of a full release date.
fn release_year(raw: &RawRecord, fields: &FieldMap) -> Option<String> {
    if let Some(year) = text(raw, fields.year) {
        return Some(year);
    }
    let date = text(raw, fields.release_date)?;
    let year: String = date.chars().take_while(|c| c.is_ascii_digit()).collect();
    if year.len() == 4 {
        Some(year)
    } else {
        None
    }
}

/// Floating-point value, parsed from a number or a numeric string.
fn float(raw: &RawRecord, candidates: &[&str]) -> Option<f64> {
    match field(raw, candidates)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => clean(s)?.parse().ok(),
        _ => None,
    }
}

/// Non-negative integer, tolerating thousands separators ("1,234,567").
fn count(raw: &RawRecord, candidates: &[&str]) -> Option<u64> {
    match field(raw, candidates)? {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => clean(s)?.replace(',', "").parse().ok(),
        _ => None,
    }
}

/// Runtime in minutes, stripping a trailing unit suffix ("142 min").
fn runtime_minutes(raw: &RawRecord, candidates: &[&str]) -> Option<u64> {
    match field(raw, candidates)? {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => {
            let digits: String = clean(s)?
                .chars()
                .take_while(|c| c.is_ascii_digit())
                .collect();
            digits.parse().ok()
        }
        _ => None,
    }
}

/// Genre list, from either a structured array or a comma-separated text
/// field (indices serve as ids for the latter).
fn genres(raw: &RawRecord, candidates: &[&str]) -> Option<Vec<Genre>> {
    match field(raw, candidates)? {
        Value::Array(items) => {
            let parsed: Vec<Genre> = items
                .iter()
                .filter_map(|item| {
                    let obj = item.as_object()?;
                    Some(Genre {
                        id: obj.get("id")?.as_u64()?,
                        name: obj.get("name")?.as_str()?.to_string(),
                    })
                })
                .collect();
            if parsed.is_empty() {
                None
            } else {
                Some(parsed)
            }
        }
        Value::String(s) => {
            let names = clean(s)?;
            let parsed: Vec<Genre> = names
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .enumerate()
                .map(|(id, name)| Genre {
                    id: id as u64,
                    name: name.to_string(),
                })
                .collect();
            if parsed.is_empty() {
                None
            } else {
                Some(parsed)
            }
        }
        _ => None,
    }
}
