//! HTML page rendering.
//!
//! Small hand-rolled templates. All upstream-derived text passes through
//! [`escape`] before landing in markup.

use crate::models::movie::{CuratedList, Movie, MovieDetail};

const STYLESHEET: &str = r#"
body { margin: 0; background: #111; color: #eee; font-family: sans-serif; }
a { color: inherit; text-decoration: none; }
.hero { position: relative; padding: 4rem 2rem; background: #222; }
.hero h1 { font-size: 2.5rem; margin: 0 0 1rem; }
.hero p { max-width: 40rem; color: #bbb; }
.row { padding: 1rem 2rem; }
.row h2 { font-size: 1.3rem; }
.row .cards { display: flex; gap: 1rem; overflow-x: auto; }
.card { flex: 0 0 150px; }
.card img { width: 150px; border-radius: 4px; }
.card .title { font-size: 0.85rem; margin-top: 0.3rem; }
.detail { display: flex; gap: 2rem; padding: 2rem; }
.detail img { width: 300px; border-radius: 6px; }
.meta { color: #bbb; margin-bottom: 1rem; }
.genres span { background: #c00; border-radius: 1rem; padding: 0.2rem 0.8rem;
               margin-right: 0.4rem; font-size: 0.8rem; }
.panel { max-width: 42rem; margin: 4rem auto; padding: 2rem; background: #1c1c1c;
         border-radius: 8px; }
.panel pre { background: #000; padding: 0.8rem; border-radius: 4px; color: #6e6; }
"#;

/// Wrap page content in the shared document shell.
fn document(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n<style>{STYLESHEET}</style>\n</head>\n\
         <body>\n{body}\n</body>\n</html>",
        escape(title)
    )
}

/// Render the home page: hero banner plus one row per non-empty category.
pub fn home_page(lists: &[CuratedList]) -> String {
    let mut body = String::new();

    let hero = lists.iter().flat_map(|l| l.movies.first()).next();
    if let Some(movie) = hero {
        body.push_str(&hero_banner(movie));
    }

    for list in lists {
        // Empty category: omit the section entirely.
        if list.is_empty() {
            continue;
        }
        body.push_str(&movie_row(list));
    }

    document("Cinedash", &body)
}

fn hero_banner(movie: &Movie) -> String {
    let overview = movie
        .overview
        .as_deref()
        .map(|o| format!("<p>{}</p>", escape(o)))
        .unwrap_or_default();
    format!(
        "<section class=\"hero\">\n<h1>{}</h1>\n{overview}\
         <a href=\"/movie/{}\">More info</a>\n</section>\n",
        escape(&movie.title),
        escape(&movie.id),
    )
}

fn movie_row(list: &CuratedList) -> String {
    let mut cards = String::new();
    for movie in &list.movies {
        cards.push_str(&movie_card(movie));
    }
    format!(
        "<section class=\"row\">\n<h2>{}</h2>\n<div class=\"cards\">\n{cards}</div>\n</section>\n",
        escape(&list.name)
    )
}

fn movie_card(movie: &Movie) -> String {
    // Curation guarantees a poster; the fallback is for direct callers.
    let poster = movie.poster_url.as_deref().unwrap_or("");
    let year = movie
        .release_year
        .as_deref()
        .map(|y| format!(" ({})", escape(y)))
        .unwrap_or_default();
    format!(
        "<a class=\"card\" href=\"/movie/{}\">\
         <img src=\"{}\" alt=\"{}\" loading=\"lazy\">\
         <div class=\"title\">{}{year}</div></a>\n",
        escape(&movie.id),
        escape(poster),
        escape(&movie.title),
        escape(&movie.title),
    )
}

/// Render the movie detail page.
pub fn detail_page(detail: &MovieDetail) -> String {
    let movie = &detail.movie;
    let mut info = String::new();

    let mut meta = Vec::new();
    if let Some(year) = &movie.release_year {
        meta.push(escape(year));
    }
    if let Some(runtime) = detail.runtime_minutes {
        meta.push(format!("{runtime} min"));
    }
    if let Some(rating) = movie.rating_average {
        meta.push(format!("&#9733; {rating:.1} / 10"));
    }
    if !meta.is_empty() {
        info.push_str(&format!("<div class=\"meta\">{}</div>\n", meta.join(" · ")));
    }

    if let Some(tagline) = &detail.tagline {
        info.push_str(&format!("<p><em>{}</em></p>\n", escape(tagline)));
    }

    if let Some(genres) = &detail.genres {
        let spans: String = genres
            .iter()
            .map(|g| format!("<span>{}</span>", escape(&g.name)))
            .collect();
        info.push_str(&format!("<div class=\"genres\">{spans}</div>\n"));
    }

    if let Some(overview) = &movie.overview {
        info.push_str(&format!(
            "<h2>Overview</h2>\n<p>{}</p>\n",
            escape(overview)
        ));
    }

    for (label, value) in [
        ("Director", &detail.director),
        ("Writer", &detail.writer),
        ("Cast", &detail.cast),
        ("Awards", &detail.awards),
        ("Box office", &detail.box_office),
        ("Status", &detail.status),
    ] {
        if let Some(value) = value {
            info.push_str(&format!(
                "<p><strong>{label}</strong>: {}</p>\n",
                escape(value)
            ));
        }
    }
    if let Some(votes) = movie.rating_count {
        info.push_str(&format!("<p><strong>Votes</strong>: {votes}</p>\n"));
    }

    let poster = movie
        .poster_url
        .as_deref()
        .map(|url| format!("<img src=\"{}\" alt=\"{}\">", escape(url), escape(&movie.title)))
        .unwrap_or_default();

    let body = format!(
        "<div class=\"detail\">\n<div>{poster}</div>\n<div>\n\
         <a href=\"/\">&larr; Back to Home</a>\n<h1>{}</h1>\n{info}</div>\n</div>",
        escape(&movie.title)
    );
    document(&movie.title, &body)
}

/// Render the API-key setup instructions page.
pub fn setup_page() -> String {
    let body = "<div class=\"panel\">\n\
        <h1>Catalog API key not configured</h1>\n\
        <p>Cinedash needs an OMDb API key to fetch movie listings:</p>\n\
        <ol>\n\
        <li>Request a free key at \
            <a href=\"http://www.omdbapi.com/apikey.aspx\">omdbapi.com/apikey.aspx</a></li>\n\
        <li>Export it before starting the server:\n\
            <pre>export OMDB_API_KEY=your_api_key_here</pre></li>\n\
        <li>Restart <code>cinedash serve</code></li>\n\
        </ol>\n</div>";
    document("Setup required", body)
}

/// Render the not-found page.
pub fn not_found_page() -> String {
    let body = "<div class=\"panel\">\n<h1>Movie Not Found</h1>\n\
        <p><a href=\"/\">Return to Home</a></p>\n</div>";
    document("Movie Not Found", body)
}

/// Render the generic error page.
pub fn error_page(message: &str) -> String {
    let body = format!(
        "<div class=\"panel\">\n<h1>Error Loading Movies</h1>\n\
         <p>An error occurred while fetching movies:</p>\n<pre>{}</pre>\n\
         <p>Please check your API key and try again.</p>\n</div>",
        escape(message)
    );
    document("Error", &body)
}

/// Minimal HTML escaping for text and attribute values.
fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::movie::Movie;

    fn list(name: &str, movies: Vec<Movie>) -> CuratedList {
        CuratedList {
            name: name.to_string(),
            movies,
        }
    }

    fn movie(id: &str, title: &str) -> Movie {
        Movie {
            id: id.to_string(),
            title: title.to_string(),
            poster_url: Some("https://img.example/p.jpg".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn home_page_omits_empty_categories() {
        let lists = vec![
            list("Popular Movies", vec![movie("tt1", "Inception")]),
            list("Now Playing", vec![]),
        ];
        let html = home_page(&lists);
        assert!(html.contains("Popular Movies"));
        assert!(!html.contains("Now Playing"));
    }

    #[test]
    fn upstream_text_is_escaped() {
        let html = home_page(&[list("X", vec![movie("tt1", "<script>alert(1)</script>")])]);
        assert!(!html.contains("<script>alert(1)"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn hero_comes_from_first_nonempty_list() {
        let lists = vec![
            list("Empty", vec![]),
            list("Popular Movies", vec![movie("tt42", "Dune")]),
        ];
        let html = home_page(&lists);
        assert!(html.contains("class=\"hero\""));
        assert!(html.contains("/movie/tt42"));
    }
}
