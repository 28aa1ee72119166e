//! Movie command implementation.

use anyhow::Result;
use colored::Colorize;

use crate::core::curate::Curator;
use crate::models::config::load_config;
use crate::models::movie::MovieDetail;
use crate::services::catalog::CatalogClient;
use crate::services::provider::Provider;

/// Execute the movie command.
pub async fn movie(id: String, format: String) -> Result<()> {
    let config = load_config();
    let provider = Provider::from_id(&config.catalog.provider)?;
    let client = CatalogClient::new(provider, config.catalog.api_key.clone());
    let curator = Curator::new(client, config.categories);

    let detail = curator.get_detail(&id).await?;

    match format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&detail)?),
        _ => print_detail(&detail),
    }

    Ok(())
}

/// Print one detail record as labeled lines.
fn print_detail(detail: &MovieDetail) {
    let movie = &detail.movie;

    println!("{} ({})", movie.title.bold(), movie.id);
    if let Some(tagline) = &detail.tagline {
        println!("{}", tagline.italic());
    }
    println!();

    let line = |label: &str, value: Option<String>| {
        if let Some(value) = value {
            println!("{:<12} {}", format!("{label}:").dimmed(), value);
        }
    };

    line("Year", movie.release_year.clone());
    line(
        "Rating",
        movie.rating_average.map(|r| {
            let votes = movie
                .rating_count
                .map(|c| format!(" ({c} votes)"))
                .unwrap_or_default();
            format!("{r:.1}/10{votes}")
        }),
    );
    line("Runtime", detail.runtime_minutes.map(|m| format!("{m} min")));
    line(
        "Genres",
        detail.genres.as_ref().map(|genres| {
            genres
                .iter()
                .map(|g| g.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        }),
    );
    line("Director", detail.director.clone());
    line("Writer", detail.writer.clone());
    line("Cast", detail.cast.clone());
    line("Awards", detail.awards.clone());
    line("Box office", detail.box_office.clone());
    line("Status", detail.status.clone());

    if let Some(overview) = &movie.overview {
        println!();
        println!("{overview}");
    }
}
