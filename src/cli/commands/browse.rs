//! Browse command implementation.

use anyhow::Result;
use colored::Colorize;

use crate::core::curate::Curator;
use crate::models::config::load_config;
use crate::models::movie::CuratedList;
use crate::services::catalog::CatalogClient;
use crate::services::provider::Provider;

/// Execute the browse command.
pub async fn browse(category: Option<String>, format: String) -> Result<()> {
    let config = load_config();
    let provider = Provider::from_id(&config.catalog.provider)?;
    let client = CatalogClient::new(provider, config.catalog.api_key.clone());
    let curator = Curator::new(client, config.categories);

    let lists = match category {
        Some(name) => vec![curator.get_category(&name).await?],
        None => curator.home_categories().await?,
    };

    match format.as_str() {
        "json" => print_json(&lists)?,
        _ => print_table(&lists),
    }

    Ok(())
}

/// Print curated lists as JSON.
fn print_json(lists: &[CuratedList]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(lists)?);
    Ok(())
}

/// Print curated lists as a table.
fn print_table(lists: &[CuratedList]) {
    for list in lists {
        if list.is_empty() {
            continue;
        }
        println!("{}", list.name.bold());
        for movie in &list.movies {
            let year = movie.release_year.as_deref().unwrap_or("----");
            let rating = movie
                .rating_average
                .map(|r| format!("{r:.1}"))
                .unwrap_or_else(|| "-".to_string());
            println!(
                "  {:<12} {:>4}  {:>4}  {}",
                movie.id.dimmed(),
                year,
                rating,
                movie.title
            );
        }
        println!();
    }
}
