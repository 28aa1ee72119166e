//! Catalog API preflight check.

use super::CheckResult;
use crate::models::config::Config;
use crate::services::catalog::{Catalog, CatalogClient};
use crate::services::provider::Provider;
use crate::Error;

/// Check if the catalog API is configured and reachable.
pub async fn check() -> CheckResult {
    let config = crate::models::config::load_config();
    check_with(&config).await
}

/// Check a specific configuration.
pub async fn check_with(config: &Config) -> CheckResult {
    let provider = match Provider::from_id(&config.catalog.provider) {
        Ok(provider) => provider,
        Err(_) => {
            return CheckResult::fail(
                "Catalog API",
                "unknown provider",
                "Set catalog.provider to \"omdb\" or \"tmdb\" in config.toml",
            )
        }
    };

    let client = CatalogClient::new(provider, config.catalog.api_key.clone());
    match client.search("inception").await {
        Ok(_) => CheckResult::ok("Catalog API", "connected"),
        Err(Error::ApiKeyMissing) => CheckResult::fail(
            "Catalog API",
            "API key not configured",
            "Set the OMDB_API_KEY environment variable",
        ),
        Err(_) => CheckResult::fail(
            "Catalog API",
            "connection failed",
            "Check your network connection and API key",
        ),
    }
}
