//! Configuration model.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Upstream catalog configuration.
    pub catalog: CatalogConfig,
    /// Web server configuration.
    pub server: ServerConfig,
    /// Home page categories. Each is a fixed, hand-picked keyword list;
    /// there is no ranking heuristic.
    pub categories: Vec<CategoryConfig>,
}

/// Upstream catalog configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// API key. Checked on first use, not at load time.
    pub api_key: Option<String>,
    /// Provider identifier ("omdb" or "tmdb").
    pub provider: String,
}

/// Web server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Socket address to bind.
    pub bind: String,
}

/// One named category and its search keywords.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryConfig {
    pub name: String,
    pub keywords: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: CatalogConfig::default(),
            server: ServerConfig::default(),
            categories: default_categories(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_key: std::env::var("OMDB_API_KEY").ok(),
            provider: "omdb".to_string(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:3000".to_string(),
        }
    }
}

/// The three built-in home page categories.
pub fn default_categories() -> Vec<CategoryConfig> {
    vec![
        CategoryConfig {
            name: "Popular Movies".to_string(),
            keywords: [
                "inception",
                "interstellar",
                "the dark knight",
                "pulp fiction",
                "the matrix",
                "fight club",
                "forrest gump",
                "the godfather",
            ]
            .map(String::from)
            .to_vec(),
        },
        CategoryConfig {
            name: "Now Playing".to_string(),
            keywords: [
                "dune",
                "oppenheimer",
                "barbie",
                "top gun",
                "everything everywhere",
                "the batman",
                "no time to die",
                "spider-man",
            ]
            .map(String::from)
            .to_vec(),
        },
        CategoryConfig {
            name: "Top Rated".to_string(),
            keywords: [
                "shawshank redemption",
                "schindler's list",
                "the lord of the rings",
                "goodfellas",
                "casablanca",
                "citizen kane",
                "titanic",
                "gladiator",
            ]
            .map(String::from)
            .to_vec(),
        },
    ]
}

/// Get the configuration directory path.
fn dirs_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("cinedash")
}

/// Load configuration from file, falling back to defaults.
pub fn load_config() -> Config {
    let config_path = dirs_config_path().join("config.toml");

    if config_path.exists() {
        if let Ok(content) = std::fs::read_to_string(&config_path) {
            if let Ok(config) = toml::from_str(&content) {
                return config;
            }
        }
    }

    Config::default()
}
