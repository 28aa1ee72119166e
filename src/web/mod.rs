//! Web server.
//!
//! Server-side rendering of the dashboard: the home page (hero banner plus
//! one row per curated category) and the per-movie detail page. Failures
//! surface as three distinct pages: setup instructions when the API key is
//! missing, a not-found page, and a generic error page for everything else.

pub mod pages;

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
    routing::get,
    Router,
};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::core::curate::Curator;
use crate::models::config::Config;
use crate::services::catalog::CatalogClient;
use crate::services::provider::Provider;
use crate::{Error, Result};

#[derive(Clone)]
pub struct AppState {
    pub curator: Arc<Curator<CatalogClient>>,
}

impl AppState {
    pub fn from_config(config: &Config) -> Result<Self> {
        let provider = Provider::from_id(&config.catalog.provider)?;
        let client = CatalogClient::new(provider, config.catalog.api_key.clone());
        let curator = Curator::new(client, config.categories.clone());
        Ok(Self {
            curator: Arc::new(curator),
        })
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route("/movie/:id", get(movie_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the server until shutdown.
pub async fn serve(config: &Config) -> Result<()> {
    let state = AppState::from_config(config)?;
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(&config.server.bind).await?;
    info!("listening on http://{}", config.server.bind);
    axum::serve(listener, router).await?;
    Ok(())
}

async fn home_handler(State(state): State<AppState>) -> (StatusCode, Html<String>) {
    match state.curator.home_categories().await {
        Ok(lists) => (StatusCode::OK, Html(pages::home_page(&lists))),
        Err(err) => error_page_for(&err),
    }
}

async fn movie_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> (StatusCode, Html<String>) {
    match state.curator.get_detail(&id).await {
        Ok(detail) => (StatusCode::OK, Html(pages::detail_page(&detail))),
        Err(err) => error_page_for(&err),
    }
}

fn error_page_for(err: &Error) -> (StatusCode, Html<String>) {
    if err.is_configuration() {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html(pages::setup_page()),
        )
    } else if err.is_not_found() {
        (StatusCode::NOT_FOUND, Html(pages::not_found_page()))
    } else {
        error!(%err, "request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html(pages::error_page(&err.to_string())),
        )
    }
}
