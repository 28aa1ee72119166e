//! Serve command implementation.

use anyhow::Result;

use crate::models::config::load_config;
use crate::web;

/// Execute the serve command.
pub async fn serve(bind: Option<String>) -> Result<()> {
    let mut config = load_config();
    if let Some(bind) = bind {
        config.server.bind = bind;
    }

    web::serve(&config).await?;
    Ok(())
}
