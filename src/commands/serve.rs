use crate::cli::ServeArgs;
use crate::config::Config;
use crate::core::content::builtin;
use crate::render::RenderOptions;
use crate::server::{self, AppState};
use crate::utils::print_info;
use anyhow::{Context, Result};
use tracing::warn;

pub async fn handle_serve_command(config: Config, args: &ServeArgs) -> Result<()> {
    let mut server_config = config.server.clone();
    if let Some(host) = &args.host {
        server_config.host = host.clone();
    }
    if let Some(port) = args.port {
        server_config.port = port;
    }

    let catalog = builtin();
    for issue in catalog.validate() {
        warn!(%issue, "content issue");
    }

    let state = AppState::from_catalog(catalog, &RenderOptions::from(&config.general))
        .context("Failed to render page for serving")?;

    print_info(&format!(
        "Serving guide on http://{}:{} (Ctrl-C to stop)",
        server_config.host, server_config.port
    ));

    server::serve(&server_config, state).await?;
    Ok(())
}
