use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use tracing::info;
use tuition_api::{config, server};

/// Execute the start command
///
/// Loads configuration, then starts the server. The server reads and builds
/// the dataset before accepting any request; a missing or unreadable dataset
/// file aborts startup.
pub async fn execute(config_path: &Path) -> Result<()> {
    println!("{}", "Starting College Tuition Cost API...".green());

    let cfg = config::load_config(config_path)?;

    info!("Configuration loaded from '{}'", config_path.display());

    // Blocks until shutdown
    server::start_server(cfg).await?;

    Ok(())
}
