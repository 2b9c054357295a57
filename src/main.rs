use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use tuition_api::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    init_tracing();

    match args.get_command() {
        cli::Commands::Start => {
            commands::start::execute(&args.config).await?;
        }
        cli::Commands::Config { action } => match action {
            cli::ConfigCommands::Show => commands::config::show(&args.config)?,
            cli::ConfigCommands::Validate => commands::config::validate(&args.config)?,
        },
        cli::Commands::Version => {
            println!("College Tuition Cost API v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
