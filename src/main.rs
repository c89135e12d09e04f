//! Gradpath - study-abroad counselling from the terminal
//!
#![doc = "Gradpath - study-abroad counselling from the terminal"]
#![doc = "Main entry point for the Gradpath client."]

use anyhow::Result;

use gradpath::cli::{Cli, Commands};
use gradpath::commands::{self, Context};
use gradpath::config::Config;
use gradpath::logging::{init_logging, LoggingOptions};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse_args();

    init_logging(&LoggingOptions {
        verbose: cli.verbose,
        json: cli.json_logs,
        file_path: cli.log_file.clone(),
    })?;

    // Load configuration
    let config_path = cli.config.as_deref().unwrap_or("config/config.yaml");
    let config = Config::load(config_path, &cli)?;

    // Validate configuration
    config.validate()?;
    tracing::debug!(base_url = %config.base_url(), "Configuration loaded");

    let ctx = Context::new(config, cli.json)?;

    // Execute command
    match cli.command {
        Commands::Signup {
            name,
            email,
            password,
        } => commands::auth::signup(&ctx, name, email, password).await,
        Commands::Login { email, password } => commands::auth::login(&ctx, email, password).await,
        Commands::Logout => commands::auth::logout(&ctx),
        Commands::Whoami => commands::auth::whoami(&ctx).await,
        Commands::Profile { command } => commands::profile::handle_profile(&ctx, command).await,
        Commands::Dashboard { watch, interval } => {
            commands::dashboard::run_dashboard(&ctx, watch, interval).await
        }
        Commands::Universities { command } => {
            commands::universities::handle_universities(&ctx, command).await
        }
        Commands::Todos { command } => commands::todos::handle_todos(&ctx, command).await,
        Commands::Chat { message, history } => {
            commands::chat::run_chat(&ctx, message, history).await
        }
        Commands::Applications { university } => {
            commands::applications::run_applications(&ctx, university).await
        }
    }
}
