//! gomarket CLI entry point

use clap::Parser;
use console::style;
use gomarket::cli::commands::{self, CartSession};
use gomarket::cli::{Cli, Commands};
use gomarket::config::{Config, ConfigManager};
use gomarket::error::GomarketResult;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> GomarketResult<()> {
    let cli = Cli::parse();

    let config_manager = match cli.config {
        Some(ref path) => ConfigManager::with_path(path.clone()),
        None => ConfigManager::new(),
    };
    let config = config_manager.load().await?;

    init_logging(cli.verbose, &config);

    let data_dir = ConfigManager::data_dir(cli.data_dir.as_deref(), &config);

    match cli.command {
        Commands::Config(args) => commands::config(args, &config_manager, &config).await,
        Commands::Completions(args) => {
            commands::completions(args);
            Ok(())
        }
        Commands::List(args) => {
            let session = open_session(&config, data_dir).await?;
            let result = commands::list(args, &session.provider).await;
            session.finish(result).await
        }
        Commands::Add(args) => {
            let session = open_session(&config, data_dir).await?;
            let result = commands::add(args, &session.provider, &session.audit).await;
            session.finish(result).await
        }
        Commands::Increment(args) => {
            let session = open_session(&config, data_dir).await?;
            let result = commands::increment(args, &session.provider, &session.audit).await;
            session.finish(result).await
        }
        Commands::Decrement(args) => {
            let session = open_session(&config, data_dir).await?;
            let result = commands::decrement(args, &session.provider, &session.audit).await;
            session.finish(result).await
        }
        Commands::Clear(args) => {
            let session = open_session(&config, data_dir).await?;
            let result = commands::clear(args, &session.provider, &session.audit).await;
            session.finish(result).await
        }
    }
}

async fn open_session(config: &Config, data_dir: PathBuf) -> GomarketResult<CartSession> {
    debug!("Using data directory {}", data_dir.display());
    CartSession::open(config, &data_dir).await
}

/// Initialize logging: RUST_LOG wins, else 0 = warn, 1 = info, 2+ = debug
fn init_logging(verbose: u8, config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("gomarket=warn"),
        1 => EnvFilter::new("gomarket=info"),
        _ => EnvFilter::new("gomarket=debug"),
    });

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    if config.general.json_logs() {
        builder.json().init();
    } else {
        builder.without_time().init();
    }
}
