use clap::Parser;
use donelog_core::error::AppError;
use donelog_core::storage::config::{CONFIG_FILE_NAME, Config};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::dispatcher::Dispatcher;
use cli::main_types::{Cli, Commands, ConfigCommands};

// RUST_LOG wins; otherwise our crates log at info (debug with --verbose)
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("warn,donelog={level},donelog_core={level}"))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn report_error(error: &AppError) {
    eprintln!("{} {}", error.severity().emoji(), error.display_friendly());
    if let Some(hint) = error.troubleshooting_hint() {
        eprintln!("💡 {}", hint);
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_path = cli
        .config_dir
        .as_ref()
        .map(|dir| PathBuf::from(dir).join(CONFIG_FILE_NAME));

    // `config init` must be able to replace a file that no longer parses
    let writes_fresh_config = matches!(
        cli.command,
        Commands::Config {
            command: ConfigCommands::Init { .. }
        }
    );
    let loaded = if writes_fresh_config {
        Ok(Config::default())
    } else {
        Config::load(config_path.clone())
    };

    let config = match loaded {
        Ok(config) => config,
        Err(err) => {
            report_error(&AppError::from(err));
            std::process::exit(1);
        }
    };

    if let Some(path) = &config_path {
        log::debug!("Using config file: {}", path.display());
    }

    let dispatcher = Dispatcher::new(config, config_path, cli.output_dir);

    if let Err(e) = dispatcher.dispatch(cli.command).await {
        report_error(&e);
        std::process::exit(1);
    }

    Ok(())
}
