use crate::cli::command_handlers::{ConfigHandler, GithubHandler, LinearHandler};
use crate::cli::main_types::Commands;
use donelog_core::error::AppError;
use donelog_core::storage::config::Config;
use std::path::PathBuf;

pub struct Dispatcher {
    config: Config,
    config_path: Option<PathBuf>,
    output_dir: Option<String>,
}

impl Dispatcher {
    pub fn new(config: Config, config_path: Option<PathBuf>, output_dir: Option<String>) -> Self {
        Self {
            config,
            config_path,
            output_dir,
        }
    }

    // Output directory: CLI flag > config file > current directory
    fn effective_output_dir(&self) -> PathBuf {
        match self.output_dir.as_deref().filter(|dir| !dir.is_empty()) {
            Some(dir) => PathBuf::from(dir),
            None => self.config.output_dir(),
        }
    }

    pub async fn dispatch(&self, command: Commands) -> Result<(), AppError> {
        match command {
            Commands::Linear(args) => {
                let handler = LinearHandler::new();
                handler
                    .handle(args, &self.config, &self.effective_output_dir())
                    .await
            }
            Commands::Github(args) => {
                let handler = GithubHandler::new();
                handler
                    .handle(args, &self.config, &self.effective_output_dir())
                    .await
            }
            Commands::Config { command } => {
                let handler = ConfigHandler::new();
                handler.handle(
                    command,
                    &self.config,
                    self.config_path.clone(),
                    &self.effective_output_dir(),
                )
            }
        }
    }
}
