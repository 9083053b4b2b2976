use crate::cli::main_types::{ConfigCommands, GithubArgs, LinearArgs};
use donelog_core::api::client::GraphqlClient;
use donelog_core::core::services::ExtractService;
use donelog_core::core::source::WorkSource;
use donelog_core::core::sources::{GithubSource, LinearSource, github, linear};
use donelog_core::display::{
    OperationStatus, Summary, TableDisplay, banner, display_export_outcome, display_status,
};
use donelog_core::error::{AppError, CliError};
use donelog_core::export::{CsvRecord, ExportFormat, export_all};
use donelog_core::storage::config::Config;
use donelog_core::storage::credentials::{
    GITHUB_TOKEN_ENV, LINEAR_API_KEY_ENV, has_github_token, has_linear_api_key, resolve_token,
};
use donelog_core::utils::datetime::{describe_range, describe_search_range};
use donelog_core::utils::file::ensure_directory_exists;
use donelog_core::utils::validation::{validate_date_range, validate_search_query, validate_url};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Write every export format, reporting each outcome on its own line.
///
/// Failures here are reported but never fail the run.
fn export_records<R>(records: &[R], output_dir: &Path, file_stem: &str)
where
    R: Serialize + CsvRecord,
{
    println!("\n📁 Exporting to files...");

    if let Err(e) = ensure_directory_exists(output_dir) {
        display_status(
            &format!("Cannot use output directory: {}", e.display_friendly()),
            OperationStatus::Error,
        );
        return;
    }

    let outcomes = export_all(records, output_dir, file_stem, ExportFormat::ALL);
    for outcome in &outcomes {
        display_export_outcome(outcome);
    }

    if outcomes.iter().any(|outcome| outcome.is_success()) {
        println!("\n✨ Done! Check the output files for full details.");
    }
}

// The error itself is reported once, on stderr, by the caller
fn missing_credential(variable: &str, instructions: &[&str]) -> AppError {
    for line in instructions {
        println!("{}", line);
    }

    AppError::Cli(CliError::CredentialRequired {
        variable: variable.to_string(),
        hint: format!("export {}=\"your_token\"", variable),
    })
}

#[derive(Default)]
pub struct LinearHandler;

impl LinearHandler {
    pub fn new() -> Self {
        Self
    }

    pub async fn handle(
        &self,
        args: LinearArgs,
        config: &Config,
        output_dir: &Path,
    ) -> Result<(), AppError> {
        println!("{}\n", banner("Linear Completed Tickets Extractor"));

        let api_key = resolve_token(args.api_key, LINEAR_API_KEY_ENV).ok_or_else(|| {
            missing_credential(
                LINEAR_API_KEY_ENV,
                &[
                    "To get your API key:",
                    "  1. Go to Linear Settings → Account → Security & Access",
                    "  2. Create a new personal API key",
                ],
            )
        })?;

        let start_date = args
            .start_date
            .unwrap_or_else(|| config.linear.start_date.clone());
        let end_date = args
            .end_date
            .unwrap_or_else(|| config.linear.end_date.clone());
        let api_url = args
            .api_url
            .unwrap_or_else(|| config.linear.api_url.clone());
        validate_date_range(&start_date, &end_date)?;
        validate_url(&api_url)?;

        println!(
            "📅 Searching for completed tickets from {} to {}\n",
            start_date, end_date
        );

        let source = LinearSource::new(start_date, end_date);
        let client = GraphqlClient::new(api_url, LinearSource::credential(api_key))?;
        let service = ExtractService::new(client);

        display_status("Fetching completed issues", OperationStatus::InProgress);
        let extraction = service.extract(&source).await?;
        let records = LinearSource::project_all(&extraction.items);

        println!("\n{}", TableDisplay::new().render_issues(&records));
        let period = describe_range(source.start_date(), source.end_date());
        println!("\n{}", Summary::for_issues(&records, &period));

        if records.is_empty() {
            display_status(
                "No completed issues found in the specified date range",
                OperationStatus::Warning,
            );
            return Ok(());
        }

        if args.no_export {
            log::debug!("Export skipped (--no-export)");
            return Ok(());
        }

        export_records(&records, output_dir, linear::EXPORT_FILE_STEM);
        Ok(())
    }
}

#[derive(Default)]
pub struct GithubHandler;

impl GithubHandler {
    pub fn new() -> Self {
        Self
    }

    pub async fn handle(
        &self,
        args: GithubArgs,
        config: &Config,
        output_dir: &Path,
    ) -> Result<(), AppError> {
        println!("{}\n", banner("GitHub Merged Pull Requests Extractor"));

        let token = resolve_token(args.token, GITHUB_TOKEN_ENV).ok_or_else(|| {
            missing_credential(
                GITHUB_TOKEN_ENV,
                &[
                    "To get a token:",
                    "  1. Go to GitHub Settings → Developer settings → Personal access tokens",
                    "  2. Create a token with 'repo' read access",
                ],
            )
        })?;

        let query = args
            .query
            .unwrap_or_else(|| config.github.search_query.clone());
        let api_url = args
            .api_url
            .unwrap_or_else(|| config.github.api_url.clone());
        validate_search_query(&query)?;
        validate_url(&api_url)?;

        println!("🔍 Searching: {}\n", query);

        let source = GithubSource::new(query);
        let client = GraphqlClient::new(api_url, GithubSource::credential(token))?;
        let service = ExtractService::new(client);

        display_status("Fetching merged pull requests", OperationStatus::InProgress);
        let extraction = service.extract(&source).await?;
        let records = GithubSource::project_all(&extraction.items);

        println!("\n{}", TableDisplay::new().render_pull_requests(&records));
        let period = describe_search_range(source.search_query());
        println!("\n{}", Summary::for_pull_requests(&records, &period));

        if records.is_empty() {
            display_status(
                "No merged pull requests found for this search",
                OperationStatus::Warning,
            );
            return Ok(());
        }

        if args.no_export {
            log::debug!("Export skipped (--no-export)");
            return Ok(());
        }

        export_records(&records, output_dir, github::EXPORT_FILE_STEM);
        Ok(())
    }
}

#[derive(Default)]
pub struct ConfigHandler;

impl ConfigHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(
        &self,
        command: ConfigCommands,
        config: &Config,
        config_path: Option<PathBuf>,
        output_dir: &Path,
    ) -> Result<(), AppError> {
        let path = match config_path {
            Some(path) => path,
            None => Config::resolve_path(None)?,
        };

        match command {
            ConfigCommands::Show => {
                println!("Current Configuration:");
                println!("=====================");
                println!("Config file: {}", path.display());
                if !path.exists() {
                    println!("  (not found, using defaults)");
                }
                println!("Output directory: {}", output_dir.display());

                println!("\n[linear]");
                println!("  API URL:    {}", config.linear.api_url);
                println!("  Start date: {}", config.linear.start_date);
                println!("  End date:   {}", config.linear.end_date);
                println!("  API key:    {}", token_status(has_linear_api_key(), LINEAR_API_KEY_ENV));

                println!("\n[github]");
                println!("  API URL:    {}", config.github.api_url);
                println!("  Query:      {}", config.github.search_query);
                println!("  Token:      {}", token_status(has_github_token(), GITHUB_TOKEN_ENV));

                if let Err(e) = config.validate() {
                    display_status(&e.display_friendly(), OperationStatus::Warning);
                }
                Ok(())
            }
            ConfigCommands::Init { force } => {
                if path.exists() && !force {
                    return Err(AppError::Cli(CliError::InvalidArguments(format!(
                        "Config file already exists at {}; pass --force to overwrite",
                        path.display()
                    ))));
                }

                Config::default().save(Some(path.clone()))?;
                display_status(
                    &format!("Wrote default configuration to {}", path.display()),
                    OperationStatus::Success,
                );
                Ok(())
            }
        }
    }
}

fn token_status(is_set: bool, variable: &str) -> String {
    if is_set {
        format!("✅ Set ({})", variable)
    } else {
        "❌ Not set".to_string()
    }
}
