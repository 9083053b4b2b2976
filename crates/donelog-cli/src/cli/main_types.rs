use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "donelog")]
#[command(about = "Extract your completed Linear tickets and merged GitHub pull requests")]
#[command(version)]
#[command(after_help = "Examples:
  donelog linear                                  # Completed tickets for the configured range
  donelog linear --start-date 2025-07-01T00:00:00.000Z --no-export
  donelog github                                  # Merged pull requests for the configured query
  donelog github --query \"is:pr author:@me is:merged merged:2025-01-01..2025-06-30\"
  donelog --output-dir reports linear             # Write JSON/CSV into ./reports
  donelog config show                             # Show effective configuration
  donelog config init                             # Write a default config file

Environment Variables:
  LINEAR_API_KEY   Linear personal API key
  GITHUB_TOKEN     GitHub token with repo read access
  RUST_LOG         Log filter (default: info, debug with --verbose)")]
pub struct Cli {
    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Custom configuration directory path
    #[arg(long, global = true)]
    pub config_dir: Option<String>,

    /// Directory for exported JSON and CSV files
    #[arg(long, global = true)]
    pub output_dir: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract completed tickets assigned to you in Linear
    Linear(LinearArgs),
    /// Extract your merged pull requests from GitHub
    Github(GithubArgs),
    /// Configuration management (show, init)
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the effective configuration and credential status
    Show,
    /// Write the default configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Args, Debug)]
#[command(after_help = "Examples:
  donelog linear
  donelog linear --start-date 2025-01-01T00:00:00.000Z --end-date 2025-03-31T23:59:59.999Z")]
pub struct LinearArgs {
    /// Linear API key
    #[arg(long, env = "LINEAR_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Earliest completion timestamp (RFC 3339)
    #[arg(long)]
    pub start_date: Option<String>,

    /// Latest completion timestamp (RFC 3339)
    #[arg(long)]
    pub end_date: Option<String>,

    /// GraphQL endpoint
    #[arg(long)]
    pub api_url: Option<String>,

    /// Print the table and summary without writing files
    #[arg(long)]
    pub no_export: bool,
}

#[derive(Args, Debug)]
#[command(after_help = "Examples:
  donelog github
  donelog github --query \"is:pr author:@me is:merged org:acme\"")]
pub struct GithubArgs {
    /// GitHub token
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// GitHub search string
    #[arg(long)]
    pub query: Option<String>,

    /// GraphQL endpoint
    #[arg(long)]
    pub api_url: Option<String>,

    /// Print the table and summary without writing files
    #[arg(long)]
    pub no_export: bool,
}
