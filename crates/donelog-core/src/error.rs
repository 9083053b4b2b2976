use crate::api::graphql::GraphqlError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("CliError: {0}")]
    Cli(#[from] CliError),
    #[error("ApiError: {0}")]
    Api(#[from] ApiError),
    #[error("ConfigError: {0}")]
    Config(#[from] ConfigError),
    #[error("StorageError: {0}")]
    Storage(#[from] StorageError),
    #[error("ExportError: {0}")]
    Export(#[from] ExportError),
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Credential required: {variable} is not set")]
    CredentialRequired { variable: String, hint: String },
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request to {endpoint} failed: {message}")]
    Transport { endpoint: String, message: String },
    #[error("Request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64, endpoint: String },
    #[error("API request failed with status {status}: {body}")]
    Http {
        status: u16,
        endpoint: String,
        body: String,
    },
    #[error("Authentication failed with status {status}")]
    Unauthorized {
        status: u16,
        endpoint: String,
        body: String,
    },
    #[error("Unexpected response from {endpoint}: {message}")]
    Schema { endpoint: String, message: String },
    #[error("GraphQL errors: {}", join_errors(.errors))]
    Remote {
        endpoint: String,
        errors: Vec<GraphqlError>,
    },
}

fn join_errors(errors: &[GraphqlError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ApiError {
    /// HTTP status carried by status-level failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } | ApiError::Unauthorized { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("File I/O error at {path}: {source}")]
    FileIo {
        path: String,
        source: std::io::Error,
    },
    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },
    #[error("Configuration directory not found")]
    ConfigDirNotFound,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration value for '{field}' ({value}): {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to write {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },
    #[error("Failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Failed to write CSV {path}: {message}")]
    Csv { path: String, message: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ErrorSeverity {
    Critical,
    High,
    Medium,
    Low,
}

impl ErrorSeverity {
    pub fn emoji(&self) -> &'static str {
        match self {
            ErrorSeverity::Critical => "🚨",
            ErrorSeverity::High => "❌",
            ErrorSeverity::Medium => "⚠️",
            ErrorSeverity::Low => "ℹ️",
        }
    }
}

impl AppError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::Cli(CliError::CredentialRequired { .. }) => ErrorSeverity::High,
            AppError::Cli(_) => ErrorSeverity::Medium,
            AppError::Api(api_error) => match api_error {
                ApiError::Unauthorized { .. } => ErrorSeverity::High,
                ApiError::Timeout { .. } | ApiError::Transport { .. } => ErrorSeverity::Medium,
                ApiError::Http { status, .. } if *status >= 500 => ErrorSeverity::High,
                ApiError::Schema { .. } => ErrorSeverity::Critical,
                _ => ErrorSeverity::Medium,
            },
            AppError::Config(_) => ErrorSeverity::High,
            AppError::Storage(_) => ErrorSeverity::Medium,
            AppError::Export(_) => ErrorSeverity::Low,
        }
    }

    pub fn display_friendly(&self) -> String {
        match self {
            AppError::Cli(CliError::CredentialRequired { variable, .. }) => {
                format!("{} environment variable not set!", variable)
            }
            AppError::Api(ApiError::Unauthorized { status, .. }) => {
                format!("The API rejected the credential (status {})", status)
            }
            AppError::Api(ApiError::Timeout { timeout_secs, .. }) => {
                format!("The API did not answer within {}s", timeout_secs)
            }
            _ => format!("{}", self),
        }
    }

    pub fn troubleshooting_hint(&self) -> Option<String> {
        match self {
            AppError::Cli(CliError::CredentialRequired { hint, .. }) => Some(hint.clone()),
            AppError::Api(ApiError::Unauthorized { .. }) => {
                Some("Check that your API key or token is valid and not expired".to_string())
            }
            AppError::Api(ApiError::Timeout { .. } | ApiError::Transport { .. }) => {
                Some("Check your internet connection and try again".to_string())
            }
            AppError::Storage(StorageError::ConfigParseError { .. }) => Some(
                "'donelog config init --force' replaces it with a fresh configuration file"
                    .to_string(),
            ),
            _ => None,
        }
    }
}
