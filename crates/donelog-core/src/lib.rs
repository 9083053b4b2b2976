//! # donelog-core
//!
//! Core library for pulling finished work out of paginated GraphQL APIs.
//!
//! A run pages through every result of a fixed query, keeps the items that
//! are actually finished, flattens them into records, and hands those
//! records to console and file presenters. Two integrations ship with the
//! crate: completed Linear tickets and merged GitHub pull requests.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use donelog_core::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> donelog_core::Result<()> {
//!     let config = Config::load(None)?;
//!     let api_key = get_linear_api_key().expect("LINEAR_API_KEY");
//!
//!     let client = GraphqlClient::new(&config.linear.api_url, LinearSource::credential(api_key))?;
//!     let source = LinearSource::new(&config.linear.start_date, &config.linear.end_date);
//!     let extraction = ExtractService::new(client).extract(&source).await?;
//!
//!     let records = LinearSource::project_all(&extraction.items);
//!     println!("{}", TableDisplay::new().render_issues(&records));
//!     Ok(())
//! }
//! ```
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │           API Layer                 │  GraphQL envelopes, transport, raw models
//! ├─────────────────────────────────────┤
//! │          Core Layer                 │  Sources, pagination, filter, services
//! ├─────────────────────────────────────┤
//! │   Display / Export Layers           │  Tables, summaries, JSON and CSV files
//! ├─────────────────────────────────────┤
//! │        Storage Layer                │  Configuration, credentials
//! ├─────────────────────────────────────┤
//! │         Utils Layer                 │  Validation, text, timestamps
//! └─────────────────────────────────────┘
//! ```

pub use error::AppError;

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use donelog_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::Result;
    pub use crate::error::AppError;

    pub use crate::api::client::{GraphqlClient, Transport};

    pub use crate::core::services::{ExtractService, Extraction};
    pub use crate::core::source::WorkSource;
    pub use crate::core::sources::{GithubSource, LinearSource};

    pub use crate::storage::config::Config;
    pub use crate::storage::credentials::{get_github_token, get_linear_api_key};

    pub use crate::display::{Summary, TableDisplay};
    pub use crate::export::{ExportFormat, export_all};
}

/// API layer - GraphQL envelopes, HTTP transport and raw response models.
pub mod api;

/// Core layer - the generic fetch/filter/project pipeline and its two sources.
pub mod core;

/// Display layer - console tables, summaries and status lines.
pub mod display;

/// Export layer - JSON and CSV files.
pub mod export;

/// Storage layer - TOML configuration and environment credentials.
pub mod storage;

/// Utilities layer - validation, text, timestamps and file helpers.
pub mod utils;

/// Error handling - hierarchical error system with troubleshooting hints.
pub mod error;

/// Convenient Result type alias using [`AppError`].
pub type Result<T> = std::result::Result<T, AppError>;
