//! The two integrations: an issue tracker and a source-control host.

pub mod github;
pub mod linear;

pub use github::{GithubSource, PullRequestRecord};
pub use linear::{IssueRecord, LinearSource, Priority};
