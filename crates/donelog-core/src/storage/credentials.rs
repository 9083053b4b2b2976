//! Credential lookup
//!
//! Tokens come from the environment only and are never written to disk.
//! Empty values count as unset.

use std::env;

pub const LINEAR_API_KEY_ENV: &str = "LINEAR_API_KEY";
pub const GITHUB_TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Value of `variable` if set and non-empty.
pub fn read_token(variable: &str) -> Option<String> {
    env::var(variable).ok().filter(|value| !value.trim().is_empty())
}

pub fn get_linear_api_key() -> Option<String> {
    read_token(LINEAR_API_KEY_ENV)
}

pub fn get_github_token() -> Option<String> {
    read_token(GITHUB_TOKEN_ENV)
}

pub fn has_linear_api_key() -> bool {
    get_linear_api_key().is_some()
}

pub fn has_github_token() -> bool {
    get_github_token().is_some()
}

/// A CLI-supplied token wins over the environment; blank flags are ignored.
pub fn resolve_token(flag: Option<String>, variable: &str) -> Option<String> {
    flag.filter(|value| !value.trim().is_empty())
        .or_else(|| read_token(variable))
}
