//! GraphQL request and response envelopes
//!
//! The wire format is a POST body `{query, variables}` answered by
//! `{data, errors?}`. A response is only a success when `errors` is absent or
//! empty and `data` is present.

use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Variable mapping sent alongside a query.
pub type Variables = Map<String, Value>;

/// Query text plus variables for a single request. Built per page and
/// dropped once the response is in.
#[derive(Debug, Clone, Serialize)]
pub struct GraphqlRequest<'a> {
    query: &'a str,
    variables: Variables,
}

impl<'a> GraphqlRequest<'a> {
    pub fn new(query: &'a str, variables: Variables) -> Self {
        Self { query, variables }
    }

    pub fn query(&self) -> &str {
        self.query
    }

    pub fn variables(&self) -> &Variables {
        &self.variables
    }

    pub fn variable(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }
}

/// One segment of a GraphQL error path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    Key(String),
    Index(i64),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(key) => write!(f, "{}", key),
            PathSegment::Index(index) => write!(f, "{}", index),
        }
    }
}

/// Application-level error reported inside a response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphqlError {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<PathSegment>>,
}

impl fmt::Display for GraphqlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.path.as_deref() {
            Some(path) if !path.is_empty() => {
                let joined = path
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(".");
                write!(f, "{} (at {})", self.message, joined)
            }
            _ => write!(f, "{}", self.message),
        }
    }
}

/// Parsed response body.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphqlResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphqlError>>,
}

impl<T> GraphqlResponse<T> {
    pub fn is_ok(&self) -> bool {
        self.errors.as_ref().is_none_or(Vec::is_empty)
    }

    /// Resolve the envelope into its payload. Any protocol error fails the
    /// response even when `data` is also present.
    pub fn into_data(self, endpoint: &str) -> Result<T, ApiError> {
        if let Some(errors) = self.errors.filter(|errors| !errors.is_empty()) {
            return Err(ApiError::Remote {
                endpoint: endpoint.to_string(),
                errors,
            });
        }

        self.data.ok_or_else(|| ApiError::Schema {
            endpoint: endpoint.to_string(),
            message: "response contained no data".to_string(),
        })
    }
}
