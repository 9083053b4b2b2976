use crate::api::graphql::{GraphqlRequest, GraphqlResponse};
use crate::error::ApiError;
use crate::utils::error_helpers::{convert_request_error, convert_schema_error};
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder, Response};
use serde_json::Value;
use std::fmt;
use std::time::Duration;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
const USER_AGENT: &str = concat!("donelog/", env!("CARGO_PKG_VERSION"));

/// How a credential is written into the `Authorization` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthScheme {
    /// The token is sent as-is.
    Raw,
    /// The token is prefixed with `Bearer `.
    Bearer,
}

impl AuthScheme {
    pub fn header_value(&self, token: &str) -> String {
        match self {
            AuthScheme::Raw => token.to_string(),
            AuthScheme::Bearer => format!("Bearer {}", token),
        }
    }
}

/// Secret token plus the header format its API expects.
#[derive(Clone)]
pub struct Credential {
    token: String,
    scheme: AuthScheme,
}

impl Credential {
    pub fn new(token: impl Into<String>, scheme: AuthScheme) -> Self {
        Self {
            token: token.into(),
            scheme,
        }
    }

    pub fn header_value(&self) -> String {
        self.scheme.header_value(&self.token)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("token", &"<redacted>")
            .field("scheme", &self.scheme)
            .finish()
    }
}

/// Sends one GraphQL request and parses the envelope.
///
/// Implementations perform exactly one outbound call per `send`. Protocol
/// errors inside a parsed envelope are returned as part of the envelope,
/// not as an `Err`; the caller decides how to treat them.
#[async_trait]
pub trait Transport: Send + Sync {
    fn endpoint(&self) -> &str;

    async fn send(&self, request: &GraphqlRequest<'_>) -> Result<GraphqlResponse<Value>, ApiError>;
}

#[derive(Debug, Clone)]
pub struct GraphqlClient {
    client: Client,
    pub endpoint: String,
    credential: Credential,
    timeout: Duration,
}

impl GraphqlClient {
    // Create client with the fixed request timeout
    pub fn new(endpoint: impl Into<String>, credential: Credential) -> Result<Self, ApiError> {
        Self::with_timeout(endpoint, credential, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_timeout(
        endpoint: impl Into<String>,
        credential: Credential,
        timeout: Duration,
    ) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| convert_request_error(e, "client_init", timeout.as_secs()))?;

        Ok(GraphqlClient {
            client,
            endpoint: endpoint.into(),
            credential,
            timeout,
        })
    }

    pub fn build_request(&self, request: &GraphqlRequest<'_>) -> RequestBuilder {
        self.client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, self.credential.header_value())
            .json(request)
    }

    pub async fn handle_response<T>(&self, response: Response) -> Result<GraphqlResponse<T>, ApiError>
    where
        T: serde::de::DeserializeOwned,
    {
        let status = response.status();

        // Status bodies are kept verbatim for the error
        let body = response
            .text()
            .await
            .map_err(|e| convert_request_error(e, &self.endpoint, self.timeout.as_secs()))?;

        if !status.is_success() {
            return match status.as_u16() {
                401 | 403 => Err(ApiError::Unauthorized {
                    status: status.as_u16(),
                    endpoint: self.endpoint.clone(),
                    body,
                }),
                _ => Err(ApiError::Http {
                    status: status.as_u16(),
                    endpoint: self.endpoint.clone(),
                    body,
                }),
            };
        }

        serde_json::from_str(&body).map_err(|e| convert_schema_error(e, &self.endpoint))
    }
}

#[async_trait]
impl Transport for GraphqlClient {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn send(&self, request: &GraphqlRequest<'_>) -> Result<GraphqlResponse<Value>, ApiError> {
        log::debug!("POST {}", self.endpoint);

        let response = self
            .build_request(request)
            .send()
            .await
            .map_err(|e| convert_request_error(e, &self.endpoint, self.timeout.as_secs()))?;

        self.handle_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::graphql::Variables;

    #[test]
    fn test_client_creation() {
        let client = GraphqlClient::new(
            "http://example.test/graphql",
            Credential::new("key", AuthScheme::Raw),
        );
        assert!(client.is_ok());
    }

    #[test]
    fn test_auth_scheme_header_values() {
        assert_eq!(AuthScheme::Raw.header_value("lin_api_123"), "lin_api_123");
        assert_eq!(AuthScheme::Bearer.header_value("ghp_456"), "Bearer ghp_456");
    }

    #[test]
    fn test_credential_debug_is_redacted() {
        let credential = Credential::new("super-secret", AuthScheme::Bearer);
        let rendered = format!("{:?}", credential);
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("Bearer"));
    }

    #[test]
    fn test_build_request_with_raw_key() {
        let client = GraphqlClient::new(
            "http://example.test/graphql",
            Credential::new("lin_api_123", AuthScheme::Raw),
        )
        .expect("client creation failed");

        let request = GraphqlRequest::new("query { viewer { id } }", Variables::new());
        let built_request = client
            .build_request(&request)
            .build()
            .expect("Failed to build request");

        assert_eq!(built_request.url().as_str(), "http://example.test/graphql");
        assert_eq!(built_request.method(), reqwest::Method::POST);
        assert_eq!(
            built_request
                .headers()
                .get(AUTHORIZATION)
                .unwrap()
                .to_str()
                .unwrap(),
            "lin_api_123"
        );
        assert_eq!(
            built_request
                .headers()
                .get(CONTENT_TYPE)
                .unwrap()
                .to_str()
                .unwrap(),
            "application/json"
        );
    }

    #[test]
    fn test_build_request_with_bearer_token() {
        let client = GraphqlClient::new(
            "http://example.test/graphql",
            Credential::new("ghp_456", AuthScheme::Bearer),
        )
        .expect("client creation failed");

        let request = GraphqlRequest::new("query { viewer { login } }", Variables::new());
        let built_request = client
            .build_request(&request)
            .build()
            .expect("Failed to build request");

        assert_eq!(
            built_request
                .headers()
                .get(AUTHORIZATION)
                .unwrap()
                .to_str()
                .unwrap(),
            "Bearer ghp_456"
        );
    }
}
