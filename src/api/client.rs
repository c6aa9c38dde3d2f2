use log::{debug, info};
use reqwest::StatusCode;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;
use thiserror::Error;

use super::constants::{base_url, headers, methods};
use super::query::{QueryRequest, RequestError};
use crate::auth::{Credentials, OAuth1Signer};
use crate::config::Settings;

#[derive(Debug, Error)]
pub enum QueryError {
    #[error(transparent)]
    Request(#[from] RequestError),

    #[error("error making request: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("error reading response: {0}")]
    Body(#[source] reqwest::Error),

    #[error("received status code {status}: {body}")]
    Status { status: u16, body: String },

    #[error("error parsing JSON response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// SuiteQL client bound to one account's credentials
pub struct SuiteQlClient {
    credentials: Credentials,
    base_url: String,
    http_client: reqwest::Client,
}

impl SuiteQlClient {
    pub fn new(credentials: Credentials, settings: &Settings) -> Result<Self, QueryError> {
        let http_client = reqwest::Client::builder()
            .timeout(settings.timeout())
            .user_agent(settings.user_agent.clone())
            .build()
            .map_err(QueryError::Transport)?;

        let base_url = base_url(&credentials.account_id, &settings.api_host);

        Ok(Self {
            credentials,
            base_url,
            http_client,
        })
    }

    /// Create a client with a custom HTTP client configuration
    pub fn with_custom_client(
        credentials: Credentials,
        base_url: impl Into<String>,
        http_client: reqwest::Client,
    ) -> Self {
        Self {
            credentials,
            base_url: base_url.into(),
            http_client,
        }
    }

    /// Point the client at a different host, keeping credentials and HTTP settings
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sign and send one query, returning the parsed response document.
    ///
    /// Anything other than `200 OK` is an error carrying the raw body.
    pub async fn execute(&self, request: &QueryRequest) -> Result<Value, QueryError> {
        let url = request.url(&self.base_url)?;
        let body = request.body()?;
        let authorization =
            OAuth1Signer::new(&self.credentials).authorization_header(methods::POST, &url);

        info!("Executing SuiteQL query against: {}", url);
        debug!("Query: {}", request.query);

        let response = self
            .http_client
            .post(url)
            .header(CONTENT_TYPE, headers::CONTENT_TYPE_JSON)
            .header(headers::PREFER, headers::PREFER_TRANSIENT)
            .header(AUTHORIZATION, authorization)
            .body(body)
            .send()
            .await
            .map_err(QueryError::Transport)?;

        let status = response.status();
        debug!("Query response status: {}", status);

        let text = response.text().await.map_err(QueryError::Body)?;
        debug!("Read {} bytes of response body", text.len());

        if status != StatusCode::OK {
            return Err(QueryError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        let document: Value = serde_json::from_str(&text)?;
        Ok(document)
    }
}
