//! A single SuiteQL query with optional pagination

use log::debug;
use reqwest::Url;
use serde::Serialize;
use thiserror::Error;

use crate::api::constants::suiteql_endpoint;

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Empty query provided")]
    EmptyQuery,

    #[error("invalid request URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("error marshaling JSON: {0}")]
    Body(#[from] serde_json::Error),
}

#[derive(Serialize)]
struct QueryBody<'a> {
    q: &'a str,
}

/// Query text plus pagination; built once per invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRequest {
    pub query: String,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl QueryRequest {
    /// Create a request from raw CLI values.
    ///
    /// The query is trimmed and must not be empty. Zero or negative
    /// `limit`/`offset` values mean "server default" and are dropped.
    pub fn new(
        query: impl AsRef<str>,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Self, RequestError> {
        let query = query.as_ref().trim();
        if query.is_empty() {
            return Err(RequestError::EmptyQuery);
        }

        Ok(Self {
            query: query.to_string(),
            limit: positive(limit),
            offset: positive(offset),
        })
    }

    /// Full endpoint URL with pagination parameters, in `limit`, `offset` order
    pub fn url(&self, base_url: &str) -> Result<Url, RequestError> {
        let endpoint = suiteql_endpoint(base_url);
        let mut url = Url::parse(&endpoint).map_err(|e| RequestError::InvalidUrl {
            url: endpoint.clone(),
            reason: e.to_string(),
        })?;

        if self.limit.is_some() || self.offset.is_some() {
            let mut pairs = url.query_pairs_mut();
            if let Some(limit) = self.limit {
                pairs.append_pair("limit", &limit.to_string());
            }
            if let Some(offset) = self.offset {
                pairs.append_pair("offset", &offset.to_string());
            }
        }

        debug!("SuiteQL request URL: {}", url);
        Ok(url)
    }

    /// JSON request body: `{"q": "<query>"}`
    pub fn body(&self) -> Result<String, RequestError> {
        Ok(serde_json::to_string(&QueryBody { q: &self.query })?)
    }
}

fn positive(value: Option<i64>) -> Option<u32> {
    value
        .filter(|v| *v > 0)
        .map(|v| u32::try_from(v).unwrap_or(u32::MAX))
}
