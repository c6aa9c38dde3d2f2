//! NetSuite SuiteQL REST API Module
//!
//! Builds the per-account endpoint URL, signs the request with OAuth1 and
//! executes a single transient SuiteQL query.

pub mod client;
pub mod constants;
pub mod query;

pub use client::{QueryError, SuiteQlClient};
pub use query::{QueryRequest, RequestError};
