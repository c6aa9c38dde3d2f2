//! SuiteQL query construction
//!
//! Turns query text and pagination into the endpoint URL and JSON body

pub mod request;

pub use request::{QueryRequest, RequestError};
