//! NetSuite token-based authentication: credential loading and OAuth1 signing

pub mod credentials;
pub mod oauth1;

pub use credentials::{Credentials, CredentialsError};
pub use oauth1::OAuth1Signer;
