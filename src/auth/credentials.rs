use log::{debug, info};
use std::fmt;
use std::path::Path;
use thiserror::Error;

pub const ACCOUNT_ID_VAR: &str = "NETSUITE_ACCOUNT_ID";
pub const CONSUMER_KEY_VAR: &str = "NETSUITE_CONSUMER_KEY";
pub const CONSUMER_SECRET_VAR: &str = "NETSUITE_CONSUMER_SECRET";
pub const TOKEN_VAR: &str = "NETSUITE_TOKEN";
pub const TOKEN_SECRET_VAR: &str = "NETSUITE_TOKEN_SECRET";

/// Every variable the loader requires, in the order they are reported
pub const REQUIRED_VARS: [&str; 5] = [
    ACCOUNT_ID_VAR,
    CONSUMER_KEY_VAR,
    CONSUMER_SECRET_VAR,
    TOKEN_VAR,
    TOKEN_SECRET_VAR,
];

#[derive(Debug, Error)]
pub enum CredentialsError {
    #[error("missing required environment variables: {}", .0.join(", "))]
    Missing(Vec<&'static str>),

    #[error("environment file not found: {0}")]
    EnvFileNotFound(String),

    #[error("failed to load environment file '{path}': {source}")]
    EnvFile {
        path: String,
        #[source]
        source: dotenvy::Error,
    },
}

/// Token-based authentication credentials for one NetSuite account
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub account_id: String,
    pub consumer_key: String,
    pub consumer_secret: String,
    pub token: String,
    pub token_secret: String,
    pub realm: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("account_id", &self.account_id)
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &"<redacted>")
            .field("token", &self.token)
            .field("token_secret", &"<redacted>")
            .field("realm", &self.realm)
            .finish()
    }
}

impl Credentials {
    /// Load credentials from the process environment.
    ///
    /// A `.env` file in the working directory is loaded first when present;
    /// variables already set in the environment take precedence over it.
    pub fn from_env() -> Result<Credentials, CredentialsError> {
        info!("Importing credentials from environment variables");

        match dotenvy::dotenv() {
            Ok(path) => debug!("Loaded environment file: {}", path.display()),
            Err(e) if e.not_found() => debug!("No .env file found, using process environment"),
            Err(e) => {
                return Err(CredentialsError::EnvFile {
                    path: ".env".to_string(),
                    source: e,
                });
            }
        }

        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load an explicit environment file, then read credentials from the environment.
    pub fn from_env_file(path: &Path) -> Result<Credentials, CredentialsError> {
        info!("Importing credentials from env file: {}", path.display());

        if !path.exists() {
            return Err(CredentialsError::EnvFileNotFound(path.display().to_string()));
        }

        dotenvy::from_path(path).map_err(|source| CredentialsError::EnvFile {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build credentials from an arbitrary variable lookup.
    ///
    /// Unset and blank variables both count as missing. All missing names are
    /// collected so the caller can report them in one message.
    pub fn from_lookup<F>(lookup: F) -> Result<Credentials, CredentialsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut missing = Vec::new();
        let mut values = Vec::with_capacity(REQUIRED_VARS.len());

        for name in REQUIRED_VARS {
            match lookup(name).filter(|value| !value.trim().is_empty()) {
                Some(value) => values.push(value),
                None => {
                    missing.push(name);
                    values.push(String::new());
                }
            }
        }

        if !missing.is_empty() {
            return Err(CredentialsError::Missing(missing));
        }

        let [account_id, consumer_key, consumer_secret, token, token_secret]: [String; 5] =
            values
                .try_into()
                .map_err(|_| CredentialsError::Missing(REQUIRED_VARS.to_vec()))?;

        debug!("Loaded credentials for account {}", account_id);

        Ok(Credentials {
            realm: account_id.clone(),
            account_id,
            consumer_key,
            consumer_secret,
            token,
            token_secret,
        })
    }
}
