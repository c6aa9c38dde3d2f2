//! API Constants for the NetSuite SuiteTalk REST query service

/// Default SuiteTalk REST host; the account id is prepended as a subdomain
pub const DEFAULT_API_HOST: &str = "suitetalk.api.netsuite.com";

/// SuiteQL endpoint path
pub const SUITEQL_PATH: &str = "/services/rest/query/v1/suiteql";

/// Standard headers for SuiteQL requests
pub mod headers {
    /// Content type for JSON requests
    pub const CONTENT_TYPE_JSON: &str = "application/json";

    /// Header asking the server to run the query without persisting it
    pub const PREFER: &str = "prefer";

    /// Value for the prefer header
    pub const PREFER_TRANSIENT: &str = "transient";
}

/// HTTP methods for operations
pub mod methods {
    pub const POST: &str = "POST";
}

/// Build the per-account base URL, e.g. `https://1234567-sb1.suitetalk.api.netsuite.com`.
///
/// Account ids are case-insensitive and sandbox ids use `_` where the
/// hostname needs `-` (`1234567_SB1` becomes `1234567-sb1`).
pub fn base_url(account_id: &str, api_host: &str) -> String {
    let subdomain = account_id.trim().to_ascii_lowercase().replace('_', "-");
    format!("https://{}.{}", subdomain, api_host.trim_matches('/'))
}

/// Build the SuiteQL endpoint URL under a base URL
pub fn suiteql_endpoint(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), SUITEQL_PATH)
}
