//! HTTP utilities for stats.nba.com communication

use crate::{Result, BASE_URL_ENV_VAR, USER_AGENT_ENV_VAR};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};

use crate::nba::http::NBA_STATS_BASE_URL;

/// stats.nba.com drops requests that do not look like they come from a browser.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_13_6) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/68.0.3440.106 Safari/537.36";

/// Headers sent with every request.
pub fn build_headers(user_agent: &str) -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    h.insert(USER_AGENT, HeaderValue::from_str(user_agent)?);
    Ok(h)
}

/// Pick the User-Agent: explicit value, then `NBA_STATS_USER_AGENT`, then the
/// built-in browser string.
pub fn resolve_user_agent(explicit: Option<String>) -> String {
    explicit
        .or_else(|| std::env::var(USER_AGENT_ENV_VAR).ok())
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string())
}

/// Pick the API base: explicit value, then `NBA_STATS_BASE_URL`, then stats.nba.com.
pub fn resolve_base_url(explicit: Option<String>) -> String {
    explicit
        .or_else(|| std::env::var(BASE_URL_ENV_VAR).ok())
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| NBA_STATS_BASE_URL.to_string())
}
