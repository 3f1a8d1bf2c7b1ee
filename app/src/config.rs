//! Lessons API configuration, read once at process start.

use std::env;

pub const DEFAULT_BACKEND_HOST: &str = "127.0.0.1";
pub const DEFAULT_BACKEND_PORT: u16 = 8000;
pub const API_PATH: &str = "/api/lets-learn/";

/// Where the lessons API lives and which host/port media URLs are anchored to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub backend_host: String,
    pub backend_port: u16,
    /// Always ends with `/`.
    pub api_root: String,
}

impl ApiConfig {
    /// Reads `BACKEND_HOST`, `BACKEND_PORT` and `API_ROOT` from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup. Blank values
    /// count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_owned())
                .filter(|raw| !raw.is_empty())
        };

        let backend_host = value("BACKEND_HOST").unwrap_or_else(|| DEFAULT_BACKEND_HOST.to_owned());
        let backend_port = match value("BACKEND_PORT") {
            Some(raw) => raw.parse().unwrap_or_else(|err| {
                tracing::warn!(
                    value = %raw,
                    error = %err,
                    "BACKEND_PORT is not a valid port; using {DEFAULT_BACKEND_PORT}"
                );
                DEFAULT_BACKEND_PORT
            }),
            None => DEFAULT_BACKEND_PORT,
        };
        let api_root = value("API_ROOT")
            .unwrap_or_else(|| format!("http://{backend_host}:{backend_port}{API_PATH}"));

        Self {
            backend_host,
            backend_port,
            api_root: with_trailing_slash(api_root),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

fn with_trailing_slash(mut root: String) -> String {
    if !root.ends_with('/') {
        root.push('/');
    }
    root
}
