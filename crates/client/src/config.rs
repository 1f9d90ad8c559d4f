//! Environment-driven client configuration.

use std::path::PathBuf;

/// Backend used when `FOODIE_BACKEND_URL` is unset or empty.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

pub const BACKEND_URL_VAR: &str = "FOODIE_BACKEND_URL";
pub const PREFS_PATH_VAR: &str = "FOODIE_PREFS_PATH";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL without a trailing slash.
    pub backend_url: String,
    /// Preference file override; `None` means the per-user data directory.
    pub prefs_path: Option<PathBuf>,
}

impl ClientConfig {
    pub fn new(backend_url: impl Into<String>) -> Self {
        Self {
            backend_url: normalize_base_url(&backend_url.into()),
            prefs_path: None,
        }
    }

    pub fn with_prefs_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.prefs_path = Some(path.into());
        self
    }

    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let backend_url = non_empty(BACKEND_URL_VAR).unwrap_or_else(|| {
            tracing::debug!("{BACKEND_URL_VAR} not set; using {DEFAULT_BACKEND_URL}");
            DEFAULT_BACKEND_URL.to_string()
        });

        Self {
            backend_url: normalize_base_url(&backend_url),
            prefs_path: non_empty(PREFS_PATH_VAR).map(PathBuf::from),
        }
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
