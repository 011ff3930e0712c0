//! Archive endpoint configuration.

/// Public NASA Exoplanet Archive table API
pub const DEFAULT_ARCHIVE_URL: &str =
    "https://exoplanetarchive.ipac.caltech.edu/cgi-bin/nstedAPI/nph-nstedAPI";

/// Environment variable overriding the archive endpoint
pub const ARCHIVE_URL_ENV: &str = "EXOPLANET_ARCHIVE_URL";

/// Where archive queries are sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveConfig {
    base_url: String,
}

impl ArchiveConfig {
    /// Endpoint from `EXOPLANET_ARCHIVE_URL`, falling back to the public archive.
    pub fn from_env() -> Self {
        match std::env::var(ARCHIVE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::default().with_base_url(&url),
            _ => Self::default(),
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim().trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_ARCHIVE_URL.to_string(),
        }
    }
}
