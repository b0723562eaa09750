use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::error::{FetchError, Result};
use crate::navigator::RedirectMode;

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Configuration for a fetch client
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FetchConfig {
    /// Base URI of the REST backend; should end in `/`
    pub base_uri: String,
    /// Request timeout in seconds
    pub timeout_seconds: Option<u64>,
    /// How the re-authentication redirect is performed
    #[serde(default)]
    pub redirect_mode: RedirectMode,
    /// Extra headers applied to every request
    pub headers: Option<HashMap<String, String>>,
}

impl FetchConfig {
    /// Create a configuration with defaults for everything but the base URI
    pub fn new<S: Into<String>>(base_uri: S) -> Self {
        Self {
            base_uri: base_uri.into(),
            timeout_seconds: None,
            redirect_mode: RedirectMode::default(),
            headers: None,
        }
    }

    /// Create a config builder
    pub fn builder() -> FetchConfigBuilder {
        FetchConfigBuilder::new()
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content =
            std::fs::read_to_string(&path).map_err(|_| FetchError::ConfigNotFound {
                path: path.as_ref().to_path_buf(),
            })?;

        let config: FetchConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.base_uri.is_empty() {
            return Err(FetchError::invalid_config("Base URI must not be empty"));
        }

        let url = url::Url::parse(&self.base_uri)?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(FetchError::invalid_config(format!(
                "Base URI must be http or https, got '{}'",
                url.scheme()
            )));
        }

        // Endpoints are appended verbatim, so a missing trailing slash
        // silently merges path segments.
        if !self.base_uri.ends_with('/') {
            return Err(FetchError::invalid_config(
                "Base URI must end with a trailing slash",
            ));
        }

        Ok(())
    }

    /// Effective request timeout in seconds
    pub fn timeout(&self) -> u64 {
        self.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }
}

/// Builder for FetchConfig to improve API ergonomics
pub struct FetchConfigBuilder {
    base_uri: Option<String>,
    timeout_seconds: Option<u64>,
    redirect_mode: RedirectMode,
    headers: Option<HashMap<String, String>>,
}

impl FetchConfigBuilder {
    /// Create a new config builder
    pub fn new() -> Self {
        Self {
            base_uri: None,
            timeout_seconds: None,
            redirect_mode: RedirectMode::default(),
            headers: None,
        }
    }

    /// Set the base URI
    #[must_use]
    pub fn base_uri<S: Into<String>>(mut self, base_uri: S) -> Self {
        self.base_uri = Some(base_uri.into());
        self
    }

    /// Set timeout in seconds
    pub fn timeout(mut self, seconds: u64) -> Self {
        self.timeout_seconds = Some(seconds);
        self
    }

    /// Set the re-authentication redirect mode
    pub fn redirect_mode(mut self, mode: RedirectMode) -> Self {
        self.redirect_mode = mode;
        self
    }

    /// Add a header applied to every request
    pub fn header<S: Into<String>>(mut self, key: S, value: S) -> Self {
        self.headers
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid (e.g., no base URI
    /// or one that is not an http/https URL ending in `/`)
    pub fn build(self) -> Result<FetchConfig> {
        let config = FetchConfig {
            base_uri: self
                .base_uri
                .ok_or_else(|| FetchError::invalid_config("Base URI is required"))?,
            timeout_seconds: self.timeout_seconds,
            redirect_mode: self.redirect_mode,
            headers: self.headers,
        };

        config.validate()?;
        Ok(config)
    }
}

impl Default for FetchConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
