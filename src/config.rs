// src/config.rs
use crate::constants::{
    DEFAULT_API_BASE_URL, DEFAULT_NOTION_VERSION, ENV_API_BASE_URL, ENV_API_KEY,
    ENV_NOTION_VERSION,
};
use crate::error::{ClientError, Result};
use crate::types::{ApiKey, ValidationError};
use url::Url;

/// Everything a client needs to address the API: who it is, where the API
/// lives and which version of it the requests are written against.
///
/// Read-only once built; one config can back any number of clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_key: ApiKey,
    pub base_url: Url,
    pub notion_version: String,
}

impl ClientConfig {
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            base_url: default_base_url(),
            notion_version: DEFAULT_NOTION_VERSION.to_string(),
        }
    }

    /// Points the client at another API root, e.g. a mock server.
    ///
    /// A missing trailing slash is added so relative paths join under the
    /// base instead of replacing its last segment.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self> {
        self.base_url = parse_base_url(base_url)?;
        Ok(self)
    }

    pub fn with_notion_version(mut self, version: impl Into<String>) -> Self {
        self.notion_version = version.into();
        self
    }

    /// Resolves configuration from the environment.
    ///
    /// `NOTION_API_KEY` is required; `NOTION_API_BASE_URL` and
    /// `NOTION_VERSION` override the defaults when set.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(ENV_API_KEY).map_err(|_| {
            ClientError::MissingConfiguration(format!("{} environment variable not set", ENV_API_KEY))
        })?;

        let mut config = Self::new(ApiKey::new(api_key)?);

        if let Ok(base_url) = std::env::var(ENV_API_BASE_URL) {
            config = config.with_base_url(&base_url)?;
        }
        if let Ok(version) = std::env::var(ENV_NOTION_VERSION) {
            config = config.with_notion_version(version);
        }

        log::debug!(
            "Resolved client config: base {}, version {}",
            config.base_url,
            config.notion_version
        );
        Ok(config)
    }
}

fn default_base_url() -> Url {
    Url::parse(DEFAULT_API_BASE_URL).unwrap_or_else(|_| unreachable!("default base URL is valid"))
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let normalized = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{}/", raw)
    };

    Url::parse(&normalized).map_err(|e| {
        ValidationError::InvalidUrl {
            url: raw.to_string(),
            reason: e.to_string(),
        }
        .into()
    })
}
