//! Client configuration.
//!
//! [`ClientConfig`] carries the connection settings for a hub: base URL,
//! credentials, retry count and default sampling parameters. It is immutable
//! once a client has been constructed from it.

use std::sync::Arc;

use secrecy::SecretString;

use crate::auth::BearerTokenProvider;
use crate::error::HubError;

/// Default sampling temperature applied when the caller leaves it unset.
pub const DEFAULT_MODEL_TEMPERATURE: f32 = 1.0;

/// Default max-tokens limit applied when the caller leaves it unset.
pub const DEFAULT_MODEL_MAX_TOKENS: u32 = 16_384;

/// Provider preferred when a short model name is served by several providers.
pub const DEFAULT_PROVIDER: &str = "fireworks";

/// Default number of completion attempts (a single call, no retry).
pub const DEFAULT_NUM_INFERENCE_RETRIES: u32 = 1;

/// Connection settings for a hub.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the hub, e.g. `https://api.example.org/v1`
    pub base_url: String,
    /// Plain API key; used as the bearer token when no `auth` provider is set
    pub api_key: Option<SecretString>,
    /// Credential provider; queried once at client construction
    pub auth: Option<Arc<dyn BearerTokenProvider>>,
    /// Provider tag forwarded for deployments that route through a custom
    /// provider; also used as the preferred provider during model resolution
    pub custom_provider: Option<String>,
    /// Total number of completion attempts before the last error is surfaced
    pub num_inference_retries: u32,
    /// Sampling temperature applied when the request leaves it unset
    pub default_temperature: f32,
    /// Max-tokens limit applied when the request leaves it unset
    pub default_max_tokens: u32,
}

impl ClientConfig {
    /// Create a configuration for the given hub base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
            auth: None,
            custom_provider: None,
            num_inference_retries: DEFAULT_NUM_INFERENCE_RETRIES,
            default_temperature: DEFAULT_MODEL_TEMPERATURE,
            default_max_tokens: DEFAULT_MODEL_MAX_TOKENS,
        }
    }

    /// Read the configuration from the environment.
    ///
    /// `INFERHUB_BASE_URL` is required; `INFERHUB_API_KEY` and
    /// `INFERHUB_PROVIDER` are optional.
    pub fn from_env() -> Result<Self, HubError> {
        let base_url = std::env::var("INFERHUB_BASE_URL").map_err(|_| {
            HubError::ConfigurationError("Missing hub config: INFERHUB_BASE_URL is not set".into())
        })?;
        let mut config = Self::new(base_url);
        if let Ok(key) = std::env::var("INFERHUB_API_KEY") {
            config.api_key = Some(key.into());
        }
        if let Ok(provider) = std::env::var("INFERHUB_PROVIDER") {
            config.custom_provider = Some(provider);
        }
        Ok(config)
    }

    /// Set the API key.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::from(api_key.into()));
        self
    }

    /// Set the credential provider.
    pub fn with_auth(mut self, auth: Arc<dyn BearerTokenProvider>) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Set the custom provider tag.
    pub fn with_custom_provider(mut self, provider: impl Into<String>) -> Self {
        self.custom_provider = Some(provider.into());
        self
    }

    /// Set the total number of completion attempts.
    pub const fn with_num_inference_retries(mut self, retries: u32) -> Self {
        self.num_inference_retries = retries;
        self
    }

    /// Set the default sampling temperature.
    pub const fn with_default_temperature(mut self, temperature: f32) -> Self {
        self.default_temperature = temperature;
        self
    }

    /// Set the default max-tokens limit.
    pub const fn with_default_max_tokens(mut self, max_tokens: u32) -> Self {
        self.default_max_tokens = max_tokens;
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), HubError> {
        if self.base_url.is_empty() {
            return Err(HubError::ConfigurationError(
                "Base URL cannot be empty".to_string(),
            ));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(HubError::ConfigurationError(
                "Base URL must start with http:// or https://".to_string(),
            ));
        }
        if self.num_inference_retries == 0 {
            return Err(HubError::ConfigurationError(
                "num_inference_retries must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
