//! Provider/model registry.
//!
//! The hub exposes its catalog at `GET /models`; entry ids are
//! `provider::model_path`. [`ProviderModels`] holds the parsed catalog and
//! resolves caller-supplied model identifiers to a concrete
//! `(provider, model)` pair. The client fetches the catalog lazily, at most
//! once per instance.

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use tracing::debug;

use crate::config::DEFAULT_PROVIDER;
use crate::error::HubError;

/// One entry of the hub model catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderModel {
    /// Provider serving the model
    pub provider: String,
    /// Full model path within the provider namespace
    pub path: String,
}

impl ProviderModel {
    /// Final path segment, matched case-insensitively against short names.
    pub fn short_name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }
}

#[derive(Debug, Deserialize)]
struct ModelListResponse {
    data: Vec<ModelListEntry>,
}

#[derive(Debug, Deserialize)]
struct ModelListEntry {
    id: String,
}

/// The parsed model catalog of a hub.
#[derive(Debug, Clone, Default)]
pub struct ProviderModels {
    entries: Vec<ProviderModel>,
}

impl ProviderModels {
    /// Build a registry from already-parsed entries.
    pub fn from_entries(entries: Vec<ProviderModel>) -> Self {
        Self { entries }
    }

    /// Fetch the catalog from `GET {base_url}/models`.
    pub async fn fetch(
        http: &reqwest::Client,
        base_url: &str,
        bearer: Option<&SecretString>,
    ) -> Result<Self, HubError> {
        let endpoint = format!("{}/models", base_url.trim_end_matches('/'));
        debug!(endpoint = %endpoint, "fetching provider model catalog");

        let mut request = http.get(&endpoint);
        if let Some(token) = bearer {
            request = request.bearer_auth(token.expose_secret());
        }
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(HubError::ApiError {
                code: status.as_u16(),
                message,
                details: None,
            });
        }

        let listing: ModelListResponse = response.json().await?;
        let entries = listing
            .data
            .into_iter()
            .filter_map(|entry| {
                // Entries without a provider prefix are not routable; skip them.
                let (provider, path) = entry.id.split_once("::")?;
                Some(ProviderModel {
                    provider: provider.to_string(),
                    path: path.to_string(),
                })
            })
            .collect();

        Ok(Self { entries })
    }

    /// All known entries.
    pub fn entries(&self) -> &[ProviderModel] {
        &self.entries
    }

    /// Resolve a model identifier to a `(provider, model)` pair.
    ///
    /// A fully-qualified `provider::path` identifier is split and returned
    /// verbatim. A short name is matched case-insensitively against the final
    /// path segment of every catalog entry; when several providers serve the
    /// name, `preferred_provider` wins, falling back to the hub default
    /// provider, falling back to the first match.
    pub fn match_provider_model(
        &self,
        model: &str,
        preferred_provider: Option<&str>,
    ) -> Result<(String, String), HubError> {
        if let Some((provider, path)) = model.split_once("::") {
            if provider.is_empty() || path.is_empty() {
                return Err(HubError::ModelResolution(format!(
                    "Malformed model identifier: {model}"
                )));
            }
            return Ok((provider.to_string(), path.to_string()));
        }

        let candidates: Vec<&ProviderModel> = self
            .entries
            .iter()
            .filter(|entry| {
                entry.short_name().eq_ignore_ascii_case(model)
                    || entry.path.eq_ignore_ascii_case(model)
            })
            .collect();

        if candidates.is_empty() {
            return Err(HubError::ModelResolution(format!(
                "Unknown model: {model}"
            )));
        }

        let chosen = preferred_provider
            .and_then(|p| candidates.iter().find(|e| e.provider == p))
            .or_else(|| candidates.iter().find(|e| e.provider == DEFAULT_PROVIDER))
            .unwrap_or(&candidates[0]);

        Ok((chosen.provider.clone(), chosen.path.clone()))
    }
}
