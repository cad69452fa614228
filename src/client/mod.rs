//! The unified hub client.
//!
//! [`InferenceClient`] fronts two upstream surfaces behind one interface:
//! chat completions routed to a provider resolved from the hub model catalog,
//! and the hub's vector-store API. Completion calls are retried with a flat
//! bounded count; every other operation is a single outbound call that fails
//! fast.

mod files;
mod vector_stores;

use secrecy::{ExposeSecret, SecretString};
use serde_json::{Value, json};
use tokio::sync::OnceCell;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::HubError;
use crate::registry::ProviderModels;
use crate::retry::{RetryExecutor, RetryPolicy};
use crate::streaming::{ChatStream, chat_stream_from_response};
use crate::types::{ChatCompletion, CompletionRequest};

/// Client-side adapter for a hub: chat completions plus vector-store
/// operations.
///
/// The client holds no mutable state beyond the lazily-fetched model catalog;
/// each call is an independent outbound request.
#[derive(Debug)]
pub struct InferenceClient {
    config: ClientConfig,
    http: reqwest::Client,
    bearer: Option<SecretString>,
    provider_models: OnceCell<ProviderModels>,
}

impl InferenceClient {
    /// Construct a client from the given configuration.
    ///
    /// When an auth provider is configured its bearer token is derived here,
    /// once; otherwise the plain API key is used as the token.
    pub fn new(config: ClientConfig) -> Result<Self, HubError> {
        config.validate()?;
        let bearer = match (&config.auth, &config.api_key) {
            (Some(auth), _) => Some(auth.generate_bearer_token()?),
            (None, Some(key)) => Some(key.clone()),
            (None, None) => None,
        };
        Ok(Self {
            config,
            http: reqwest::Client::new(),
            bearer,
            provider_models: OnceCell::new(),
        })
    }

    /// The configuration this client was built from.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The hub model catalog, fetched on first use and cached for the
    /// lifetime of the client.
    pub async fn provider_models(&self) -> Result<&ProviderModels, HubError> {
        self.provider_models
            .get_or_try_init(|| {
                ProviderModels::fetch(&self.http, &self.config.base_url, self.bearer.as_ref())
            })
            .await
    }

    /// Resolve a model identifier to a `(provider, model)` pair.
    ///
    /// Resolution failures are surfaced as-is and never retried.
    pub async fn resolve_model(&self, model: &str) -> Result<(String, String), HubError> {
        let registry = self.provider_models().await?;
        registry.match_provider_model(model, self.config.custom_provider.as_deref())
    }

    /// Forward a completion request and return the aggregated response.
    ///
    /// Default temperature/max-tokens are applied iff the request leaves them
    /// unset. The upstream call is attempted up to `num_inference_retries`
    /// times on any error; only the final failure is surfaced, wrapped as a
    /// bad-request error carrying the original message.
    pub async fn completions(
        &self,
        request: CompletionRequest,
    ) -> Result<ChatCompletion, HubError> {
        let body = self.completion_body(&request, false).await?;
        debug!(model = %request.model, "forwarding completion request");

        let executor = RetryExecutor::new(
            RetryPolicy::retry_all().with_max_attempts(self.config.num_inference_retries),
        );
        executor
            .execute(|| async {
                let response = self
                    .authorize(self.http.post(self.endpoint("/chat/completions")).json(&body))
                    .send()
                    .await?;
                let response = expect_success(response).await?;
                Ok(response.json::<ChatCompletion>().await?)
            })
            .await
            .map_err(|e| HubError::BadRequest(e.to_string()))
    }

    /// Forward a completion request in streaming mode.
    ///
    /// Returns an incremental-chunk stream instead of a single aggregated
    /// response. Establishing the connection is retried like a non-streaming
    /// call; once the stream is handed out, cancellation is dropping it.
    pub async fn completions_stream(
        &self,
        request: CompletionRequest,
    ) -> Result<ChatStream, HubError> {
        let body = self.completion_body(&request, true).await?;
        debug!(model = %request.model, "opening completion stream");

        let executor = RetryExecutor::new(
            RetryPolicy::retry_all().with_max_attempts(self.config.num_inference_retries),
        );
        let response = executor
            .execute(|| async {
                let response = self
                    .authorize(self.http.post(self.endpoint("/chat/completions")).json(&body))
                    .send()
                    .await?;
                expect_success(response).await
            })
            .await
            .map_err(|e| HubError::BadRequest(e.to_string()))?;

        Ok(chat_stream_from_response(response))
    }

    /// Build the outgoing completion body: resolved model and provider,
    /// messages, effective sampling parameters and any extra options.
    async fn completion_body(
        &self,
        request: &CompletionRequest,
        stream: bool,
    ) -> Result<Value, HubError> {
        let (provider, model) = self.resolve_model(&request.model).await?;
        let temperature = request
            .temperature
            .unwrap_or(self.config.default_temperature);
        let max_tokens = request.max_tokens.unwrap_or(self.config.default_max_tokens);

        let mut body = json!({
            "model": model,
            "provider": provider,
            "messages": request.messages,
            "temperature": temperature,
            "max_tokens": max_tokens,
            "stream": stream,
        });
        if let Some(obj) = body.as_object_mut() {
            for (key, value) in &request.extra {
                obj.insert(key.clone(), value.clone());
            }
        }
        Ok(body)
    }

    /// Absolute endpoint URL for a path relative to the configured base URL.
    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// Attach the bearer token, when one is configured.
    pub(crate) fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.bearer {
            Some(token) => request.bearer_auth(token.expose_secret()),
            None => request,
        }
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }
}

/// Map a non-2xx response to an [`HubError::ApiError`] carrying the body as
/// the message.
pub(crate) async fn expect_success(
    response: reqwest::Response,
) -> Result<reqwest::Response, HubError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response.text().await.unwrap_or_default();
    let details = serde_json::from_str(&message).ok();
    Err(HubError::ApiError {
        code: status.as_u16(),
        message,
        details,
    })
}
