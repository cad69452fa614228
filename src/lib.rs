//! # inferhub
//!
//! Unified LLM inference and vector-store client for Rust.
//!
//! `inferhub` is a thin client-side adapter over an AI hub: it resolves a
//! caller-supplied model identifier to a concrete provider/model pair,
//! forwards chat-completion requests with a flat bounded retry, and wraps the
//! hub's vector-store API (file upload, store creation, similarity search,
//! retrieval).
//!
//! ```rust,no_run
//! use inferhub::prelude::*;
//!
//! # async fn example() -> Result<(), HubError> {
//! let config = ClientConfig::new("https://api.example.org/v1")
//!     .with_api_key("sk-...")
//!     .with_num_inference_retries(3);
//! let client = InferenceClient::new(config)?;
//!
//! let request = CompletionRequest::new("llama-v3p1-70b-instruct")
//!     .with_message(ChatMessage::user("What is a vector store?"));
//! let completion = client.completions(request).await?;
//! println!("{}", completion.text().unwrap_or_default());
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod registry;
pub mod retry;
pub mod streaming;
pub mod types;

pub use client::InferenceClient;
pub use config::ClientConfig;
pub use error::HubError;

/// Commonly used types, re-exported.
pub mod prelude {
    pub use crate::auth::{BearerTokenProvider, StaticTokenProvider};
    pub use crate::client::InferenceClient;
    pub use crate::config::ClientConfig;
    pub use crate::error::{ErrorCategory, HubError};
    pub use crate::registry::{ProviderModel, ProviderModels};
    pub use crate::retry::{RetryExecutor, RetryPolicy};
    pub use crate::streaming::{ChatStream, collect_text};
    pub use crate::types::{
        ChatCompletion, ChatCompletionChunk, ChatMessage, ChunkingStrategy, CompletionRequest,
        CreateVectorStoreFromSourceRequest, CreateVectorStoreRequest, ExpiresAfter, FileObject,
        FilePurpose, MessageRole, SimilaritySearch, StaticChunkingConfig, VectorStore,
        VectorStoreFile, VectorStoreSource,
    };
}
