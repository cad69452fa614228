//! Vector-store wire types.
//!
//! Vector stores are remote collections of embedded document chunks. The
//! client only transports their representations; creation, processing and
//! expiry are tracked entirely server-side.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Per-state file counts of a vector store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileCounts {
    #[serde(default)]
    pub in_progress: u32,
    #[serde(default)]
    pub completed: u32,
    #[serde(default)]
    pub failed: u32,
    #[serde(default)]
    pub cancelled: u32,
    #[serde(default)]
    pub total: u32,
}

/// A remote vector store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorStore {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub usage_bytes: u64,
    #[serde(default)]
    pub file_counts: FileCounts,
    /// Server-side processing status (`in_progress`, `completed`, `expired`)
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub expires_after: Option<ExpiresAfter>,
    #[serde(default)]
    pub expires_at: Option<i64>,
    #[serde(default)]
    pub last_active_at: Option<i64>,
    #[serde(default)]
    pub metadata: Option<HashMap<String, String>>,
}

/// A file attached to a vector store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorStoreFile {
    pub id: String,
    pub vector_store_id: String,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub usage_bytes: u64,
    #[serde(default)]
    pub status: Option<String>,
}

/// Parameters of the static chunking strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticChunkingConfig {
    pub max_chunk_size_tokens: u32,
    pub chunk_overlap_tokens: u32,
}

/// How source documents are split before embedding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChunkingStrategy {
    /// Server picks the chunk size
    Auto,
    /// Fixed chunk size and overlap
    Static {
        #[serde(rename = "static")]
        config: StaticChunkingConfig,
    },
}

/// Expiration policy of a vector store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpiresAfter {
    /// Timestamp the expiry is measured from
    pub anchor: String,
    pub days: u32,
}

impl ExpiresAfter {
    /// Expire `days` after the store was last active.
    pub fn last_active(days: u32) -> Self {
        Self {
            anchor: "last_active_at".to_string(),
            days,
        }
    }
}

/// External repository a vector store can be built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum VectorStoreSource {
    #[serde(rename = "github")]
    GitHub {
        owner: String,
        repo: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        branch: Option<String>,
    },
    #[serde(rename = "gitlab")]
    GitLab {
        owner: String,
        repo: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        branch: Option<String>,
    },
}

/// One similarity-search hit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilaritySearch {
    pub file_id: String,
    pub chunk_text: String,
    pub distance: f64,
}

/// Request body for creating a vector store from raw file ids.
///
/// Optional fields are omitted from the JSON body when unset; the server
/// applies its own defaults.
#[derive(Debug, Clone, Serialize)]
pub struct CreateVectorStoreRequest {
    pub name: String,
    pub file_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_after: Option<ExpiresAfter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chunking_strategy: Option<ChunkingStrategy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, String>>,
}

impl CreateVectorStoreRequest {
    pub fn new(name: impl Into<String>, file_ids: Vec<String>) -> Self {
        Self {
            name: name.into(),
            file_ids,
            expires_after: None,
            chunking_strategy: None,
            metadata: None,
        }
    }

    pub fn with_expires_after(mut self, expires_after: ExpiresAfter) -> Self {
        self.expires_after = Some(expires_after);
        self
    }

    pub fn with_chunking_strategy(mut self, strategy: ChunkingStrategy) -> Self {
        self.chunking_strategy = Some(strategy);
        self
    }

    pub fn with_metadata(mut self, metadata: HashMap<String, String>) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

/// Request body for creating a vector store from an external source
/// repository.
#[derive(Debug, Clone, Serialize)]
pub struct CreateVectorStoreFromSourceRequest {
    pub name: String,
    pub source: VectorStoreSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_auth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chunking_strategy: Option<ChunkingStrategy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_after: Option<ExpiresAfter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, String>>,
}

impl CreateVectorStoreFromSourceRequest {
    pub fn new(name: impl Into<String>, source: VectorStoreSource) -> Self {
        Self {
            name: name.into(),
            source,
            source_auth: None,
            chunking_strategy: None,
            expires_after: None,
            metadata: None,
        }
    }

    pub fn with_source_auth(mut self, token: impl Into<String>) -> Self {
        self.source_auth = Some(token.into());
        self
    }

    pub fn with_chunking_strategy(mut self, strategy: ChunkingStrategy) -> Self {
        self.chunking_strategy = Some(strategy);
        self
    }

    pub fn with_expires_after(mut self, expires_after: ExpiresAfter) -> Self {
        self.expires_after = Some(expires_after);
        self
    }

    pub fn with_metadata(mut self, metadata: HashMap<String, String>) -> Self {
        self.metadata = Some(metadata);
        self
    }
}
