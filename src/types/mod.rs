//! Wire types exchanged with the hub.

mod chat;
mod files;
mod vector_store;

pub use chat::{
    ChatCompletion, ChatCompletionChunk, ChatMessage, ChoiceDelta, ChunkChoice, CompletionChoice,
    CompletionRequest, MessageRole, Usage,
};
pub use files::{FileObject, FilePurpose};
pub use vector_store::{
    ChunkingStrategy, CreateVectorStoreFromSourceRequest, CreateVectorStoreRequest, ExpiresAfter,
    FileCounts, SimilaritySearch, StaticChunkingConfig, VectorStore, VectorStoreFile,
    VectorStoreSource,
};
