//! Vector-store operations.
//!
//! Each operation is a single outbound call with no retry. Store lifecycle
//! (pending/processing/completed) is tracked entirely server-side; the client
//! only issues requests and reports responses or errors.

use serde_json::json;
use tracing::debug;

use super::{InferenceClient, expect_success};
use crate::error::HubError;
use crate::types::{
    CreateVectorStoreFromSourceRequest, CreateVectorStoreRequest, SimilaritySearch, VectorStore,
    VectorStoreFile,
};

impl InferenceClient {
    /// Run a similarity search against a vector store.
    ///
    /// Transport errors and non-2xx responses are wrapped with the upstream
    /// message embedded.
    pub async fn query_vector_store(
        &self,
        vector_store_id: &str,
        query: &str,
    ) -> Result<Vec<SimilaritySearch>, HubError> {
        debug!(vector_store_id, "querying vector store");
        let endpoint = self.endpoint(&format!("/vector_stores/{vector_store_id}/search"));

        let result: Result<Vec<SimilaritySearch>, HubError> = async {
            let response = self
                .authorize(self.http().post(&endpoint).json(&json!({ "query": query })))
                .send()
                .await?;
            let response = expect_success(response).await?;
            Ok(response.json().await?)
        }
        .await;

        result.map_err(|e| HubError::VectorStore(format!("Error querying vector store: {e}")))
    }

    /// Attach an already-uploaded file to a vector store.
    pub async fn add_file_to_vector_store(
        &self,
        vector_store_id: &str,
        file_id: &str,
    ) -> Result<VectorStoreFile, HubError> {
        debug!(vector_store_id, file_id, "adding file to vector store");
        let endpoint = self.endpoint(&format!("/vector_stores/{vector_store_id}/files"));

        let response = self
            .authorize(self.http().post(&endpoint).json(&json!({ "file_id": file_id })))
            .send()
            .await?;
        let response = expect_success(response).await?;
        Ok(response.json().await?)
    }

    /// Create a vector store from raw file ids.
    ///
    /// Unset optional fields are omitted from the request body; the hub
    /// applies its own defaults.
    pub async fn create_vector_store(
        &self,
        request: CreateVectorStoreRequest,
    ) -> Result<VectorStore, HubError> {
        debug!(name = %request.name, files = request.file_ids.len(), "creating vector store");

        let response = self
            .authorize(self.http().post(self.endpoint("/vector_stores")).json(&request))
            .send()
            .await?;
        let response = expect_success(response).await?;
        Ok(response.json().await?)
    }

    /// Create a vector store from an external source repository.
    ///
    /// The hub clones and chunks the source server-side; the returned store
    /// is typically still processing.
    pub async fn create_vector_store_from_source(
        &self,
        request: CreateVectorStoreFromSourceRequest,
    ) -> Result<VectorStore, HubError> {
        debug!(name = %request.name, "creating vector store from source");

        let result: Result<VectorStore, HubError> = async {
            let response = self
                .authorize(
                    self.http()
                        .post(self.endpoint("/vector_stores/from_source"))
                        .json(&request),
                )
                .send()
                .await?;
            let response = expect_success(response).await?;
            Ok(response.json().await?)
        }
        .await;

        result.map_err(|e| HubError::VectorStore(format!("Failed to create vector store: {e}")))
    }

    /// Fetch a vector store by id.
    ///
    /// A missing store is an error (the upstream 404), never an empty result.
    pub async fn get_vector_store(&self, vector_store_id: &str) -> Result<VectorStore, HubError> {
        debug!(vector_store_id, "fetching vector store");
        let endpoint = self.endpoint(&format!("/vector_stores/{vector_store_id}"));

        let response = self.authorize(self.http().get(&endpoint)).send().await?;
        let response = expect_success(response).await?;
        Ok(response.json().await?)
    }
}
