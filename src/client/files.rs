//! File upload.

use reqwest::multipart::{Form, Part};
use tracing::debug;

use super::{InferenceClient, expect_success};
use crate::error::HubError;
use crate::types::{FileObject, FilePurpose};

impl InferenceClient {
    /// Upload text content as a file.
    ///
    /// The content is sent as a multipart upload under the given name and
    /// MIME type. The hub owns the file's lifecycle; the returned
    /// [`FileObject`] carries its opaque id.
    pub async fn upload_file(
        &self,
        file_content: &str,
        purpose: FilePurpose,
        file_name: &str,
        file_type: &str,
    ) -> Result<FileObject, HubError> {
        debug!(file_name, purpose = purpose.as_str(), "uploading file");

        let part = Part::bytes(file_content.as_bytes().to_vec())
            .file_name(file_name.to_string())
            .mime_str(file_type)
            .map_err(|e| HubError::InvalidInput(format!("Invalid MIME type {file_type}: {e}")))?;
        let form = Form::new()
            .text("purpose", purpose.as_str())
            .part("file", part);

        let response = self
            .authorize(self.http().post(self.endpoint("/files")).multipart(form))
            .send()
            .await?;
        let response = expect_success(response).await?;
        Ok(response.json().await?)
    }

    /// [`upload_file`](Self::upload_file) with the conventional plain-text
    /// defaults (`file.txt`, `text/plain`).
    pub async fn upload_text_file(
        &self,
        file_content: &str,
        purpose: FilePurpose,
    ) -> Result<FileObject, HubError> {
        self.upload_file(file_content, purpose, "file.txt", "text/plain")
            .await
    }
}
