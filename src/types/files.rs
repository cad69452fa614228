//! File wire types.

use serde::{Deserialize, Serialize};

/// What an uploaded file will be used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilePurpose {
    Assistants,
    Batch,
    FineTune,
    Vision,
}

impl FilePurpose {
    /// Wire representation, as sent in the multipart `purpose` field.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Assistants => "assistants",
            Self::Batch => "batch",
            Self::FineTune => "fine-tune",
            Self::Vision => "vision",
        }
    }
}

/// A file stored on the hub. Identified by an opaque id; the hub owns its
/// lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileObject {
    pub id: String,
    #[serde(default)]
    pub bytes: u64,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub purpose: Option<FilePurpose>,
}
