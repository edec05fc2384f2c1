//! Item Entity
//!
//! A single record in the remote collection: name, description and an
//! optional reference to an uploaded image.

use serde::{Deserialize, Serialize};

use super::error::{DomainError, DomainResult};
use super::file_id::FileIdentifier;

/// A record mirrored from the remote collection
///
/// The id is assigned by the remote platform (`$id` on the wire) and is
/// immutable. Unknown wire fields (`$collectionId`, timestamps, ...) are
/// ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(rename = "$id")]
    pub id: String,
    pub name: String,
    pub description: String,
    /// `None` when no image is attached; serialized as `imageId`
    #[serde(rename = "imageId", default)]
    pub image_id: Option<FileIdentifier>,
}

/// Image bytes picked in the UI, pending upload
#[derive(Clone, PartialEq)]
pub struct ImageUpload {
    pub bytes: Vec<u8>,
    pub filename: String,
}

impl std::fmt::Debug for ImageUpload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageUpload")
            .field("filename", &self.filename)
            .field("bytes", &self.bytes.len())
            .finish()
    }
}

/// What a create or edit submission carries
#[derive(Debug, Clone)]
pub struct ItemDraft {
    pub name: String,
    pub description: String,
    /// Image to upload before the document call, if one was attached
    pub image: Option<ImageUpload>,
}

impl ItemDraft {
    /// Both text fields are required; whitespace-only counts as empty.
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::InvalidInput("name is required".to_string()));
        }
        if self.description.trim().is_empty() {
            return Err(DomainError::InvalidInput(
                "description is required".to_string(),
            ));
        }
        Ok(())
    }
}
