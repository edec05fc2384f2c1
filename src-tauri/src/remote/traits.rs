//! Remote Layer - Core Traits
//!
//! Abstract interfaces over the remote document collection and object store.
//! Implementations speak the platform's REST API; tests substitute
//! in-memory fakes.

use async_trait::async_trait;

use crate::domain::{DomainResult, FileIdentifier, ImageUpload, Item};

/// The remote document collection holding items
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Full unpaginated listing of the collection
    async fn list(&self) -> DomainResult<Vec<Item>>;

    /// Create a document with a server-assigned id.
    ///
    /// `image_id` of `None` is stored as an explicit null.
    async fn create(
        &self,
        name: &str,
        description: &str,
        image_id: Option<&FileIdentifier>,
    ) -> DomainResult<Item>;

    /// Replace name/description of an existing document.
    ///
    /// `image_id` of `None` leaves the stored reference untouched.
    async fn update(
        &self,
        id: &str,
        name: &str,
        description: &str,
        image_id: Option<&FileIdentifier>,
    ) -> DomainResult<Item>;

    /// Delete a document by id
    async fn delete(&self, id: &str) -> DomainResult<()>;
}

/// The remote object store holding uploaded images
#[async_trait]
pub trait FileStore: Send + Sync {
    /// Upload image bytes; the store assigns and returns the file id
    async fn upload(&self, image: &ImageUpload) -> DomainResult<FileIdentifier>;

    /// Delete a stored file by id
    async fn remove(&self, id: &FileIdentifier) -> DomainResult<()>;
}
