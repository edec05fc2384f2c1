//! Item Service
//!
//! Runs each mutation as a fixed-order chain of remote calls:
//! - create: upload (when an image is attached), then document create
//! - update: upload, then old-image delete, then document update
//! - delete: document delete, then best-effort file delete
//!
//! Remote failures abort the chain at the failing step and are logged;
//! nothing already committed is rolled back.

use log::{error, info, warn};

use crate::domain::{DomainError, DomainResult, FileIdentifier, Item, ItemDraft};
use crate::remote::{DocumentStore, FileStore};

pub struct ItemService<D, F> {
    documents: D,
    files: F,
}

impl<D: DocumentStore, F: FileStore> ItemService<D, F> {
    pub fn new(documents: D, files: F) -> Self {
        Self { documents, files }
    }

    /// Full listing; the caller replaces its local state with the result.
    pub async fn list(&self) -> DomainResult<Vec<Item>> {
        self.documents.list().await.map_err(|e| {
            error!("listing failed: {}", e);
            e
        })
    }

    /// Create an item, uploading its image first when one is attached.
    ///
    /// A failed upload aborts the create before any document call. A failed
    /// document call leaves an already-uploaded file in the bucket.
    pub async fn create(&self, draft: ItemDraft) -> DomainResult<Item> {
        draft.validate()?;

        let image_id = match &draft.image {
            Some(image) => Some(self.files.upload(image).await.map_err(|e| {
                error!("image upload failed: {}", e);
                e
            })?),
            None => None,
        };

        let item = self
            .documents
            .create(&draft.name, &draft.description, image_id.as_ref())
            .await
            .map_err(|e| {
                error!("document create failed: {}", e);
                e
            })?;
        info!("created item {}", item.id);
        Ok(item)
    }

    /// Replace an item's fields, swapping its image when a new one is
    /// attached.
    ///
    /// The previous image is only deleted after the new upload succeeded,
    /// and its deletion failing does not abort the update.
    pub async fn update(
        &self,
        id: &str,
        draft: ItemDraft,
        previous_image: Option<FileIdentifier>,
    ) -> DomainResult<Item> {
        if id.is_empty() {
            return Err(DomainError::InvalidInput("item id is required".to_string()));
        }
        draft.validate()?;

        let new_image = match &draft.image {
            Some(image) => {
                let uploaded = self.files.upload(image).await.map_err(|e| {
                    error!("image upload failed: {}", e);
                    e
                })?;
                if let Some(old) = &previous_image {
                    if let Err(e) = self.files.remove(old).await {
                        warn!("replaced image {} not deleted: {}", old, e);
                    }
                }
                Some(uploaded)
            }
            None => None,
        };

        let item = self
            .documents
            .update(id, &draft.name, &draft.description, new_image.as_ref())
            .await
            .map_err(|e| {
                error!("document update failed: {}", e);
                e
            })?;
        info!("updated item {}", item.id);
        Ok(item)
    }

    /// Delete an item, then best-effort delete its image.
    ///
    /// A failed document delete leaves the file untouched; a failed file
    /// delete never fails the operation.
    pub async fn delete(&self, id: &str, image: Option<FileIdentifier>) -> DomainResult<()> {
        self.documents.delete(id).await.map_err(|e| {
            error!("document delete failed: {}", e);
            e
        })?;

        if let Some(file_id) = image {
            if let Err(e) = self.files.remove(&file_id).await {
                warn!("image {} not deleted: {}", file_id, e);
            }
        }
        info!("deleted item {}", id);
        Ok(())
    }
}
