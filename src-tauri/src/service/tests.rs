//! Service Integration Tests
//!
//! Exercise the mutation workflows against in-memory fakes that record the
//! order of remote calls.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::{DomainError, DomainResult, FileIdentifier, ImageUpload, Item, ItemDraft};
use crate::remote::{DocumentStore, FileStore};
use crate::service::ItemService;

#[derive(Debug, Clone, PartialEq)]
enum RemoteCall {
    ListDocuments,
    CreateDocument { image_id: Option<String> },
    UpdateDocument { id: String, image_id: Option<String> },
    DeleteDocument { id: String },
    CreateFile,
    DeleteFile { id: String },
}

/// Call log shared by both fakes, so cross-store ordering is observable
#[derive(Default)]
struct RemoteLog {
    calls: Mutex<Vec<RemoteCall>>,
}

impl RemoteLog {
    fn record(&self, call: RemoteCall) {
        self.calls.lock().expect("log lock").push(call);
    }

    fn calls(&self) -> Vec<RemoteCall> {
        self.calls.lock().expect("log lock").clone()
    }
}

#[derive(Default)]
struct FakeDocuments {
    log: Arc<RemoteLog>,
    items: Mutex<Vec<Item>>,
    next_id: AtomicU32,
    fail_create: bool,
    fail_delete: bool,
}

impl FakeDocuments {
    fn new(log: Arc<RemoteLog>) -> Self {
        Self {
            log,
            ..Default::default()
        }
    }

    fn stored(&self) -> Vec<Item> {
        self.items.lock().expect("items lock").clone()
    }
}

#[async_trait]
impl DocumentStore for FakeDocuments {
    async fn list(&self) -> DomainResult<Vec<Item>> {
        self.log.record(RemoteCall::ListDocuments);
        Ok(self.stored())
    }

    async fn create(
        &self,
        name: &str,
        description: &str,
        image_id: Option<&FileIdentifier>,
    ) -> DomainResult<Item> {
        self.log.record(RemoteCall::CreateDocument {
            image_id: image_id.map(|id| id.as_str().to_string()),
        });
        if self.fail_create {
            return Err(DomainError::Remote("document create refused".to_string()));
        }
        let item = Item {
            id: format!("doc-{}", self.next_id.fetch_add(1, Ordering::SeqCst) + 1),
            name: name.to_string(),
            description: description.to_string(),
            image_id: image_id.cloned(),
        };
        self.items.lock().expect("items lock").push(item.clone());
        Ok(item)
    }

    async fn update(
        &self,
        id: &str,
        name: &str,
        description: &str,
        image_id: Option<&FileIdentifier>,
    ) -> DomainResult<Item> {
        self.log.record(RemoteCall::UpdateDocument {
            id: id.to_string(),
            image_id: image_id.map(|file| file.as_str().to_string()),
        });
        let mut items = self.items.lock().expect("items lock");
        let item = items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| DomainError::NotFound(id.to_string()))?;
        item.name = name.to_string();
        item.description = description.to_string();
        if let Some(file_id) = image_id {
            item.image_id = Some(file_id.clone());
        }
        Ok(item.clone())
    }

    async fn delete(&self, id: &str) -> DomainResult<()> {
        self.log.record(RemoteCall::DeleteDocument { id: id.to_string() });
        if self.fail_delete {
            return Err(DomainError::Remote("document delete refused".to_string()));
        }
        self.items
            .lock()
            .expect("items lock")
            .retain(|item| item.id != id);
        Ok(())
    }
}

#[derive(Default)]
struct FakeFiles {
    log: Arc<RemoteLog>,
    next_id: AtomicU32,
    fail_upload: bool,
    fail_remove: bool,
}

impl FakeFiles {
    fn new(log: Arc<RemoteLog>) -> Self {
        Self {
            log,
            ..Default::default()
        }
    }
}

#[async_trait]
impl FileStore for FakeFiles {
    async fn upload(&self, _image: &ImageUpload) -> DomainResult<FileIdentifier> {
        self.log.record(RemoteCall::CreateFile);
        if self.fail_upload {
            return Err(DomainError::Remote("upload refused".to_string()));
        }
        Ok(FileIdentifier::new(format!(
            "file-{}",
            self.next_id.fetch_add(1, Ordering::SeqCst) + 1
        )))
    }

    async fn remove(&self, id: &FileIdentifier) -> DomainResult<()> {
        self.log.record(RemoteCall::DeleteFile {
            id: id.as_str().to_string(),
        });
        if self.fail_remove {
            return Err(DomainError::Remote("file delete refused".to_string()));
        }
        Ok(())
    }
}

struct Harness {
    log: Arc<RemoteLog>,
    service: ItemService<FakeDocuments, FakeFiles>,
}

fn setup() -> Harness {
    setup_with(|_, _| {})
}

fn setup_with(configure: impl FnOnce(&mut FakeDocuments, &mut FakeFiles)) -> Harness {
    let log = Arc::new(RemoteLog::default());
    let mut documents = FakeDocuments::new(Arc::clone(&log));
    let mut files = FakeFiles::new(Arc::clone(&log));
    configure(&mut documents, &mut files);
    Harness {
        log,
        service: ItemService::new(documents, files),
    }
}

fn draft(name: &str, description: &str) -> ItemDraft {
    ItemDraft {
        name: name.to_string(),
        description: description.to_string(),
        image: None,
    }
}

fn draft_with_image(name: &str, description: &str) -> ItemDraft {
    ItemDraft {
        image: Some(ImageUpload {
            bytes: vec![0x89, 0x50, 0x4e, 0x47],
            filename: "photo.png".to_string(),
        }),
        ..draft(name, description)
    }
}

#[tokio::test]
async fn test_create_rejects_empty_fields_before_any_call() {
    let h = setup();

    let result = h.service.create(draft("", "Blue ink")).await;
    assert!(matches!(result, Err(DomainError::InvalidInput(_))));

    let result = h.service.create(draft("Pen", "   ")).await;
    assert!(matches!(result, Err(DomainError::InvalidInput(_))));

    assert!(h.log.calls().is_empty());
}

#[tokio::test]
async fn test_create_without_image_sends_explicit_null() {
    let h = setup();

    let item = h.service.create(draft("Pen", "Blue ink")).await.expect("create");
    assert_eq!(item.name, "Pen");
    assert_eq!(item.description, "Blue ink");
    assert!(item.image_id.is_none());

    assert_eq!(
        h.log.calls(),
        vec![RemoteCall::CreateDocument { image_id: None }]
    );
}

#[tokio::test]
async fn test_create_uploads_image_before_document() {
    let h = setup();

    let item = h
        .service
        .create(draft_with_image("Cup", "Ceramic"))
        .await
        .expect("create");
    assert_eq!(item.image_id, Some(FileIdentifier::new("file-1")));

    assert_eq!(
        h.log.calls(),
        vec![
            RemoteCall::CreateFile,
            RemoteCall::CreateDocument {
                image_id: Some("file-1".to_string())
            },
        ]
    );
}

#[tokio::test]
async fn test_failed_upload_aborts_create() {
    let h = setup_with(|_, files| files.fail_upload = true);

    let result = h.service.create(draft_with_image("Cup", "Ceramic")).await;
    assert!(matches!(result, Err(DomainError::Remote(_))));

    // No document call after the failed upload
    assert_eq!(h.log.calls(), vec![RemoteCall::CreateFile]);
}

#[tokio::test]
async fn test_failed_document_create_keeps_uploaded_file() {
    let h = setup_with(|documents, _| documents.fail_create = true);

    let result = h.service.create(draft_with_image("Cup", "Ceramic")).await;
    assert!(result.is_err());

    // The uploaded file is not rolled back
    let calls = h.log.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0], RemoteCall::CreateFile);
    assert!(!calls.iter().any(|c| matches!(c, RemoteCall::DeleteFile { .. })));
}

#[tokio::test]
async fn test_update_swaps_image_new_before_old() {
    let h = setup();
    let created = h.service.create(draft_with_image("Cup", "Ceramic")).await.expect("create");
    let previous = created.image_id.clone().expect("image id");

    let updated = h
        .service
        .update(&created.id, draft_with_image("Mug", "Stoneware"), Some(previous.clone()))
        .await
        .expect("update");
    assert_eq!(updated.image_id, Some(FileIdentifier::new("file-2")));

    let calls = h.log.calls();
    // After the two create calls: upload the replacement, then drop the old
    // file, then patch the document.
    assert_eq!(
        &calls[2..],
        &[
            RemoteCall::CreateFile,
            RemoteCall::DeleteFile {
                id: previous.as_str().to_string()
            },
            RemoteCall::UpdateDocument {
                id: created.id.clone(),
                image_id: Some("file-2".to_string())
            },
        ]
    );
}

#[tokio::test]
async fn test_update_without_new_image_keeps_reference() {
    let h = setup();
    let created = h.service.create(draft_with_image("Cup", "Ceramic")).await.expect("create");

    let updated = h
        .service
        .update(&created.id, draft("Mug", "Stoneware"), created.image_id.clone())
        .await
        .expect("update");

    // The stored reference survives an update that sends no imageId
    assert_eq!(updated.image_id, created.image_id);
    assert_eq!(
        h.log.calls().last(),
        Some(&RemoteCall::UpdateDocument {
            id: created.id.clone(),
            image_id: None
        })
    );
}

#[tokio::test]
async fn test_update_tolerates_old_image_delete_failure() {
    let h = setup_with(|_, files| files.fail_remove = true);
    let created = h.service.create(draft("Cup", "Ceramic")).await.expect("create");

    let result = h
        .service
        .update(
            &created.id,
            draft_with_image("Mug", "Stoneware"),
            Some(FileIdentifier::new("stale")),
        )
        .await;
    assert!(result.is_ok());

    let calls = h.log.calls();
    assert!(calls.contains(&RemoteCall::DeleteFile {
        id: "stale".to_string()
    }));
    assert!(matches!(
        calls.last(),
        Some(RemoteCall::UpdateDocument { .. })
    ));
}

#[tokio::test]
async fn test_update_rejects_missing_target() {
    let h = setup();

    let result = h.service.update("", draft("Pen", "Blue ink"), None).await;
    assert!(matches!(result, Err(DomainError::InvalidInput(_))));
    assert!(h.log.calls().is_empty());
}

#[tokio::test]
async fn test_delete_removes_document_before_file() {
    let h = setup();
    let created = h.service.create(draft_with_image("Cup", "Ceramic")).await.expect("create");
    let file_id = created.image_id.clone().expect("image id");

    h.service
        .delete(&created.id, Some(file_id.clone()))
        .await
        .expect("delete");

    assert_eq!(
        &h.log.calls()[2..],
        &[
            RemoteCall::DeleteDocument {
                id: created.id.clone()
            },
            RemoteCall::DeleteFile {
                id: file_id.as_str().to_string()
            },
        ]
    );
}

#[tokio::test]
async fn test_failed_document_delete_skips_file_delete() {
    let h = setup_with(|documents, _| documents.fail_delete = true);

    let result = h
        .service
        .delete("doc-1", Some(FileIdentifier::new("file-1")))
        .await;
    assert!(result.is_err());

    assert_eq!(
        h.log.calls(),
        vec![RemoteCall::DeleteDocument {
            id: "doc-1".to_string()
        }]
    );
}

#[tokio::test]
async fn test_file_delete_failure_does_not_fail_delete() {
    let h = setup_with(|_, files| files.fail_remove = true);
    let created = h.service.create(draft("Cup", "Ceramic")).await.expect("create");

    let result = h
        .service
        .delete(&created.id, Some(FileIdentifier::new("file-9")))
        .await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_list_mirrors_remote_state() {
    let h = setup();
    h.service.create(draft("Pen", "Blue ink")).await.expect("create");
    h.service.create(draft("Cup", "Ceramic")).await.expect("create");

    let listed = h.service.list().await.expect("list");
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].name, "Pen");
    assert_eq!(listed[1].name, "Cup");
}
