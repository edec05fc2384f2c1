//! Remote Document Collection Client
//!
//! reqwest implementation of `DocumentStore` against the platform's
//! databases API. Documents live under
//! `/databases/{database}/collections/{collection}/documents`.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{RequestBuilder, StatusCode};
use serde::Deserialize;
use serde_json::{json, Map, Value};

use crate::config::RemoteConfig;
use crate::domain::{DomainError, DomainResult, FileIdentifier, Item};

use super::traits::DocumentStore;

/// Placeholder id telling the platform to assign one server-side
pub(super) const AUTO_ID: &str = "unique()";

pub(super) const PROJECT_HEADER: &str = "X-Appwrite-Project";
pub(super) const API_KEY_HEADER: &str = "X-Appwrite-Key";

/// Attach the project (and key, when configured) headers to a request
pub(super) fn identify(request: RequestBuilder, config: &RemoteConfig) -> RequestBuilder {
    let request = request.header(PROJECT_HEADER, &config.project_id);
    match &config.api_key {
        Some(key) => request.header(API_KEY_HEADER, key),
        None => request,
    }
}

/// Map a non-success response to a domain error
pub(super) async fn expect_success(
    response: reqwest::Response,
) -> DomainResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    if status == StatusCode::NOT_FOUND {
        Err(DomainError::NotFound(body))
    } else {
        Err(DomainError::Remote(format!("{}: {}", status, body)))
    }
}

pub(super) fn transport_error(err: reqwest::Error) -> DomainError {
    DomainError::Remote(err.to_string())
}

#[derive(Debug, Deserialize)]
struct DocumentList {
    documents: Vec<Item>,
}

/// REST client for the remote collection
pub struct RemoteCollection {
    http: reqwest::Client,
    config: Arc<RemoteConfig>,
}

impl RemoteCollection {
    pub fn new(http: reqwest::Client, config: Arc<RemoteConfig>) -> Self {
        Self { http, config }
    }

    fn documents_url(&self) -> String {
        format!(
            "{}/databases/{}/collections/{}/documents",
            self.config.base_url(),
            self.config.database_id,
            self.config.collection_id
        )
    }

    fn document_url(&self, id: &str) -> String {
        format!("{}/{}", self.documents_url(), id)
    }
}

#[async_trait]
impl DocumentStore for RemoteCollection {
    async fn list(&self) -> DomainResult<Vec<Item>> {
        let response = identify(self.http.get(self.documents_url()), &self.config)
            .send()
            .await
            .map_err(transport_error)?;
        let listing: DocumentList = expect_success(response)
            .await?
            .json()
            .await
            .map_err(transport_error)?;
        Ok(listing.documents)
    }

    async fn create(
        &self,
        name: &str,
        description: &str,
        image_id: Option<&FileIdentifier>,
    ) -> DomainResult<Item> {
        let body = json!({
            "documentId": AUTO_ID,
            "data": {
                "name": name,
                "description": description,
                "imageId": image_id,
            },
        });
        let response = identify(self.http.post(self.documents_url()), &self.config)
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;
        expect_success(response)
            .await?
            .json()
            .await
            .map_err(transport_error)
    }

    async fn update(
        &self,
        id: &str,
        name: &str,
        description: &str,
        image_id: Option<&FileIdentifier>,
    ) -> DomainResult<Item> {
        // imageId is only sent when the image was replaced; an absent key
        // leaves the stored reference as-is.
        let mut data = Map::new();
        data.insert("name".to_string(), Value::String(name.to_string()));
        data.insert(
            "description".to_string(),
            Value::String(description.to_string()),
        );
        if let Some(file_id) = image_id {
            data.insert(
                "imageId".to_string(),
                Value::String(file_id.as_str().to_string()),
            );
        }
        let body = json!({ "data": data });

        let response = identify(self.http.patch(self.document_url(id)), &self.config)
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;
        expect_success(response)
            .await?
            .json()
            .await
            .map_err(transport_error)
    }

    async fn delete(&self, id: &str) -> DomainResult<()> {
        let response = identify(self.http.delete(self.document_url(id)), &self.config)
            .send()
            .await
            .map_err(transport_error)?;
        expect_success(response).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Arc<RemoteConfig> {
        Arc::new(RemoteConfig {
            endpoint: "https://cloud.example.com/v1".to_string(),
            project_id: "proj".to_string(),
            database_id: "db".to_string(),
            collection_id: "items".to_string(),
            bucket_id: "images".to_string(),
            api_key: None,
        })
    }

    #[test]
    fn test_document_urls() {
        let collection = RemoteCollection::new(reqwest::Client::new(), config());
        assert_eq!(
            collection.documents_url(),
            "https://cloud.example.com/v1/databases/db/collections/items/documents"
        );
        assert_eq!(
            collection.document_url("doc-1"),
            "https://cloud.example.com/v1/databases/db/collections/items/documents/doc-1"
        );
    }

    #[test]
    fn test_listing_decodes_documents() {
        let json = r#"{
            "total": 2,
            "documents": [
                {"$id": "a", "name": "Pen", "description": "Blue ink", "imageId": null},
                {"$id": "b", "name": "Cup", "description": "Ceramic", "imageId": "img-1"}
            ]
        }"#;
        let listing: DocumentList = serde_json::from_str(json).expect("decode");
        assert_eq!(listing.documents.len(), 2);
        assert_eq!(listing.documents[1].image_id, Some(FileIdentifier::new("img-1")));
    }
}
