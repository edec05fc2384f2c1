//! Remote Object Store Client
//!
//! reqwest implementation of `FileStore` against the platform's storage
//! API. Files live under `/storage/buckets/{bucket}/files`; uploads are
//! multipart with a server-assigned file id.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;

use crate::config::RemoteConfig;
use crate::domain::{DomainResult, FileIdentifier, ImageUpload};

use super::documents::{expect_success, identify, transport_error, AUTO_ID};
use super::traits::FileStore;

#[derive(Debug, Deserialize)]
struct StoredFile {
    #[serde(rename = "$id")]
    id: String,
}

/// REST client for the remote bucket
pub struct RemoteBucket {
    http: reqwest::Client,
    config: Arc<RemoteConfig>,
}

impl RemoteBucket {
    pub fn new(http: reqwest::Client, config: Arc<RemoteConfig>) -> Self {
        Self { http, config }
    }

    fn files_url(&self) -> String {
        format!(
            "{}/storage/buckets/{}/files",
            self.config.base_url(),
            self.config.bucket_id
        )
    }

    fn file_url(&self, id: &FileIdentifier) -> String {
        format!("{}/{}", self.files_url(), id.as_str())
    }
}

#[async_trait]
impl FileStore for RemoteBucket {
    async fn upload(&self, image: &ImageUpload) -> DomainResult<FileIdentifier> {
        let mime = mime_guess::from_path(&image.filename).first_or_octet_stream();
        let part = Part::bytes(image.bytes.clone())
            .file_name(image.filename.clone())
            .mime_str(mime.as_ref())
            .map_err(transport_error)?;
        let form = Form::new().text("fileId", AUTO_ID).part("file", part);

        let response = identify(self.http.post(self.files_url()), &self.config)
            .multipart(form)
            .send()
            .await
            .map_err(transport_error)?;
        let stored: StoredFile = expect_success(response)
            .await?
            .json()
            .await
            .map_err(transport_error)?;
        Ok(FileIdentifier::new(stored.id))
    }

    async fn remove(&self, id: &FileIdentifier) -> DomainResult<()> {
        let response = identify(self.http.delete(self.file_url(id)), &self.config)
            .send()
            .await
            .map_err(transport_error)?;
        expect_success(response).await.map(|_| ())
    }
}
