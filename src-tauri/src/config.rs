//! Remote Platform Configuration
//!
//! Endpoint and identifiers for the document collection and the storage
//! bucket, read once from the environment at startup. Presence is the only
//! validation; a bad value surfaces as a remote error on the first call.

use crate::domain::{DomainError, DomainResult, FileIdentifier};

pub const ENDPOINT_VAR: &str = "CURIO_ENDPOINT";
pub const PROJECT_ID_VAR: &str = "CURIO_PROJECT_ID";
pub const DATABASE_ID_VAR: &str = "CURIO_DATABASE_ID";
pub const COLLECTION_ID_VAR: &str = "CURIO_COLLECTION_ID";
pub const BUCKET_ID_VAR: &str = "CURIO_BUCKET_ID";
pub const API_KEY_VAR: &str = "CURIO_API_KEY";

#[derive(Debug, Clone)]
pub struct RemoteConfig {
    pub endpoint: String,
    pub project_id: String,
    pub database_id: String,
    pub collection_id: String,
    pub bucket_id: String,
    /// Optional server key; anonymous access otherwise
    pub api_key: Option<String>,
}

impl RemoteConfig {
    pub fn from_env() -> DomainResult<Self> {
        Ok(Self {
            endpoint: require(ENDPOINT_VAR)?,
            project_id: require(PROJECT_ID_VAR)?,
            database_id: require(DATABASE_ID_VAR)?,
            collection_id: require(COLLECTION_ID_VAR)?,
            bucket_id: require(BUCKET_ID_VAR)?,
            api_key: std::env::var(API_KEY_VAR).ok(),
        })
    }

    /// Endpoint without a trailing slash, ready for path concatenation
    pub fn base_url(&self) -> &str {
        self.endpoint.trim_end_matches('/')
    }

    /// Deterministic public URL under which an uploaded image is viewable
    pub fn view_url(&self, file_id: &FileIdentifier) -> String {
        format!(
            "{}/storage/buckets/{}/files/{}/view?project={}",
            self.base_url(),
            self.bucket_id,
            file_id.as_str(),
            self.project_id
        )
    }
}

fn require(key: &str) -> DomainResult<String> {
    std::env::var(key)
        .map_err(|_| DomainError::InvalidInput(format!("missing environment variable {}", key)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> RemoteConfig {
        RemoteConfig {
            endpoint: "https://cloud.example.com/v1/".to_string(),
            project_id: "proj".to_string(),
            database_id: "db".to_string(),
            collection_id: "items".to_string(),
            bucket_id: "images".to_string(),
            api_key: None,
        }
    }

    #[test]
    fn test_base_url_strips_trailing_slash() {
        assert_eq!(config().base_url(), "https://cloud.example.com/v1");
    }

    #[test]
    fn test_view_url_embeds_bucket_file_and_project() {
        let url = config().view_url(&FileIdentifier::new("img-1"));
        assert_eq!(
            url,
            "https://cloud.example.com/v1/storage/buckets/images/files/img-1/view?project=proj"
        );
    }
}
