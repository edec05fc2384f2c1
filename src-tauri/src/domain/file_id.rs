//! Remote File Identifier

use serde::{Deserialize, Serialize};

/// Opaque identifier of a file object in the remote bucket.
///
/// Assigned by the remote platform on upload; never parsed or interpreted
/// locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileIdentifier(String);

impl FileIdentifier {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FileIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for FileIdentifier {
    fn from(id: String) -> Self {
        Self(id)
    }
}
