//! Frontend Models
//!
//! Data structures matching the backend DTOs.

use serde::{Deserialize, Serialize};

/// Item as returned by the backend, derived view URL included
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image_id: Option<String>,
    pub image_url: Option<String>,
}
