//! Tauri Commands for Item CRUD
//!
//! Exposes the item workflows to the frontend via Tauri IPC. Image bytes
//! cross the IPC boundary as base64 data URLs; items travel back decorated
//! with their derived view URL.

use serde::Serialize;
use tauri::State;

use crate::config::RemoteConfig;
use crate::domain::{FileIdentifier, ImageUpload, Item, ItemDraft};
use crate::AppState;

/// Item as sent to the frontend
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDto {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image_id: Option<String>,
    pub image_url: Option<String>,
}

fn to_dto(item: Item, config: &RemoteConfig) -> ItemDto {
    let image_url = item.image_id.as_ref().map(|id| config.view_url(id));
    ItemDto {
        id: item.id,
        name: item.name,
        description: item.description,
        image_id: item.image_id.map(|id| id.as_str().to_string()),
        image_url,
    }
}

/// Decode a data-URL (or bare base64) payload coming from the webview
fn decode_image(data: &str, filename: Option<String>) -> Result<ImageUpload, String> {
    // The data may have a data URL prefix like "data:image/png;base64,"
    let encoded = if data.contains(',') {
        data.split(',').nth(1).unwrap_or(data)
    } else {
        data
    };

    let bytes = base64::Engine::decode(&base64::engine::general_purpose::STANDARD, encoded)
        .map_err(|e| format!("invalid image payload: {}", e))?;

    Ok(ImageUpload {
        bytes,
        filename: filename.unwrap_or_else(|| "upload.bin".to_string()),
    })
}

fn pending_image(
    image: Option<&str>,
    image_name: Option<String>,
) -> Result<Option<ImageUpload>, String> {
    image.map(|data| decode_image(data, image_name)).transpose()
}

/// List all items
#[tauri::command]
pub async fn list_items(state: State<'_, AppState>) -> Result<Vec<ItemDto>, String> {
    let service = state.service.lock().await;
    let items = service.list().await.map_err(|e| e.to_string())?;
    Ok(items
        .into_iter()
        .map(|item| to_dto(item, &state.config))
        .collect())
}

/// Create a new item, uploading its image first when one is attached
#[tauri::command]
pub async fn create_item(
    state: State<'_, AppState>,
    name: String,
    description: String,
    image: Option<String>,
    image_name: Option<String>,
) -> Result<ItemDto, String> {
    let draft = ItemDraft {
        name,
        description,
        image: pending_image(image.as_deref(), image_name)?,
    };

    let service = state.service.lock().await;
    service
        .create(draft)
        .await
        .map(|item| to_dto(item, &state.config))
        .map_err(|e| e.to_string())
}

/// Update an item; a newly attached image replaces (and then deletes) the
/// previous one
#[tauri::command]
pub async fn update_item(
    state: State<'_, AppState>,
    id: String,
    name: String,
    description: String,
    image: Option<String>,
    image_name: Option<String>,
    current_image_id: Option<String>,
) -> Result<ItemDto, String> {
    let draft = ItemDraft {
        name,
        description,
        image: pending_image(image.as_deref(), image_name)?,
    };

    let service = state.service.lock().await;
    service
        .update(&id, draft, current_image_id.map(FileIdentifier::new))
        .await
        .map(|item| to_dto(item, &state.config))
        .map_err(|e| e.to_string())
}

/// Delete an item and, best-effort, its image
#[tauri::command]
pub async fn delete_item(
    state: State<'_, AppState>,
    id: String,
    image_id: Option<String>,
) -> Result<(), String> {
    let service = state.service.lock().await;
    service
        .delete(&id, image_id.map(FileIdentifier::new))
        .await
        .map_err(|e| e.to_string())
}
