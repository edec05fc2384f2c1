//! Item Commands
//!
//! Frontend bindings for item-related backend commands.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::invoke;
use crate::models::Item;

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemArgs<'a> {
    pub name: &'a str,
    pub description: &'a str,
    /// Image as a base64 data URL, when one was attached
    pub image: Option<&'a str>,
    pub image_name: Option<&'a str>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemArgs<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub description: &'a str,
    pub image: Option<&'a str>,
    pub image_name: Option<&'a str>,
    /// The image the item held before this edit; deleted after a
    /// replacement upload succeeds
    pub current_image_id: Option<&'a str>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DeleteItemArgs<'a> {
    id: &'a str,
    image_id: Option<&'a str>,
}

/// A rejected command carries its backend error as a JS string
fn command_error(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

// ========================
// Commands
// ========================

pub async fn list_items() -> Result<Vec<Item>, String> {
    let result = invoke("list_items", JsValue::NULL)
        .await
        .map_err(command_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn create_item(args: &CreateItemArgs<'_>) -> Result<Item, String> {
    let js_args = serde_wasm_bindgen::to_value(args).map_err(|e| e.to_string())?;
    let result = invoke("create_item", js_args).await.map_err(command_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn update_item(args: &UpdateItemArgs<'_>) -> Result<Item, String> {
    let js_args = serde_wasm_bindgen::to_value(args).map_err(|e| e.to_string())?;
    let result = invoke("update_item", js_args).await.map_err(command_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn delete_item(id: &str, image_id: Option<&str>) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&DeleteItemArgs { id, image_id })
        .map_err(|e| e.to_string())?;
    invoke("delete_item", js_args).await.map_err(command_error)?;
    Ok(())
}
