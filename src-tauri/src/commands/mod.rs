//! Commands Layer
//!
//! Tauri command handlers that bridge the frontend to the item service.

mod item_cmd;

pub use item_cmd::*;
