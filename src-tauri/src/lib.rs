//! Curio Backend
//!
//! Layered architecture:
//! - domain: Item entity and validation
//! - remote: Clients for the document collection and object storage
//! - service: Mutation workflows with their call ordering
//! - commands: Tauri command handlers

use std::sync::Arc;

use tauri::Manager;
use tokio::sync::Mutex;

mod commands;
mod config;
mod domain;
mod remote;
mod service;

use config::RemoteConfig;
use remote::{RemoteBucket, RemoteCollection};
use service::ItemService;

type RemoteItemService = ItemService<RemoteCollection, RemoteBucket>;

/// Application state shared across commands
///
/// Mutations lock the service for their whole remote-call chain, so two
/// submissions can never interleave.
pub struct AppState {
    pub config: Arc<RemoteConfig>,
    pub service: Mutex<RemoteItemService>,
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .setup(|app| {
            // Single instance check - must be first!
            #[cfg(desktop)]
            app.handle()
                .plugin(tauri_plugin_single_instance::init(|app, _args, _cwd| {
                    if let Some(window) = app.get_webview_window("main") {
                        let _ = window.set_focus();
                    }
                }))?;

            // Initialize logging
            rolling_logger::init_logger(
                app.handle().path().app_log_dir().expect("failed to get log dir"),
                "Curio",
            )
            .expect("failed to init rolling logger");

            let config = Arc::new(RemoteConfig::from_env()?);
            let http = reqwest::Client::new();
            let documents = RemoteCollection::new(http.clone(), Arc::clone(&config));
            let files = RemoteBucket::new(http, Arc::clone(&config));

            app.manage(AppState {
                config: Arc::clone(&config),
                service: Mutex::new(ItemService::new(documents, files)),
            });

            let _ = rolling_logger::info(&format!(
                "remote configuration loaded: {}",
                config.base_url()
            ));
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::list_items,
            commands::create_item,
            commands::update_item,
            commands::delete_item,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
