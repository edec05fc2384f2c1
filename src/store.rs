//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Item;

/// Image picked in a file input, read as a data URL and pending upload
#[derive(Clone, Debug, PartialEq)]
pub struct PendingImage {
    pub data_url: String,
    pub filename: String,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Items mirrored from the remote collection
    pub items: Vec<Item>,
    /// Draft name field, shared by the create form and the edit modal
    pub name: String,
    /// Draft description field
    pub description: String,
    /// Draft image, picked but not yet uploaded
    pub pending_image: Option<PendingImage>,
    /// Item currently being edited (None = create mode)
    pub editing: Option<Item>,
    /// Edit modal visibility
    pub show_edit_popup: bool,
    /// A mutation is in flight; submit controls are disabled meanwhile
    pub busy: bool,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Clear the shared draft fields
pub fn store_reset_draft(store: &AppStore) {
    store.name().set(String::new());
    store.description().set(String::new());
    store.pending_image().set(None);
}

/// Open the edit modal with the target's fields copied into the draft
pub fn store_begin_edit(store: &AppStore, item: Item) {
    store.name().set(item.name.clone());
    store.description().set(item.description.clone());
    store.pending_image().set(None);
    store.editing().set(Some(item));
    store.show_edit_popup().set(true);
}

/// Close the edit session and clear the draft
pub fn store_close_edit(store: &AppStore) {
    store.show_edit_popup().set(false);
    store.editing().set(None);
    store_reset_draft(store);
}
