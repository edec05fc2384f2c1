//! UI Components
//!
//! Reusable Leptos components.

mod delete_confirm_button;
mod edit_modal;
mod image_input;
mod item_form;
mod item_list;

pub use delete_confirm_button::DeleteConfirmButton;
pub use edit_modal::EditModal;
pub use image_input::ImageInput;
pub use item_form::ItemForm;
pub use item_list::ItemList;

/// Blocking validation alert
pub(crate) fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
