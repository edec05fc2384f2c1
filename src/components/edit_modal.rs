//! Edit Modal Component
//!
//! Modal overlay for editing the selected item. Shares the draft fields
//! with the create form; only one edit session exists at a time.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::commands::{self, UpdateItemArgs};
use crate::components::{alert, ImageInput};
use crate::context::AppContext;
use crate::store::{store_close_edit, use_app_store, AppStateStoreFields};

#[component]
pub fn EditModal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let save_changes = move |_: web_sys::MouseEvent| {
        let name = store.name().get_untracked();
        let description = store.description().get_untracked();
        let editing = store.editing().get_untracked();
        if name.trim().is_empty() || description.trim().is_empty() || editing.is_none() {
            alert("Please fill all fields.");
            return;
        }
        let Some(editing) = editing else { return };

        if store.busy().get_untracked() {
            return;
        }
        store.busy().set(true);

        let image = store.pending_image().get_untracked();
        spawn_local(async move {
            let args = UpdateItemArgs {
                id: &editing.id,
                name: &name,
                description: &description,
                image: image.as_ref().map(|img| img.data_url.as_str()),
                image_name: image.as_ref().map(|img| img.filename.as_str()),
                current_image_id: editing.image_id.as_deref(),
            };
            match commands::update_item(&args).await {
                Ok(_) => {
                    store_close_edit(&store);
                    ctx.reload();
                }
                // The modal stays open with the draft intact
                Err(e) => web_sys::console::error_1(&format!("Update error: {}", e).into()),
            }
            store.busy().set(false);
        });
    };

    view! {
        <Show when=move || store.show_edit_popup().get()>
            <div class="modal-overlay">
                <div class="modal">
                    <h2>"Edit Item"</h2>
                    <input
                        type="text"
                        placeholder="Name"
                        prop:value=move || store.name().get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            store.name().set(input.value());
                        }
                    />
                    <input
                        type="text"
                        placeholder="Description"
                        prop:value=move || store.description().get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            store.description().set(input.value());
                        }
                    />
                    <ImageInput />
                    <button
                        class="save-btn"
                        prop:disabled=move || store.busy().get()
                        on:click=save_changes
                    >
                        "Save Changes"
                    </button>
                    <button class="cancel-btn" on:click=move |_| store_close_edit(&store)>
                        "Cancel"
                    </button>
                </div>
            </div>
        </Show>
    }
}
