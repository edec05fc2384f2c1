//! Item Form Component
//!
//! Form for creating new items with an optional image attachment.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::commands::{self, CreateItemArgs};
use crate::components::{alert, ImageInput};
use crate::context::AppContext;
use crate::store::{store_reset_draft, use_app_store, AppStateStoreFields};

/// Form for creating new items
#[component]
pub fn ItemForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let file_input = NodeRef::<html::Input>::new();

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let name = store.name().get_untracked();
        let description = store.description().get_untracked();
        if name.trim().is_empty() || description.trim().is_empty() {
            alert("Please fill in both name and description.");
            return;
        }

        // One mutation at a time
        if store.busy().get_untracked() {
            return;
        }
        store.busy().set(true);

        let image = store.pending_image().get_untracked();
        spawn_local(async move {
            let args = CreateItemArgs {
                name: &name,
                description: &description,
                image: image.as_ref().map(|img| img.data_url.as_str()),
                image_name: image.as_ref().map(|img| img.filename.as_str()),
            };
            match commands::create_item(&args).await {
                Ok(_) => {
                    store_reset_draft(&store);
                    if let Some(input) = file_input.get_untracked() {
                        input.set_value("");
                    }
                    ctx.reload();
                }
                // The draft stays intact so the user can retry
                Err(e) => web_sys::console::error_1(&format!("Add error: {}", e).into()),
            }
            store.busy().set(false);
        });
    };

    view! {
        <form class="item-form" on:submit=add_item>
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
            <ImageInput node_ref=file_input />
            <button type="submit" prop:disabled=move || store.busy().get()>
                "Add Item"
            </button>
        </form>
    }
}
