//! Item List Component
//!
//! Renders the mirrored items with their edit/delete actions.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::DeleteConfirmButton;
use crate::context::AppContext;
use crate::models::Item;
use crate::store::{store_begin_edit, use_app_store, AppStateStoreFields};

#[component]
pub fn ItemList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let delete_item = move |item: Item| {
        if store.busy().get_untracked() {
            return;
        }
        store.busy().set(true);

        spawn_local(async move {
            match commands::delete_item(&item.id, item.image_id.as_deref()).await {
                // Reload regardless of how the image deletion went
                Ok(()) => ctx.reload(),
                Err(e) => web_sys::console::error_1(&format!("Delete error: {}", e).into()),
            }
            store.busy().set(false);
        });
    };

    view! {
        <ul class="item-list">
            <For
                each=move || store.items().get()
                key=|item| item.id.clone()
                children=move |item| {
                    let edit_item = item.clone();
                    let remove_item = item.clone();
                    view! {
                        <li class="item-row">
                            <div class="item-body">
                                <strong class="item-name">{item.name.clone()}</strong>
                                <p class="item-description">{item.description.clone()}</p>
                                {item.image_url.clone().map(|url| view! {
                                    <img class="item-image" src=url alt=item.name.clone() />
                                })}
                            </div>
                            <div class="item-actions">
                                <button
                                    class="edit-btn"
                                    on:click=move |_| store_begin_edit(&store, edit_item.clone())
                                >
                                    "Edit"
                                </button>
                                <DeleteConfirmButton
                                    button_class="delete-btn"
                                    on_confirm=Callback::new(move |_| delete_item(remove_item.clone()))
                                />
                            </div>
                        </li>
                    }
                }
            />
        </ul>
    }
}
