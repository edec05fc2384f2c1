//! Curio Frontend App
//!
//! Main application component: create form, item list and edit modal over
//! the shared store.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands;
use crate::components::{EditModal, ItemForm, ItemList};
use crate::context::AppContext;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    // Provide state to all children
    provide_context(store);
    provide_context(AppContext::new((reload_trigger, set_reload_trigger)));

    // Full re-fetch on mount and after every successful mutation
    Effect::new(move |_| {
        let _ = reload_trigger.get();
        spawn_local(async move {
            match commands::list_items().await {
                Ok(loaded) => store.items().set(loaded),
                // The stale list stays visible when the fetch fails
                Err(e) => web_sys::console::error_1(&format!("Fetch error: {}", e).into()),
            }
        });
    });

    view! {
        <div class="app-container">
            <h1>"Curio"</h1>

            <ItemForm />

            <ItemList />

            <p class="item-count">{move || format!("{} items", store.items().get().len())}</p>

            <EditModal />
        </div>
    }
}
