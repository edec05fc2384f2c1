//! Image Input Component
//!
//! File input that reads the picked image into the shared draft as a data
//! URL, ready to cross the IPC boundary.

use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::store::{use_app_store, AppStateStoreFields, PendingImage};

#[component]
pub fn ImageInput(#[prop(optional)] node_ref: NodeRef<html::Input>) -> impl IntoView {
    let store = use_app_store();

    let on_change = move |ev: web_sys::Event| {
        let target = ev.target().unwrap();
        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();

        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            store.pending_image().set(None);
            return;
        };

        let filename = file.name();
        let reader = web_sys::FileReader::new().unwrap();
        let handle = reader.clone();
        let onload = Closure::once_into_js(move || {
            match handle.result().ok().and_then(|value| value.as_string()) {
                Some(data_url) => {
                    store
                        .pending_image()
                        .set(Some(PendingImage { data_url, filename }));
                }
                None => {
                    web_sys::console::error_1(&"Image read error: no data URL".into());
                }
            }
        });
        reader.set_onload(Some(onload.unchecked_ref()));
        if let Err(e) = reader.read_as_data_url(&file) {
            web_sys::console::error_1(&e);
        }
    };

    view! {
        <input
            type="file"
            accept="image/*"
            node_ref=node_ref
            on:change=on_change
        />
    }
}
