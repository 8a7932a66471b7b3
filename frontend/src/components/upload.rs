//! Presentation drop zone with click-to-browse.
//!
//! Hands every selection to [`zipslides::run_batch`] and folds the resulting
//! events into the shared store as they arrive, so each record and its toast
//! appear as soon as that file's delay is over.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Event, FileList, HtmlInputElement};
use zipslides::{run_batch, AppConfig, PresentationKind, MAX_FILE_SIZE};

use crate::components::Spinner;
use crate::services::{BrowserClock, BrowserFile};
use crate::store::{use_store, AppStore};

/// Start a batch for `list`. Ignored while a batch is already running.
fn start_batch(store: AppStore, list: FileList) {
    let files = BrowserFile::from_list(&list);
    if files.is_empty() {
        return;
    }

    if store.mutate(|s| s.begin_upload()) != Some(true) {
        log::debug!("Upload in progress, ignoring {} file(s)", files.len());
        return;
    }

    spawn_local(async move {
        let config = AppConfig::default();
        run_batch(&BrowserClock, &config, files, move |event| {
            if let Some(notice) = store.mutate(|s| s.apply_upload_event(event)).flatten() {
                store.notify(notice);
            }
        })
        .await;

        store.mutate(|s| s.finish_upload());
    });
}

#[component]
pub fn UploadZone() -> impl IntoView {
    let store = use_store();
    let (drag_active, set_drag_active) = create_signal(false);
    let is_uploading = move || store.state.with(|s| s.is_uploading());

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(list) = input.files() {
            start_batch(store, list);
        }
        // allow picking the same file again
        input.set_value("");
    };

    let on_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
        set_drag_active.set(true);
    };

    let on_drag_leave = move |_: DragEvent| set_drag_active.set(false);

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_drag_active.set(false);
        if let Some(list) = ev.data_transfer().and_then(|dt| dt.files()) {
            start_batch(store, list);
        }
    };

    let trigger_file_input = move |_| {
        if let Some(input) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("fileInput"))
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        {
            input.click();
        }
    };

    let max_mb = MAX_FILE_SIZE / (1024 * 1024);
    let formats = PresentationKind::ALL
        .iter()
        .map(|k| k.to_string())
        .collect::<Vec<_>>()
        .join(", ");

    view! {
        <div
            class="upload-zone"
            class:drag-active=move || drag_active.get()
            id="uploadZone"
            on:click=trigger_file_input
            on:dragover=on_drag_over
            on:dragleave=on_drag_leave
            on:drop=on_drop
        >
            <div class="upload-icon">"⬆"</div>
            <p class="upload-text">
                {move || if drag_active.get() { "Drop files here" } else { "Drag & drop files here" }}
            </p>
            <p class="upload-hint">"or click to browse files"</p>
            <p class="upload-hint small">
                {format!("Supports {} (Max {}MB per file)", formats, max_mb)}
            </p>
            <input
                type="file"
                id="fileInput"
                accept=PresentationKind::accept_attribute()
                multiple=true
                style="display:none"
                on:change=on_file_change
                on:click=|ev| ev.stop_propagation()
            />
        </div>

        <Show when=is_uploading fallback=|| view! {}>
            <div class="card upload-progress">
                <Spinner label="Uploading files..."/>
                <p class="upload-hint">"Please wait while we process your files"</p>
            </div>
        </Show>
    }
}
