//! Menu file intake with drag & drop support.
//!
//! Dropped and picked files both go through the attachment store, which
//! decides what is staged. The grid below the drop target renders the store.

use cardapio::{MediaKind, NotificationCenter};
use leptos::*;
use web_sys::{Event, FileList, HtmlInputElement};

use crate::components::notify;
use crate::types::{AttachmentCard, BrowserFile, UploadStore};
use crate::ACCEPTED_FILES;

#[component]
pub fn Dropzone(
    store: RwSignal<UploadStore>,
    notifications: RwSignal<NotificationCenter>,
) -> impl IntoView {
    let (is_dragging, set_is_dragging) = create_signal(false);
    let file_input = create_node_ref::<html::Input>();

    let admit = move |files: FileList| {
        let candidates: Vec<BrowserFile> = (0..files.length())
            .filter_map(|i| files.get(i))
            .map(BrowserFile)
            .collect();

        let refused = store
            .try_update(|s| s.admit(candidates))
            .unwrap_or_default();
        for notice in refused {
            notify(notifications, notice);
        }
    };

    let on_drop = move |ev: ev::DragEvent| {
        ev.prevent_default();
        set_is_dragging.set(false);
        if let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) {
            admit(files);
        }
    };

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(files) = input.files() {
            admit(files);
        }
        // allow picking the same file again
        input.set_value("");
    };

    let open_picker = move |_| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    let cards = move || {
        store.with(|s| s.iter().map(AttachmentCard::from_attachment).collect::<Vec<_>>())
    };

    view! {
        <div class="dropzone-wrapper">
            <div
                class="upload-section"
                class:dragging=move || is_dragging.get()
                on:dragover=move |ev: ev::DragEvent| {
                    ev.prevent_default();
                    set_is_dragging.set(true);
                }
                on:dragleave=move |_| set_is_dragging.set(false)
                on:drop=on_drop
                on:click=open_picker
            >
                <input
                    type="file"
                    multiple=true
                    accept=ACCEPTED_FILES
                    style="display:none"
                    node_ref=file_input
                    on:change=on_file_change
                />
                <div class="upload-icon">"📤"</div>
                <div class="upload-text">"Arraste sua arte aqui"</div>
                <div class="upload-hint">"Clique para selecionar imagens ou PDFs"</div>
            </div>

            <Show
                when=move || store.with(|s| !s.is_empty())
                fallback=|| view! { }
            >
                <div class="attachment-grid">
                    <For
                        each=cards
                        key=|card| card.id
                        children=move |card| view! { <AttachmentCell card=card store=store/> }
                    />
                </div>
            </Show>
        </div>
    }
}

#[component]
fn AttachmentCell(card: AttachmentCard, store: RwSignal<UploadStore>) -> impl IntoView {
    let id = card.id;

    let on_remove = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        store.update(|s| {
            if let Some(index) = s.position(id) {
                s.remove(index);
            }
        });
    };

    let thumbnail = match (card.kind, card.preview_url) {
        (MediaKind::Image, Some(url)) => view! {
            <img class="attachment-thumb" src=url alt="Preview"/>
        }
        .into_view(),
        _ => view! {
            <div class="attachment-doc">
                <span class="attachment-doc-icon">"📄"</span>
                <span class="attachment-doc-label">"Documento PDF"</span>
            </div>
        }
        .into_view(),
    };

    view! {
        <div class="attachment-cell">
            {thumbnail}
            <div class="attachment-overlay">
                <p class="attachment-name">{card.name}</p>
                <button class="attachment-remove" on:click=on_remove>"✕"</button>
            </div>
        </div>
    }
}
