//! Document upload screen: per-year buckets fed by the native file picker.
//!
//! Only file metadata (name, size, MIME type) is read from the selected
//! handles; contents never leave the browser's file objects and nothing
//! is sent anywhere.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, FileList, HtmlInputElement};

use super::toast::push_toast;
use crate::state::{add_year, append_documents, format_size, new_id, remove_document, seed_years};
use crate::{Document, Toast, YearData, ACCEPTED_FILE_TYPES};

#[component]
pub fn DocumentUpload(set_toasts: WriteSignal<Vec<Toast>>) -> impl IntoView {
    let (yearly_data, set_yearly_data) = create_signal(seed_years());

    let on_add_year = move |_| {
        let mut outcome = None;
        set_yearly_data.update(|years| outcome = Some(add_year(years)));
        match outcome {
            Some(Ok(year)) => log::info!("Added year bucket {}", year),
            Some(Err(e)) => {
                log::warn!("Add year refused: {}", e);
                push_toast(set_toasts, "Cannot add year", &e.to_string());
            }
            None => {}
        }
    };

    view! {
        <div class="upload-screen">
            <div class="upload-screen-header">
                <h2>"Document Upload"</h2>
                <button class="btn btn-secondary" on:click=on_add_year>
                    "📅 Add Year"
                </button>
            </div>

            <div class="year-grid">
                <For
                    each=move || yearly_data.get()
                    key=|year_data| year_data.year.clone()
                    children=move |year_data: YearData| {
                        let year = year_data.year.clone();
                        let input_id = format!("file-{}", year);

                        // Re-read the owning signal so the bucket contents
                        // stay live after uploads and removals.
                        let documents = {
                            let year = year.clone();
                            move || {
                                yearly_data
                                    .get()
                                    .into_iter()
                                    .find(|y| y.year == year)
                                    .map(|y| y.documents)
                                    .unwrap_or_default()
                            }
                        };

                        let on_file_change = {
                            let year = year.clone();
                            move |ev: Event| {
                                let input: HtmlInputElement = event_target(&ev);
                                if let Some(files) = input.files() {
                                    let new_documents = documents_from_files(&files);
                                    if new_documents.is_empty() {
                                        return;
                                    }
                                    let count = new_documents.len();
                                    set_yearly_data
                                        .update(|years| append_documents(years, &year, new_documents));
                                    push_toast(
                                        set_toasts,
                                        "Documents uploaded",
                                        &format!("{} document(s) uploaded for {}", count, year),
                                    );
                                }
                            }
                        };

                        // The visible button forwards the click to the
                        // hidden input for this year.
                        let trigger_file_input = {
                            let input_id = input_id.clone();
                            move |_| {
                                if let Some(window) = web_sys::window() {
                                    if let Some(document) = window.document() {
                                        if let Some(input) = document.get_element_by_id(&input_id) {
                                            if let Some(html_input) =
                                                input.dyn_ref::<HtmlInputElement>()
                                            {
                                                html_input.click();
                                            }
                                        }
                                    }
                                }
                            }
                        };

                        let count_badge = {
                            let documents = documents.clone();
                            move || {
                                let count = documents().len();
                                if count == 1 {
                                    "1 document".to_string()
                                } else {
                                    format!("{} documents", count)
                                }
                            }
                        };

                        let is_empty = {
                            let documents = documents.clone();
                            move || documents().is_empty()
                        };

                        view! {
                            <div class="year-card">
                                <div class="year-card-header">
                                    <div class="year-card-title">
                                        <h3>{year.clone()}</h3>
                                        <span class="year-badge">{count_badge}</span>
                                    </div>

                                    <input
                                        type="file"
                                        multiple=true
                                        accept=ACCEPTED_FILE_TYPES
                                        id=input_id.clone()
                                        style="display:none"
                                        on:change=on_file_change
                                    />
                                    <button class="btn btn-secondary btn-sm" on:click=trigger_file_input>
                                        "📤 Upload Documents"
                                    </button>
                                </div>

                                <Show when=is_empty.clone() fallback=|| view! {}>
                                    <div class="year-empty">
                                        <div class="year-empty-icon">"📄"</div>
                                        <p>{format!("No documents uploaded for {}", year)}</p>
                                        <p class="year-empty-hint">
                                            "Upload PDF, DOC, DOCX, JPG, or PNG files"
                                        </p>
                                    </div>
                                </Show>

                                <div class="document-list">
                                    <For
                                        each={
                                            let documents = documents.clone();
                                            move || documents()
                                        }
                                        key=|doc| doc.id.clone()
                                        children={
                                            let year = year_data.year.clone();
                                            move |doc: Document| {
                                                let on_remove = {
                                                    let year = year.clone();
                                                    let doc_id = doc.id.clone();
                                                    move |_| {
                                                        set_yearly_data.update(|years| {
                                                            remove_document(years, &year, &doc_id)
                                                        });
                                                    }
                                                };

                                                view! {
                                                    <div class="document-row">
                                                        <div class="document-info">
                                                            <span class="document-icon">"📄"</span>
                                                            <div>
                                                                <p class="document-name">{doc.name.clone()}</p>
                                                                <p class="document-size">{doc.size.clone()}</p>
                                                            </div>
                                                        </div>
                                                        <button class="document-remove" on:click=on_remove>
                                                            "✕"
                                                        </button>
                                                    </div>
                                                }
                                            }
                                        }
                                    />
                                </div>
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}

/// Build document records from a native file selection.
///
/// Reads only metadata from each handle. The MIME type comes over
/// verbatim and may be empty for types the browser does not recognize.
fn documents_from_files(files: &FileList) -> Vec<Document> {
    let mut documents = Vec::new();
    for index in 0..files.length() {
        if let Some(file) = files.get(index) {
            documents.push(Document {
                id: new_id(),
                name: file.name(),
                size: format_size(file.size()),
                mime_type: file.type_(),
            });
        }
    }
    documents
}
