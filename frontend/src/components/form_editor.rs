//! Form editor screen: the six seeded fields with an edit/view toggle.
//!
//! Save and Download are presentational endpoints. Nothing is persisted
//! and no file is produced; the only durable effect of Save is flipping
//! the edit flag back off.

use leptos::*;
use web_sys::Event;

use super::toast::push_toast;
use crate::state::{seed_fields, update_field};
use crate::{FieldKind, FormField, Toast};

#[component]
pub fn FormEditor(set_toasts: WriteSignal<Vec<Toast>>) -> impl IntoView {
    let (form_fields, set_form_fields) = create_signal(seed_fields());
    let (is_editing, set_is_editing) = create_signal(false);

    let on_save = move |_| {
        set_is_editing.set(false);
        push_toast(
            set_toasts,
            "Form saved",
            "All changes have been saved successfully",
        );
    };

    let on_download = move |_| {
        // No file is generated; the snapshot only goes to the debug log.
        if let Ok(payload) = serde_json::to_string(&form_fields.get()) {
            log::debug!("Form payload prepared for download: {}", payload);
        }
        push_toast(
            set_toasts,
            "Download started",
            "Your filled form is being prepared for download",
        );
    };

    view! {
        <div class="editor-screen">
            <div class="editor-header">
                <div>
                    <h2>"Form Editor"</h2>
                    <p class="editor-subtitle">"Review and edit extracted information"</p>
                </div>

                <div class="editor-actions">
                    <Show
                        when=move || is_editing.get()
                        fallback=move || {
                            view! {
                                <button
                                    class="btn btn-secondary"
                                    on:click=move |_| set_is_editing.set(true)
                                >
                                    "✏️ Edit Form"
                                </button>
                            }
                        }
                    >
                        <button class="btn btn-success" on:click=on_save>
                            "💾 Save Changes"
                        </button>
                    </Show>
                    <button class="btn btn-primary" on:click=on_download>
                        "⬇️ Download Form"
                    </button>
                </div>
            </div>

            <div class="editor-card">
                <div class="editor-grid">
                    <For
                        each=move || form_fields.get()
                        key=|field| field.id.clone()
                        children=move |field: FormField| {
                            // Re-read the owning signal so edits show up
                            // without re-keying the row.
                            let value = {
                                let id = field.id.clone();
                                move || {
                                    form_fields
                                        .get()
                                        .into_iter()
                                        .find(|f| f.id == id)
                                        .map(|f| f.value)
                                        .unwrap_or_default()
                                }
                            };

                            let on_input = {
                                let id = field.id.clone();
                                move |ev: Event| {
                                    let value = event_target_value(&ev);
                                    set_form_fields.update(|fields| update_field(fields, &id, &value));
                                }
                            };

                            let disabled = move || !is_editing.get();

                            let input_view = match field.kind {
                                FieldKind::Textarea => view! {
                                    <textarea
                                        rows="3"
                                        id=field.id.clone()
                                        class="field-input"
                                        class:editing=move || is_editing.get()
                                        prop:value=value
                                        disabled=disabled
                                        on:input=on_input
                                    ></textarea>
                                }
                                .into_view(),
                                kind => view! {
                                    <input
                                        type=kind.input_type()
                                        id=field.id.clone()
                                        class="field-input"
                                        class:editing=move || is_editing.get()
                                        prop:value=value
                                        disabled=disabled
                                        on:input=on_input
                                    />
                                }
                                .into_view(),
                            };

                            view! {
                                <div class="form-field">
                                    <div class="form-field-header">
                                        <label for=field.id.clone()>{field.label.clone()}</label>
                                        {field
                                            .extracted_from
                                            .clone()
                                            .map(|source| {
                                                view! {
                                                    <span class="field-source">"📄 " {source}</span>
                                                }
                                            })}
                                    </div>
                                    {input_view}
                                </div>
                            }
                        }
                    />
                </div>

                <Show when=move || is_editing.get() fallback=|| view! {}>
                    <div class="editor-tip">
                        <p>
                            <strong>"Tip:"</strong>
                            " Review all extracted information carefully before downloading "
                            "your form. You can modify any field as needed."
                        </p>
                    </div>
                </Show>
            </div>
        </div>
    }
}
