//! File selection and submission component.
//!
//! Owns the drop/browse surface, the hidden file picker, the pending-file
//! rows, the two option selects, and the submit button. Every interaction
//! is translated into an [`UploadEvent`] and dispatched into the controller
//! signal; this component performs no validation or bookkeeping of its own.

use leptos::*;
use web_sys::{DragEvent, Event, File, FileList, HtmlInputElement, SubmitEvent};

use crate::controller::{Transition, UploadController, UploadEvent};
use crate::services::upload::submit_batch;
use crate::types::{CandidateFile, OcrLanguage, OutputFormat, SubmissionOptions};

/// Wrap the browser handles of a picker/drop file list.
fn candidates_from(list: &FileList) -> Vec<CandidateFile<File>> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|file| CandidateFile {
            name: file.name(),
            size_bytes: file.size() as u64,
            handle: file,
        })
        .collect()
}

/// Human-readable file size for the pending rows.
fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    let exp = (((bytes as f64).ln() / 1024_f64.ln()).floor() as usize).min(UNITS.len() - 1);
    let value = bytes as f64 / 1024_f64.powi(exp as i32);
    format!("{} {}", (value * 100.0).round() / 100.0, UNITS[exp])
}

#[component]
pub fn UploadSection(
    controller: ReadSignal<UploadController<File>>,
    set_controller: WriteSignal<UploadController<File>>,
) -> impl IntoView {
    let (drag_over, set_drag_over) = create_signal(false);
    let (format, set_format) = create_signal(OutputFormat::default());
    let (language, set_language) = create_signal(OcrLanguage::default());

    let file_input_ref = create_node_ref::<html::Input>();

    let busy = move || controller.with(|c| c.is_busy());
    let error_message = move || controller.with(|c| c.error().map(ToString::to_string));
    let pending_rows = move || {
        controller.with(|c| {
            c.pending()
                .iter()
                .map(|f| (f.name.clone(), f.size_bytes))
                .collect::<Vec<_>>()
        })
    };

    let choose_files = move |batch: Vec<CandidateFile<File>>| {
        if !batch.is_empty() {
            set_controller.update(|c| {
                c.apply(UploadEvent::FilesChosen(batch));
            });
        }
    };

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(list) = input.files() {
            choose_files(candidates_from(&list));
        }
    };

    let open_picker = move |_| {
        if let Some(input) = file_input_ref.get() {
            input.click();
        }
    };

    let on_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
        set_drag_over.set(true);
    };

    let on_drag_leave = move |_| {
        set_drag_over.set(false);
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_drag_over.set(false);
        if let Some(list) = ev.data_transfer().and_then(|dt| dt.files()) {
            choose_files(candidates_from(&list));
        }
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let mut transition = Transition::None;
        set_controller.update(|c| transition = c.apply(UploadEvent::SubmitRequested));

        if let Transition::StartSubmission(files) = transition {
            // Options are read at submit time, not stored.
            let options = SubmissionOptions {
                format: format.get_untracked(),
                language: language.get_untracked(),
            };
            spawn_local(async move {
                let outcome = submit_batch(&files, &options).await;
                let succeeded = outcome.is_ok();
                // submit_batch returns through this Result on every
                // settlement path, so the busy flag always clears.
                set_controller.update(|c| {
                    c.apply(UploadEvent::ResponseReceived(outcome));
                });
                if succeeded {
                    // Let the same file be picked again after the set
                    // was cleared.
                    if let Some(input) = file_input_ref.get_untracked() {
                        input.set_value("");
                    }
                }
            });
        }
    };

    view! {
        <form class="upload-form" id="uploadForm" on:submit=on_submit>
            <div
                class="upload-area"
                id="uploadArea"
                class=("drag-over", move || drag_over.get())
                on:click=open_picker
                on:dragover=on_drag_over
                on:dragleave=on_drag_leave
                on:drop=on_drop
            >
                <div class="upload-icon">"📄"</div>
                <div class="upload-text">"Drag & drop documents here"</div>
                <div class="upload-hint">"or click to browse"</div>
                <div class="upload-hint mt-20">"PDF, PNG, JPG, JPEG, TIFF, BMP • up to 50MB each"</div>
            </div>

            <input
                type="file"
                id="fileInput"
                multiple=true
                accept=".pdf,.png,.jpg,.jpeg,.tiff,.bmp"
                style="display:none"
                node_ref=file_input_ref
                on:change=on_file_change
            />

            <Show
                when=move || !pending_rows().is_empty()
                fallback=|| view! { }
            >
                <div class="selected-files" id="selectedFiles">
                    <For
                        each=move || pending_rows().into_iter().enumerate()
                        key=|(idx, row)| (*idx, row.clone())
                        children=move |(idx, (name, size_bytes))| {
                            view! {
                                <div class="file-item">
                                    <div class="file-info">
                                        <span class="file-icon">"📄"</span>
                                        <div>
                                            <div class="file-name">{name}</div>
                                            <span class="file-size">{format_file_size(size_bytes)}</span>
                                        </div>
                                    </div>
                                    <button
                                        type="button"
                                        class="remove-file"
                                        disabled=busy
                                        on:click=move |_| {
                                            set_controller.update(|c| {
                                                c.apply(UploadEvent::FileRemoved(idx));
                                            });
                                        }
                                    >
                                        "✕"
                                    </button>
                                </div>
                            }
                        }
                    />
                </div>
            </Show>

            <div class="options-row">
                <label class="option-label">
                    "Output format"
                    <select
                        class="format-select"
                        id="formatSelect"
                        on:change=move |ev| {
                            if let Some(f) = OutputFormat::from_code(&event_target_value(&ev)) {
                                set_format.set(f);
                            }
                        }
                    >
                        {OutputFormat::ALL
                            .iter()
                            .map(|f| {
                                let f = *f;
                                view! {
                                    <option value=f.code() selected=move || format.get() == f>
                                        {f.label()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </label>
                <label class="option-label">
                    "OCR language"
                    <select
                        class="language-select"
                        id="languageSelect"
                        on:change=move |ev| {
                            if let Some(l) = OcrLanguage::from_code(&event_target_value(&ev)) {
                                set_language.set(l);
                            }
                        }
                    >
                        {OcrLanguage::ALL
                            .iter()
                            .map(|l| {
                                let l = *l;
                                view! {
                                    <option value=l.code() selected=move || language.get() == l>
                                        {l.label()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </label>
            </div>

            <Show
                when=move || error_message().is_some()
                fallback=|| view! { }
            >
                <div class="error-message" id="errorMessage">
                    {move || error_message().unwrap_or_default()}
                </div>
            </Show>

            <button type="submit" class="submit-btn" id="submitBtn" disabled=busy>
                <span class="btn-text" style:display=move || if busy() { "none" } else { "block" }>
                    "Convert"
                </span>
                <span class="btn-loader" style:display=move || if busy() { "flex" } else { "none" }>
                    "Converting…"
                </span>
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::format_file_size;

    #[test]
    fn formats_byte_counts_like_the_results_panel() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(512), "512 Bytes");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(50 * 1024 * 1024), "50 MB");
        assert_eq!(format_file_size(3 * 1024 * 1024 * 1024), "3 GB");
    }
}
