//! Per-file conversion results panel.
//!
//! Renders exactly one row per result the server reported, in the server's
//! order: a download link for converted files, the error text for failed
//! ones. Filenames and error messages go through Leptos text nodes, so
//! they are always literal text and never interpreted as markup.

use leptos::*;
use web_sys::{File, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::controller::UploadController;
use crate::services::upload::{download_url, ResultRow};

#[component]
pub fn ResultsSection(controller: ReadSignal<UploadController<File>>) -> impl IntoView {
    let results = move || controller.with(|c| c.results().map(<[ResultRow]>::to_vec));

    let section_ref = create_node_ref::<html::Div>();

    // Bring the panel into view when a new batch lands. Purely cosmetic:
    // a no-op when the section is not mounted.
    create_effect(move |_| {
        if results().is_some() {
            if let Some(section) = section_ref.get() {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Nearest);
                section.scroll_into_view_with_scroll_into_view_options(&options);
            }
        }
    });

    view! {
        <Show
            when=move || results().is_some()
            fallback=|| view! { }
        >
            <div class="results-section" id="resultsSection" node_ref=section_ref>
                <h2 class="results-title">"Conversion Results"</h2>
                <div class="results-container" id="resultsContainer">
                    <For
                        each=move || results().unwrap_or_default().into_iter().enumerate()
                        key=|(idx, _)| *idx
                        children=move |(_, row)| {
                            match row {
                                ResultRow::Converted {
                                    original_filename,
                                    pages,
                                    processing_time,
                                    output_filename,
                                } => view! {
                                    <div class="result-item">
                                        <div class="result-info">
                                            <div class="result-filename">"✓ " {original_filename}</div>
                                            <div class="result-meta">
                                                {pages} " page(s) • " {processing_time} "s"
                                            </div>
                                        </div>
                                        <a href=download_url(&output_filename) class="download-btn">
                                            "Download"
                                        </a>
                                    </div>
                                }
                                .into_view(),
                                ResultRow::Failed { original_filename, error } => view! {
                                    <div class="result-item error">
                                        <div class="result-info">
                                            <div class="result-filename">"✗ " {original_filename}</div>
                                            <div class="result-meta">{error}</div>
                                        </div>
                                    </div>
                                }
                                .into_view(),
                            }
                        }
                    />
                </div>
            </div>
        </Show>
    }
}
