//! Hero section component

use leptos::*;

use crate::config::APP_NAME;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>{APP_NAME} " - Document Converter"</h1>
            <p class="subtitle">
                "Turn scanned PDFs and images into text, Word, or Excel documents. "
                "Drop in a batch, pick a format and an OCR language, and download the results."
            </p>
        </div>
    }
}
