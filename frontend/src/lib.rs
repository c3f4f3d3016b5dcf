//! Docmill - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for the Docmill document-conversion service:
//! select or drop scanned documents, submit them for OCR conversion, and
//! download the converted output per file.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent (owns the UploadController signal)              │
//! │  ├── Hero (title, description)                              │
//! │  ├── UploadSection (drop surface, pending list, options)    │
//! │  └── ResultsSection (per-file outcomes, download links)     │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! All selection/submission state lives in one [`UploadController`]
//! behind a signal; components dispatch [`controller::UploadEvent`]s into
//! it and render from its fields. The conversion server itself is reached
//! only through [`services::upload::submit_batch`].
//!
//! # Modules
//!
//! - [`config`] - endpoint paths and intake limits
//! - [`types`] - candidate files, option enums, error types
//! - [`intake`] - validation and the pending-file set
//! - [`controller`] - the selection→submission→result state machine
//! - [`components`] - UI components (Hero, Upload, Results, Footer)
//! - [`services`] - conversion server communication

use leptos::*;
use leptos_router::*;
use web_sys::File;

// =============================================================================
// Module declarations
// =============================================================================

pub mod components;
pub mod config;
pub mod controller;
pub mod intake;
pub mod services;
pub mod types;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::*;

pub use types::{
    // Files
    CandidateFile,
    // Options
    OcrLanguage, OutputFormat, SubmissionOptions,
    // Errors
    IntakeError, SubmitError, UiError, ValidationError,
};

pub use controller::{Transition, UploadController, UploadEvent};
pub use intake::{validate, AddOutcome, PendingSet};

pub use components::*;
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    // Single owner of all upload state; the sections receive the signal
    // pair as props and never hold file state of their own.
    let (controller, set_controller) = create_signal(UploadController::<File>::new());

    view! {
        <div class="container">
            <Hero/>

            <UploadSection controller=controller set_controller=set_controller/>

            <ResultsSection controller=controller/>
        </div>

        <Footer/>
    }
}
