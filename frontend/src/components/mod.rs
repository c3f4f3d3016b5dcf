//! UI Components for the Docmill application.
//!
//! # Layout Components
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadSection`] - file selection, pending list, options, submission
//! - [`ResultsSection`] - per-file conversion outcomes with download links

mod footer;
mod hero;
mod results;
mod upload;

pub use footer::*;
pub use hero::*;
pub use results::*;
pub use upload::*;
