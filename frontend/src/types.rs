//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **File Types** - candidate files awaiting upload
//! - **Option Types** - output format and OCR language selections
//! - **Error Types** - frontend error handling

use std::fmt;

use crate::config::ALLOWED_EXTENSIONS;

// =============================================================================
// File Types
// =============================================================================

/// A user-selected or dropped file awaiting validation and upload.
///
/// Generic over the opaque browser handle so the selection logic can be
/// exercised without a live DOM: the app instantiates it with
/// [`web_sys::File`], tests with `()`.
#[derive(Clone, Debug)]
pub struct CandidateFile<H> {
    /// Original filename as reported by the picker or drop event.
    pub name: String,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Browser-owned handle to the underlying binary data.
    pub handle: H,
}

impl<H> CandidateFile<H> {
    /// Identity used for de-duplication: the `(name, size)` pair,
    /// not a content hash.
    pub fn identity(&self) -> (&str, u64) {
        (&self.name, self.size_bytes)
    }

    /// Extension after the last `.`, lowercased.
    ///
    /// A dotless filename yields the whole name, which never matches the
    /// allow-set and is rejected as an unsupported type downstream.
    pub fn extension(&self) -> String {
        self.name
            .rsplit('.')
            .next()
            .unwrap_or(&self.name)
            .to_ascii_lowercase()
    }
}

// =============================================================================
// Option Types
// =============================================================================

/// Output format the server should convert to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Txt,
    Docx,
    Xlsx,
}

impl OutputFormat {
    /// All selectable formats, in display order.
    pub const ALL: &'static [OutputFormat] =
        &[OutputFormat::Txt, OutputFormat::Docx, OutputFormat::Xlsx];

    /// Wire code sent in the `format` form field.
    pub fn code(&self) -> &'static str {
        match self {
            OutputFormat::Txt => "txt",
            OutputFormat::Docx => "docx",
            OutputFormat::Xlsx => "xlsx",
        }
    }

    /// Human-readable label for the select control.
    pub fn label(&self) -> &'static str {
        match self {
            OutputFormat::Txt => "Plain text (.txt)",
            OutputFormat::Docx => "Word document (.docx)",
            OutputFormat::Xlsx => "Excel spreadsheet (.xlsx)",
        }
    }

    /// Parse a wire code back into a format.
    pub fn from_code(code: &str) -> Option<OutputFormat> {
        Self::ALL.iter().copied().find(|f| f.code() == code)
    }
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Txt
    }
}

/// OCR processing language supported by the server.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OcrLanguage {
    English,
    Spanish,
    French,
    German,
    Italian,
    Portuguese,
    Russian,
    ChineseSimplified,
    Japanese,
    Arabic,
    Hindi,
}

impl OcrLanguage {
    /// All selectable languages, in display order.
    pub const ALL: &'static [OcrLanguage] = &[
        OcrLanguage::English,
        OcrLanguage::Spanish,
        OcrLanguage::French,
        OcrLanguage::German,
        OcrLanguage::Italian,
        OcrLanguage::Portuguese,
        OcrLanguage::Russian,
        OcrLanguage::ChineseSimplified,
        OcrLanguage::Japanese,
        OcrLanguage::Arabic,
        OcrLanguage::Hindi,
    ];

    /// Tesseract language code sent in the `language` form field.
    pub fn code(&self) -> &'static str {
        match self {
            OcrLanguage::English => "eng",
            OcrLanguage::Spanish => "spa",
            OcrLanguage::French => "fra",
            OcrLanguage::German => "deu",
            OcrLanguage::Italian => "ita",
            OcrLanguage::Portuguese => "por",
            OcrLanguage::Russian => "rus",
            OcrLanguage::ChineseSimplified => "chi_sim",
            OcrLanguage::Japanese => "jpn",
            OcrLanguage::Arabic => "ara",
            OcrLanguage::Hindi => "hin",
        }
    }

    /// Human-readable label for the select control.
    pub fn label(&self) -> &'static str {
        match self {
            OcrLanguage::English => "English",
            OcrLanguage::Spanish => "Spanish",
            OcrLanguage::French => "French",
            OcrLanguage::German => "German",
            OcrLanguage::Italian => "Italian",
            OcrLanguage::Portuguese => "Portuguese",
            OcrLanguage::Russian => "Russian",
            OcrLanguage::ChineseSimplified => "Chinese (Simplified)",
            OcrLanguage::Japanese => "Japanese",
            OcrLanguage::Arabic => "Arabic",
            OcrLanguage::Hindi => "Hindi",
        }
    }

    /// Parse a wire code back into a language.
    pub fn from_code(code: &str) -> Option<OcrLanguage> {
        Self::ALL.iter().copied().find(|l| l.code() == code)
    }
}

impl Default for OcrLanguage {
    fn default() -> Self {
        OcrLanguage::English
    }
}

/// The two scalar options submitted alongside the files.
///
/// Read from the select controls at submit time; never stored between
/// submissions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SubmissionOptions {
    pub format: OutputFormat,
    pub language: OcrLanguage,
}

// =============================================================================
// Error Types
// =============================================================================

/// Per-file validation failure. Recoverable: a rejected file is skipped,
/// the rest of the batch is still processed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// Extension not in the allowed set.
    UnsupportedType { filename: String },
    /// File exceeds [`crate::config::MAX_FILE_SIZE`].
    TooLarge { filename: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::UnsupportedType { filename } => write!(
                f,
                "Invalid file type: {}. Allowed types: {}",
                filename,
                ALLOWED_EXTENSIONS.join(", ")
            ),
            ValidationError::TooLarge { filename } => write!(
                f,
                "File too large: {}. Maximum size is 50MB.",
                filename
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Misuse of the pending set: removal index outside the current bounds.
///
/// Only reachable through broken UI wiring, so it is logged loudly rather
/// than shown to the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IntakeError {
    IndexOutOfRange { index: usize, len: usize },
}

impl fmt::Display for IntakeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntakeError::IndexOutOfRange { index, len } => {
                write!(f, "remove index {} out of range (pending set has {} files)", index, len)
            }
        }
    }
}

impl std::error::Error for IntakeError {}

/// Submission failure, either a local precondition or a request-level error.
///
/// Per-file conversion failures reported by the server are NOT errors at
/// this level; they arrive as data inside a successful batch response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitError {
    /// Submit requested with an empty pending set. No request is made.
    NoFilesSelected,
    /// Transport failure: the request never produced an HTTP response.
    Network(String),
    /// Non-2xx status; `message` is the server's error field when present.
    Server { status: u16, message: String },
    /// 2xx status but the body did not decode as a batch result.
    MalformedResponse(String),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::NoFilesSelected => {
                write!(f, "Please select at least one file to convert")
            }
            SubmitError::Network(msg) => write!(f, "Upload failed: {}", msg),
            // The server's message is surfaced verbatim.
            SubmitError::Server { message, .. } => write!(f, "{}", message),
            SubmitError::MalformedResponse(msg) => {
                write!(f, "Upload failed: invalid server response ({})", msg)
            }
        }
    }
}

impl std::error::Error for SubmitError {}

/// What the single user-visible error slot can hold.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiError {
    Validation(ValidationError),
    Submission(SubmitError),
}

impl fmt::Display for UiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UiError::Validation(e) => e.fmt(f),
            UiError::Submission(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for UiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_is_lowercased_suffix() {
        let f = CandidateFile { name: "Scan.PDF".to_string(), size_bytes: 10, handle: () };
        assert_eq!(f.extension(), "pdf");
    }

    #[test]
    fn dotless_name_yields_whole_name() {
        let f = CandidateFile { name: "README".to_string(), size_bytes: 10, handle: () };
        assert_eq!(f.extension(), "readme");
    }

    #[test]
    fn option_codes_round_trip() {
        for format in OutputFormat::ALL {
            assert_eq!(OutputFormat::from_code(format.code()), Some(*format));
        }
        for language in OcrLanguage::ALL {
            assert_eq!(OcrLanguage::from_code(language.code()), Some(*language));
        }
        assert_eq!(OutputFormat::from_code("gif"), None);
        assert_eq!(OcrLanguage::from_code("klingon"), None);
    }

    #[test]
    fn validation_messages_name_the_file() {
        let err = ValidationError::UnsupportedType { filename: "notes.doc".to_string() };
        assert!(err.to_string().contains("notes.doc"));
        assert!(err.to_string().contains("pdf, png, jpg, jpeg, tiff, bmp"));
    }
}
