//! Application configuration.
//!
//! Centralized configuration for the Docmill frontend. The app is served
//! from the same origin as the conversion API, so endpoint paths are
//! origin-relative.

/// Upload endpoint on the conversion server.
pub const UPLOAD_ENDPOINT: &str = "/upload";

/// Base path for fetching converted output files.
pub const DOWNLOAD_PATH: &str = "/download";

/// Maximum file size accepted for upload (in bytes).
///
/// 50 MB limit, matching the server's `MAX_CONTENT_LENGTH`.
pub const MAX_FILE_SIZE: u64 = 50 * 1024 * 1024;

/// File extensions the conversion server accepts.
pub const ALLOWED_EXTENSIONS: &[&str] = &["pdf", "png", "jpg", "jpeg", "tiff", "bmp"];

/// Application name shown in the page chrome.
pub const APP_NAME: &str = "Docmill";
