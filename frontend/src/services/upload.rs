//! HTTP service for submitting a batch of files to the conversion server.

use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use web_sys::{File, FormData};

use crate::config::{DOWNLOAD_PATH, UPLOAD_ENDPOINT};
use crate::types::{CandidateFile, SubmissionOptions, SubmitError};

/// Per-file outcome reported by the server.
///
/// A file that failed conversion is first-class response data, not a
/// request-level error. The two variants carry disjoint field sets, which
/// is what `untagged` dispatches on; the wire's `success` boolean is
/// redundant and ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResultRow {
    /// The file was converted; the output is ready for download.
    Converted {
        original_filename: String,
        pages: u32,
        processing_time: f64,
        output_filename: String,
    },
    /// Conversion failed for this file only.
    Failed {
        original_filename: String,
        error: String,
    },
}

impl ResultRow {
    pub fn original_filename(&self) -> &str {
        match self {
            ResultRow::Converted { original_filename, .. } => original_filename,
            ResultRow::Failed { original_filename, .. } => original_filename,
        }
    }
}

/// Successful (2xx) response body: one row per submitted file, in the order
/// the server chose to report them.
#[derive(Debug, Clone, Deserialize)]
struct BatchResponse {
    results: Vec<ResultRow>,
}

/// Error (non-2xx) response body.
#[derive(Debug, Clone, Deserialize)]
struct ErrorResponse {
    error: Option<String>,
}

/// Navigational link for fetching a converted output file.
pub fn download_url(output_filename: &str) -> String {
    format!("{}/{}", DOWNLOAD_PATH, output_filename)
}

/// Submit the pending files plus the two scalar options as one multipart
/// POST.
///
/// This is the single suspension point in the app: one request per call,
/// no timeout, no retry, no cancellation. Every settlement path returns
/// through this `Result`, which is what lets the caller clear its busy
/// state unconditionally.
///
/// The caller guarantees `files` is non-empty; the empty-set precondition
/// is enforced by the controller before any network work starts.
pub async fn submit_batch(
    files: &[CandidateFile<File>],
    options: &SubmissionOptions,
) -> Result<Vec<ResultRow>, SubmitError> {
    let form_data = FormData::new()
        .map_err(|e| SubmitError::Network(format!("failed to create form data: {:?}", e)))?;

    // One repeated `files` part per pending file, original filename preserved.
    for file in files {
        form_data
            .append_with_blob_and_filename("files", &file.handle, &file.name)
            .map_err(|e| SubmitError::Network(format!("failed to append file: {:?}", e)))?;
    }
    form_data
        .append_with_str("format", options.format.code())
        .map_err(|e| SubmitError::Network(format!("failed to append format: {:?}", e)))?;
    form_data
        .append_with_str("language", options.language.code())
        .map_err(|e| SubmitError::Network(format!("failed to append language: {:?}", e)))?;

    let request = Request::post(UPLOAD_ENDPOINT)
        .body(form_data)
        .map_err(|e| SubmitError::Network(format!("failed to build request: {}", e)))?;

    let response = request
        .send()
        .await
        .map_err(|e| SubmitError::Network(e.to_string()))?;

    if !response.ok() {
        let status = response.status();
        let message = response
            .json::<ErrorResponse>()
            .await
            .ok()
            .and_then(|body| body.error)
            .unwrap_or_else(|| "Upload failed".to_string());
        return Err(SubmitError::Server { status, message });
    }

    let batch = response
        .json::<BatchResponse>()
        .await
        .map_err(|e| SubmitError::MalformedResponse(e.to_string()))?;

    Ok(batch.results)
}
