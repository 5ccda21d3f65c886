//! Uploaded resume decoding. Bytes in, plain text out; never an error.
//!
//! Anything that cannot be decoded (unknown extension, corrupt file, parser
//! panic) becomes an empty string, which the ranker treats as "skip".

pub mod docx;
pub mod pdf;

use std::path::Path;

use tracing::{debug, warn};

/// Supported upload formats, keyed by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    pub fn from_filename(filename: &str) -> Option<Self> {
        let extension = Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("pdf") => Some(DocumentKind::Pdf),
            Some("docx") => Some(DocumentKind::Docx),
            _ => None,
        }
    }
}

/// Synchronous decode. Failures are logged and yield `""`.
pub fn extract_text(bytes: &[u8], filename: &str) -> String {
    let Some(kind) = DocumentKind::from_filename(filename) else {
        debug!("Unsupported resume format: {filename}");
        return String::new();
    };

    let result = match kind {
        DocumentKind::Pdf => pdf::extract_pdf_text(bytes),
        DocumentKind::Docx => docx::extract_docx_text(bytes),
    };

    match result {
        Ok(text) => normalize_document_text(&text),
        Err(e) => {
            warn!("Error parsing file {filename}: {e}");
            String::new()
        }
    }
}

/// Runs [`extract_text`] on the blocking pool; PDF parsing is CPU-bound.
pub async fn decode_upload(bytes: bytes::Bytes, filename: &str) -> String {
    let name = filename.to_string();
    match tokio::task::spawn_blocking(move || extract_text(&bytes, &name)).await {
        Ok(text) => text,
        Err(e) => {
            warn!("Decode task for {filename} failed: {e}");
            String::new()
        }
    }
}

fn normalize_document_text(text: &str) -> String {
    let normalized = text
        .replace('\u{0000}', "")
        .replace("\r\n", "\n")
        .replace('\r', "\n");
    normalized.trim_start_matches('\u{FEFF}').to_string()
}
