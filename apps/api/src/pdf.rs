//! PDF → plain text for resume uploads.

use thiserror::Error;
use tracing::debug;

pub const PDF_CONTENT_TYPE: &str = "application/pdf";

#[derive(Debug, Error)]
pub enum PdfError {
    #[error("PDF file is required")]
    Missing,

    #[error("PDF file is required")]
    Empty,

    #[error("File must be a PDF")]
    NotPdf,

    #[error("PDF extraction failed: {0}")]
    Extraction(String),
}

/// An uploaded file as received from a multipart form.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub content_type: Option<String>,
    pub bytes: bytes::Bytes,
}

/// Checks the upload is a non-empty PDF without parsing it.
pub fn validate_upload(file: Option<&UploadedFile>) -> Result<&UploadedFile, PdfError> {
    let file = file.ok_or(PdfError::Missing)?;
    if file.bytes.is_empty() {
        return Err(PdfError::Empty);
    }
    let is_pdf = file
        .content_type
        .as_deref()
        .map(|ct| ct.trim().eq_ignore_ascii_case(PDF_CONTENT_TYPE))
        .unwrap_or(false);
    if !is_pdf {
        return Err(PdfError::NotPdf);
    }
    Ok(file)
}

/// Extracts text from an uploaded PDF.
///
/// Parsing runs on the blocking pool; a panic inside the parser is reported
/// as [`PdfError::Extraction`].
pub async fn extract_text(file: Option<&UploadedFile>) -> Result<String, PdfError> {
    let file = validate_upload(file)?;
    let bytes = file.bytes.clone();

    let text = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
        .await
        .map_err(|e| PdfError::Extraction(format!("extraction task failed: {e}")))?
        .map_err(|e| PdfError::Extraction(format!("{e:?}")))?;

    debug!("Extracted {} characters from PDF upload", text.len());
    Ok(text)
}
