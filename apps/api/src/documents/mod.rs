//! Text extraction for uploaded DOCX and PDF documents.

use bytes::Bytes;
use thiserror::Error;
use tracing::debug;

pub mod docx;
pub mod pdf;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Could not read DOCX document '{name}': {reason}")]
    Docx { name: String, reason: String },

    #[error("Could not read PDF document '{name}': {reason}")]
    Pdf { name: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Docx,
    Pdf,
}

impl DocumentKind {
    /// Word-processing media types are DOCX, everything else is treated as PDF.
    /// Without a media type the file extension decides.
    pub fn detect(content_type: Option<&str>, file_name: &str) -> Self {
        match content_type {
            Some(ct) if !ct.is_empty() && ct != "application/octet-stream" => {
                if ct.contains("wordprocessingml") {
                    DocumentKind::Docx
                } else {
                    DocumentKind::Pdf
                }
            }
            _ if file_name.to_ascii_lowercase().ends_with(".docx") => DocumentKind::Docx,
            _ => DocumentKind::Pdf,
        }
    }
}

/// A document received from the client, not yet converted to text.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub name: String,
    pub kind: DocumentKind,
    pub data: Bytes,
}

impl UploadedDocument {
    pub fn new(name: impl Into<String>, content_type: Option<&str>, data: Bytes) -> Self {
        let name = name.into();
        let kind = DocumentKind::detect(content_type, &name);
        Self { name, kind, data }
    }
}

/// Converts a document to plain text.
pub fn extract_text(doc: &UploadedDocument) -> Result<String, DocumentError> {
    let text = match doc.kind {
        DocumentKind::Docx => docx::extract_docx_text(&doc.data).map_err(|reason| {
            DocumentError::Docx {
                name: doc.name.clone(),
                reason,
            }
        })?,
        DocumentKind::Pdf => {
            pdf::extract_pdf_text(&doc.data).map_err(|reason| DocumentError::Pdf {
                name: doc.name.clone(),
                reason,
            })?
        }
    };

    debug!(
        "Extracted {} chars from '{}' ({:?})",
        text.len(),
        doc.name,
        doc.kind
    );
    Ok(text)
}
