//! Resume attachment: turns an uploaded file into the base64 inline payload the
//! generation service accepts.
//!
//! File contents are never inspected. Oversized or malformed documents go
//! through unchanged; the service decides what it can read.

use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use thiserror::Error;
use tokio::io::{AsyncRead, AsyncReadExt};

const GENERIC_BINARY_MIME: &str = "application/octet-stream";

#[derive(Debug, Error)]
pub enum AttachmentError {
    #[error("Failed to read attachment: {0}")]
    Io(#[from] std::io::Error),

    #[error("Attachment '{0}' is empty")]
    Empty(String),
}

/// A resume ready to send. Mime type and payload are always set together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeAttachment {
    /// Display only. Never sent to the generation service.
    pub file_name: String,
    pub mime_type: String,
    /// Standard base64 (with padding).
    pub payload: String,
}

/// Reads `reader` to the end and encodes it.
///
/// `declared_mime` is what the browser reported, which is frequently empty or
/// `application/octet-stream` for Markdown. In that case the type is inferred
/// from the file extension when it is a known one. Any other file is still
/// sent, as `application/octet-stream`.
pub async fn encode_attachment<R>(
    mut reader: R,
    file_name: &str,
    declared_mime: Option<&str>,
) -> Result<ResumeAttachment, AttachmentError>
where
    R: AsyncRead + Unpin,
{
    let mime_type = resolve_mime_type(file_name, declared_mime);

    let mut raw = Vec::new();
    reader.read_to_end(&mut raw).await?;

    if raw.is_empty() {
        return Err(AttachmentError::Empty(file_name.to_string()));
    }

    Ok(ResumeAttachment {
        file_name: file_name.to_string(),
        mime_type,
        payload: STANDARD.encode(&raw),
    })
}

fn resolve_mime_type(file_name: &str, declared: Option<&str>) -> String {
    if let Some(declared) = declared
        .map(str::trim)
        .filter(|m| !m.is_empty() && *m != GENERIC_BINARY_MIME)
    {
        return declared.to_string();
    }

    let extension = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    let inferred = match extension.as_deref() {
        Some("pdf") => "application/pdf",
        Some("txt") => "text/plain",
        Some("md" | "markdown") => "text/markdown",
        _ => GENERIC_BINARY_MIME,
    };
    inferred.to_string()
}
