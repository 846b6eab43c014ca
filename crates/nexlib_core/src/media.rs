//! File-to-data-URI conversion.
//!
//! User-selected binary files (cover images, profile pictures,
//! documents) are embedded into records as self-contained data URIs
//! before being stored. The conversion is asynchronous like every other
//! suspension point in the state layer.

use crate::error::CoreResult;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::path::Path;

/// Reads a file and returns it as a `data:` URI string.
///
/// The MIME type is guessed from the file extension; unknown extensions
/// fall back to `application/octet-stream`.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub async fn file_to_data_uri(path: &Path) -> CoreResult<String> {
    let bytes = tokio::fs::read(path).await?;
    let mime = mime_for_extension(path);
    Ok(format!("data:{mime};base64,{}", STANDARD.encode(bytes)))
}

fn mime_for_extension(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        Some("pdf") => "application/pdf",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn encodes_file_with_guessed_mime() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cover.png");
        std::fs::write(&path, b"fake png bytes").unwrap();

        let uri = file_to_data_uri(&path).await.unwrap();
        assert!(uri.starts_with("data:image/png;base64,"));

        let payload = uri.rsplit(',').next().unwrap();
        assert_eq!(STANDARD.decode(payload).unwrap(), b"fake png bytes");
    }

    #[tokio::test]
    async fn unknown_extension_falls_back_to_octet_stream() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("blob.xyz");
        std::fs::write(&path, b"?").unwrap();

        let uri = file_to_data_uri(&path).await.unwrap();
        assert!(uri.starts_with("data:application/octet-stream;base64,"));
    }

    #[tokio::test]
    async fn missing_file_is_an_error() {
        let result = file_to_data_uri(Path::new("/nonexistent/cover.jpg")).await;
        assert!(result.is_err());
    }
}
