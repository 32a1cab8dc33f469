//! Banner image embedding

use std::path::Path;

use base64::{engine::general_purpose::STANDARD, Engine as _};

/// Mime type for an image path, by extension
pub fn image_mime(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

/// Read an image into a `data:` URL for the webview
///
/// A missing or unreadable banner is not fatal: it is logged and the page
/// renders without it.
pub fn load_banner(path: &Path) -> Option<String> {
    match std::fs::read(path) {
        Ok(data) => {
            tracing::debug!(path = %path.display(), bytes = data.len(), "Loaded banner image");
            Some(format!("data:{};base64,{}", image_mime(path), STANDARD.encode(&data)))
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Banner image unavailable");
            None
        }
    }
}
