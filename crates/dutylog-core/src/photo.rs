//! Profile photos are stored inline as `data:` URIs.

use std::fs;
use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::{DutyLogError, Result};

const MAX_PHOTO_BYTES: usize = 5 * 1024 * 1024;

fn mime_for(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "bmp" => Some("image/bmp"),
        _ => None,
    }
}

/// Encode an image as `data:<mime>;base64,<payload>`.
pub fn encode_bytes(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// Read an image file and encode it as a `data:` URI.
pub fn encode_file(path: &Path) -> Result<String> {
    let mime = mime_for(path).ok_or_else(|| {
        DutyLogError::InvalidInput(format!(
            "Unsupported photo type: {} (use jpg, png, gif, webp or bmp)",
            path.display()
        ))
    })?;
    let bytes = fs::read(path).map_err(|e| {
        DutyLogError::InvalidInput(format!("Failed to read photo {}: {}", path.display(), e))
    })?;
    if bytes.len() > MAX_PHOTO_BYTES {
        return Err(DutyLogError::InvalidInput(format!(
            "Photo too large ({} bytes, max {})",
            bytes.len(),
            MAX_PHOTO_BYTES
        )));
    }
    Ok(encode_bytes(mime, &bytes))
}

/// Mime type and decoded size of a `data:` URI, if it is one.
pub fn describe(uri: &str) -> Option<(String, usize)> {
    let rest = uri.strip_prefix("data:")?;
    let (mime, payload) = rest.split_once(";base64,")?;
    let decoded = STANDARD.decode(payload.trim()).ok()?;
    Some((mime.to_string(), decoded.len()))
}
