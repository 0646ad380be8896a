//! # Data URLs for post images
//!
//! Images attached to a post travel inline as `data:<mime>;base64,<payload>`
//! strings. [`encode`] builds one from file bytes, [`decode`] recovers the
//! bytes; the two are exact inverses. No size or type limits are applied.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use thiserror::Error;

const FALLBACK_MIME: &str = "application/octet-stream";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DataUrlError {
    #[error("not a data url")]
    MissingScheme,
    #[error("data url is not base64 encoded")]
    NotBase64,
    #[error("invalid base64 payload: {0}")]
    Payload(String),
    #[error("could not read file {0}")]
    Read(String),
}

/// `data:{mime};base64,{payload}`; an empty MIME type becomes
/// `application/octet-stream`.
pub fn encode(bytes: &[u8], mime: &str) -> String {
    let mime = if mime.trim().is_empty() {
        FALLBACK_MIME
    } else {
        mime.trim()
    };
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// Split a base64 data URL into its MIME type and decoded bytes.
pub fn decode(data_url: &str) -> Result<(String, Vec<u8>), DataUrlError> {
    let rest = data_url
        .strip_prefix("data:")
        .ok_or(DataUrlError::MissingScheme)?;
    let (header, payload) = rest.split_once(',').ok_or(DataUrlError::MissingScheme)?;
    let mime = header
        .strip_suffix(";base64")
        .ok_or(DataUrlError::NotBase64)?;
    let bytes = STANDARD
        .decode(payload)
        .map_err(|e| DataUrlError::Payload(e.to_string()))?;
    Ok((mime.to_string(), bytes))
}

/// MIME type guessed from a file name, the way a browser labels picked images.
pub fn mime_from_name(name: &str) -> &'static str {
    let ext = name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" | "jfif" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "bmp" => "image/bmp",
        "avif" => "image/avif",
        "ico" => "image/x-icon",
        _ => FALLBACK_MIME,
    }
}
