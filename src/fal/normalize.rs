use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::Utc;
use serde_json::Value;
use uuid::Uuid;

use crate::error::{RelayError, Result};

/// Extract a usable image reference from an upstream 200 response.
///
/// The provider answers in several shapes depending on model and queue
/// configuration; the rules below run in fixed priority order and the first
/// match wins:
///
/// 1. `{"images": [{"url": ...}, ...]}` — first entry's `url`
/// 2. `{"image_base64": ...}` — decoded and written under the static dir
/// 3. `{"image_url": ...}` — used directly
/// 4. `{"response": {...}}` — rules 1 and 3 applied to the nested object
/// 5. raw image bytes in the body — written under the static dir
pub fn normalize_response(
    body: &Value,
    content_type: Option<&str>,
    raw: &[u8],
    static_dir: &Path,
) -> Result<String> {
    if let Some(url) = from_images_array(body) {
        return Ok(url);
    }
    if let Some(path) = from_image_base64(body, static_dir)? {
        return Ok(path);
    }
    if let Some(url) = from_image_url(body) {
        return Ok(url);
    }
    if let Some(url) = from_nested_response(body) {
        return Ok(url);
    }
    if let Some(path) = from_raw_bytes(content_type, raw, static_dir) {
        return Ok(path);
    }

    Err(RelayError::NoImageExtracted(body.clone()))
}

fn from_images_array(body: &Value) -> Option<String> {
    body.get("images")?
        .as_array()?
        .first()?
        .get("url")?
        .as_str()
        .map(String::from)
}

fn from_image_url(body: &Value) -> Option<String> {
    body.get("image_url")?.as_str().map(String::from)
}

/// Queue/response shapes wrap the final result in a `response` object.
fn from_nested_response(body: &Value) -> Option<String> {
    let nested = body.get("response")?;
    if !nested.is_object() {
        return None;
    }
    from_images_array(nested).or_else(|| from_image_url(nested))
}

/// Decode and write failures propagate here; a provider that claims to send
/// base64 but doesn't is a hard fault, not a shape mismatch.
fn from_image_base64(body: &Value, static_dir: &Path) -> Result<Option<String>> {
    let encoded = match body.get("image_base64").and_then(Value::as_str) {
        Some(encoded) => encoded,
        None => return Ok(None),
    };
    let bytes = STANDARD.decode(encoded)?;
    save_image_bytes(static_dir, &bytes).map(Some)
}

/// Last resort: the body itself is the image. Save failures are swallowed
/// and the chain falls through to the final error.
fn from_raw_bytes(content_type: Option<&str>, raw: &[u8], static_dir: &Path) -> Option<String> {
    let is_image = content_type.map_or(false, |ct| ct.starts_with("image/"));
    if !is_image && raw.is_empty() {
        return None;
    }
    save_image_bytes(static_dir, raw).ok()
}

/// Write image bytes under the static dir and return the public path.
///
/// Filenames combine a UTC timestamp with a random 8-hex suffix, so
/// concurrent writers never collide.
pub fn save_image_bytes(static_dir: &Path, bytes: &[u8]) -> Result<String> {
    let timestamp = Utc::now().format("%Y%m%dT%H%M%SZ");
    let suffix = Uuid::new_v4().simple().to_string();
    let filename = format!("generated_{}_{}.jpg", timestamp, &suffix[..8]);

    std::fs::create_dir_all(static_dir)?;
    std::fs::write(static_dir.join(&filename), bytes)?;

    Ok(format!("/static/{}", filename))
}
