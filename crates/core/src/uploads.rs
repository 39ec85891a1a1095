//! Upload allow-list, size ceilings, and storage key construction.
//!
//! Keys have the shape
//! `courses/{course_id}/topics/{topic_id}/{sanitized}_{timestamp_ms}_{rand}.{ext}`.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

const MIB: u64 = 1024 * 1024;

pub const MAX_DOCUMENT_BYTES: u64 = 50 * MIB;
pub const MAX_VIDEO_BYTES: u64 = 500 * MIB;
pub const MAX_AUDIO_BYTES: u64 = 100 * MIB;
pub const MAX_IMAGE_BYTES: u64 = 10 * MIB;

/// Length of the random suffix appended to every key.
pub const RANDOM_SUFFIX_LENGTH: usize = 6;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Allowed MIME types with their category and canonical extension.
const ALLOWED_TYPES: &[(&str, UploadCategory, &str)] = &[
    ("application/pdf", UploadCategory::Document, "pdf"),
    ("application/msword", UploadCategory::Document, "doc"),
    (
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        UploadCategory::Document,
        "docx",
    ),
    ("video/mp4", UploadCategory::Video, "mp4"),
    ("audio/mpeg", UploadCategory::Audio, "mp3"),
    ("image/jpeg", UploadCategory::Image, "jpg"),
    ("image/png", UploadCategory::Image, "png"),
];

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

/// The `resourceType` form field of an upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadCategory {
    Document,
    Video,
    Audio,
    Image,
}

impl UploadCategory {
    pub fn from_name(name: &str) -> Result<Self, CoreError> {
        match name {
            "document" => Ok(Self::Document),
            "video" => Ok(Self::Video),
            "audio" => Ok(Self::Audio),
            "image" => Ok(Self::Image),
            other => Err(CoreError::Validation(format!(
                "Tipo de recurso de subida desconocido '{other}'"
            ))),
        }
    }

    pub fn max_bytes(self) -> u64 {
        match self {
            Self::Document => MAX_DOCUMENT_BYTES,
            Self::Video => MAX_VIDEO_BYTES,
            Self::Audio => MAX_AUDIO_BYTES,
            Self::Image => MAX_IMAGE_BYTES,
        }
    }
}

/// Result of validating an upload against the allow-list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedUpload {
    pub category: UploadCategory,
    pub mime_type: String,
    pub extension: &'static str,
}

/// Validate the declared MIME type and size of an upload.
///
/// The MIME type must be on the allow-list and belong to `category`, and the
/// file must be non-empty and no larger than the category's ceiling.
pub fn validate_upload(
    category: UploadCategory,
    mime_type: &str,
    size_bytes: u64,
) -> Result<ValidatedUpload, CoreError> {
    let mime = mime_type.trim().to_ascii_lowercase();
    let (_, allowed_category, extension) = ALLOWED_TYPES
        .iter()
        .find(|(m, _, _)| *m == mime)
        .ok_or_else(|| {
            CoreError::Validation(format!("Tipo de archivo no permitido '{mime}'"))
        })?;

    if *allowed_category != category {
        return Err(CoreError::Validation(format!(
            "El tipo de archivo '{mime}' no corresponde al tipo de recurso seleccionado"
        )));
    }

    if size_bytes == 0 {
        return Err(CoreError::Validation("El archivo está vacío".to_string()));
    }

    let max = category.max_bytes();
    if size_bytes > max {
        return Err(CoreError::Validation(format!(
            "El archivo supera el tamaño máximo de {} MB",
            max / MIB
        )));
    }

    Ok(ValidatedUpload {
        category,
        mime_type: mime,
        extension,
    })
}

// ---------------------------------------------------------------------------
// Key construction
// ---------------------------------------------------------------------------

/// Replace every non-alphanumeric character of the file's base name with `_`.
///
/// The extension (text after the last `.`) is dropped; an empty result
/// becomes `file`.
pub fn sanitize_base_name(file_name: &str) -> String {
    let base = match file_name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => file_name,
    };
    let sanitized: String = base
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    if sanitized.is_empty() {
        "file".to_string()
    } else {
        sanitized
    }
}

/// Extension for the stored object: the original file's extension when it is
/// alphanumeric, otherwise the canonical one for its MIME type.
pub fn storage_extension(file_name: &str, fallback: &str) -> String {
    match file_name.rsplit_once('.') {
        Some((stem, ext))
            if !stem.is_empty()
                && !ext.is_empty()
                && ext.chars().all(|c| c.is_ascii_alphanumeric()) =>
        {
            ext.to_ascii_lowercase()
        }
        _ => fallback.to_string(),
    }
}

/// Generate a random lowercase base-36 suffix.
pub fn random_suffix() -> String {
    let mut rng = rand::rng();
    (0..RANDOM_SUFFIX_LENGTH)
        .map(|_| BASE36[rng.random_range(0..BASE36.len())] as char)
        .collect()
}

/// Build the storage key for an upload with explicit timestamp and suffix.
pub fn build_storage_key(
    course_id: DbId,
    topic_id: DbId,
    file_name: &str,
    extension: &str,
    timestamp_ms: i64,
    suffix: &str,
) -> String {
    format!(
        "courses/{course_id}/topics/{topic_id}/{}_{timestamp_ms}_{suffix}.{extension}",
        sanitize_base_name(file_name)
    )
}

/// Build a fresh storage key using the current time and a random suffix.
pub fn new_storage_key(
    course_id: DbId,
    topic_id: DbId,
    file_name: &str,
    upload: &ValidatedUpload,
) -> String {
    let extension = storage_extension(file_name, upload.extension);
    build_storage_key(
        course_id,
        topic_id,
        file_name,
        &extension,
        chrono::Utc::now().timestamp_millis(),
        &random_suffix(),
    )
}
