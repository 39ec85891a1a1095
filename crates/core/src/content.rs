//! Validation and helpers for course content (courses, topics, resources,
//! comments) and progress.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of any title (course, topic, resource, module, lesson).
pub const MAX_TITLE_LENGTH: usize = 200;

/// Maximum length of a course slug.
pub const MAX_SLUG_LENGTH: usize = 120;

/// Maximum length of a comment body.
pub const MAX_COMMENT_LENGTH: usize = 5000;

/// Largest explicit `order_index` a caller may set. Appending after it still
/// fits in an `INTEGER` column.
pub const MAX_ORDER_INDEX: i32 = 1_000_000;

pub const KIND_FILE: &str = "file";
pub const KIND_LINK: &str = "link";

// ---------------------------------------------------------------------------
// Titles and slugs
// ---------------------------------------------------------------------------

/// Validate a title: non-empty after trimming, at most [`MAX_TITLE_LENGTH`].
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(
            "El título no puede estar vacío".to_string(),
        ));
    }
    if trimmed.chars().count() > MAX_TITLE_LENGTH {
        return Err(CoreError::Validation(format!(
            "El título no puede superar {MAX_TITLE_LENGTH} caracteres"
        )));
    }
    Ok(())
}

/// Derive a URL slug from a title.
///
/// Lowercases, folds common Spanish accented letters to ASCII, and collapses
/// every run of other characters into a single `-`.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;

    for c in title.chars().flat_map(char::to_lowercase) {
        let folded = match c {
            'á' | 'à' | 'ä' | 'â' => 'a',
            'é' | 'è' | 'ë' | 'ê' => 'e',
            'í' | 'ì' | 'ï' | 'î' => 'i',
            'ó' | 'ò' | 'ö' | 'ô' => 'o',
            'ú' | 'ù' | 'ü' | 'û' => 'u',
            'ñ' => 'n',
            'ç' => 'c',
            other => other,
        };
        if folded.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(folded);
        } else {
            pending_dash = true;
        }
    }

    slug.truncate(MAX_SLUG_LENGTH);
    slug.trim_end_matches('-').to_string()
}

/// Validate a caller-supplied slug: lowercase ASCII, digits and dashes only.
pub fn validate_slug(slug: &str) -> Result<(), CoreError> {
    let valid = !slug.is_empty()
        && slug.len() <= MAX_SLUG_LENGTH
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    if valid {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Identificador de curso inválido '{slug}'"
        )))
    }
}

/// Explicit ordering positions must lie in `0..=MAX_ORDER_INDEX`. `None`
/// means append and is always accepted.
pub fn validate_order_index(order_index: Option<i32>) -> Result<(), CoreError> {
    match order_index {
        Some(index) if !(0..=MAX_ORDER_INDEX).contains(&index) => Err(CoreError::Validation(
            format!("La posición debe estar entre 0 y {MAX_ORDER_INDEX}"),
        )),
        _ => Ok(()),
    }
}

// ---------------------------------------------------------------------------
// Resources
// ---------------------------------------------------------------------------

/// What a resource points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    /// An object uploaded to storage.
    File,
    /// An external URL.
    Link,
}

impl ResourceKind {
    pub fn from_name(name: &str) -> Result<Self, CoreError> {
        match name {
            KIND_FILE => Ok(Self::File),
            KIND_LINK => Ok(Self::Link),
            other => Err(CoreError::Validation(format!(
                "Tipo de recurso desconocido '{other}'"
            ))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::File => KIND_FILE,
            Self::Link => KIND_LINK,
        }
    }
}

/// Enforce that exactly one of the file reference or the external URL is set,
/// matching `kind`.
pub fn validate_resource_target(
    kind: ResourceKind,
    file_url: Option<&str>,
    external_url: Option<&str>,
) -> Result<(), CoreError> {
    let has_file = file_url.is_some_and(|u| !u.trim().is_empty());
    let has_link = external_url.is_some_and(|u| !u.trim().is_empty());

    match (kind, has_file, has_link) {
        (ResourceKind::File, true, false) => Ok(()),
        (ResourceKind::Link, false, true) => {
            validate_external_url(external_url.unwrap_or_default())
        }
        (ResourceKind::File, _, _) => Err(CoreError::Validation(
            "Un recurso de tipo archivo requiere un archivo y ninguna URL externa".to_string(),
        )),
        (ResourceKind::Link, _, _) => Err(CoreError::Validation(
            "Un recurso de tipo enlace requiere una URL externa y ningún archivo".to_string(),
        )),
    }
}

/// External links must be absolute http(s) URLs.
pub fn validate_external_url(url: &str) -> Result<(), CoreError> {
    let url = url.trim();
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"));
    match rest {
        Some(host) if !host.is_empty() && !host.starts_with('/') => Ok(()),
        _ => Err(CoreError::Validation(format!("URL externa inválida '{url}'"))),
    }
}

// ---------------------------------------------------------------------------
// Comments
// ---------------------------------------------------------------------------

pub fn validate_comment_body(body: &str) -> Result<(), CoreError> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(
            "El comentario no puede estar vacío".to_string(),
        ));
    }
    if trimmed.chars().count() > MAX_COMMENT_LENGTH {
        return Err(CoreError::Validation(format!(
            "El comentario no puede superar {MAX_COMMENT_LENGTH} caracteres"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Progress
// ---------------------------------------------------------------------------

/// Completion percentage rounded down to a whole number. An empty version is
/// 0% complete.
pub fn completion_percentage(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let pct = completed.min(total) * 100 / total;
    pct as u8
}
