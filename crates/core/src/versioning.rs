//! Course version state machine.
//!
//! ```text
//! draft ──publish──▶ published ──archive──▶ archived
//! ```
//!
//! The machine is linear: there is no rollback and archived versions never
//! change again. Publishing a draft supersedes (archives) whichever version of
//! the same course was published before it.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::messages;

pub const STATUS_DRAFT: &str = "draft";
pub const STATUS_PUBLISHED: &str = "published";
pub const STATUS_ARCHIVED: &str = "archived";

/// Label given to the first version of a new course when none is supplied.
pub const DEFAULT_INITIAL_VERSION_LABEL: &str = "v1.0.0";

/// Maximum length of a version label.
pub const MAX_VERSION_LABEL_LENGTH: usize = 50;

/// Lifecycle status of a course version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VersionStatus {
    Draft,
    Published,
    Archived,
}

impl VersionStatus {
    /// Parse from the database `status` column.
    pub fn from_name(name: &str) -> Result<Self, CoreError> {
        match name {
            STATUS_DRAFT => Ok(Self::Draft),
            STATUS_PUBLISHED => Ok(Self::Published),
            STATUS_ARCHIVED => Ok(Self::Archived),
            other => Err(CoreError::Internal(format!(
                "Unknown course version status '{other}'"
            ))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => STATUS_DRAFT,
            Self::Published => STATUS_PUBLISHED,
            Self::Archived => STATUS_ARCHIVED,
        }
    }

    /// Only drafts accept content mutations.
    pub fn is_editable(self) -> bool {
        self == Self::Draft
    }
}

/// Guarded transitions between statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Publish,
    Archive,
}

/// Validate `transition` from `from`, returning the resulting status.
pub fn apply_transition(
    from: VersionStatus,
    transition: Transition,
) -> Result<VersionStatus, CoreError> {
    match (from, transition) {
        (VersionStatus::Draft, Transition::Publish) => Ok(VersionStatus::Published),
        (VersionStatus::Published, Transition::Archive) => Ok(VersionStatus::Archived),
        (_, Transition::Publish) => Err(CoreError::conflict(messages::ONLY_DRAFT_PUBLISHABLE)),
        (_, Transition::Archive) => {
            Err(CoreError::conflict(messages::ONLY_PUBLISHED_ARCHIVABLE))
        }
    }
}

/// Reject content mutations under a non-draft version.
pub fn ensure_editable(status: VersionStatus) -> Result<(), CoreError> {
    if status.is_editable() {
        Ok(())
    } else {
        Err(CoreError::conflict(messages::VERSION_NOT_EDITABLE))
    }
}

/// Validate a version label: non-empty after trimming and bounded in length.
pub fn validate_version_label(label: &str) -> Result<(), CoreError> {
    let trimmed = label.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(
            "La etiqueta de versión no puede estar vacía".to_string(),
        ));
    }
    if trimmed.len() > MAX_VERSION_LABEL_LENGTH {
        return Err(CoreError::Validation(format!(
            "La etiqueta de versión no puede superar {MAX_VERSION_LABEL_LENGTH} caracteres"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn draft_publishes() {
        assert_eq!(
            apply_transition(VersionStatus::Draft, Transition::Publish).unwrap(),
            VersionStatus::Published
        );
    }

    #[test]
    fn published_archives() {
        assert_eq!(
            apply_transition(VersionStatus::Published, Transition::Archive).unwrap(),
            VersionStatus::Archived
        );
    }

    #[test]
    fn cannot_publish_twice() {
        let err = apply_transition(VersionStatus::Published, Transition::Publish).unwrap_err();
        assert_matches!(err, CoreError::Conflict(ref m) if m == messages::ONLY_DRAFT_PUBLISHABLE);
    }

    #[test]
    fn cannot_archive_draft() {
        let err = apply_transition(VersionStatus::Draft, Transition::Archive).unwrap_err();
        assert_matches!(err, CoreError::Conflict(ref m) if m == messages::ONLY_PUBLISHED_ARCHIVABLE);
    }

    #[test]
    fn archived_is_terminal() {
        assert!(apply_transition(VersionStatus::Archived, Transition::Publish).is_err());
        assert!(apply_transition(VersionStatus::Archived, Transition::Archive).is_err());
    }

    #[test]
    fn only_drafts_are_editable() {
        assert!(ensure_editable(VersionStatus::Draft).is_ok());
        assert!(ensure_editable(VersionStatus::Published).is_err());
        assert!(ensure_editable(VersionStatus::Archived).is_err());
    }

    #[test]
    fn status_round_trips_through_name() {
        for status in [
            VersionStatus::Draft,
            VersionStatus::Published,
            VersionStatus::Archived,
        ] {
            assert_eq!(VersionStatus::from_name(status.as_str()).unwrap(), status);
        }
        assert!(VersionStatus::from_name("review").is_err());
    }

    #[test]
    fn label_validation() {
        assert!(validate_version_label("v1.0.0").is_ok());
        assert!(validate_version_label("   ").is_err());
        assert!(validate_version_label(&"v".repeat(MAX_VERSION_LABEL_LENGTH + 1)).is_err());
    }
}
