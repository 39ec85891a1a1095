//! Role/permission policy.
//!
//! [`evaluate`] is a pure function over the acting role, the requested
//! [`Action`] and, for teachers, whether an assignment to the target course
//! version exists. The caller is responsible for looking the assignment up on
//! every request; nothing here caches.

use crate::error::CoreError;
use crate::messages;
use crate::roles::Role;
use crate::versioning::VersionStatus;

/// Operations gated by the policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Create, update or delete topics, resources, modules and lessons.
    WriteContent,
    /// Open a new draft version of a course.
    CreateDraft,
    PublishVersion,
    ArchiveVersion,
    /// Create or update courses themselves.
    ManageCourses,
    /// List profiles and change roles.
    ManageUsers,
    /// Grant or revoke teacher assignments.
    ManageAssignments,
}

/// Outcome of a policy check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny(&'static str),
}

impl Decision {
    pub fn is_allowed(self) -> bool {
        matches!(self, Self::Allow)
    }

    /// Convert a denial into [`CoreError::Forbidden`].
    pub fn into_result(self) -> Result<(), CoreError> {
        match self {
            Self::Allow => Ok(()),
            Self::Deny(reason) => Err(CoreError::forbidden(reason)),
        }
    }
}

/// Decide whether `role` may perform `action`.
///
/// `is_assigned` is only consulted for teachers and only for the
/// content-scoped actions ([`Action::WriteContent`], [`Action::CreateDraft`]).
pub fn evaluate(role: Role, action: Action, is_assigned: bool) -> Decision {
    match (role, action) {
        (Role::Admin, _) => Decision::Allow,

        (Role::Editor, Action::WriteContent | Action::CreateDraft) => Decision::Allow,
        (Role::Teacher, Action::WriteContent | Action::CreateDraft) => {
            if is_assigned {
                Decision::Allow
            } else {
                Decision::Deny(messages::NOT_ASSIGNED)
            }
        }
        (Role::Student, Action::WriteContent | Action::CreateDraft) => {
            Decision::Deny(messages::STUDENT_READ_ONLY)
        }

        (_, Action::PublishVersion) => Decision::Deny(messages::PUBLISH_ADMIN_ONLY),
        (_, Action::ArchiveVersion) => Decision::Deny(messages::ARCHIVE_ADMIN_ONLY),
        (_, Action::ManageCourses | Action::ManageUsers | Action::ManageAssignments) => {
            Decision::Deny(messages::ADMIN_ONLY)
        }
    }
}

/// Whether the policy needs an assignment lookup for this role/action pair.
///
/// Lets callers skip the repository round-trip for everyone but teachers.
pub fn requires_assignment(role: Role, action: Action) -> bool {
    role == Role::Teacher && matches!(action, Action::WriteContent | Action::CreateDraft)
}

/// Read access to the content of a course version.
///
/// Staff read everything. Students only read published versions of visible
/// courses.
pub fn can_read_version(role: Role, status: VersionStatus, course_visible: bool) -> Decision {
    if role.is_staff() || (status == VersionStatus::Published && course_visible) {
        Decision::Allow
    } else {
        Decision::Deny(messages::CONTENT_NOT_AVAILABLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_ROLES: [Role; 4] = [Role::Admin, Role::Editor, Role::Teacher, Role::Student];

    #[test]
    fn admin_is_always_allowed() {
        for action in [
            Action::WriteContent,
            Action::CreateDraft,
            Action::PublishVersion,
            Action::ArchiveVersion,
            Action::ManageCourses,
            Action::ManageUsers,
            Action::ManageAssignments,
        ] {
            assert!(evaluate(Role::Admin, action, false).is_allowed());
        }
    }

    #[test]
    fn only_admin_publishes_or_archives() {
        for role in ALL_ROLES.into_iter().filter(|r| *r != Role::Admin) {
            // Even an assigned teacher cannot drive the lifecycle.
            assert_eq!(
                evaluate(role, Action::PublishVersion, true),
                Decision::Deny(messages::PUBLISH_ADMIN_ONLY)
            );
            assert_eq!(
                evaluate(role, Action::ArchiveVersion, true),
                Decision::Deny(messages::ARCHIVE_ADMIN_ONLY)
            );
        }
    }

    #[test]
    fn editor_writes_content_without_assignment() {
        assert!(evaluate(Role::Editor, Action::WriteContent, false).is_allowed());
        assert!(!evaluate(Role::Editor, Action::ManageCourses, false).is_allowed());
        assert!(!evaluate(Role::Editor, Action::ManageUsers, false).is_allowed());
    }

    #[test]
    fn teacher_needs_assignment() {
        assert!(evaluate(Role::Teacher, Action::WriteContent, true).is_allowed());
        assert_eq!(
            evaluate(Role::Teacher, Action::WriteContent, false),
            Decision::Deny("No estás asignado a esta versión del curso")
        );
        assert_eq!(
            evaluate(Role::Teacher, Action::CreateDraft, false),
            Decision::Deny(messages::NOT_ASSIGNED)
        );
    }

    #[test]
    fn student_cannot_write_content() {
        assert_eq!(
            evaluate(Role::Student, Action::WriteContent, true),
            Decision::Deny(messages::STUDENT_READ_ONLY)
        );
    }

    #[test]
    fn assignment_lookup_only_for_teacher_content_actions() {
        assert!(requires_assignment(Role::Teacher, Action::WriteContent));
        assert!(requires_assignment(Role::Teacher, Action::CreateDraft));
        assert!(!requires_assignment(Role::Teacher, Action::PublishVersion));
        assert!(!requires_assignment(Role::Editor, Action::WriteContent));
    }

    #[test]
    fn students_read_only_published_visible_versions() {
        assert!(can_read_version(Role::Student, VersionStatus::Published, true).is_allowed());
        assert!(!can_read_version(Role::Student, VersionStatus::Published, false).is_allowed());
        assert!(!can_read_version(Role::Student, VersionStatus::Draft, true).is_allowed());
        assert!(can_read_version(Role::Teacher, VersionStatus::Draft, false).is_allowed());
    }

    #[test]
    fn denial_converts_to_forbidden() {
        let err = Decision::Deny(messages::ADMIN_ONLY).into_result().unwrap_err();
        assert!(matches!(err, CoreError::Forbidden(ref m) if m == messages::ADMIN_ONLY));
    }
}
