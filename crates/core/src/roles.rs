//! Well-known role names and the [`Role`] enum.
//!
//! These must match the `CHECK` constraint on `profiles.role` in
//! `20260301000001_create_profiles.sql`.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_EDITOR: &str = "editor";
pub const ROLE_TEACHER: &str = "teacher";
pub const ROLE_STUDENT: &str = "student";

/// All valid role names.
pub const VALID_ROLES: &[&str] = &[ROLE_ADMIN, ROLE_EDITOR, ROLE_TEACHER, ROLE_STUDENT];

/// Role carried by every profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Editor,
    Teacher,
    Student,
}

impl Role {
    /// Parse from the database `role` column.
    pub fn from_name(name: &str) -> Result<Self, CoreError> {
        match name {
            ROLE_ADMIN => Ok(Self::Admin),
            ROLE_EDITOR => Ok(Self::Editor),
            ROLE_TEACHER => Ok(Self::Teacher),
            ROLE_STUDENT => Ok(Self::Student),
            other => Err(CoreError::Validation(format!(
                "Rol desconocido '{other}'. Debe ser uno de: {}",
                VALID_ROLES.join(", ")
            ))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => ROLE_ADMIN,
            Self::Editor => ROLE_EDITOR,
            Self::Teacher => ROLE_TEACHER,
            Self::Student => ROLE_STUDENT,
        }
    }

    /// Staff roles author content; students only consume it.
    pub fn is_staff(self) -> bool {
        !matches!(self, Self::Student)
    }

    /// Path (relative to the site URL) a user lands on after signing in.
    pub fn landing_path(self) -> &'static str {
        match self {
            Self::Admin => "/admin",
            Self::Editor | Self::Teacher => "/dashboard",
            Self::Student => "/courses",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
