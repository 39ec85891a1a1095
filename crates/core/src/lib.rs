//! Domain rules for the Aula course platform.
//!
//! Everything in this crate is storage-agnostic: role and permission policy,
//! the course version state machine, upload validation, and the shared error
//! type used by the use-case layer.

pub mod content;
pub mod error;
pub mod messages;
pub mod permissions;
pub mod roles;
pub mod storage;
pub mod types;
pub mod uploads;
pub mod versioning;
