//! Application use-cases.
//!
//! One type per operation. Each borrows the stores it needs for the duration
//! of a request and exposes a single `execute` method that runs the same
//! template: load the target, authenticate the actor, authorize through
//! [`aula_core::permissions`], check the version is editable, mutate, and
//! return the result or a [`CoreError`](aula_core::error::CoreError).
//!
//! Infrastructure failures never escape as-is: they are logged here and
//! replaced by a generic message.

pub mod assignments;
pub mod comments;
pub mod context;
pub mod courses;
pub mod error;
pub mod modules;
pub mod profiles;
pub mod progress;
pub mod resources;
pub mod topics;
pub mod uploads;
pub mod versions;

pub use context::Actor;
