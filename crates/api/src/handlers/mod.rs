//! HTTP handlers. Each builds the use-case it needs over the shared state,
//! runs it, and wraps the result in the response envelope.

pub mod assignments;
pub mod auth;
pub mod comments;
pub mod courses;
pub mod modules;
pub mod profiles;
pub mod progress;
pub mod resources;
pub mod topics;
pub mod uploads;
pub mod versions;

use aula_core::error::CoreError;
use validator::{Validate, ValidationErrors};

/// Run the `validator` rules on a request body, surfacing the first message
/// as a [`CoreError::Validation`].
pub(crate) fn validate_body<T: Validate>(body: &T) -> Result<(), CoreError> {
    body.validate()
        .map_err(|errors| CoreError::Validation(first_message(&errors)))
}

fn first_message(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));
    fields
        .iter()
        .flat_map(|(_, errs)| errs.iter())
        .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| errors.to_string())
}
