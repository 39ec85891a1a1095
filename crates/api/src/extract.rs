//! `Json` and `Path` extractors whose rejections render as [`AppError`].
//!
//! axum's own rejections are plain-text 4xx responses; these wrappers keep
//! malformed bodies and path parameters inside the JSON error envelope.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// Drop-in for [`axum::Json`] on the request side.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Drop-in for [`axum::extract::Path`].
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
