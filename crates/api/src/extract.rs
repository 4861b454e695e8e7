//! Request extractors.

use axum::extract::FromRequest;

use crate::error::AppError;

/// JSON body extractor whose rejection renders as a 400 `{message}`.
///
/// Wraps [`axum::Json`]; a missing content type, a syntax error or a type
/// mismatch all become [`AppError::Validation`].
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);
