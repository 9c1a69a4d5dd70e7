//! Maps domain `AppError` to HTTP responses.
//!
//! The `IntoResponse` impl for `AppError` lives in `storekeep-core`
//! next to the type itself (orphan rule); the response body type is
//! re-exported here.

pub use storekeep_core::error::ApiErrorResponse;
