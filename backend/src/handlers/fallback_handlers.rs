use axum::http::{Method, Uri};

use crate::error::AppError;

/// Catches `/api/*` requests that no route matched, so API clients get a
/// JSON error instead of the frontend's index page.
pub async fn api_not_found(method: Method, uri: Uri) -> AppError {
    tracing::debug!("No API route for {} {}", method, uri.path());
    AppError::not_found(format!("No route for {} {}", method, uri.path()))
}
