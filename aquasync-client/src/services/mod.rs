pub mod auth_service;
pub mod device_service;
pub mod schedule_service;
pub mod session;

use crate::errors::{ApiError, Result};

/// Lets a 2xx response through, maps anything else onto the error taxonomy.
pub(crate) fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::from_status(status))
    }
}
