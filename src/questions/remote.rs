//! Fetching questionnaires over HTTP
//!
//! Requires the `remote` feature to be enabled:
//! ```toml
//! riskcheck = { version = "1", features = ["remote"] }
//! ```

use crate::AssessmentError;

/// Fetch the questions document with a single GET request
#[cfg(feature = "remote")]
pub fn fetch(url: &str) -> Result<String, AssessmentError> {
    tracing::debug!("GET {}", url);

    let response = reqwest::blocking::get(url).map_err(|e| {
        tracing::error!(error = %e, "Fetch error for {}", url);
        AssessmentError::load(format!("Failed to load questions. {}", e))
    })?;

    let status = response.status();
    if !status.is_success() {
        tracing::error!(
            "HTTP error while fetching {}: {} {}",
            url,
            status.as_u16(),
            status.canonical_reason().unwrap_or("")
        );
        return Err(AssessmentError::load(format!(
            "Failed to load questions (HTTP {})",
            status.as_u16()
        )));
    }

    response
        .text()
        .map_err(|e| AssessmentError::load(format!("Failed to read questions response: {}", e)))
}

/// Stub implementation when the remote feature is disabled
#[cfg(not(feature = "remote"))]
pub fn fetch(url: &str) -> Result<String, AssessmentError> {
    Err(AssessmentError::load(format!(
        "Cannot load {}: remote feature not enabled. Rebuild with: cargo build --features remote",
        url
    )))
}
