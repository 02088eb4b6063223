// SPDX-License-Identifier: MIT

//! Application error types, one variant per bootstrap step.

/// Portal error type. Each step of the session flow fails with its own
/// variant so callers can tell an exchange failure from a decode failure
/// from a submission failure.
#[derive(Debug, thiserror::Error)]
pub enum PortalError {
    #[error("Token exchange failed: {0}")]
    Exchange(String),

    #[error("ID token decode failed: {0}")]
    TokenDecode(String),

    #[error("Details submission failed: {0}")]
    Submission(String),

    #[error("Device stream error: {0}")]
    Stream(String),

    #[error("Session store error: {0}")]
    Store(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Result type alias for portal operations
pub type Result<T> = std::result::Result<T, PortalError>;
