// SPDX-License-Identifier: MIT

//! HTTP client for the registration backend.
//!
//! Two calls, matching the backend's two functions:
//! - authorization-code exchange, returning the token set
//! - details submission, success signaled by HTTP 200

use serde::{Deserialize, Serialize};

use crate::error::{PortalError, Result};

/// Registration backend client.
#[derive(Debug, Clone)]
pub struct RegistrationClient {
    http: reqwest::Client,
    registration_url: String,
    details_url: String,
}

impl RegistrationClient {
    pub fn new(registration_url: String, details_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            registration_url,
            details_url,
        }
    }

    /// Exchange an authorization code for the session token set.
    pub async fn exchange_code(&self, code: &str) -> Result<TokenSet> {
        let response = self
            .http
            .post(&self.registration_url)
            .json(&serde_json::json!({ "code": code }))
            .send()
            .await
            .map_err(|e| PortalError::Exchange(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = %status, body = %body, "Token exchange failed");
            return Err(PortalError::Exchange(format!("HTTP {}: {}", status, body)));
        }

        // The backend wraps the token set in an envelope with a human-readable
        // message; only `tokens` matters here.
        let envelope: ExchangeResponse = response
            .json()
            .await
            .map_err(|e| PortalError::Exchange(format!("response parse error: {}", e)))?;

        Ok(envelope.tokens)
    }

    /// Submit the mandatory details form. Anything but HTTP 200 is a failure.
    pub async fn submit_details(&self, submission: &DetailsSubmission) -> Result<()> {
        let response = self
            .http
            .post(&self.details_url)
            .json(submission)
            .send()
            .await
            .map_err(|e| PortalError::Submission(format!("request failed: {}", e)))?;

        if response.status().as_u16() != 200 {
            let status = response.status();
            tracing::error!(status = %status, "Details submission rejected");
            return Err(PortalError::Submission(format!("HTTP {}", status)));
        }

        Ok(())
    }
}

/// Exchange response envelope from the registration backend.
#[derive(Debug, Deserialize)]
struct ExchangeResponse {
    tokens: TokenSet,
}

/// Token set returned by the exchange.
///
/// `details` and `device_id` are metadata the backend may not have yet for a
/// first-time user.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenSet {
    pub id_token: String,
    pub access_token: String,
    pub refresh_token: String,
    pub details: Option<String>,
    pub device_id: Option<String>,
}

/// Details form payload. Values are sent as entered, unvalidated.
#[derive(Debug, Clone, Serialize)]
pub struct DetailsSubmission {
    pub height: String,
    pub device_id: String,
    pub username: String,
}
