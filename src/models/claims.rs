// SPDX-License-Identifier: MIT

//! ID token claim extraction.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use serde::Deserialize;

use crate::error::{PortalError, Result};

/// User claims carried in the ID token payload.
///
/// The identity provider issues the username under `cognito:username`.
#[derive(Debug, Clone, Deserialize)]
pub struct IdTokenClaims {
    pub name: Option<String>,
    pub birthdate: Option<String>,
    pub email: Option<String>,
    pub gender: Option<String>,
    #[serde(rename = "cognito:username")]
    pub username: Option<String>,
}

impl IdTokenClaims {
    /// Decode claims from the middle segment of a three-segment ID token.
    ///
    /// The segment is base64url-encoded JSON. The signature is NOT verified
    /// here: the token comes straight from the registration backend, which
    /// verified it against the provider's JWKS before handing it over. A
    /// caller with a different trust model must verify before decoding.
    pub fn decode(id_token: &str) -> Result<Self> {
        let segments: Vec<&str> = id_token.split('.').collect();
        if segments.len() != 3 {
            return Err(PortalError::TokenDecode(
                "expected three dot-separated segments".to_string(),
            ));
        }
        let payload = segments[1];

        let bytes = URL_SAFE_NO_PAD
            .decode(payload)
            .map_err(|e| PortalError::TokenDecode(format!("payload base64: {}", e)))?;

        serde_json::from_slice(&bytes)
            .map_err(|e| PortalError::TokenDecode(format!("payload JSON: {}", e)))
    }
}
