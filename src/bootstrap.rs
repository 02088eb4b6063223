// SPDX-License-Identifier: MIT

//! Session bootstrap flow.
//!
//! On "page load" the portal either completes an authorization-code exchange
//! (when the URL carries `code`) or evaluates the stored session, then
//! resolves to one of three views: profile, mandatory details form, or no
//! session. State transitions:
//! `Unauthenticated -> ExchangingCode -> Authenticated(NeedsDetails | Complete)`.

use reqwest::Url;

use crate::config::Config;
use crate::error::{PortalError, Result};
use crate::models::{IdTokenClaims, SessionStatus, SessionView, UserProfile};
use crate::services::{DetailsSubmission, RegistrationClient};
use crate::store::{keys, SessionStore};

/// Fallback stored when the exchange response has no `details`/`device_id`
/// metadata for the user yet.
const METADATA_FALLBACK: &str = "none";

/// Result of a bootstrap pass: the view to show and the URL with the
/// authorization code stripped.
#[derive(Debug, Clone, PartialEq)]
pub struct BootstrapOutcome {
    pub view: SessionView,
    pub url: Url,
}

/// Drives the session flow against an injected store.
pub struct SessionBootstrapper<S: SessionStore> {
    client: RegistrationClient,
    store: S,
}

impl<S: SessionStore> SessionBootstrapper<S> {
    pub fn new(config: &Config, store: S) -> Self {
        Self {
            client: RegistrationClient::new(
                config.registration_url.clone(),
                config.details_url.clone(),
            ),
            store,
        }
    }

    /// The underlying session store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Run the bootstrap flow for the given page URL.
    ///
    /// If the URL carries an authorization code, it is exchanged and consumed:
    /// tokens and decoded claims land in the store and the returned URL no
    /// longer contains `code`. Either way the resulting view is derived from
    /// the store, exactly as the original page did after its reload.
    pub async fn run(&mut self, page_url: &str) -> Result<BootstrapOutcome> {
        let mut url = Url::parse(page_url)
            .map_err(|e| PortalError::Internal(anyhow::anyhow!("bad page URL: {}", e)))?;

        let code = url
            .query_pairs()
            .find(|(key, _)| key == "code")
            .map(|(_, value)| value.into_owned());

        if let Some(code) = code {
            self.exchange_and_persist(&code).await?;
            strip_code(&mut url);
        }

        Ok(BootstrapOutcome {
            view: self.current_view(),
            url,
        })
    }

    /// Exchange the code, persist the token set, then decode and persist the
    /// profile claims. Each step fails with its own error variant.
    async fn exchange_and_persist(&mut self, code: &str) -> Result<()> {
        tracing::info!("Exchanging authorization code for tokens");

        let tokens = self.client.exchange_code(code).await?;

        self.store.set(keys::ID_TOKEN, &tokens.id_token)?;
        self.store.set(keys::ACCESS_TOKEN, &tokens.access_token)?;
        self.store.set(keys::REFRESH_TOKEN, &tokens.refresh_token)?;
        self.store.set(
            keys::DETAILS,
            tokens.details.as_deref().unwrap_or(METADATA_FALLBACK),
        )?;
        self.store.set(
            keys::DEVICE_ID,
            tokens.device_id.as_deref().unwrap_or(METADATA_FALLBACK),
        )?;

        let claims = IdTokenClaims::decode(&tokens.id_token)?;

        self.store
            .set(keys::NAME, claims.name.as_deref().unwrap_or_default())?;
        self.store.set(
            keys::BIRTHDATE,
            claims.birthdate.as_deref().unwrap_or_default(),
        )?;
        self.store
            .set(keys::USERNAME, claims.username.as_deref().unwrap_or_default())?;
        self.store
            .set(keys::EMAIL, claims.email.as_deref().unwrap_or_default())?;
        self.store
            .set(keys::GENDER, claims.gender.as_deref().unwrap_or_default())?;

        tracing::info!(
            username = claims.username.as_deref().unwrap_or(""),
            "Session established"
        );

        Ok(())
    }

    /// Submit the mandatory details form. On HTTP 200 the submitted values
    /// and the completion flag are persisted; on failure nothing changes.
    pub async fn submit_details(&mut self, height: &str, device_id: &str) -> Result<()> {
        let submission = DetailsSubmission {
            height: height.to_string(),
            device_id: device_id.to_string(),
            username: self.store.get(keys::USERNAME).unwrap_or_default(),
        };

        self.client.submit_details(&submission).await?;

        self.store.set(keys::HEIGHT, height)?;
        self.store.set(keys::DEVICE_ID, device_id)?;
        self.store.set(keys::DETAILS, "true")?;

        tracing::info!(height, device_id, "Details saved");
        Ok(())
    }

    fn current_view(&self) -> SessionView {
        match SessionStatus::of(&self.store) {
            SessionStatus::Complete => SessionView::Profile(UserProfile::from_store(&self.store)),
            SessionStatus::NeedsDetails => SessionView::DetailsForm,
            SessionStatus::NoSession => SessionView::NoSession,
        }
    }
}

/// Remove the consumed `code` parameter, keeping any other query parameters.
fn strip_code(url: &mut Url) {
    let remaining: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| key != "code")
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    if remaining.is_empty() {
        url.set_query(None);
    } else {
        url.query_pairs_mut().clear().extend_pairs(remaining);
    }
}
