// SPDX-License-Identifier: MIT

//! Session state derived from the store.

use crate::models::UserProfile;
use crate::store::{keys, SessionStore};

/// Where the session stands:
/// `NoSession -> NeedsDetails -> Complete`, driven by the presence of an ID
/// token and the `details` flag. There is no logout, so no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// No ID token stored.
    NoSession,
    /// ID token present but the mandatory details form has not been completed.
    NeedsDetails,
    /// ID token present and `details == "true"`.
    Complete,
}

impl SessionStatus {
    /// Derive the status from stored values.
    pub fn of(store: &dyn SessionStore) -> Self {
        let has_token = store
            .get(keys::ID_TOKEN)
            .map(|t| !t.is_empty())
            .unwrap_or(false);

        if !has_token {
            return SessionStatus::NoSession;
        }

        match store.get(keys::DETAILS).as_deref() {
            Some("true") => SessionStatus::Complete,
            _ => SessionStatus::NeedsDetails,
        }
    }
}

/// What the portal shows after bootstrap.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionView {
    /// Fully authenticated: show the profile and open the device stream.
    Profile(UserProfile),
    /// Authenticated but the mandatory details form must be completed first.
    DetailsForm,
    /// No authorization code and no existing session.
    NoSession,
}
