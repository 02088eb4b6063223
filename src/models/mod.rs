// SPDX-License-Identifier: MIT

//! Data models for the session flow.

pub mod claims;
pub mod profile;
pub mod session;

pub use claims::IdTokenClaims;
pub use profile::UserProfile;
pub use session::{SessionStatus, SessionView};
