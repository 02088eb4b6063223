// SPDX-License-Identifier: MIT

//! Mat-Portal: session bootstrapper for the smart mat device portal.
//!
//! This crate drives the portal's client-side session lifecycle: exchanging
//! an authorization code for tokens, persisting tokens and decoded profile
//! claims in a session store, collecting the mandatory device details, and
//! consuming the live image stream from the mat.

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod store;

pub use bootstrap::{BootstrapOutcome, SessionBootstrapper};
pub use config::Config;
pub use error::{PortalError, Result};
pub use models::{SessionStatus, SessionView, UserProfile};
pub use store::SessionStore;
