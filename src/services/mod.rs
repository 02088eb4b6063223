// SPDX-License-Identifier: MIT

//! Remote endpoints: registration backend and the device stream.

pub mod registration;
pub mod stream;

pub use registration::{DetailsSubmission, RegistrationClient, TokenSet};
pub use stream::{DeviceStream, Frame};
