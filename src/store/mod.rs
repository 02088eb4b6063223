// SPDX-License-Identifier: MIT

//! Session storage behind an injectable trait.
//!
//! The original portal kept everything in browser cookies: flat string
//! key/value pairs, written synchronously, overwritten on each exchange and
//! never deleted. The trait preserves those semantics while letting the
//! binary persist to a file and tests use an in-memory map.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::Result;

/// Well-known session keys.
pub mod keys {
    pub const ID_TOKEN: &str = "id_token";
    pub const ACCESS_TOKEN: &str = "access_token";
    pub const REFRESH_TOKEN: &str = "refresh_token";
    pub const DEVICE_ID: &str = "device_id";
    pub const DETAILS: &str = "details";
    pub const NAME: &str = "name";
    pub const BIRTHDATE: &str = "birthdate";
    pub const USERNAME: &str = "username";
    pub const EMAIL: &str = "email";
    pub const GENDER: &str = "gender";
    pub const HEIGHT: &str = "height";
}

/// Flat string key/value session store.
///
/// Writes overwrite silently; there is no delete (the portal has no logout
/// path).
pub trait SessionStore {
    /// Read a value by key, if present.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value, overwriting any previous one.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}
