//! User profile read back from the session store.

use serde::Serialize;

use crate::store::{keys, SessionStore};

/// Profile fields shown on the portal page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserProfile {
    pub name: String,
    pub birthdate: String,
    pub username: String,
    pub email: String,
    pub gender: String,
}

impl UserProfile {
    /// Assemble the profile from stored session values. Missing fields come
    /// back empty; the values were written from decoded token claims and are
    /// used as-is.
    pub fn from_store(store: &dyn SessionStore) -> Self {
        let get = |key| store.get(key).unwrap_or_default();
        Self {
            name: get(keys::NAME),
            birthdate: get(keys::BIRTHDATE),
            username: get(keys::USERNAME),
            email: get(keys::EMAIL),
            gender: get(keys::GENDER),
        }
    }

    /// Render the fixed profile markup block.
    pub fn render(&self) -> String {
        format!(
            "<p>Name: {}</p>\n<p>Birthdate: {}</p>\n<p>Username: {}</p>\n<p>Email: {}</p>\n<p>Gender: {}</p>",
            self.name, self.birthdate, self.username, self.email, self.gender
        )
    }
}
