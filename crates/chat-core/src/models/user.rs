//! User profile record as held in the remote store.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One user's profile.
///
/// Every field carries a default so that a snapshot can populate a fresh
/// instance field-by-field; entries absent from the snapshot stay at their
/// defaults. Serialized names follow the store's camelCase contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct User {
    pub id: i32,
    pub full_name: String,
    pub email: String,
    pub age: i32,
    pub city: String,
}

impl User {
    /// Create a fully populated user record
    pub fn new(id: i32, full_name: String, email: String, age: i32, city: String) -> Self {
        Self {
            id,
            full_name,
            email,
            age,
            city,
        }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} <{}> age {}, {}",
            self.id, self.full_name, self.email, self.age, self.city
        )
    }
}
