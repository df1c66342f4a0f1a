use std::fmt;

use serde::{Deserialize, Serialize};

/// A group chat room's metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct GroupChat {
    pub group_name: String,
    pub description: String,
}

impl GroupChat {
    pub fn new(group_name: String, description: String) -> Self {
        Self {
            group_name,
            description,
        }
    }
}

impl fmt::Display for GroupChat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.group_name, self.description)
    }
}
