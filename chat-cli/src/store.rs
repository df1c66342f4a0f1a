use crate::error::{CliError, Result};

use std::path::Path;

use chat_core::{GroupChat, Snapshot, User};
use log::{debug, info};
use serde::de::DeserializeOwned;

/// Subtree of the export holding user records.
const USERS_KEY: &str = "users";
/// Subtree of the export holding group chat records.
const GROUPS_KEY: &str = "group-chats";

/// A parsed database export, the owning layer for decoded records.
pub struct ExportStore {
    root: Snapshot,
}

impl ExportStore {
    /// Read and parse an export file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| CliError::ExportFile {
            path: path.display().to_string(),
            source: e,
        })?;

        let root = Snapshot::from_json("export", &contents)?;
        info!("Loaded export from {}", path.display());

        Ok(Self { root })
    }

    /// Decode every user record in the export.
    pub fn users(&self) -> Result<Vec<User>> {
        self.decode_children(USERS_KEY)
    }

    /// Find the user whose id matches, if any.
    pub fn user_by_id(&self, id: i32) -> Result<Option<User>> {
        Ok(self.users()?.into_iter().find(|user| user.id == id))
    }

    /// Decode every group chat record in the export.
    pub fn groups(&self) -> Result<Vec<GroupChat>> {
        self.decode_children(GROUPS_KEY)
    }

    /// Decode all children of a subtree. A child that fails to decode is an
    /// error for the whole read, not a silently dropped record.
    fn decode_children<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>> {
        let children = self.root.child(key).children();
        debug!("Decoding {} records under {key}", children.len());

        children
            .iter()
            .map(|child| child.decode::<T>().map_err(CliError::from))
            .collect()
    }
}
