pub mod error;
pub mod models;
pub mod snapshot;

pub use error::{CoreError, Result};
pub use models::group_chat::GroupChat;
pub use models::user::User;
pub use snapshot::Snapshot;

#[cfg(test)]
mod tests;
