pub mod group_chat;
pub mod user;
