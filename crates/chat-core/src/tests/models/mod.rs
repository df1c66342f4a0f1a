mod group_chat;
mod user;
