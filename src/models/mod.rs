pub mod channel;
pub mod chat;
