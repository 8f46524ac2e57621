pub mod chat_client;
pub mod config;
pub mod error;
