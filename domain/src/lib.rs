pub mod chat_service;
pub mod greeting;
pub mod locale;
pub mod models;
pub mod session;
