pub mod chat;
pub mod toolbar;
