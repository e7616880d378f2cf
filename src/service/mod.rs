pub mod discord;
pub mod oauth;
pub mod settings;
