pub mod admin;
pub mod download;
pub mod health;
pub mod identity;
pub mod settings;
pub mod verification;
pub mod video;
