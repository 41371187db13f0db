pub mod admin;
pub mod download;
pub mod identity;
pub mod quota;
pub mod settings;
pub mod shared;
pub mod verification;
pub mod video;
