pub mod jwt;
pub mod model;
pub mod service;

pub use jwt::{AdminClaims, AdminTokenManager};
pub use model::{
    AdminCredentials, AdminLoginRequest, AdminRole, AdminSession, AdminSessionResponse,
};
pub use service::AdminAuthService;
