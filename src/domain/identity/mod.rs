pub mod dto;
pub mod model;
pub mod service;

pub use dto::{ChangePlanRequest, MeResponse};
pub use model::{Account, Identity, Plan, UsageScope};
pub use service::IdentityService;
