pub mod plans;
pub mod service;

pub use plans::plan_limit;
pub use service::QuotaGate;
