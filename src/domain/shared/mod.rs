pub mod clock;
pub mod usage_dto;

pub use clock::{day_key, Clock, ManualClock, SystemClock};
pub use usage_dto::{UsageLimits, UsageResponse, UsageStats};
