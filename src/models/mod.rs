pub mod dto;
pub mod error;
pub mod shift;
pub mod shift_timing;
pub mod user;
pub use error::Error;
pub use shift::Shift;
pub use shift_timing::ShiftTiming;
pub use user::{hash_password, User};
