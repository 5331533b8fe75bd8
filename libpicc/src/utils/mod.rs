//! Small, reusable helpers used across the crate: hex rendering for logs
//! and display, timeout conversions.

pub mod hex;
pub mod timeout;

pub use hex::*;
pub use timeout::*;
