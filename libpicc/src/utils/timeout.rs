//! Timeout helpers.
//!
//! The per-exchange protocol timeouts live in `constants`; this module
//! holds the transport-level default and the millisecond conversion used
//! throughout.

use std::time::Duration;

/// Default read timeout for reader-session transports when the caller does
/// not supply one.
pub const DEFAULT_READ_TIMEOUT_MS: u64 = 1000;

/// Convert milliseconds to `Duration`.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}
