// libpicc/src/reader/traits.rs

use thiserror::Error;

/// Errors from the reader-session boundary (CCID transport and message
/// codec).
#[derive(Error, Debug)]
pub enum ReaderError {
    #[error("reader i/o failed: {0}")]
    Io(String),

    #[error("reader response timed out")]
    Timeout,

    #[error("short ccid response: {actual} bytes")]
    ShortResponse { actual: usize },

    #[error("ccid message length mismatch: header says {declared}, got {actual}")]
    LengthMismatch { declared: usize, actual: usize },

    #[error("unexpected ccid message type: expected {expected:#04x}, got {actual:#04x}")]
    UnexpectedMessage { expected: u8, actual: u8 },

    #[error("ccid command failed: status={status:#04x} error={error:#04x}")]
    CommandFailed { status: u8, error: u8 },

    #[error("no card became present")]
    CardAbsent,

    #[cfg(feature = "usb")]
    #[error("usb error: {0}")]
    Usb(#[from] rusb::Error),
}

/// Byte transport to a CCID reader: one bulk message out, one in.
pub trait ReaderTransport {
    /// Send one complete CCID command message.
    fn send(&mut self, data: &[u8]) -> Result<(), ReaderError>;

    /// Receive one complete CCID response message.
    fn receive(&mut self, timeout_ms: u64) -> Result<Vec<u8>, ReaderError>;
}
