// libpicc/src/error.rs

use thiserror::Error;

use crate::reader::ReaderError;
use crate::rf::RfError;

/// Crate-wide error type.
///
/// Transceive and reader-session failures are wrapped verbatim; everything
/// else is a protocol-level condition detected by this crate.
#[derive(Error, Debug)]
pub enum Error {
    #[error("rf transceive failed: {0}")]
    Rf(#[from] RfError),

    #[error("reader session failed: {0}")]
    Reader(#[from] ReaderError),

    #[error("card does not support bitframe anticollision")]
    NoAnticollisionSupport,

    #[error("invalid response length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("invalid bit count for nvb: {bits}")]
    InvalidNvb { bits: u32 },

    #[error("invalid uid length {actual}, must be 4, 7 or 10")]
    InvalidUidLength { actual: usize },

    #[error("cascade tag set but first uid byte is {actual:#04x}, expected 0x88")]
    BadCascadeTag { actual: u8 },

    #[error("cannot cascade beyond CL3")]
    CascadeDepth,

    #[error("collision reported at bit {pos}, outside the anticollision frame")]
    CollisionOutOfRange { pos: u32 },

    #[error("collision unresolved after {rounds} rounds")]
    CollisionUnresolved { rounds: usize },
}

impl Error {
    /// True for the protocol-violation family: responses or register values
    /// that contradict ISO 14443-3, as opposed to transport failures.
    pub fn is_protocol_violation(&self) -> bool {
        matches!(
            self,
            Error::InvalidLength { .. }
                | Error::InvalidNvb { .. }
                | Error::InvalidUidLength { .. }
                | Error::BadCascadeTag { .. }
                | Error::CascadeDepth
                | Error::CollisionOutOfRange { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
