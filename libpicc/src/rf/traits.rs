// libpicc/src/rf/traits.rs

use bitflags::bitflags;
use thiserror::Error;

/// Errors reported by the RF front-end boundary. Timeouts and hardware
/// faults are not distinguished further up the stack; either aborts the
/// selection attempt in progress.
#[derive(Error, Debug)]
pub enum RfError {
    #[error("rf exchange timed out")]
    Timeout,

    #[error("invalid rf mode: {field} = {value}")]
    InvalidMode { field: &'static str, value: u8 },

    #[error("rf front-end i/o failed: {0}")]
    Io(String),
}

bitflags! {
    /// Error-register flags reported by the front-end after an exchange.
    /// Only `COLLISION` drives protocol decisions; the rest surface in
    /// diagnostics.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ErrorFlags: u8 {
        const COLLISION = 1 << 0;
        const PARITY = 1 << 1;
        const FRAMING = 1 << 2;
        const CRC = 1 << 3;
        const FIFO_OVERFLOW = 1 << 4;
    }
}

/// RF transmit/receive configuration for one exchange.
///
/// The front-end chips expose this as a packed register; here it is an
/// explicit record validated at construction, with one constructor per
/// frame shape the protocol uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RfMode {
    parity: bool,
    tx_crc: bool,
    rx_crc: bool,
    tx_last_bits: u8,
    rx_align: u8,
}

impl RfMode {
    /// Build a mode from raw fields. `tx_last_bits` and `rx_align` must be
    /// in 0..=7.
    pub fn new(
        parity: bool,
        tx_crc: bool,
        rx_crc: bool,
        tx_last_bits: u8,
        rx_align: u8,
    ) -> Result<Self, RfError> {
        if tx_last_bits > 7 {
            return Err(RfError::InvalidMode {
                field: "tx_last_bits",
                value: tx_last_bits,
            });
        }
        if rx_align > 7 {
            return Err(RfError::InvalidMode {
                field: "rx_align",
                value: rx_align,
            });
        }
        Ok(Self {
            parity,
            tx_crc,
            rx_crc,
            tx_last_bits,
            rx_align,
        })
    }

    /// Short frames (REQA/WUPA): 7 significant bits, parity, no CRC.
    pub const fn short_frame() -> Self {
        Self {
            parity: true,
            tx_crc: false,
            rx_crc: false,
            tx_last_bits: 7,
            rx_align: 0,
        }
    }

    /// Anticollision bitframes: parity, no CRC; the receive alignment
    /// complements the transmitted partial-bit count so the card's first
    /// response bits land next to the bits the reader already sent.
    pub fn anticollision(tx_last_bits: u8) -> Result<Self, RfError> {
        Self::new(true, false, false, tx_last_bits, tx_last_bits)
    }

    /// Regular Type A frames (full select): parity plus CRC both ways.
    pub const fn standard() -> Self {
        Self {
            parity: true,
            tx_crc: true,
            rx_crc: true,
            tx_last_bits: 0,
            rx_align: 0,
        }
    }

    pub fn parity(&self) -> bool {
        self.parity
    }

    pub fn tx_crc(&self) -> bool {
        self.tx_crc
    }

    pub fn rx_crc(&self) -> bool {
        self.rx_crc
    }

    /// Significant bits in the last transmitted byte; 0 means all eight.
    pub fn tx_last_bits(&self) -> u8 {
        self.tx_last_bits
    }

    /// Bit position the first received bit is aligned to.
    pub fn rx_align(&self) -> u8 {
        self.rx_align
    }
}

/// Boundary to the contactless front-end chip (RC632-class): one blocking
/// physical exchange per `transceive` call, with collision reporting read
/// back through separate register accessors.
pub trait RfFrontend {
    /// Program transmit/receive framing for the next exchange.
    fn set_rf_mode(&mut self, mode: &RfMode) -> Result<(), RfError>;

    /// Perform one request/response exchange. Bit-granular framing of the
    /// last byte travels in the configured [`RfMode`].
    fn transceive(&mut self, tx: &[u8], timeout_ms: u64) -> Result<Vec<u8>, RfError>;

    /// Error flags recorded by the front-end for the last exchange.
    fn error_flags(&mut self) -> Result<ErrorFlags, RfError>;

    /// Bit position of the first collision in the last exchange. Only
    /// meaningful while [`ErrorFlags::COLLISION`] is set.
    fn collision_position(&mut self) -> Result<u8, RfError>;
}
