// libpicc/src/types.rs

use bitflags::bitflags;

use crate::constants::{SEL_CODE_CL1, SEL_CODE_CL2, SEL_CODE_CL3};
use crate::{Error, Result};

/// ATQA — Answer To Request, Type A (2 bytes, newtype pattern).
///
/// Byte 0 carries the bitframe-anticollision indicator (bits 0..4) and the
/// UID size code (bits 6..7); byte 1 is proprietary/RFU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Atqa([u8; 2]);

impl Atqa {
    pub fn from_bytes(bytes: [u8; 2]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 2] {
        &self.0
    }

    /// Does the card support bitframe anticollision? Cards that only
    /// implement the optional timeslot mechanism leave these bits clear.
    pub fn bitframe_anticollision(&self) -> bool {
        self.0[0] & 0x1f != 0
    }

    /// UID size class advertised by the card.
    pub fn uid_size(&self) -> UidSize {
        UidSize::from_code((self.0[0] >> 6) & 0x03)
    }
}

impl TryFrom<&[u8]> for Atqa {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != 2 {
            return Err(Error::InvalidLength {
                expected: 2,
                actual: bytes.len(),
            });
        }
        Ok(Self([bytes[0], bytes[1]]))
    }
}

/// UID size class from the ATQA size code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UidSize {
    /// 4-byte UID, one cascade level.
    Single,
    /// 7-byte UID, two cascade levels.
    Double,
    /// 10-byte UID, three cascade levels.
    Triple,
}

impl UidSize {
    /// Decode the 2-bit ATQA size code. Code 3 is RFU and treated as
    /// triple.
    pub fn from_code(code: u8) -> Self {
        match code & 0x03 {
            0 => Self::Single,
            1 => Self::Double,
            _ => Self::Triple,
        }
    }

    pub fn total_bytes(self) -> usize {
        match self {
            Self::Single => 4,
            Self::Double => 7,
            Self::Triple => 10,
        }
    }

    pub fn cascade_levels(self) -> usize {
        match self {
            Self::Single => 1,
            Self::Double => 2,
            Self::Triple => 3,
        }
    }
}

/// SAK — Select Acknowledge (newtype over the first response byte).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sak(u8);

impl Sak {
    pub fn from_byte(byte: u8) -> Self {
        Self(byte)
    }

    pub fn as_byte(&self) -> u8 {
        self.0
    }

    /// Cascade bit (0x04): the UID is incomplete, another level follows.
    pub fn cascade_pending(&self) -> bool {
        self.0 & 0x04 != 0
    }

    /// Bit 5 (0x20): the card speaks ISO 14443-4 (T=CL).
    pub fn tcl_capable(&self) -> bool {
        self.0 & 0x20 != 0
    }
}

/// Assembled card UID: 4, 7 or 10 bytes depending on the terminal cascade
/// level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Uid {
    bytes: [u8; 10],
    len: usize,
}

impl Uid {
    /// Build a UID from a 4-, 7- or 10-byte slice.
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        match slice.len() {
            4 | 7 | 10 => {
                let mut bytes = [0u8; 10];
                bytes[..slice.len()].copy_from_slice(slice);
                Ok(Self {
                    bytes,
                    len: slice.len(),
                })
            }
            other => Err(Error::InvalidUidLength { actual: other }),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        // A selected UID always has at least 4 bytes.
        false
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

/// One of the up to three UID-resolution rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CascadeLevel {
    Cl1,
    Cl2,
    Cl3,
}

impl CascadeLevel {
    /// Anticollision/select code transmitted for this level.
    pub const fn sel_code(self) -> u8 {
        match self {
            Self::Cl1 => SEL_CODE_CL1,
            Self::Cl2 => SEL_CODE_CL2,
            Self::Cl3 => SEL_CODE_CL3,
        }
    }

    /// Byte offset where this level's decoded UID bytes land in the
    /// assembled UID.
    pub const fn uid_offset(self) -> usize {
        match self {
            Self::Cl1 => 0,
            Self::Cl2 => 3,
            Self::Cl3 => 6,
        }
    }

    /// Total UID length when this level terminates the cascade.
    pub const fn uid_len(self) -> usize {
        match self {
            Self::Cl1 => 4,
            Self::Cl2 => 7,
            Self::Cl3 => 10,
        }
    }

    /// The following level, if any. Levels only ever advance forward.
    pub const fn next(self) -> Option<CascadeLevel> {
        match self {
            Self::Cl1 => Some(Self::Cl2),
            Self::Cl2 => Some(Self::Cl3),
            Self::Cl3 => None,
        }
    }
}

/// Selection state machine position, tracked for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SelectionState {
    Idle,
    ReqaSent,
    AtqaRcvd,
    NoBitframeAnticol,
    AnticolRunning,
    Selected,
    Error,
}

bitflags! {
    /// Application-protocol families a selected card may speak, derived
    /// from the terminal SAK. Without probing beyond selection, a non-T=CL
    /// card leaves both MIFARE variants as candidates.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ProtocolCandidates: u8 {
        const TCL = 1 << 0;
        const MIFARE_UL = 1 << 1;
        const MIFARE_CLASSIC = 1 << 2;
    }
}

impl ProtocolCandidates {
    /// Classify the terminal SAK.
    pub fn from_sak(sak: Sak) -> Self {
        if sak.tcl_capable() {
            Self::TCL
        } else {
            Self::MIFARE_UL | Self::MIFARE_CLASSIC
        }
    }
}
