// libpicc/src/reader/ccid.rs

//! CCID message codec: the 10-byte command headers driving slot power and
//! status, and the matching response parser. Pure bytes, no transport.

use crate::reader::traits::ReaderError;

/// Command message types (CCID rev 1.1, section 6.1).
pub const PC_TO_RDR_ICC_POWER_ON: u8 = 0x62;
pub const PC_TO_RDR_ICC_POWER_OFF: u8 = 0x63;
pub const PC_TO_RDR_GET_SLOT_STATUS: u8 = 0x65;
pub const PC_TO_RDR_XFR_BLOCK: u8 = 0x6F;

/// Response message types (section 6.2).
pub const RDR_TO_PC_DATA_BLOCK: u8 = 0x80;
pub const RDR_TO_PC_SLOT_STATUS: u8 = 0x81;

const HEADER_LEN: usize = 10;

/// Supply voltage requested at power-on (bPowerSelect).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Voltage {
    Auto = 0,
    V5 = 1,
    V3 = 2,
    V1_8 = 3,
}

/// Card slot state as decoded from a CCID response status byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SlotStatus {
    Present,
    NotPresent,
    ClockError,
}

fn header(msg_type: u8, data_len: u32, slot: u8, seq: u8, p0: u8, p1: u8, p2: u8) -> Vec<u8> {
    let mut out = Vec::with_capacity(HEADER_LEN + data_len as usize);
    out.push(msg_type);
    out.extend_from_slice(&data_len.to_le_bytes());
    out.push(slot);
    out.push(seq);
    out.push(p0);
    out.push(p1);
    out.push(p2);
    out
}

/// Build a PC_to_RDR_IccPowerOn command.
pub fn icc_power_on(slot: u8, seq: u8, voltage: Voltage) -> Vec<u8> {
    header(PC_TO_RDR_ICC_POWER_ON, 0, slot, seq, voltage as u8, 0, 0)
}

/// Build a PC_to_RDR_IccPowerOff command.
pub fn icc_power_off(slot: u8, seq: u8) -> Vec<u8> {
    header(PC_TO_RDR_ICC_POWER_OFF, 0, slot, seq, 0, 0, 0)
}

/// Build a PC_to_RDR_GetSlotStatus command.
pub fn get_slot_status(slot: u8, seq: u8) -> Vec<u8> {
    header(PC_TO_RDR_GET_SLOT_STATUS, 0, slot, seq, 0, 0, 0)
}

/// Build a PC_to_RDR_XfrBlock command carrying one block for the card.
pub fn xfr_block(slot: u8, seq: u8, data: &[u8]) -> Vec<u8> {
    let mut out = header(PC_TO_RDR_XFR_BLOCK, data.len() as u32, slot, seq, 0, 0, 0);
    out.extend_from_slice(data);
    out
}

/// A parsed RDR_to_PC response message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RdrResponse {
    pub msg_type: u8,
    pub slot: u8,
    pub seq: u8,
    pub status: u8,
    pub error: u8,
    pub data: Vec<u8>,
}

impl RdrResponse {
    /// Parse a raw bulk-in message: 10-byte header plus dwLength data bytes.
    pub fn parse(raw: &[u8]) -> Result<Self, ReaderError> {
        if raw.len() < HEADER_LEN {
            return Err(ReaderError::ShortResponse { actual: raw.len() });
        }

        let declared = u32::from_le_bytes([raw[1], raw[2], raw[3], raw[4]]) as usize;
        if raw.len() != HEADER_LEN + declared {
            return Err(ReaderError::LengthMismatch {
                declared,
                actual: raw.len() - HEADER_LEN,
            });
        }

        Ok(Self {
            msg_type: raw[0],
            slot: raw[5],
            seq: raw[6],
            status: raw[7],
            error: raw[8],
            data: raw[HEADER_LEN..].to_vec(),
        })
    }

    /// Require a specific message type.
    pub fn expect_type(self, expected: u8) -> Result<Self, ReaderError> {
        if self.msg_type != expected {
            return Err(ReaderError::UnexpectedMessage {
                expected,
                actual: self.msg_type,
            });
        }
        Ok(self)
    }

    /// Did the reader report command success? (bmCommandStatus, bits 6..7)
    pub fn command_ok(&self) -> bool {
        self.status & 0xc0 == 0
    }

    /// Fail unless the command succeeded.
    pub fn require_ok(self) -> Result<Self, ReaderError> {
        if !self.command_ok() {
            return Err(ReaderError::CommandFailed {
                status: self.status,
                error: self.error,
            });
        }
        Ok(self)
    }

    /// Slot state from bmIccStatus (bits 0..1). Failed commands and the
    /// RFU encoding collapse into `ClockError`.
    pub fn slot_status(&self) -> SlotStatus {
        if !self.command_ok() {
            return SlotStatus::ClockError;
        }
        match self.status & 0x03 {
            0 | 1 => SlotStatus::Present,
            2 => SlotStatus::NotPresent,
            _ => SlotStatus::ClockError,
        }
    }
}
