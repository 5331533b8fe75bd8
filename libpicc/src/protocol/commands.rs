// libpicc/src/protocol/commands.rs

use crate::constants::{SF_CMD_REQA, SF_CMD_WUPA};

/// Short-frame wake-up commands (ISO 14443-3, 6.3.1). Transmitted as a
/// single byte of which only 7 bits are significant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortFrameCommand {
    /// REQA: answered by cards in the IDLE state.
    Reqa,
    /// WUPA: additionally wakes cards parked in HALT.
    Wupa,
}

impl ShortFrameCommand {
    pub const fn code(self) -> u8 {
        match self {
            Self::Reqa => SF_CMD_REQA,
            Self::Wupa => SF_CMD_WUPA,
        }
    }
}
