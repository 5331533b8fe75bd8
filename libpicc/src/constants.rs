// libpicc/src/constants.rs
//! Protocol constants shared across the crate (ISO/IEC 14443-3, Chapter 6).

/// Short-frame command REQA: probe for cards in the IDLE state.
pub const SF_CMD_REQA: u8 = 0x26;

/// Short-frame command WUPA: also wakes cards in the HALT state.
pub const SF_CMD_WUPA: u8 = 0x52;

/// Anticollision/select code for cascade level 1.
pub const SEL_CODE_CL1: u8 = 0x93;
/// Anticollision/select code for cascade level 2.
pub const SEL_CODE_CL2: u8 = 0x95;
/// Anticollision/select code for cascade level 3.
pub const SEL_CODE_CL3: u8 = 0x97;

/// Cascade tag: first UID byte of every non-terminal cascade level.
pub const CASCADE_TAG: u8 = 0x88;

/// Bits occupied by the sel-code + NVB header of an anticollision frame.
pub const ACF_HEADER_BITS: u32 = 16;

/// Bit count of a complete anticollision frame: header + 4 UID bytes + BCC.
pub const ACF_FULL_BITS: u32 = 56;

/// Frame delay time for short-frame exchanges (REQA/WUPA), in ms.
pub const SHORT_FRAME_TIMEOUT_MS: u64 = 1236;

/// Per-exchange timeout for anticollision bitframes, in ms.
pub const ANTICOL_TIMEOUT_MS: u64 = 50;

/// Per-exchange timeout for the full select frame, in ms.
pub const SELECT_TIMEOUT_MS: u64 = 1236;

/// Default bound on collision-resolution rounds within one cascade level.
pub const MAX_COLLISION_ROUNDS: usize = 32;
