// libpicc/src/protocol/anticol.rs

use crate::constants::ACF_FULL_BITS;
use crate::protocol::nvb;
use crate::types::CascadeLevel;
use crate::{Error, Result};

/// UID-bits field width: 4 UID bytes plus the BCC check byte.
const UID_BITS_LEN: usize = 5;

/// The mutable anticollision working frame for one cascade level.
///
/// Layout on the wire: sel-code, NVB, then up to 5 UID-bits bytes. The
/// same buffer is reused from the initial 16-bit probe through collision
/// resolution up to the full 56-bit select frame; responses are merged in
/// place so the known UID prefix grows monotonically.
#[derive(Debug, Clone)]
pub struct AnticolFrame {
    level: CascadeLevel,
    nvb: u8,
    uid_bits: [u8; UID_BITS_LEN],
}

impl AnticolFrame {
    /// Fresh probe frame for a cascade level: header only, no UID bits.
    pub fn new(level: CascadeLevel) -> Self {
        Self {
            level,
            nvb: nvb::PROBE,
            uid_bits: [0; UID_BITS_LEN],
        }
    }

    pub fn level(&self) -> CascadeLevel {
        self.level
    }

    pub fn sel_code(&self) -> u8 {
        self.level.sel_code()
    }

    pub fn nvb(&self) -> u8 {
        self.nvb
    }

    pub fn uid_bits(&self) -> &[u8; UID_BITS_LEN] {
        &self.uid_bits
    }

    /// Claim exactly `bits` valid bits (header included) for the next
    /// transmission. The NVB encoding admits up to 7 bytes + 7 bits, but
    /// this frame ends at 56 bits.
    pub fn set_valid_bits(&mut self, bits: u32) -> Result<()> {
        if bits > ACF_FULL_BITS {
            return Err(Error::InvalidNvb { bits });
        }
        self.nvb = nvb::encode(bits)?;
        Ok(())
    }

    /// Bytes to transmit for the current NVB, and the number of significant
    /// bits in the last of them (0 = all eight).
    pub fn tx_frame(&self) -> (Vec<u8>, u8) {
        let whole_bytes = ((self.nvb >> 4) & 0x07) as usize;
        let last_bits = self.nvb & 0x07;
        let total = whole_bytes + usize::from(last_bits != 0);

        let mut out = Vec::with_capacity(total);
        out.push(self.sel_code());
        out.push(self.nvb);
        out.extend_from_slice(&self.uid_bits[..total - 2]);
        (out, last_bits)
    }

    /// Merge an anticollision response into the UID buffer.
    ///
    /// The card answers with the UID bits the reader did not claim, aligned
    /// so its first byte completes the reader's trailing partial byte: that
    /// byte is OR-merged under a mask preserving the bits already known,
    /// the rest is appended verbatim. Re-merging the same response is a
    /// no-op on the already-valid prefix.
    pub fn merge_response(&mut self, rx: &[u8]) -> Result<()> {
        if rx.is_empty() {
            return Err(Error::InvalidLength {
                expected: 1,
                actual: 0,
            });
        }

        let whole_bytes = ((self.nvb >> 4) & 0x07) as usize;
        let last_bits = self.nvb & 0x07;
        // First UID byte the response contributes to.
        let idx = whole_bytes - 2;

        if idx + rx.len() > UID_BITS_LEN {
            return Err(Error::InvalidLength {
                expected: UID_BITS_LEN - idx,
                actual: rx.len(),
            });
        }

        let keep_mask = if last_bits == 0 {
            0x00
        } else {
            0xff >> (8 - last_bits)
        };
        self.uid_bits[idx] = (self.uid_bits[idx] & keep_mask) | rx[0];
        self.uid_bits[idx + 1..idx + rx.len()].copy_from_slice(&rx[1..]);
        Ok(())
    }

    /// Flip one bit of the UID-bits field (zero-based index from the field
    /// start). Used by collision resolution to pick the other branch of a
    /// collided bit.
    pub fn flip_uid_bit(&mut self, bit: u32) {
        debug_assert!((bit as usize) < UID_BITS_LEN * 8);
        self.uid_bits[bit as usize / 8] ^= 1 << (bit % 8);
    }
}
