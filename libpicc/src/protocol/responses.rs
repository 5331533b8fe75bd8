// libpicc/src/protocol/responses.rs

use crate::types::{Atqa, Sak};
use crate::{Error, Result};

/// Decode a short-frame response. The ATQA is exactly two bytes; anything
/// else is a malformed answer and aborts the selection.
pub fn decode_atqa(data: &[u8]) -> Result<Atqa> {
    Atqa::try_from(data)
}

/// Decode a select response. The SAK is the first byte; depending on the
/// front-end's CRC handling up to two CRC bytes may trail it.
pub fn decode_sak(data: &[u8]) -> Result<Sak> {
    if data.is_empty() {
        return Err(Error::InvalidLength {
            expected: 1,
            actual: 0,
        });
    }
    if data.len() > 3 {
        return Err(Error::InvalidLength {
            expected: 3,
            actual: data.len(),
        });
    }
    Ok(Sak::from_byte(data[0]))
}
