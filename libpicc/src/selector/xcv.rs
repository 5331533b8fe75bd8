// libpicc/src/selector/xcv.rs

//! Frame-level transceive glue: one function per frame shape, each
//! programming the RF mode, performing the exchange and folding the
//! front-end's collision registers into the result.

use log::{debug, trace};

use crate::constants::{
    ACF_HEADER_BITS, ANTICOL_TIMEOUT_MS, SELECT_TIMEOUT_MS, SHORT_FRAME_TIMEOUT_MS,
};
use crate::protocol::{AnticolFrame, ShortFrameCommand, decode_atqa, decode_sak};
use crate::rf::{ErrorFlags, RfFrontend, RfMode};
use crate::types::{Atqa, Sak};
use crate::utils::bytes_to_hex_spaced;
use crate::Result;

/// Issue REQA or WUPA as a 7-bit short frame and decode the ATQA.
pub(crate) fn transceive_short_frame<R: RfFrontend>(
    rf: &mut R,
    cmd: ShortFrameCommand,
) -> Result<Atqa> {
    rf.set_rf_mode(&RfMode::short_frame())?;
    let rx = rf.transceive(&[cmd.code()], SHORT_FRAME_TIMEOUT_MS)?;

    // Several cards answering REQA at once can already collide here. The
    // ATQA content is unreliable in that case but the anticollision loop
    // sorts the cards out, so only note it.
    let flags = rf.error_flags()?;
    if flags.contains(ErrorFlags::COLLISION) {
        let pos = rf.collision_position()?;
        debug!("collision during short frame at bit {pos}");
    }

    decode_atqa(&rx)
}

/// Transceive the anticollision bitframe in its current state. The card's
/// reply is merged into the frame's UID buffer; a reported collision comes
/// back as the bit position counted from the frame start (header included),
/// `None` meaning no collision.
pub(crate) fn transceive_acf<R: RfFrontend>(
    rf: &mut R,
    frame: &mut AnticolFrame,
) -> Result<Option<u32>> {
    let (tx, last_bits) = frame.tx_frame();
    rf.set_rf_mode(&RfMode::anticollision(last_bits)?)?;
    trace!("acf tx: {}", bytes_to_hex_spaced(&tx));

    let rx = rf.transceive(&tx, ANTICOL_TIMEOUT_MS)?;
    frame.merge_response(&rx)?;

    let flags = rf.error_flags()?;
    if flags.contains(ErrorFlags::COLLISION) {
        let boc = rf.collision_position()?;
        Ok(Some(ACF_HEADER_BITS + u32::from(boc)))
    } else {
        Ok(None)
    }
}

/// Transceive the full 56-bit select frame and decode the SAK.
pub(crate) fn transceive_select<R: RfFrontend>(rf: &mut R, frame: &AnticolFrame) -> Result<Sak> {
    rf.set_rf_mode(&RfMode::standard())?;
    let (tx, _) = frame.tx_frame();
    trace!("select tx: {}", bytes_to_hex_spaced(&tx));

    let rx = rf.transceive(&tx, SELECT_TIMEOUT_MS)?;
    decode_sak(&rx)
}
