// libpicc/src/selector/resolver.rs

//! Collision resolution: narrow the anticollision frame to the reported
//! collision bit, pick one branch at random, retransceive. Repeats until
//! the front-end stops reporting collisions or the round budget runs out.

use log::{debug, trace};
use rand::Rng;
use rand::rngs::StdRng;

use crate::constants::{ACF_FULL_BITS, ACF_HEADER_BITS};
use crate::protocol::AnticolFrame;
use crate::rf::RfFrontend;
use crate::selector::xcv;
use crate::utils::bytes_to_hex_spaced;
use crate::{Error, Result};

/// Drive the anticollision frame to a collision-free state.
///
/// `collision` is the report from the probe transceive that preceded this
/// call. Each round claims the bits up to the collision as valid, flips the
/// collided bit with probability 1/2 and retransceives.
pub(crate) fn resolve<R: RfFrontend>(
    rf: &mut R,
    frame: &mut AnticolFrame,
    mut collision: Option<u32>,
    rng: &mut StdRng,
    budget: usize,
) -> Result<()> {
    let mut rounds = 0;

    while let Some(pos) = collision {
        if rounds == budget {
            return Err(Error::CollisionUnresolved { rounds });
        }
        // A position inside the header or past the frame end cannot come
        // from a conforming exchange; do not try to interpret it.
        if pos <= ACF_HEADER_BITS || pos > ACF_FULL_BITS {
            return Err(Error::CollisionOutOfRange { pos });
        }

        debug!("collision at bit {pos}");
        frame.set_valid_bits(pos)?;
        if rng.gen_bool(0.5) {
            frame.flip_uid_bit(pos - ACF_HEADER_BITS - 1);
        }
        trace!(
            "acf retry: nvb={:#04x} uid_bits={}",
            frame.nvb(),
            bytes_to_hex_spaced(frame.uid_bits())
        );

        collision = xcv::transceive_acf(rf, frame)?;
        rounds += 1;
    }

    Ok(())
}
