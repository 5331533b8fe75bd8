// libpicc/src/selector/mod.rs

//! The cascade selector: drives REQA/WUPA, bitframe anticollision and the
//! CL1→CL2→CL3 select sequence against an RF front-end, assembling the
//! card's UID along the way.

mod resolver;
mod xcv;

use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::card::Card;
use crate::constants::{ACF_FULL_BITS, CASCADE_TAG, MAX_COLLISION_ROUNDS};
use crate::protocol::{AnticolFrame, ShortFrameCommand};
use crate::rf::RfFrontend;
use crate::types::{CascadeLevel, Sak, SelectionState, Uid};
use crate::utils::bytes_to_hex_spaced;
use crate::{Error, Result};

/// Outcome of one cascade level.
enum CascadeStep {
    /// UID incomplete, continue at the next level.
    Continue(CascadeLevel),
    /// Terminal level reached.
    Done { uid_len: usize, sak: Sak },
}

/// Card discovery and selection engine for one RF front-end.
///
/// Owns the front-end, the random source used for collision tie-breaking
/// and the diagnostic selection state. One selection runs at a time; the
/// caller serializes concurrent attempts per physical reader.
pub struct Selector<R> {
    rf: R,
    rng: StdRng,
    state: SelectionState,
    collision_budget: usize,
}

impl<R: RfFrontend> Selector<R> {
    /// Selector with an entropy-seeded random source.
    pub fn new(rf: R) -> Self {
        Self::from_rng(rf, StdRng::from_entropy())
    }

    /// Selector with a fixed seed, for reproducible runs.
    pub fn with_seed(rf: R, seed: u64) -> Self {
        Self::from_rng(rf, StdRng::seed_from_u64(seed))
    }

    fn from_rng(rf: R, rng: StdRng) -> Self {
        Self {
            rf,
            rng,
            state: SelectionState::Idle,
            collision_budget: MAX_COLLISION_ROUNDS,
        }
    }

    /// Override the per-level bound on collision-resolution rounds.
    pub fn set_collision_budget(&mut self, rounds: usize) {
        self.collision_budget = rounds;
    }

    /// Diagnostic state reached by the most recent selection attempt.
    pub fn state(&self) -> SelectionState {
        self.state
    }

    /// Release the front-end.
    pub fn into_inner(self) -> R {
        self.rf
    }

    /// Discover and select one card.
    ///
    /// `wake_up` chooses WUPA over REQA, also waking cards parked in HALT.
    /// On success the card is in the ACTIVE state and its complete UID and
    /// terminal SAK are returned. Any sub-step failure aborts the whole
    /// attempt; there is no partial result.
    pub fn select_card(&mut self, wake_up: bool) -> Result<Card> {
        let cmd = if wake_up {
            ShortFrameCommand::Wupa
        } else {
            ShortFrameCommand::Reqa
        };
        debug!("sending {:?}", cmd);

        self.state = SelectionState::ReqaSent;
        let atqa = xcv::transceive_short_frame(&mut self.rf, cmd)?;
        self.state = SelectionState::AtqaRcvd;
        debug!("ATQA: {}", bytes_to_hex_spaced(atqa.as_bytes()));

        if !atqa.bitframe_anticollision() {
            // Only the bitframe mechanism is implemented; cards offering
            // just the optional timeslot variant cannot be selected here.
            self.state = SelectionState::NoBitframeAnticol;
            return Err(Error::NoAnticollisionSupport);
        }

        let uid_size = atqa.uid_size();
        debug!(
            "uid size class {:?} ({} bytes)",
            uid_size,
            uid_size.total_bytes()
        );

        self.state = SelectionState::AnticolRunning;
        let mut uid = [0u8; 10];
        let mut level = CascadeLevel::Cl1;

        loop {
            match self.run_cascade_level(level, &mut uid)? {
                CascadeStep::Continue(next) => {
                    debug!("cascading from {:?} to {:?}", level, next);
                    level = next;
                }
                CascadeStep::Done { uid_len, sak } => {
                    self.state = SelectionState::Selected;
                    let uid = Uid::from_slice(&uid[..uid_len])?;
                    debug!("selected uid {} sak {:#04x}", uid.to_hex(), sak.as_byte());
                    return Ok(Card::new(uid, sak));
                }
            }
        }
    }

    /// One cascade level: probe, resolve collisions, select, interpret SAK.
    fn run_cascade_level(&mut self, level: CascadeLevel, uid: &mut [u8; 10]) -> Result<CascadeStep> {
        let mut acf = AnticolFrame::new(level);
        debug!(
            "anticol: sel_code={:#04x} nvb={:#04x}",
            acf.sel_code(),
            acf.nvb()
        );

        let collision = xcv::transceive_acf(&mut self.rf, &mut acf)?;
        resolver::resolve(
            &mut self.rf,
            &mut acf,
            collision,
            &mut self.rng,
            self.collision_budget,
        )?;

        acf.set_valid_bits(ACF_FULL_BITS)?;
        let sak = xcv::transceive_select(&mut self.rf, &acf)?;
        let bits = acf.uid_bits();

        if sak.cascade_pending() {
            let Some(next) = level.next() else {
                self.state = SelectionState::Error;
                return Err(Error::CascadeDepth);
            };
            // A continuing level always starts with the cascade tag; a card
            // that says otherwise is misbehaving and selection stops.
            if bits[0] != CASCADE_TAG {
                self.state = SelectionState::Error;
                return Err(Error::BadCascadeTag { actual: bits[0] });
            }
            let offset = level.uid_offset();
            uid[offset..offset + 3].copy_from_slice(&bits[1..4]);
            Ok(CascadeStep::Continue(next))
        } else {
            let offset = level.uid_offset();
            uid[offset..offset + 4].copy_from_slice(&bits[..4]);
            Ok(CascadeStep::Done {
                uid_len: level.uid_len(),
                sak,
            })
        }
    }
}
