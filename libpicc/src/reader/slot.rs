// libpicc/src/reader/slot.rs

use std::marker::PhantomData;

use log::debug;

use crate::reader::ccid::{
    self, RDR_TO_PC_DATA_BLOCK, RDR_TO_PC_SLOT_STATUS, RdrResponse, SlotStatus, Voltage,
};
use crate::reader::traits::{ReaderError, ReaderTransport};
use crate::utils::DEFAULT_READ_TIMEOUT_MS;

/// Type-state markers for the slot power state.
pub struct Unpowered;
pub struct Powered;

/// One card slot of a CCID reader, with the power state tracked at compile
/// time: card exchanges are only available on a powered slot.
pub struct Slot<T, State = Unpowered> {
    transport: T,
    slot: u8,
    seq: u8,
    _state: PhantomData<State>,
}

impl<T: ReaderTransport> Slot<T, Unpowered> {
    /// Wrap a transport for the given slot index.
    pub fn new(transport: T, slot: u8) -> Self {
        Self {
            transport,
            slot,
            seq: 0,
            _state: PhantomData,
        }
    }

    /// Power the ICC up. On success returns the powered slot and the ATR
    /// block reported by the card.
    pub fn power_on(mut self, voltage: Voltage) -> Result<(Slot<T, Powered>, Vec<u8>), ReaderError> {
        let seq = self.next_seq();
        let resp = self.roundtrip(ccid::icc_power_on(self.slot, seq, voltage))?;
        let resp = resp.expect_type(RDR_TO_PC_DATA_BLOCK)?.require_ok()?;
        debug!("slot {} powered, atr {} bytes", self.slot, resp.data.len());
        Ok((
            Slot {
                transport: self.transport,
                slot: self.slot,
                seq: self.seq,
                _state: PhantomData,
            },
            resp.data,
        ))
    }

    /// Block until a card is present, polling the slot status. Gives up
    /// after `attempts` polls.
    pub fn wait_for_card(&mut self, attempts: usize, poll_ms: u64) -> Result<SlotStatus, ReaderError> {
        for _ in 0..attempts {
            let status = self.status()?;
            if status != SlotStatus::NotPresent {
                return Ok(status);
            }
            std::thread::sleep(crate::utils::ms(poll_ms));
        }
        Err(ReaderError::CardAbsent)
    }
}

impl<T: ReaderTransport> Slot<T, Powered> {
    /// Exchange one block with the card (PC_to_RDR_XfrBlock).
    pub fn transfer_block(&mut self, data: &[u8]) -> Result<Vec<u8>, ReaderError> {
        let seq = self.next_seq();
        let resp = self.roundtrip(ccid::xfr_block(self.slot, seq, data))?;
        let resp = resp.expect_type(RDR_TO_PC_DATA_BLOCK)?.require_ok()?;
        Ok(resp.data)
    }

    /// Power the ICC down, returning the unpowered slot.
    pub fn power_off(mut self) -> Result<Slot<T, Unpowered>, ReaderError> {
        let seq = self.next_seq();
        let resp = self.roundtrip(ccid::icc_power_off(self.slot, seq))?;
        resp.expect_type(RDR_TO_PC_SLOT_STATUS)?.require_ok()?;
        debug!("slot {} powered off", self.slot);
        Ok(Slot {
            transport: self.transport,
            slot: self.slot,
            seq: self.seq,
            _state: PhantomData,
        })
    }
}

impl<T: ReaderTransport, S> Slot<T, S> {
    /// Query the slot status (valid in either power state).
    pub fn status(&mut self) -> Result<SlotStatus, ReaderError> {
        let seq = self.next_seq();
        let resp = self.roundtrip(ccid::get_slot_status(self.slot, seq))?;
        let resp = resp.expect_type(RDR_TO_PC_SLOT_STATUS)?;
        Ok(resp.slot_status())
    }

    fn next_seq(&mut self) -> u8 {
        let seq = self.seq;
        self.seq = self.seq.wrapping_add(1);
        seq
    }

    fn roundtrip(&mut self, msg: Vec<u8>) -> Result<RdrResponse, ReaderError> {
        self.transport.send(&msg)?;
        let raw = self.transport.receive(DEFAULT_READ_TIMEOUT_MS)?;
        RdrResponse::parse(&raw)
    }
}
