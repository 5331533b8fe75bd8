// libpicc/src/card.rs

use crate::types::{ProtocolCandidates, Sak, Uid};

/// A fully selected card: complete UID plus the terminal SAK.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    uid: Uid,
    sak: Sak,
}

impl Card {
    pub fn new(uid: Uid, sak: Sak) -> Self {
        Self { uid, sak }
    }

    pub fn uid(&self) -> &Uid {
        &self.uid
    }

    pub fn sak(&self) -> Sak {
        self.sak
    }

    /// Application-protocol families the card advertises. Telling MIFARE
    /// Ultralight from Classic apart needs probing beyond selection, so
    /// both stay listed for non-T=CL cards.
    pub fn protocols(&self) -> ProtocolCandidates {
        ProtocolCandidates::from_sak(self.sak)
    }

    /// Convenience: does the card speak ISO 14443-4 (T=CL)?
    pub fn is_tcl(&self) -> bool {
        self.sak.tcl_capable()
    }
}
