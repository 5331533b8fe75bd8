// libpicc/src/prelude.rs

pub use crate::card::Card;
pub use crate::protocol::{AnticolFrame, ShortFrameCommand};
pub use crate::reader::{
    MockReaderTransport, ReaderError, ReaderTransport, Slot, SlotStatus, Voltage,
};
pub use crate::rf::{ErrorFlags, MockRf, RfError, RfFrontend, RfMode};
pub use crate::selector::Selector;
pub use crate::{
    Atqa, CascadeLevel, Error, ProtocolCandidates, Result, Sak, SelectionState, Uid, UidSize,
};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, ms, parse_hex};
