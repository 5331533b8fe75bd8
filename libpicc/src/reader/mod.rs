// libpicc/src/reader/mod.rs

//! The thin CCID slot layer: power, status and block transfer wrappers
//! around an opaque reader transport. No ISO 14443 logic lives here.

pub mod ccid;
pub mod mock;
pub mod slot;
pub mod traits;
#[cfg(feature = "usb")]
pub mod usb;

pub use ccid::{RdrResponse, SlotStatus, Voltage};
pub use mock::MockReaderTransport;
pub use slot::{Powered, Slot, Unpowered};
pub use traits::{ReaderError, ReaderTransport};
#[cfg(feature = "usb")]
pub use usb::UsbReaderTransport;
