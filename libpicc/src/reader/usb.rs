// libpicc/src/reader/usb.rs

//! Bulk-endpoint USB transport for CCID readers, behind the `usb` feature.

use std::time::Duration;

use rusb::{DeviceHandle, GlobalContext};

use crate::reader::traits::{ReaderError, ReaderTransport};
use crate::utils::ms;

const DEFAULT_EP_OUT: u8 = 0x02;
const DEFAULT_EP_IN: u8 = 0x82;
const READ_BUF_LEN: usize = 512;
const WRITE_TIMEOUT: Duration = Duration::from_millis(1000);

/// CCID reader reached over USB bulk endpoints.
pub struct UsbReaderTransport {
    handle: DeviceHandle<GlobalContext>,
    ep_out: u8,
    ep_in: u8,
}

impl UsbReaderTransport {
    /// Open the first device matching vendor/product id and claim its
    /// first interface, using the conventional CCID bulk endpoints.
    pub fn open(vid: u16, pid: u16) -> Result<Self, ReaderError> {
        let handle = rusb::open_device_with_vid_pid(vid, pid)
            .ok_or_else(|| ReaderError::Io(format!("no device {vid:04x}:{pid:04x}")))?;
        Self::from_handle(handle, DEFAULT_EP_OUT, DEFAULT_EP_IN)
    }

    /// Wrap an already opened handle with explicit endpoint addresses.
    pub fn from_handle(
        mut handle: DeviceHandle<GlobalContext>,
        ep_out: u8,
        ep_in: u8,
    ) -> Result<Self, ReaderError> {
        handle.claim_interface(0)?;
        Ok(Self {
            handle,
            ep_out,
            ep_in,
        })
    }
}

impl ReaderTransport for UsbReaderTransport {
    fn send(&mut self, data: &[u8]) -> Result<(), ReaderError> {
        self.handle.write_bulk(self.ep_out, data, WRITE_TIMEOUT)?;
        Ok(())
    }

    fn receive(&mut self, timeout_ms: u64) -> Result<Vec<u8>, ReaderError> {
        let mut buf = vec![0u8; READ_BUF_LEN];
        let n = self.handle.read_bulk(self.ep_in, &mut buf, ms(timeout_ms))?;
        buf.truncate(n);
        Ok(buf)
    }
}
