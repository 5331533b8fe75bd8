// libpicc/src/reader/mock.rs

use crate::reader::traits::{ReaderError, ReaderTransport};

/// Mock reader transport for unit tests: records sent messages, replays
/// queued responses in order.
#[derive(Debug, Default)]
pub struct MockReaderTransport {
    pub sent: Vec<Vec<u8>>,
    pub responses: Vec<Vec<u8>>,
}

impl MockReaderTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_response(&mut self, resp: Vec<u8>) {
        self.responses.push(resp);
    }
}

impl ReaderTransport for MockReaderTransport {
    fn send(&mut self, data: &[u8]) -> Result<(), ReaderError> {
        self.sent.push(data.to_vec());
        Ok(())
    }

    fn receive(&mut self, _timeout_ms: u64) -> Result<Vec<u8>, ReaderError> {
        if self.responses.is_empty() {
            Err(ReaderError::Timeout)
        } else {
            Ok(self.responses.remove(0))
        }
    }
}
