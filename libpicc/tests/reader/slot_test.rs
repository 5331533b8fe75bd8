use libpicc::reader::ccid::{RDR_TO_PC_DATA_BLOCK, RDR_TO_PC_SLOT_STATUS};
use libpicc::reader::{MockReaderTransport, ReaderError, Slot, SlotStatus, Voltage};

fn slot_status_resp(seq: u8, status: u8) -> Vec<u8> {
    vec![RDR_TO_PC_SLOT_STATUS, 0, 0, 0, 0, 0, seq, status, 0, 0]
}

fn data_block_resp(seq: u8, data: &[u8]) -> Vec<u8> {
    let mut raw = vec![
        RDR_TO_PC_DATA_BLOCK,
        data.len() as u8,
        0,
        0,
        0,
        0,
        seq,
        0,
        0,
        0,
    ];
    raw.extend_from_slice(data);
    raw
}

#[test]
fn full_power_cycle_with_transfer() {
    let mut t = MockReaderTransport::new();
    t.push_response(data_block_resp(0, &[0x3b, 0x8f, 0x80])); // ATR
    t.push_response(data_block_resp(1, &[0x6a, 0x82])); // card reply
    t.push_response(slot_status_resp(2, 0x01)); // power off ack

    let (mut powered, atr) = Slot::new(t, 0).power_on(Voltage::Auto).unwrap();
    assert_eq!(atr, vec![0x3b, 0x8f, 0x80]);

    let reply = powered.transfer_block(&[0x00, 0xa4, 0x04, 0x00]).unwrap();
    assert_eq!(reply, vec![0x6a, 0x82]);

    powered.power_off().unwrap();
}

#[test]
fn status_works_before_power_on() {
    let mut t = MockReaderTransport::new();
    t.push_response(slot_status_resp(0, 0x02));

    let mut slot = Slot::new(t, 0);
    assert_eq!(slot.status().unwrap(), SlotStatus::NotPresent);
}

#[test]
fn wait_for_card_sees_arrival() {
    let mut t = MockReaderTransport::new();
    t.push_response(slot_status_resp(0, 0x02));
    t.push_response(slot_status_resp(1, 0x01));

    let mut slot = Slot::new(t, 0);
    assert_eq!(slot.wait_for_card(10, 0).unwrap(), SlotStatus::Present);
}

#[test]
fn transport_timeout_propagates() {
    let t = MockReaderTransport::new(); // nothing queued

    let mut slot = Slot::new(t, 0);
    match slot.status() {
        Err(ReaderError::Timeout) => {}
        other => panic!("expected Timeout, got {:?}", other),
    }
}
