use libpicc::protocol::AnticolFrame;
use libpicc::{CascadeLevel, Error};

#[path = "../common/mod.rs"]
mod common;

#[test]
fn frame_grows_from_probe_to_select() {
    let mut frame = AnticolFrame::new(CascadeLevel::Cl1);

    let (tx, last_bits) = frame.tx_frame();
    assert_eq!((tx.as_slice(), last_bits), (&[0x93u8, 0x20][..], 0));

    frame
        .merge_response(&common::fixtures::anticol_reply([0xde, 0xad, 0xbe, 0xef]))
        .unwrap();
    frame.set_valid_bits(56).unwrap();

    let (tx, last_bits) = frame.tx_frame();
    assert_eq!(
        tx,
        vec![0x93, 0x70, 0xde, 0xad, 0xbe, 0xef, common::fixtures::bcc(&[0xde, 0xad, 0xbe, 0xef])]
    );
    assert_eq!(last_bits, 0);
}

#[test]
fn each_level_uses_its_select_code() {
    assert_eq!(AnticolFrame::new(CascadeLevel::Cl1).tx_frame().0[0], 0x93);
    assert_eq!(AnticolFrame::new(CascadeLevel::Cl2).tx_frame().0[0], 0x95);
    assert_eq!(AnticolFrame::new(CascadeLevel::Cl3).tx_frame().0[0], 0x97);
}

#[test]
fn partial_merge_keeps_resolved_bits() {
    let mut frame = AnticolFrame::new(CascadeLevel::Cl1);
    // Three known bits in the first UID byte: 0b101
    frame.merge_response(&[0x05, 0, 0, 0, 0]).unwrap();
    frame.set_valid_bits(19).unwrap();

    frame.merge_response(&[0x18, 0x44, 0x55, 0x66, 0x77]).unwrap();
    // Low three bits survive, upper bits come from the response
    assert_eq!(frame.uid_bits()[0], 0x1d);
    assert_eq!(&frame.uid_bits()[1..], &[0x44, 0x55, 0x66, 0x77]);
}

#[test]
fn repeated_merge_does_not_corrupt_prefix() {
    let mut frame = AnticolFrame::new(CascadeLevel::Cl2);
    frame.set_valid_bits(21).unwrap();
    frame.merge_response(&[0xe0, 0xaa, 0xbb, 0xcc]).unwrap();
    let snapshot = *frame.uid_bits();

    frame.merge_response(&[0xe0, 0xaa, 0xbb, 0xcc]).unwrap();
    assert_eq!(frame.uid_bits(), &snapshot);
}

#[test]
fn overlong_response_is_a_protocol_error() {
    let mut frame = AnticolFrame::new(CascadeLevel::Cl1);
    let err = frame.merge_response(&[0u8; 7]).unwrap_err();
    assert!(matches!(err, Error::InvalidLength { .. }));
    assert!(err.is_protocol_violation());
}
