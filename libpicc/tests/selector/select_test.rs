use libpicc::rf::{MockRf, RfError};
use libpicc::{Error, ProtocolCandidates, SelectionState};

#[path = "../common/mod.rs"]
mod common;

use common::fixtures;

#[test]
fn single_size_uid_no_collisions() {
    let mut rf = MockRf::new();
    rf.push_reply(fixtures::atqa_single());
    rf.push_reply(fixtures::anticol_reply([0xde, 0xad, 0xbe, 0xef]));
    rf.push_reply(vec![0x00]); // terminal SAK, no T=CL

    let mut selector = fixtures::seeded_selector(rf);
    let card = selector.select_card(false).unwrap();

    assert_eq!(hex::encode(card.uid().as_bytes()), "deadbeef");
    assert_eq!(
        card.protocols(),
        ProtocolCandidates::MIFARE_UL | ProtocolCandidates::MIFARE_CLASSIC
    );
    assert!(!card.is_tcl());
    assert_eq!(selector.state(), SelectionState::Selected);

    // REQA short frame, one probe, one select
    let rf = selector.into_inner();
    assert_eq!(rf.sent.len(), 3);
    assert_eq!(rf.sent[0], vec![0x26]);
    assert_eq!(rf.sent[1], vec![0x93, 0x20]);
    assert_eq!(rf.sent[2].len(), 7);
}

#[test]
fn double_size_uid_with_cl1_collision() {
    let mut rf = MockRf::new();
    rf.push_reply(fixtures::atqa_double());

    // CL1 probe collides at bit 9 of the UID field
    rf.push_collision(fixtures::cascade_reply([0x01, 0x02, 0x03]), 9);
    // Narrowed retry answers clean; first byte completes the split byte
    rf.push_reply(vec![0x01, 0x02, 0x03, fixtures::bcc(&[0x88, 0x01, 0x02, 0x03])]);
    // CL1 select: cascade continues, T=CL bit present but non-terminal
    rf.push_reply(vec![0x24]);

    // CL2 runs clean and terminates
    rf.push_reply(fixtures::anticol_reply([0x04, 0x05, 0x06, 0x07]));
    rf.push_reply(vec![0x20]);

    let mut selector = fixtures::seeded_selector(rf);
    let card = selector.select_card(false).unwrap();

    assert_eq!(
        card.uid().as_bytes(),
        &[0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07]
    );
    assert_eq!(card.protocols(), ProtocolCandidates::TCL);
    assert_eq!(selector.state(), SelectionState::Selected);

    let rf = selector.into_inner();
    // sf + (probe, retry, select) + (probe, select)
    assert_eq!(rf.sent.len(), 6);
    // The retry claimed 16 header bits + 9 uid bits
    assert_eq!(rf.sent[2][1], 0x31);
    // CL2 frames use the CL2 select code
    assert_eq!(rf.sent[4][0], 0x95);
}

#[test]
fn wake_up_uses_wupa() {
    let mut rf = MockRf::new();
    rf.push_reply(fixtures::atqa_single());
    rf.push_reply(fixtures::anticol_reply([1, 2, 3, 4]));
    rf.push_reply(vec![0x00]);

    let mut selector = fixtures::seeded_selector(rf);
    selector.select_card(true).unwrap();
    assert_eq!(selector.into_inner().sent[0], vec![0x52]);
}

#[test]
fn timeslot_only_card_is_rejected() {
    let mut rf = MockRf::new();
    rf.push_reply(vec![0x40, 0x00]); // no bitframe anticollision bits

    let mut selector = fixtures::seeded_selector(rf);
    match selector.select_card(false) {
        Err(Error::NoAnticollisionSupport) => {}
        other => panic!("expected NoAnticollisionSupport, got {:?}", other),
    }
    assert_eq!(selector.state(), SelectionState::NoBitframeAnticol);
}

#[test]
fn cascade_tag_violation_yields_no_partial_uid() {
    let mut rf = MockRf::new();
    rf.push_reply(fixtures::atqa_double());
    rf.push_reply(fixtures::anticol_reply([0x42, 0x01, 0x02, 0x03]));
    rf.push_reply(vec![0x04]); // cascade claimed without the 0x88 tag

    let mut selector = fixtures::seeded_selector(rf);
    match selector.select_card(false) {
        Err(Error::BadCascadeTag { actual: 0x42 }) => {}
        other => panic!("expected BadCascadeTag, got {:?}", other),
    }
    assert_eq!(selector.state(), SelectionState::Error);
}

#[test]
fn triple_size_uid_assembles_across_three_levels() {
    let mut rf = MockRf::new();
    rf.push_reply(fixtures::atqa_triple());
    rf.push_reply(fixtures::cascade_reply([0x01, 0x02, 0x03]));
    rf.push_reply(vec![0x04]);
    rf.push_reply(fixtures::cascade_reply([0x04, 0x05, 0x06]));
    rf.push_reply(vec![0x04]);
    rf.push_reply(fixtures::anticol_reply([0x07, 0x08, 0x09, 0x0a]));
    rf.push_reply(vec![0x20]);

    let mut selector = fixtures::seeded_selector(rf);
    let card = selector.select_card(false).unwrap();
    assert_eq!(
        card.uid().as_bytes(),
        &[0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a]
    );
    assert_eq!(card.uid().len(), 10);
}

#[test]
fn transceive_failure_aborts_selection() {
    let mut rf = MockRf::new();
    rf.push_reply(fixtures::atqa_single());
    rf.push_failure(RfError::Timeout); // probe dies

    let mut selector = fixtures::seeded_selector(rf);
    match selector.select_card(false) {
        Err(Error::Rf(RfError::Timeout)) => {}
        other => panic!("expected Rf(Timeout), got {:?}", other),
    }
}
