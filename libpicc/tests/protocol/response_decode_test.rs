use libpicc::protocol::{decode_atqa, decode_sak};
use libpicc::{Error, UidSize};

#[test]
fn atqa_fields_decode() {
    let atqa = decode_atqa(&[0x44, 0x00]).unwrap();
    assert!(atqa.bitframe_anticollision());
    assert_eq!(atqa.uid_size(), UidSize::Double);

    let atqa = decode_atqa(&[0x04, 0x00]).unwrap();
    assert_eq!(atqa.uid_size(), UidSize::Single);

    let atqa = decode_atqa(&[0x84, 0x00]).unwrap();
    assert_eq!(atqa.uid_size(), UidSize::Triple);
}

#[test]
fn atqa_must_be_two_bytes() {
    for bad in [&[][..], &[0x44][..], &[0x44, 0x00, 0x00][..]] {
        match decode_atqa(bad) {
            Err(Error::InvalidLength { expected: 2, .. }) => {}
            other => panic!("expected InvalidLength, got {:?}", other),
        }
    }
}

#[test]
fn sak_first_byte_wins() {
    let sak = decode_sak(&[0x24, 0x12, 0x34]).unwrap();
    assert!(sak.cascade_pending());
    assert!(sak.tcl_capable());

    let sak = decode_sak(&[0x00]).unwrap();
    assert!(!sak.cascade_pending());
    assert!(!sak.tcl_capable());
}

#[test]
fn sak_length_bounds() {
    assert!(decode_sak(&[]).is_err());
    assert!(decode_sak(&[0u8; 4]).is_err());
}
