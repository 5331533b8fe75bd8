// fixtures.rs — commonly used scripted replies

use libpicc::rf::MockRf;
use libpicc::selector::Selector;

/// XOR check byte over four UID bytes.
pub fn bcc(uid: &[u8; 4]) -> u8 {
    uid[0] ^ uid[1] ^ uid[2] ^ uid[3]
}

/// ATQA advertising bitframe anticollision and a single-size UID.
pub fn atqa_single() -> Vec<u8> {
    vec![0x04, 0x00]
}

/// ATQA advertising a double-size UID.
pub fn atqa_double() -> Vec<u8> {
    vec![0x44, 0x00]
}

/// ATQA advertising a triple-size UID.
pub fn atqa_triple() -> Vec<u8> {
    vec![0x84, 0x00]
}

/// Full anticollision reply (4 UID bytes + BCC) for an aligned probe.
pub fn anticol_reply(uid: [u8; 4]) -> Vec<u8> {
    let mut reply = uid.to_vec();
    reply.push(bcc(&uid));
    reply
}

/// Anticollision reply for a continuing level: cascade tag + 3 UID bytes.
pub fn cascade_reply(uid3: [u8; 3]) -> Vec<u8> {
    anticol_reply([0x88, uid3[0], uid3[1], uid3[2]])
}

/// Selector with a fixed seed over the given mock.
pub fn seeded_selector(rf: MockRf) -> Selector<MockRf> {
    Selector::with_seed(rf, 0x5eed)
}
