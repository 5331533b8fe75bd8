// Scripted walk-through of a double-size UID selection, including one
// collision round, against the mock RF front-end. Run with
// `RUST_LOG=debug cargo run --example select_card` to see the protocol
// milestones.

use anyhow::Result;
use libpicc::prelude::*;

fn bcc(uid: &[u8; 4]) -> u8 {
    uid[0] ^ uid[1] ^ uid[2] ^ uid[3]
}

fn main() -> Result<()> {
    env_logger::init();

    let mut rf = MockRf::new();

    // ATQA: bitframe anticollision supported, double-size UID
    rf.push_reply(vec![0x44, 0x00]);

    // CL1 probe: two cards answer, the front-end flags a collision at
    // bit 9 of the UID field
    let cl1 = [0x88, 0x01, 0x02, 0x03];
    let mut reply = cl1.to_vec();
    reply.push(bcc(&cl1));
    rf.push_collision(reply, 9);

    // Narrowed retry resolves cleanly
    rf.push_reply(vec![0x01, 0x02, 0x03, bcc(&cl1)]);

    // CL1 select: cascade bit set, UID continues
    rf.push_reply(vec![0x04]);

    // CL2: clean anticollision and terminal select (T=CL capable)
    let cl2 = [0x04, 0x05, 0x06, 0x07];
    let mut reply = cl2.to_vec();
    reply.push(bcc(&cl2));
    rf.push_reply(reply);
    rf.push_reply(vec![0x20]);

    let mut selector = Selector::with_seed(rf, 42);
    let card = selector.select_card(false)?;

    println!("state:     {:?}", selector.state());
    println!("uid:       {}", card.uid().to_hex());
    println!("sak:       {:#04x}", card.sak().as_byte());
    println!("protocols: {:?}", card.protocols());
    Ok(())
}
