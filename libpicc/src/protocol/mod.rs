// libpicc/src/protocol/mod.rs

pub mod anticol;
pub mod commands;
pub mod nvb;
pub mod responses;

pub use anticol::AnticolFrame;
pub use commands::ShortFrameCommand;
pub use responses::{decode_atqa, decode_sak};
