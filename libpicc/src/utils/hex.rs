//! Hex helpers for diagnostics and display.
//!
//! Small, dependency-free: the protocol layers log frames and UIDs through
//! these, and `Uid::to_hex` builds on them.

/// Lowercase hex string without separators: `&[0xde, 0xad]` -> `"dead"`.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

/// Lowercase hex with one space per byte: `&[0xde, 0xad]` -> `"de ad"`.
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse a hex string, ignoring ASCII whitespace.
pub fn parse_hex(s: &str) -> Result<Vec<u8>, String> {
    let cleaned: Vec<u8> = s.bytes().filter(|b| !b.is_ascii_whitespace()).collect();
    if cleaned.len() % 2 != 0 {
        return Err("hex string has odd length".to_string());
    }

    cleaned
        .chunks(2)
        .map(|pair| {
            let s = std::str::from_utf8(pair).map_err(|_| "non-ascii in hex string".to_string())?;
            u8::from_str_radix(s, 16).map_err(|e| format!("invalid hex pair '{s}': {e}"))
        })
        .collect()
}
