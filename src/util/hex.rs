//! Hexadecimal encoding and decoding of byte sequences.
//!
//! Two digits per input byte, no separators, no prefix. Encoding emits
//! uppercase by default with lowercase on request; decoding accepts either
//! case and rejects everything else with the offending byte position.

use crate::{Error, Result};

/// Encodes `data` as a hexadecimal string, two digits per byte.
pub fn encode(data: &[u8], lowercase: bool) -> String {
    let alphabet: &[u8; 16] = if lowercase {
        b"0123456789abcdef"
    } else {
        b"0123456789ABCDEF"
    };

    let mut out = String::with_capacity(data.len() * 2);

    for &byte in data {
        out.push(alphabet[(byte >> 4) as usize] as char);
        out.push(alphabet[(byte & 0xF) as usize] as char);
    }

    out
}

/// Decodes a hexadecimal string back into bytes.
///
/// Accepts upper- and lowercase digits. The input must contain an even
/// number of digits and nothing else.
///
/// # Errors
///
/// [`Error::Format`] for odd-length input (position = input length) or for
/// any non-hex byte (position = that byte's index).
pub fn decode(input: &str) -> Result<Vec<u8>> {
    let bytes = input.as_bytes();

    if bytes.len() % 2 != 0 {
        return Err(Error::Format {
            reason: "odd number of hex digits",
            position: bytes.len(),
        });
    }

    let mut out = Vec::with_capacity(bytes.len() / 2);

    for (i, pair) in bytes.chunks_exact(2).enumerate() {
        let high = parse_nybble(pair[0], i * 2)?;
        let low = parse_nybble(pair[1], i * 2 + 1)?;

        out.push((high << 4) | low);
    }

    Ok(out)
}

/// Parses one hex digit into its 4-bit value.
fn parse_nybble(digit: u8, position: usize) -> Result<u8> {
    match digit {
        b'0'..=b'9' => Ok(digit - b'0'),
        b'A'..=b'F' => Ok(digit - b'A' + 10),
        b'a'..=b'f' => Ok(digit - b'a' + 10),
        _ => Err(Error::Format {
            reason: "invalid hex digit",
            position,
        }),
    }
}
