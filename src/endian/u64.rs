//! 64-bit integer packing.
//!
//! Decoding deliberately goes through two 32-bit halves joined by
//! shift-and-or. The half that lands in the high bits depends on the byte
//! order: big-endian reads the most significant half first, little-endian
//! reads it second. The round-trip tests pin this down against the encode
//! side for every order.

use super::{ByteOrder, EndianCodec, check_range};
use crate::Result;

impl EndianCodec for u64 {
    const WIDTH: usize = 8;
    type Bytes = [u8; 8];

    #[cfg(not(feature = "speed"))]
    fn encode(self, order: ByteOrder) -> [u8; 8] {
        match order {
            ByteOrder::Big => self.to_be_bytes(),
            ByteOrder::Little => self.to_le_bytes(),
        }
    }

    #[cfg(feature = "speed")]
    fn encode(self, order: ByteOrder) -> [u8; 8] {
        match order {
            ByteOrder::Big => [
                (self >> 56) as u8,
                (self >> 48) as u8,
                (self >> 40) as u8,
                (self >> 32) as u8,
                (self >> 24) as u8,
                (self >> 16) as u8,
                (self >> 8) as u8,
                self as u8,
            ],
            ByteOrder::Little => [
                self as u8,
                (self >> 8) as u8,
                (self >> 16) as u8,
                (self >> 24) as u8,
                (self >> 32) as u8,
                (self >> 40) as u8,
                (self >> 48) as u8,
                (self >> 56) as u8,
            ],
        }
    }

    fn decode(buf: &[u8], offset: usize, order: ByteOrder) -> Result<Self> {
        check_range(buf.len(), offset, Self::WIDTH)?;

        Ok(match order {
            ByteOrder::Big => {
                let high = u32::decode(buf, offset, ByteOrder::Big)? as u64;
                let low = u32::decode(buf, offset + 4, ByteOrder::Big)? as u64;

                (high << 32) | low
            }
            ByteOrder::Little => {
                let low = u32::decode(buf, offset, ByteOrder::Little)? as u64;
                let high = u32::decode(buf, offset + 4, ByteOrder::Little)? as u64;

                low | (high << 32)
            }
        })
    }
}

/// Two's-complement delegation to the unsigned codec.
impl EndianCodec for i64 {
    const WIDTH: usize = 8;
    type Bytes = [u8; 8];

    fn encode(self, order: ByteOrder) -> [u8; 8] {
        (self as u64).encode(order)
    }

    fn decode(buf: &[u8], offset: usize, order: ByteOrder) -> Result<Self> {
        u64::decode(buf, offset, order).map(|v| v as i64)
    }
}
