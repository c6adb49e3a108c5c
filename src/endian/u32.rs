//! 32-bit integer packing.

use super::{ByteOrder, EndianCodec, check_range};
use crate::Result;

impl EndianCodec for u32 {
    const WIDTH: usize = 4;
    type Bytes = [u8; 4];

    #[cfg(not(feature = "speed"))]
    fn encode(self, order: ByteOrder) -> [u8; 4] {
        match order {
            ByteOrder::Big => self.to_be_bytes(),
            ByteOrder::Little => self.to_le_bytes(),
        }
    }

    #[cfg(feature = "speed")]
    fn encode(self, order: ByteOrder) -> [u8; 4] {
        match order {
            ByteOrder::Big => [
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
            ],
        }
    }

    #[cfg(not(feature = "speed"))]
    fn decode(buf: &[u8], offset: usize, order: ByteOrder) -> Result<Self> {
        check_range(buf.len(), offset, Self::WIDTH)?;
        let b = [buf[offset], buf[offset + 1], buf[offset + 2], buf[offset + 3]];

        Ok(match order {
            ByteOrder::Big => u32::from_be_bytes(b),
            ByteOrder::Little => u32::from_le_bytes(b),
        })
    }

    #[cfg(feature = "speed")]
    fn decode(buf: &[u8], offset: usize, order: ByteOrder) -> Result<Self> {
        check_range(buf.len(), offset, Self::WIDTH)?;

        Ok(match order {
            ByteOrder::Big => {
                ((buf[offset] as u32) << 24)
                    | ((buf[offset + 1] as u32) << 16)
                    | ((buf[offset + 2] as u32) << 8)
                    | (buf[offset + 3] as u32)
            }
            ByteOrder::Little => {
                (buf[offset] as u32)
                    | ((buf[offset + 1] as u32) << 8)
                    | ((buf[offset + 2] as u32) << 16)
                    | ((buf[offset + 3] as u32) << 24)
            }
        })
    }
}

/// Two's-complement delegation to the unsigned codec.
impl EndianCodec for i32 {
    const WIDTH: usize = 4;
    type Bytes = [u8; 4];

    fn encode(self, order: ByteOrder) -> [u8; 4] {
        (self as u32).encode(order)
    }

    fn decode(buf: &[u8], offset: usize, order: ByteOrder) -> Result<Self> {
        u32::decode(buf, offset, order).map(|v| v as i32)
    }
}
