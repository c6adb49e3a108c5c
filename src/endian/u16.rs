//! 16-bit integer packing.

use super::{ByteOrder, EndianCodec, check_range};
use crate::Result;

impl EndianCodec for u16 {
    const WIDTH: usize = 2;
    type Bytes = [u8; 2];

    #[cfg(not(feature = "speed"))]
    fn encode(self, order: ByteOrder) -> [u8; 2] {
        match order {
            ByteOrder::Big => self.to_be_bytes(),
            ByteOrder::Little => self.to_le_bytes(),
        }
    }

    #[cfg(feature = "speed")]
    fn encode(self, order: ByteOrder) -> [u8; 2] {
        match order {
            ByteOrder::Big => [(self >> 8) as u8, self as u8],
            ByteOrder::Little => [self as u8, (self >> 8) as u8],
        }
    }

    #[cfg(not(feature = "speed"))]
    fn decode(buf: &[u8], offset: usize, order: ByteOrder) -> Result<Self> {
        check_range(buf.len(), offset, Self::WIDTH)?;
        let b = [buf[offset], buf[offset + 1]];

        Ok(match order {
            ByteOrder::Big => u16::from_be_bytes(b),
            ByteOrder::Little => u16::from_le_bytes(b),
        })
    }

    #[cfg(feature = "speed")]
    fn decode(buf: &[u8], offset: usize, order: ByteOrder) -> Result<Self> {
        check_range(buf.len(), offset, Self::WIDTH)?;

        Ok(match order {
            ByteOrder::Big => ((buf[offset] as u16) << 8) | (buf[offset + 1] as u16),
            ByteOrder::Little => (buf[offset] as u16) | ((buf[offset + 1] as u16) << 8),
        })
    }
}

/// Two's-complement delegation to the unsigned codec; the cast back on
/// decode reinterprets the high bit, which is exactly sign extension at
/// full width.
impl EndianCodec for i16 {
    const WIDTH: usize = 2;
    type Bytes = [u8; 2];

    fn encode(self, order: ByteOrder) -> [u8; 2] {
        (self as u16).encode(order)
    }

    fn decode(buf: &[u8], offset: usize, order: ByteOrder) -> Result<Self> {
        u16::decode(buf, offset, order).map(|v| v as i16)
    }
}
