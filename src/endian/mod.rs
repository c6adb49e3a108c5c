//! Byte-order-aware integer packing.
//!
//! This module converts fixed-width integers to and from byte sequences in
//! an explicit byte order, independent of the host platform's native order.
//! Hash algorithms use it to unpack message blocks into state words and to
//! pack digests in the byte order their specification mandates.
//!
//! Conversions are split by width to keep each file small and auditable:
//! `u16`, `u32`, and `u64` each implement [`EndianCodec`] for the unsigned
//! type and its signed counterpart. The signed implementations delegate to
//! the unsigned ones through two's-complement casts, which also gives decode
//! the required sign extension.
//!
//! All conversions are explicit shift-and-mask arithmetic or standard-library
//! array conversions; correctness is bit-exact per width and order, and
//! `decode(encode(v, o), o) == v` holds for every representable value.
//!
//! With the `speed` feature, hot paths switch to fully unrolled
//! shift-and-mask forms.

mod u16;
mod u32;
mod u64;

use crate::{Error, Result};

/// Byte-order selector for the codec.
///
/// `Big` places the most significant byte first, `Little` the least
/// significant byte first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    Big,
    Little,
}

/// Validates that `width` bytes starting at `offset` fit in a buffer of
/// length `len`. Overflow-checked so a huge `offset` cannot wrap.
#[inline]
pub(crate) fn check_range(len: usize, offset: usize, width: usize) -> Result<()> {
    match offset.checked_add(width) {
        Some(end) if end <= len => Ok(()),
        _ => Err(Error::OutOfRange {
            offset,
            count: width,
            len,
        }),
    }
}

/// Conversion between a fixed-width integer and its byte-sequence form in a
/// chosen [`ByteOrder`].
///
/// Implemented for `u16`/`i16`, `u32`/`i32`, and `u64`/`i64`. All methods
/// are pure; `encode_into` writes exactly [`WIDTH`](Self::WIDTH) bytes into
/// caller-owned storage and validates bounds before writing anything.
pub trait EndianCodec: Copy + Sized {
    /// Encoded width in bytes.
    const WIDTH: usize;

    /// The fixed-size byte array this type encodes into.
    type Bytes: AsRef<[u8]> + Copy;

    /// Returns the value's bytes in the given order, most significant byte
    /// first for [`ByteOrder::Big`], least significant first for
    /// [`ByteOrder::Little`].
    fn encode(self, order: ByteOrder) -> Self::Bytes;

    /// Reconstructs a value from `WIDTH` bytes of `buf` starting at
    /// `offset`, honoring the given order. Signed types sign-extend.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] if `offset + WIDTH` exceeds `buf.len()`.
    fn decode(buf: &[u8], offset: usize, order: ByteOrder) -> Result<Self>;

    /// Writes the value's bytes into `buf` starting at `offset`,
    /// overwriting exactly `WIDTH` bytes.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] if `offset + WIDTH` exceeds `buf.len()`; on
    /// error no byte is written.
    fn encode_into(self, order: ByteOrder, buf: &mut [u8], offset: usize) -> Result<()> {
        check_range(buf.len(), offset, Self::WIDTH)?;
        buf[offset..offset + Self::WIDTH].copy_from_slice(self.encode(order).as_ref());

        Ok(())
    }

    /// Big-endian [`encode`](Self::encode).
    fn encode_be(self) -> Self::Bytes {
        self.encode(ByteOrder::Big)
    }

    /// Little-endian [`encode`](Self::encode).
    fn encode_le(self) -> Self::Bytes {
        self.encode(ByteOrder::Little)
    }

    /// Big-endian [`encode_into`](Self::encode_into).
    fn encode_into_be(self, buf: &mut [u8], offset: usize) -> Result<()> {
        self.encode_into(ByteOrder::Big, buf, offset)
    }

    /// Little-endian [`encode_into`](Self::encode_into).
    fn encode_into_le(self, buf: &mut [u8], offset: usize) -> Result<()> {
        self.encode_into(ByteOrder::Little, buf, offset)
    }

    /// Big-endian [`decode`](Self::decode).
    fn decode_be(buf: &[u8], offset: usize) -> Result<Self> {
        Self::decode(buf, offset, ByteOrder::Big)
    }

    /// Little-endian [`decode`](Self::decode).
    fn decode_le(buf: &[u8], offset: usize) -> Result<Self> {
        Self::decode(buf, offset, ByteOrder::Little)
    }
}
