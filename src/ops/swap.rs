//! Full byte-order reversal of 16/32/64-bit integers.
//!
//! Swapping is done by exchanging progressively smaller adjacent blocks:
//! 32-bit halves (for 64-bit values), then 16-bit blocks, then single
//! bytes. Each step is a pair of masked shifts, so the whole reversal is a
//! short branch-free sequence.

/// Reverses a value's byte order end-to-end.
///
/// Equivalent to reinterpreting the value under the opposite endianness
/// convention; used to flip a word between the platform's native order and
/// an explicit wire order without going through the full codec path.
pub trait ByteSwap: Copy {
    fn swapped(self) -> Self;
}

impl ByteSwap for u16 {
    #[inline(always)]
    fn swapped(self) -> Self {
        (self >> 8) | (self << 8)
    }
}

impl ByteSwap for u32 {
    #[inline(always)]
    fn swapped(self) -> Self {
        // swap adjacent 16-bit blocks
        let x = (self >> 16) | (self << 16);

        // swap adjacent 8-bit blocks
        ((x & 0xFF00_FF00) >> 8) | ((x & 0x00FF_00FF) << 8)
    }
}

impl ByteSwap for u64 {
    #[inline(always)]
    fn swapped(self) -> Self {
        // swap adjacent 32-bit blocks
        let x = (self >> 32) | (self << 32);

        // swap adjacent 16-bit blocks
        let x = ((x & 0xFFFF_0000_FFFF_0000) >> 16) | ((x & 0x0000_FFFF_0000_FFFF) << 16);

        // swap adjacent 8-bit blocks
        ((x & 0xFF00_FF00_FF00_FF00) >> 8) | ((x & 0x00FF_00FF_00FF_00FF) << 8)
    }
}

impl ByteSwap for i16 {
    #[inline(always)]
    fn swapped(self) -> Self {
        (self as u16).swapped() as i16
    }
}

impl ByteSwap for i32 {
    #[inline(always)]
    fn swapped(self) -> Self {
        (self as u32).swapped() as i32
    }
}

impl ByteSwap for i64 {
    #[inline(always)]
    fn swapped(self) -> Self {
        (self as u64).swapped() as i64
    }
}
