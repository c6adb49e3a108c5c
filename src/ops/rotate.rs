//! Circular bit rotation for unsigned 8/16/32/64-bit integers.
//!
//! The rotation amount is normalized modulo the width before the two-shift
//! form is applied. Without that step, a count of zero (or any multiple of
//! the width) would produce a shift by the full bit width, which is
//! undefined; with it, those counts are identities and every shift stays in
//! `[1, width)`.

/// Circular shift in which bits leaving one end re-enter the opposite end.
///
/// Defined for every non-negative `count`: rotating by `count` behaves as
/// rotating by `count % width`, so `0` and multiples of the width are
/// identities.
pub trait BitRotate: Copy {
    /// Width of the value in bits.
    const WIDTH: u32;

    /// Rotates toward the most significant bit.
    fn rol(self, count: u32) -> Self;

    /// Rotates toward the least significant bit.
    fn ror(self, count: u32) -> Self;
}

impl BitRotate for u8 {
    const WIDTH: u32 = 8;

    #[inline(always)]
    fn rol(self, count: u32) -> Self {
        let count = count % Self::WIDTH;

        if count == 0 {
            self
        } else {
            (self << count) | (self >> (Self::WIDTH - count))
        }
    }

    #[inline(always)]
    fn ror(self, count: u32) -> Self {
        let count = count % Self::WIDTH;

        if count == 0 {
            self
        } else {
            (self >> count) | (self << (Self::WIDTH - count))
        }
    }
}

impl BitRotate for u16 {
    const WIDTH: u32 = 16;

    #[inline(always)]
    fn rol(self, count: u32) -> Self {
        let count = count % Self::WIDTH;

        if count == 0 {
            self
        } else {
            (self << count) | (self >> (Self::WIDTH - count))
        }
    }

    #[inline(always)]
    fn ror(self, count: u32) -> Self {
        let count = count % Self::WIDTH;

        if count == 0 {
            self
        } else {
            (self >> count) | (self << (Self::WIDTH - count))
        }
    }
}

impl BitRotate for u32 {
    const WIDTH: u32 = 32;

    #[inline(always)]
    fn rol(self, count: u32) -> Self {
        let count = count % Self::WIDTH;

        if count == 0 {
            self
        } else {
            (self << count) | (self >> (Self::WIDTH - count))
        }
    }

    #[inline(always)]
    fn ror(self, count: u32) -> Self {
        let count = count % Self::WIDTH;

        if count == 0 {
            self
        } else {
            (self >> count) | (self << (Self::WIDTH - count))
        }
    }
}

impl BitRotate for u64 {
    const WIDTH: u32 = 64;

    #[inline(always)]
    fn rol(self, count: u32) -> Self {
        let count = count % Self::WIDTH;

        if count == 0 {
            self
        } else {
            (self << count) | (self >> (Self::WIDTH - count))
        }
    }

    #[inline(always)]
    fn ror(self, count: u32) -> Self {
        let count = count % Self::WIDTH;

        if count == 0 {
            self
        } else {
            (self >> count) | (self << (Self::WIDTH - count))
        }
    }
}
