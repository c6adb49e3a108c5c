//! Peripheral helpers used around the core primitives.
//!
//! Nothing in the core depends on this module; it exists for the glue that
//! surrounds hash computations: formatting digests as hexadecimal text and
//! bulk-initializing scratch buffers.

pub mod hex;

use crate::{Error, Result};

/// Sets every element of `slice` to `value`.
pub fn fill<T: Clone>(slice: &mut [T], value: T) {
    slice.fill(value);
}

/// Sets exactly `count` elements of `slice` to `value`, starting at `start`.
///
/// Bounds are validated before any element is written.
///
/// # Errors
///
/// [`Error::OutOfRange`] if `start + count` exceeds `slice.len()`.
pub fn fill_range<T: Clone>(slice: &mut [T], value: T, start: usize, count: usize) -> Result<()> {
    match start.checked_add(count) {
        Some(end) if end <= slice.len() => {
            slice[start..end].fill(value);

            Ok(())
        }
        _ => Err(Error::OutOfRange {
            offset: start,
            count,
            len: slice.len(),
        }),
    }
}
