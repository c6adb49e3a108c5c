//! Inner-loop bit primitives: circular rotation and byte swapping.
//!
//! These are the per-round operations of rotate-and-mix hash functions.
//! Both traits are pure and O(1); every implementation compiles down to a
//! handful of register operations.

mod rotate;
mod swap;

pub use rotate::BitRotate;
pub use swap::ByteSwap;
