//! Byte and bit manipulation foundation for hash functions
//!
//! This crate provides the low-level building blocks that bit-exact
//! implementations of non-cryptographic hash functions are assembled from:
//! buffer windowing, byte-order-aware integer packing, and circular-rotation
//! and byte-swap primitives.
//!
//! The focus is on **clarity, predictability, and auditability**, rather
//! than on providing a large or high-level API. Every operation has explicit
//! semantics, fails fast on contract violations, and performs no hidden
//! allocation or copying.
//!
//! # Module overview
//!
//! - `view`
//!   A non-owning window over a shared fixed-size buffer. Hash algorithms
//!   use it to slide over large inputs block by block without allocating or
//!   copying a sub-buffer per block. Views alias their store deliberately:
//!   equality is buffer identity plus window bounds, never content.
//!
//! - `endian`
//!   Conversions between fixed-width integers and byte sequences in an
//!   explicit byte order. Both freshly returned byte arrays and in-place
//!   writes at an offset are supported, for 16-, 32- and 64-bit widths,
//!   signed and unsigned.
//!
//! - `ops`
//!   Circular bit rotation over unsigned 8/16/32/64-bit integers and full
//!   byte-order reversal of 16/32/64-bit integers. These are the inner-loop
//!   primitives of every rotate-and-mix hash round.
//!
//! - `util`
//!   Peripheral helpers consumed around the core: hexadecimal encoding and
//!   decoding of digests, and bulk slice filling.
//!
//! # Design goals
//!
//! - No heap allocations in core primitives
//! - Minimal and explicit APIs
//! - Stable, well-defined semantics
//! - Bit-exact behavior independent of the host platform's byte order
//!
//! All errors in this crate are synchronous contract violations: the caller
//! passed an index, range, or input that the operation's contract excludes.
//! Nothing here is transient or retryable; correct the input instead.

pub mod endian;
pub mod ops;
pub mod util;
pub mod view;

pub use endian::{ByteOrder, EndianCodec};
pub use ops::{BitRotate, ByteSwap};
pub use view::{ArrayView, SharedBuffer, shared_buffer};

/// Shorthand `Result` alias for this crate's operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors raised by the primitives in this crate.
///
/// Every variant is a fail-fast contract violation detected before any
/// partial mutation takes place. Operations that both need a backing buffer
/// and validate bounds always report a missing buffer first.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An offset, count, or index fell outside the valid bounds of its
    /// buffer or window.
    #[error("range out of bounds: offset {offset} + count {count} exceeds length {len}")]
    OutOfRange {
        offset: usize,
        count: usize,
        len: usize,
    },

    /// The view has no backing buffer (e.g. it was default-constructed).
    #[error("view has no backing buffer")]
    NoBuffer,

    /// A structural mutation was attempted on a fixed-size view.
    #[error("unsupported operation on fixed-size view: {op}")]
    Unsupported { op: &'static str },

    /// Malformed input in a textual decoder (currently: hex).
    #[error("malformed input: {reason} at byte {position}")]
    Format {
        reason: &'static str,
        position: usize,
    },
}
