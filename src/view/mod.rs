//! Shared-buffer windowing.
//!
//! This module defines [`ArrayView`], a non-owning window over a shared
//! fixed-size buffer, together with its iterator.
//!
//! The implementation is deliberately split into two layers:
//!
//! - `core`
//!   The view type itself: construction, validated element access, bulk
//!   copy and clear, and the identity-based equality contract.
//!
//! - `iter`
//!   A lazy, finite, restartable pass over the window. Obtaining a fresh
//!   pass is always possible while the view is alive.
//!
//! ## Design notes
//!
//! - The store is a `Box<[T]>` behind `Rc<RefCell<..>>`: it can never grow
//!   or shrink, so a validated window stays valid for the lifetime of the
//!   buffer. Every holder of the `Rc` observes mutations made through any
//!   other holder.
//! - Equality and hashing are **structural over identity**: same buffer
//!   allocation, same offset, same count. Two views over different buffers
//!   with identical contents are not equal. This is what lets a hash
//!   algorithm cache and compare windows without touching their bytes.
//! - The view is a fixed-size window over a fixed-size store. Anything that
//!   would change its length fails with
//!   [`Error::Unsupported`](crate::Error::Unsupported) and leaves the buffer
//!   untouched.

mod core;
mod iter;

pub use self::core::{ArrayView, SharedBuffer, shared_buffer};
pub use self::iter::ViewIter;
