//! The view type: a fixed-size window over a shared fixed-size store.

use std::cell::RefCell;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use crate::{Error, Result};

use super::iter::ViewIter;

/// A buffer shared between its creator and any number of views.
///
/// The store is a boxed slice: its length is fixed at creation and can never
/// change, so a window validated once stays valid for the buffer's lifetime.
/// Mutations made through any holder are visible to every other holder.
pub type SharedBuffer<T> = Rc<RefCell<Box<[T]>>>;

/// Wraps owned data into a [`SharedBuffer`] ready to be windowed.
pub fn shared_buffer<T>(data: Vec<T>) -> SharedBuffer<T> {
    Rc::new(RefCell::new(data.into_boxed_slice()))
}

/// Delimits a section of a shared buffer.
///
/// A view carries a reference-counted handle to its store plus an `offset`
/// and `count` describing the window `[offset, offset + count)`. It never
/// copies the underlying data; hash algorithms use it to address sliding
/// sub-ranges of a large input without per-window allocation.
///
/// Views alias their store on purpose. Writing through one view (or through
/// the buffer handle itself) is observed by every other view over the same
/// buffer. Consequently, equality is **identity of the store plus the window
/// bounds**, never a byte comparison: two views over distinct buffers holding
/// identical contents are not equal, while two views over the same buffer
/// with the same bounds stay equal no matter how the contents change.
///
/// A default-constructed view is *detached*: it has no backing buffer, and
/// every operation on it fails with [`Error::NoBuffer`]. Operations that
/// validate both the buffer and bounds always report the missing buffer
/// first.
#[derive(Debug)]
pub struct ArrayView<T> {
    buffer: Option<SharedBuffer<T>>,
    offset: usize,
    count: usize,
}

/// Validates that `[offset, offset + count)` fits in a store of length `len`.
///
/// The addition is overflow-checked so that a pathological `offset`/`count`
/// pair cannot wrap around and pass the comparison.
fn check_window(offset: usize, count: usize, len: usize) -> Result<()> {
    match offset.checked_add(count) {
        Some(end) if end <= len => Ok(()),
        _ => Err(Error::OutOfRange { offset, count, len }),
    }
}

impl<T> ArrayView<T> {
    /// Creates a view delimiting all elements of `buffer`.
    pub fn new(buffer: SharedBuffer<T>) -> Self {
        let count = buffer.borrow().len();

        Self {
            buffer: Some(buffer),
            offset: 0,
            count,
        }
    }

    /// Creates a view over the range `[offset, offset + count)` of `buffer`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if the range does not fit in the
    /// buffer. Since `offset` and `count` are `usize`, the negative arms of
    /// the range contract are unrepresentable rather than checked.
    pub fn with_range(buffer: SharedBuffer<T>, offset: usize, count: usize) -> Result<Self> {
        let len = buffer.borrow().len();
        check_window(offset, count, len)?;

        Ok(Self {
            buffer: Some(buffer),
            offset,
            count,
        })
    }

    /// The backing buffer, or `None` for a detached view.
    pub fn buffer(&self) -> Option<&SharedBuffer<T>> {
        self.buffer.as_ref()
    }

    /// Position of the window's first element within the backing buffer.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Number of elements in the window.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether the window is empty.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    fn backing(&self) -> Result<&SharedBuffer<T>> {
        self.buffer.as_ref().ok_or(Error::NoBuffer)
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.count {
            Ok(())
        } else {
            Err(Error::OutOfRange {
                offset: index,
                count: 1,
                len: self.count,
            })
        }
    }

    /// Returns the element at window-relative `index`.
    ///
    /// # Errors
    ///
    /// [`Error::NoBuffer`] on a detached view, [`Error::OutOfRange`] if
    /// `index >= len()`.
    pub fn get(&self, index: usize) -> Result<T>
    where
        T: Clone,
    {
        let buf = self.backing()?;
        self.check_index(index)?;

        Ok(buf.borrow()[self.offset + index].clone())
    }

    /// Overwrites the element at window-relative `index`.
    ///
    /// The write is visible through every other view over the same buffer.
    ///
    /// # Errors
    ///
    /// [`Error::NoBuffer`] on a detached view, [`Error::OutOfRange`] if
    /// `index >= len()`.
    pub fn set(&self, index: usize, value: T) -> Result<()> {
        let buf = self.backing()?;
        self.check_index(index)?;

        buf.borrow_mut()[self.offset + index] = value;

        Ok(())
    }

    /// Returns the window-relative position of the first element equal to
    /// `item`, or `None` if the window does not contain it.
    pub fn index_of(&self, item: &T) -> Result<Option<usize>>
    where
        T: PartialEq,
    {
        let buf = self.backing()?;
        let data = buf.borrow();

        Ok(data[self.offset..self.offset + self.count]
            .iter()
            .position(|x| x == item))
    }

    /// Whether the window contains an element equal to `item`.
    pub fn contains(&self, item: &T) -> Result<bool>
    where
        T: PartialEq,
    {
        Ok(self.index_of(item)?.is_some())
    }

    /// Returns a fresh, lazy pass over the window.
    ///
    /// Every call yields an independent iterator starting at the window's
    /// first element; the pass is finite and can additionally be rewound via
    /// [`ViewIter::reset`].
    ///
    /// # Errors
    ///
    /// [`Error::NoBuffer`] on a detached view.
    pub fn iter(&self) -> Result<ViewIter<T>> {
        let buf = self.backing()?;

        Ok(ViewIter::new(Rc::clone(buf), self.offset, self.count))
    }

    /// Resets every element of the window to `T::default()`.
    ///
    /// Elements of the backing buffer outside the window are untouched.
    ///
    /// # Errors
    ///
    /// [`Error::NoBuffer`] on a detached view.
    pub fn clear(&self) -> Result<()>
    where
        T: Default,
    {
        let buf = self.backing()?;
        let mut data = buf.borrow_mut();

        for slot in &mut data[self.offset..self.offset + self.count] {
            *slot = T::default();
        }

        Ok(())
    }

    /// Copies the whole window into `dest` starting at `dest_offset`.
    ///
    /// Validation happens before any element is written: on error, `dest`
    /// is left exactly as it was.
    ///
    /// # Errors
    ///
    /// [`Error::NoBuffer`] on a detached view, [`Error::OutOfRange`] if
    /// `dest_offset + len()` exceeds `dest.len()`.
    pub fn copy_to(&self, dest: &mut [T], dest_offset: usize) -> Result<()>
    where
        T: Clone,
    {
        let buf = self.backing()?;
        check_window(dest_offset, self.count, dest.len())?;

        let data = buf.borrow();
        dest[dest_offset..dest_offset + self.count]
            .clone_from_slice(&data[self.offset..self.offset + self.count]);

        Ok(())
    }

    /// Appending is a structural mutation and always fails.
    ///
    /// The view is a fixed-size window over a fixed-size store; nothing can
    /// change its length. The buffer is never touched.
    pub fn push(&self, _item: T) -> Result<()> {
        Err(Error::Unsupported { op: "push" })
    }

    /// Insertion is a structural mutation and always fails.
    pub fn insert(&self, _index: usize, _item: T) -> Result<()> {
        Err(Error::Unsupported { op: "insert" })
    }

    /// Positional removal is a structural mutation and always fails.
    pub fn remove_at(&self, _index: usize) -> Result<T> {
        Err(Error::Unsupported { op: "remove_at" })
    }

    /// Removal by value is a structural mutation and always fails.
    pub fn remove(&self, _item: &T) -> Result<bool> {
        Err(Error::Unsupported { op: "remove" })
    }
}

impl<T> Default for ArrayView<T> {
    /// A detached view: no backing buffer, zero offset, zero count.
    fn default() -> Self {
        Self {
            buffer: None,
            offset: 0,
            count: 0,
        }
    }
}

impl<T> Clone for ArrayView<T> {
    /// Clones the window descriptor, not the data: the clone shares the
    /// backing buffer and compares equal to the original.
    fn clone(&self) -> Self {
        Self {
            buffer: self.buffer.clone(),
            offset: self.offset,
            count: self.count,
        }
    }
}

/// Structural equality over identity: same buffer allocation, same offset,
/// same count. Never a content comparison. Two detached views are equal.
impl<T> PartialEq for ArrayView<T> {
    fn eq(&self, other: &Self) -> bool {
        let same_buffer = match (&self.buffer, &other.buffer) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        };

        same_buffer && self.offset == other.offset && self.count == other.count
    }
}

impl<T> Eq for ArrayView<T> {}

/// Hashes the buffer's address plus the window bounds, consistent with the
/// identity-based equality above.
impl<T> Hash for ArrayView<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let addr = match &self.buffer {
            Some(buf) => Rc::as_ptr(buf) as usize,
            None => 0,
        };

        addr.hash(state);
        self.offset.hash(state);
        self.count.hash(state);
    }
}
