//! A lazy, restartable pass over a view's window.

use super::core::SharedBuffer;

/// Iterator over the elements of an [`ArrayView`](super::ArrayView) window.
///
/// The iterator holds its own handle to the backing buffer, so it stays
/// valid even if the view it came from is dropped. Elements are cloned out
/// lazily, one per step; mutations to the buffer made before a given step
/// are observed by that step.
pub struct ViewIter<T> {
    buffer: SharedBuffer<T>,
    start: usize,
    end: usize,
    pos: usize,
}

impl<T> ViewIter<T> {
    pub(super) fn new(buffer: SharedBuffer<T>, offset: usize, count: usize) -> Self {
        Self {
            buffer,
            start: offset,
            end: offset + count,
            pos: offset,
        }
    }

    /// Rewinds the pass to the first element of the window.
    pub fn reset(&mut self) {
        self.pos = self.start;
    }
}

impl<T: Clone> Iterator for ViewIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.pos >= self.end {
            return None;
        }

        let item = self.buffer.borrow()[self.pos].clone();
        self.pos += 1;

        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.pos;

        (remaining, Some(remaining))
    }
}

impl<T: Clone> ExactSizeIterator for ViewIter<T> {}
