//! Position-based cursors and iterators over an [`OrderedVec`].
//!
//! A cursor is a position paired with a reference to its vector. It moves
//! forward or by an offset and reads elements through the vector's own
//! accessors, so [`CursorMut::get_mut`] marks the element as possibly
//! misplaced exactly like [`OrderedVec::get_mut`] does.
//!
//! Two cursors are equal when they refer to the same vector instance and the
//! same position.

use std::fmt;
use std::iter::FusedIterator;
use std::ops::{Add, Sub};
use std::ptr;

use super::vector::OrderedVec;

/// A read-only cursor into an [`OrderedVec`].
///
/// The cursor is also an iterator yielding the elements from its position on.
///
/// # Examples
///
/// ```rust
/// use ordvec::ordered::OrderedVec;
///
/// let vector = OrderedVec::from(vec![4, 2, 8, 6]);
/// let cursor = vector.cursor() + 1;
/// assert_eq!(cursor.get(), Some(&4));
/// assert_eq!(cursor + 3, vector.cursor_end());
///
/// let rest: Vec<i32> = cursor.copied().collect();
/// assert_eq!(rest, vec![4, 6, 8]);
/// ```
pub struct Cursor<'a, T> {
    vector: &'a OrderedVec<T>,
    position: usize,
}

static_assertions::assert_impl_all!(Cursor<'static, i32>: Copy, Iterator, Send, Sync);

impl<'a, T> Cursor<'a, T> {
    pub(crate) const fn new(vector: &'a OrderedVec<T>, position: usize) -> Self {
        Self { vector, position }
    }

    /// Returns the position of the cursor.
    #[inline]
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Returns the element under the cursor, or `None` past the end.
    #[inline]
    #[must_use]
    pub fn get(&self) -> Option<&'a T> {
        self.vector.get(self.position)
    }

    /// Advances the cursor by one position.
    #[inline]
    pub const fn move_next(&mut self) {
        self.position += 1;
    }

    /// Returns `true` if the cursor is at or past the end of the vector.
    #[inline]
    #[must_use]
    pub const fn is_end(&self) -> bool {
        self.position >= self.vector.len()
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.vector, other.vector) && self.position == other.position
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T> Add<usize> for Cursor<'_, T> {
    type Output = Self;

    fn add(self, offset: usize) -> Self::Output {
        Self {
            position: self.position + offset,
            ..self
        }
    }
}

impl<T> Sub<usize> for Cursor<'_, T> {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if `offset` is greater than the current position.
    fn sub(self, offset: usize) -> Self::Output {
        Self {
            position: self.position - offset,
            ..self
        }
    }
}

impl<'a, T> Iterator for Cursor<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let element = self.get()?;
        self.position += 1;
        Some(element)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.vector.len().saturating_sub(self.position);
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Cursor<'_, T> {}

impl<T> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Cursor")
            .field("position", &self.position)
            .field("len", &self.vector.len())
            .finish()
    }
}

/// A cursor with exclusive access to an [`OrderedVec`].
///
/// Reading through [`get`](Self::get) leaves the order untouched; writing
/// through [`get_mut`](Self::get_mut) records the element as possibly
/// misplaced.
///
/// # Examples
///
/// ```rust
/// use ordvec::ordered::{OrderState, OrderedVec};
///
/// let mut vector = OrderedVec::from(vec![1, 3, 5]);
/// let mut cursor = vector.cursor_mut() + 1;
/// if let Some(element) = cursor.get_mut() {
///     *element = 10;
/// }
/// assert_eq!(vector.state(), OrderState::DirtyAt(1));
///
/// vector.repair();
/// assert_eq!(vector.as_slice(), &[1, 5, 10]);
/// ```
pub struct CursorMut<'a, T> {
    vector: &'a mut OrderedVec<T>,
    position: usize,
}

impl<'a, T> CursorMut<'a, T> {
    pub(crate) const fn new(vector: &'a mut OrderedVec<T>, position: usize) -> Self {
        Self { vector, position }
    }

    /// Returns the position of the cursor.
    #[inline]
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Returns the element under the cursor, or `None` past the end.
    #[inline]
    #[must_use]
    pub fn get(&self) -> Option<&T> {
        self.vector.get(self.position)
    }

    /// Advances the cursor by one position.
    #[inline]
    pub const fn move_next(&mut self) {
        self.position += 1;
    }

    /// Returns `true` if the cursor is at or past the end of the vector.
    #[inline]
    #[must_use]
    pub const fn is_end(&self) -> bool {
        self.position >= self.vector.len()
    }

    /// Returns a read-only cursor at the same position.
    #[inline]
    #[must_use]
    pub const fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor::new(&*self.vector, self.position)
    }
}

impl<T: Ord> CursorMut<'_, T> {
    /// Returns the element under the cursor for mutation, or `None` past the
    /// end. Goes through [`OrderedVec::get_mut`], including its repair and
    /// tracking.
    #[inline]
    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.vector.get_mut(self.position)
    }
}

impl<T> PartialEq for CursorMut<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(&*self.vector, &*other.vector) && self.position == other.position
    }
}

impl<T> Eq for CursorMut<'_, T> {}

impl<T> Add<usize> for CursorMut<'_, T> {
    type Output = Self;

    fn add(self, offset: usize) -> Self::Output {
        Self {
            position: self.position + offset,
            vector: self.vector,
        }
    }
}

impl<T> Sub<usize> for CursorMut<'_, T> {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if `offset` is greater than the current position.
    fn sub(self, offset: usize) -> Self::Output {
        Self {
            position: self.position - offset,
            vector: self.vector,
        }
    }
}

impl<T> fmt::Debug for CursorMut<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("CursorMut")
            .field("position", &self.position)
            .field("len", &self.vector.len())
            .finish()
    }
}

/// Iterator over references to the elements of an [`OrderedVec`].
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    inner: std::slice::Iter<'a, T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) const fn new(inner: std::slice::Iter<'a, T>) -> Self {
        Self { inner }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator over the elements of an [`OrderedVec`].
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    inner: std::vec::IntoIter<T>,
}

impl<T> IntoIter<T> {
    pub(crate) const fn new(inner: std::vec::IntoIter<T>) -> Self {
        Self { inner }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ordered::OrderState;
    use rstest::rstest;

    #[rstest]
    fn test_cursor_equality_needs_same_vector() {
        let first = OrderedVec::from(vec![1, 2]);
        let second = OrderedVec::from(vec![1, 2]);
        assert_eq!(first.cursor(), first.cursor_at(0));
        assert_ne!(first.cursor(), second.cursor());
        assert_ne!(first.cursor(), first.cursor() + 1);
    }

    #[rstest]
    fn test_cursor_offsets() {
        let vector = OrderedVec::from(vec![10, 20, 30]);
        let cursor = vector.cursor() + 2;
        assert_eq!(cursor.position(), 2);
        assert_eq!((cursor - 1).get(), Some(&20));
        assert!((cursor + 1).is_end());
        assert_eq!((cursor + 1).get(), None);
    }

    #[rstest]
    fn test_cursor_iterates_from_position() {
        let vector = OrderedVec::from(vec![3, 1, 2]);
        let mut cursor = vector.cursor();
        cursor.move_next();
        assert_eq!(cursor.len(), 2);
        assert_eq!(cursor.collect::<Vec<_>>(), vec![&2, &3]);
    }

    #[rstest]
    fn test_cursor_mut_read_does_not_dirty() {
        let mut vector = OrderedVec::from(vec![1, 2, 3]);
        let cursor = vector.cursor_mut_at(1);
        assert_eq!(cursor.get(), Some(&2));
        assert_eq!(vector.state(), OrderState::Sorted);
    }

    #[rstest]
    fn test_cursor_mut_write_dirties_its_position() {
        let mut vector = OrderedVec::from(vec![1, 2, 3]);
        let mut cursor = vector.cursor_mut();
        cursor.move_next();
        cursor.move_next();
        if let Some(element) = cursor.get_mut() {
            *element = 0;
        }
        assert_eq!(vector.state(), OrderState::DirtyAt(2));
    }

    #[rstest]
    fn test_cursor_mut_past_end() {
        let mut vector = OrderedVec::from(vec![1]);
        let mut cursor = vector.cursor_mut() + 1;
        assert!(cursor.is_end());
        assert_eq!(cursor.get_mut(), None);
        assert_eq!(vector.state(), OrderState::Sorted);
    }

    #[rstest]
    fn test_iter_is_double_ended() {
        let vector = OrderedVec::from(vec![2, 3, 1]);
        let reversed: Vec<i32> = vector.iter().rev().copied().collect();
        assert_eq!(reversed, vec![3, 2, 1]);
        assert_eq!(vector.iter().len(), 3);
    }

    #[rstest]
    fn test_into_iter_yields_sorted() {
        let vector: OrderedVec<i32> = [5, 4, 6].into_iter().collect();
        assert_eq!(vector.into_iter().collect::<Vec<_>>(), vec![4, 5, 6]);
    }
}
