//! The [`OrderedVec`] container.
//!
//! # Time Complexity
//!
//! | Operation                 | Sorted              | Dirty                      |
//! |---------------------------|---------------------|----------------------------|
//! | `push`                    | O(log n) + O(n)     | O(1) amortized             |
//! | `replace`                 | O(log n + k) + O(n) | O(n)                       |
//! | `erase`                   | O(n)                | O(n)                       |
//! | `find`                    | O(log n)            | O(n)                       |
//! | `find_first`, `find_last` | O(log n + k)        | O(n)                       |
//! | `find_floor`, `find_ceil` | O(log n + k)        | O(n)                       |
//! | `find_next`, `find_prev`  | O(1)                | O(n)                       |
//! | `repair`                  | O(1)                | O(log n + d) or O(n log n) |
//! | `merge`                   | O((n + m) log(n + m)) | O((n + m) log(n + m))    |
//!
//! `k` is the length of the run of elements equal to the searched value and
//! `d` is the distance a single misplaced element has to travel.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Bound, Index, IndexMut, RangeBounds};

use super::config::Config;
use super::cursor::{Cursor, CursorMut, IntoIter, Iter};
use super::error::OrderedVecError;
use super::keyed::KeyedView;
use super::search;
use super::state::OrderState;

const SORTED_INVARIANT_PANIC_MESSAGE: &str = "OrderedVec storage is not sorted after repair";

/// A vector kept in ascending order that allows in-place mutation.
///
/// Mutable access to an element (through [`get_mut`](Self::get_mut),
/// `vector[i] = ..`, [`CursorMut::get_mut`] and friends) records that the
/// element may now be out of place. The order is restored by
/// [`repair`](Self::repair), either explicitly or automatically at the start
/// of the next mutating operation.
///
/// The relative order of elements that compare equal is unspecified.
///
/// # Type Parameters
///
/// * `T` - The element type. Must implement `Ord` for every order-aware
///   operation.
///
/// # Examples
///
/// ```rust
/// use ordvec::ordered::OrderedVec;
///
/// let mut vector = OrderedVec::new();
/// vector.push(5);
/// vector.push(1);
/// vector.push(3);
/// assert_eq!(vector.as_slice(), &[1, 3, 5]);
///
/// if let Some(element) = vector.get_mut(0) {
///     *element = 4;
/// }
/// vector.repair();
/// assert_eq!(vector.as_slice(), &[3, 4, 5]);
/// ```
#[derive(Clone)]
pub struct OrderedVec<T> {
    storage: Vec<T>,
    state: OrderState,
    suspended: bool,
    config: Config,
}

static_assertions::assert_impl_all!(OrderedVec<i32>: Send, Sync, Clone, Default);

impl<T> OrderedVec<T> {
    /// Creates a new empty vector with the default [`Config`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordvec::ordered::OrderedVec;
    ///
    /// let vector: OrderedVec<i32> = OrderedVec::new();
    /// assert!(vector.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self::with_config(Config::new())
    }

    /// Creates a new empty vector with the given configuration.
    #[inline]
    #[must_use]
    pub const fn with_config(config: Config) -> Self {
        Self {
            storage: Vec::new(),
            state: OrderState::Sorted,
            suspended: false,
            config,
        }
    }

    /// Creates a new empty vector able to hold `capacity` elements without
    /// reallocating.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: Vec::with_capacity(capacity),
            ..Self::new()
        }
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.storage.len()
    }

    /// Returns `true` if the vector contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Returns the number of elements the vector can hold without reallocating.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// Reserves capacity for at least `additional` more elements.
    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        self.storage.reserve(additional);
    }

    /// Shrinks the capacity as much as possible.
    #[inline]
    pub fn shrink_to_fit(&mut self) {
        self.storage.shrink_to_fit();
    }

    /// Removes every element. The vector is sorted afterwards; a suspension of
    /// automatic repair stays in effect.
    #[inline]
    pub fn clear(&mut self) {
        self.storage.clear();
        self.state = OrderState::Sorted;
    }

    /// Returns what the vector currently knows about its order.
    #[inline]
    #[must_use]
    pub const fn state(&self) -> OrderState {
        self.state
    }

    /// Returns `true` if the storage may be out of order.
    #[inline]
    #[must_use]
    pub const fn is_dirty(&self) -> bool {
        self.state.is_dirty()
    }

    /// Returns the configuration the vector was created with.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> Config {
        self.config
    }

    /// Returns `true` while automatic repair is suspended.
    #[inline]
    #[must_use]
    pub const fn is_autorepair_suspended(&self) -> bool {
        self.suspended
    }

    /// Returns a reference to the element at `index`, or `None` if out of bounds.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.storage.get(index)
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`OrderedVecError::OutOfRange`] if `index >= self.len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordvec::ordered::{OrderedVec, OrderedVecError};
    ///
    /// let vector = OrderedVec::from(vec![2, 1]);
    /// assert_eq!(vector.at(1), Ok(&2));
    /// assert_eq!(vector.at(2), Err(OrderedVecError::OutOfRange { index: 2, len: 2 }));
    /// ```
    #[inline]
    pub fn at(&self, index: usize) -> Result<&T, OrderedVecError> {
        self.storage.get(index).ok_or(OrderedVecError::OutOfRange {
            index,
            len: self.storage.len(),
        })
    }

    /// Returns the first element, the smallest one when sorted.
    ///
    /// # Errors
    ///
    /// Returns [`OrderedVecError::OutOfRange`] if the vector is empty.
    #[inline]
    pub fn front(&self) -> Result<&T, OrderedVecError> {
        self.at(0)
    }

    /// Returns the last element, the largest one when sorted.
    ///
    /// # Errors
    ///
    /// Returns [`OrderedVecError::OutOfRange`] if the vector is empty.
    #[inline]
    pub fn back(&self) -> Result<&T, OrderedVecError> {
        self.at(self.last_index()?)
    }

    /// Returns the elements as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.storage
    }

    /// Returns an iterator over the elements in storage order.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.storage.iter())
    }

    /// Consumes the vector and returns its storage.
    #[inline]
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.storage
    }

    /// Returns a cursor at the first position.
    #[inline]
    #[must_use]
    pub const fn cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self, 0)
    }

    /// Returns a cursor at `position`.
    #[inline]
    #[must_use]
    pub const fn cursor_at(&self, position: usize) -> Cursor<'_, T> {
        Cursor::new(self, position)
    }

    /// Returns a cursor one past the last element.
    #[inline]
    #[must_use]
    pub const fn cursor_end(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.len())
    }

    fn last_index(&self) -> Result<usize, OrderedVecError> {
        self.storage
            .len()
            .checked_sub(1)
            .ok_or(OrderedVecError::OutOfRange { index: 0, len: 0 })
    }

    const fn autorepair_active(&self) -> bool {
        self.config.is_tracked() && self.config.is_auto_repair() && !self.suspended
    }

    const fn mark_touched(&mut self, index: usize) {
        if self.config.is_tracked() {
            self.state = self.state.touched(index);
        }
    }

    const fn mark_unknown(&mut self) {
        if self.config.is_tracked() {
            self.state = OrderState::DirtyUnknown;
        }
    }
}

impl<T: Ord> OrderedVec<T> {
    /// Creates a vector from storage expected to be sorted already.
    ///
    /// No sorting is performed. The order is checked in one linear pass; input
    /// that turns out unsorted is kept as given and starts in
    /// [`OrderState::DirtyUnknown`], so the next repair sorts it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordvec::ordered::{OrderState, OrderedVec};
    ///
    /// let vector = OrderedVec::from_sorted_vec(vec![1, 2, 2, 5]);
    /// assert_eq!(vector.find_last(&2), Some(2));
    ///
    /// let unsorted = OrderedVec::from_sorted_vec(vec![3, 1, 2]);
    /// assert_eq!(unsorted.state(), OrderState::DirtyUnknown);
    /// assert_eq!(unsorted.find(&1), Some(1));
    /// ```
    #[must_use]
    pub fn from_sorted_vec(storage: Vec<T>) -> Self {
        let state = if storage.is_sorted() {
            OrderState::Sorted
        } else {
            log::debug!("from_sorted_vec received {} unsorted elements", storage.len());
            OrderState::DirtyUnknown
        };
        Self {
            storage,
            state,
            ..Self::new()
        }
    }

    /// Replaces the contents with `elements` and sorts them.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordvec::ordered::OrderedVec;
    ///
    /// let mut vector = OrderedVec::from(vec![1, 2, 3]);
    /// vector.assign([9, 4]);
    /// assert_eq!(vector.as_slice(), &[4, 9]);
    /// ```
    pub fn assign<I>(&mut self, elements: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.storage.clear();
        self.storage.extend(elements);
        self.sort();
    }

    /// Returns a mutable reference to the element at `index`, or `None` if out
    /// of bounds.
    ///
    /// A dirty vector is repaired first when automatic repair is active, so
    /// `index` refers to the repaired order. The element is then recorded as
    /// possibly misplaced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordvec::ordered::{OrderState, OrderedVec};
    ///
    /// let mut vector = OrderedVec::from(vec![1, 3, 5]);
    /// if let Some(element) = vector.get_mut(1) {
    ///     *element = 4;
    /// }
    /// assert_eq!(vector.state(), OrderState::DirtyAt(1));
    /// ```
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.storage.len() {
            return None;
        }
        self.before_mutation();
        self.mark_touched(index);
        self.storage.get_mut(index)
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`OrderedVecError::OutOfRange`] if `index >= self.len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, OrderedVecError> {
        let len = self.storage.len();
        self.get_mut(index)
            .ok_or(OrderedVecError::OutOfRange { index, len })
    }

    /// Returns a mutable reference to the first element.
    ///
    /// # Errors
    ///
    /// Returns [`OrderedVecError::OutOfRange`] if the vector is empty.
    pub fn front_mut(&mut self) -> Result<&mut T, OrderedVecError> {
        self.at_mut(0)
    }

    /// Returns a mutable reference to the last element.
    ///
    /// # Errors
    ///
    /// Returns [`OrderedVecError::OutOfRange`] if the vector is empty.
    pub fn back_mut(&mut self) -> Result<&mut T, OrderedVecError> {
        let last = self.last_index()?;
        self.at_mut(last)
    }

    /// Returns the elements as a mutable slice.
    ///
    /// Any element may change, so the order becomes unknown.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordvec::ordered::{OrderState, OrderedVec};
    ///
    /// let mut vector = OrderedVec::from(vec![1, 2, 3]);
    /// vector.as_mut_slice().reverse();
    /// assert_eq!(vector.state(), OrderState::DirtyUnknown);
    ///
    /// vector.repair();
    /// assert_eq!(vector.as_slice(), &[1, 2, 3]);
    /// ```
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.before_mutation();
        self.mark_unknown();
        &mut self.storage
    }

    /// Returns an iterator over mutable references to the elements.
    ///
    /// Like [`as_mut_slice`](Self::as_mut_slice), this makes the order unknown.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Returns a mutable cursor at the first position.
    #[must_use]
    pub const fn cursor_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self, 0)
    }

    /// Returns a mutable cursor at `position`.
    #[must_use]
    pub const fn cursor_mut_at(&mut self, position: usize) -> CursorMut<'_, T> {
        CursorMut::new(self, position)
    }

    /// Inserts `value`, keeping the vector sorted if it currently is.
    ///
    /// In the sorted state `value` is placed at its ceiling position, right
    /// after an existing equal element if there is one. In a dirty state that
    /// automatic repair does not fix, `value` is appended and the order
    /// becomes unknown.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordvec::ordered::OrderedVec;
    ///
    /// let mut vector = OrderedVec::from(vec![1, 3, 5, 7, 9]);
    /// vector.push(6);
    /// assert_eq!(vector.as_slice(), &[1, 3, 5, 6, 7, 9]);
    /// ```
    pub fn push(&mut self, value: T) {
        self.before_mutation();
        if self.state.is_dirty() {
            self.storage.push(value);
            self.state = OrderState::DirtyUnknown;
            return;
        }

        let ceiling = search::resolve_window(self.storage.len(), &..).and_then(|(low, high)| {
            search::binary_ceil(&self.storage, low, high, |element| element.cmp(&value))
        });
        let position = match ceiling {
            Some(ceiling) if self.storage[ceiling] == value => ceiling + 1,
            Some(ceiling) => ceiling,
            None => self.storage.len(),
        };
        self.storage.insert(position, value);
    }

    /// Overwrites the first element equal to `value`, or inserts `value` if
    /// there is none. Returns the overwritten element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordvec::ordered::OrderedVec;
    ///
    /// let mut vector = OrderedVec::from(vec![1, 2, 3]);
    /// assert_eq!(vector.replace(2), Some(2));
    /// assert_eq!(vector.replace(4), None);
    /// assert_eq!(vector.as_slice(), &[1, 2, 3, 4]);
    /// ```
    pub fn replace(&mut self, value: T) -> Option<T> {
        self.before_mutation();
        match self.find_first(&value) {
            Some(position) => Some(std::mem::replace(&mut self.storage[position], value)),
            None => {
                self.push(value);
                None
            }
        }
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`OrderedVecError::OutOfRange`] if `index >= self.len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordvec::ordered::OrderedVec;
    ///
    /// let mut vector = OrderedVec::from(vec![3, 1, 2]);
    /// assert_eq!(vector.erase(0), Ok(1));
    /// assert_eq!(vector.as_slice(), &[2, 3]);
    /// ```
    pub fn erase(&mut self, index: usize) -> Result<T, OrderedVecError> {
        if index >= self.storage.len() {
            return Err(OrderedVecError::OutOfRange {
                index,
                len: self.storage.len(),
            });
        }
        self.before_mutation();
        let removed = self.storage.remove(index);
        self.state = self.state.erased(&(index..index + 1), self.storage.len());
        Ok(removed)
    }

    /// Removes the elements in `range` and returns how many were removed.
    ///
    /// # Errors
    ///
    /// Returns [`OrderedVecError::OutOfRange`] if the range reaches past the
    /// end, reporting the last position requested, or if it starts after it
    /// ends, reporting the start. Nothing is removed in either case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordvec::ordered::OrderedVec;
    ///
    /// let mut vector = OrderedVec::from(vec![1, 2, 3, 4, 5]);
    /// assert_eq!(vector.erase_range(1..=2), Ok(2));
    /// assert_eq!(vector.as_slice(), &[1, 4, 5]);
    /// assert!(vector.erase_range(2..9).is_err());
    /// ```
    pub fn erase_range<R>(&mut self, range: R) -> Result<usize, OrderedVecError>
    where
        R: RangeBounds<usize>,
    {
        let len = self.storage.len();
        let start = match range.start_bound() {
            Bound::Included(&start) => start,
            Bound::Excluded(&start) => start.saturating_add(1),
            Bound::Unbounded => 0,
        };
        // The last position the caller asked for, `None` for an empty prefix.
        let last = match range.end_bound() {
            Bound::Included(&end) => Some(end),
            Bound::Excluded(&end) => end.checked_sub(1),
            Bound::Unbounded => len.checked_sub(1),
        };
        let end = match last {
            Some(index) if index >= len => {
                return Err(OrderedVecError::OutOfRange { index, len });
            }
            Some(index) => index + 1,
            None => 0,
        };
        if start > end {
            return Err(OrderedVecError::OutOfRange { index: start, len });
        }

        self.before_mutation();
        self.storage.drain(start..end);
        self.state = self.state.erased(&(start..end), self.storage.len());
        Ok(end - start)
    }

    /// Appends every element of `elements` and sorts the result.
    ///
    /// The vector is sorted afterwards regardless of configuration.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordvec::ordered::OrderedVec;
    ///
    /// let mut vector = OrderedVec::from(vec![1, 3, 5, 7, 9]);
    /// vector.merge([10, 2, 6]);
    /// assert_eq!(vector.as_slice(), &[1, 2, 3, 5, 6, 7, 9, 10]);
    /// ```
    pub fn merge<I>(&mut self, elements: I)
    where
        I: IntoIterator<Item = T>,
    {
        let before = self.storage.len();
        self.storage.extend(elements);
        log::debug!(
            "merging {} elements into ordered vector of {before}",
            self.storage.len() - before
        );
        self.state = OrderState::DirtyUnknown;
        self.sort();
    }

    /// Calls [`replace`](Self::replace) for every element of `elements`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordvec::ordered::OrderedVec;
    ///
    /// let mut vector = OrderedVec::from(vec![1, 3, 5]);
    /// vector.merge_replace([3, 4]);
    /// assert_eq!(vector.as_slice(), &[1, 3, 4, 5]);
    /// ```
    pub fn merge_replace<I>(&mut self, elements: I)
    where
        I: IntoIterator<Item = T>,
    {
        let elements = elements.into_iter();
        self.storage.reserve(elements.size_hint().0);
        for element in elements {
            self.replace(element);
        }
    }

    /// Sorts the whole storage and marks the vector sorted.
    pub fn sort(&mut self) {
        log::trace!("full sort of {} elements", self.storage.len());
        self.storage.sort();
        self.state = OrderState::Sorted;
    }

    /// Restores the sorted state.
    ///
    /// - Sorted: nothing happens.
    /// - A single suspect element: it is moved to its place with one binary
    ///   search and one shift of the elements in between.
    /// - Unknown: the whole storage is sorted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordvec::ordered::{OrderState, OrderedVec};
    ///
    /// let mut vector = OrderedVec::from(vec![1, 3, 5, 7, 9]);
    /// vector[2] = 0;
    /// vector.repair();
    /// assert_eq!(vector.as_slice(), &[0, 1, 3, 7, 9]);
    /// assert_eq!(vector.state(), OrderState::Sorted);
    /// ```
    pub fn repair(&mut self) {
        match self.state {
            OrderState::Sorted => return,
            OrderState::DirtyUnknown => self.sort(),
            OrderState::DirtyAt(index) => {
                self.relocate(index);
                self.state = OrderState::Sorted;
            }
        }
        debug_assert!(self.storage.is_sorted(), "{}", SORTED_INVARIANT_PANIC_MESSAGE);
    }

    /// Stops mutating operations from repairing the vector until
    /// [`resume_autorepair`](Self::resume_autorepair) is called.
    ///
    /// When tracking is enabled the order becomes unknown immediately, so the
    /// batch of mutations that follows is not constrained.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordvec::ordered::OrderedVec;
    ///
    /// let mut vector = OrderedVec::from(vec![5, 6]);
    /// vector.suspend_autorepair();
    /// for value in [3, 9, 1] {
    ///     vector.push(value);
    /// }
    /// vector.resume_autorepair();
    /// assert_eq!(vector.as_slice(), &[1, 3, 5, 6, 9]);
    /// ```
    pub fn suspend_autorepair(&mut self) {
        log::debug!("autorepair suspended");
        self.suspended = true;
        self.mark_unknown();
    }

    /// Ends a suspension started by
    /// [`suspend_autorepair`](Self::suspend_autorepair) and, if automatic
    /// repair is configured, repairs immediately.
    pub fn resume_autorepair(&mut self) {
        log::debug!("autorepair resumed");
        self.suspended = false;
        if self.config.is_auto_repair() {
            self.repair();
        }
    }

    /// Returns `true` if an element equal to `value` is present.
    #[inline]
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Returns a view searching by a key projected out of every element.
    ///
    /// The projected key must order elements exactly as `T`'s `Ord` does; the
    /// view cannot check this.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordvec::ordered::OrderedVec;
    ///
    /// #[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
    /// struct Entry {
    ///     id: u32,
    ///     name: String,
    /// }
    ///
    /// let vector = OrderedVec::from(vec![
    ///     Entry { id: 7, name: "seven".to_string() },
    ///     Entry { id: 2, name: "two".to_string() },
    /// ]);
    /// let by_id = vector.keyed(|entry: &Entry| &entry.id);
    /// assert_eq!(by_id.find(&7), Some(1));
    /// ```
    pub fn keyed<K, F>(&self, projection: F) -> KeyedView<'_, T, K, F>
    where
        K: Ord + ?Sized,
        F: Fn(&T) -> &K,
    {
        KeyedView::new(self, projection)
    }

    whole_range_search! {
        value: &T;
        /// Returns the index of any element equal to `value`.
        ///
        /// # Examples
        ///
        /// ```rust
        /// use ordvec::ordered::OrderedVec;
        ///
        /// let vector = OrderedVec::from(vec![1, 3, 5]);
        /// assert_eq!(vector.find(&3), Some(1));
        /// assert_eq!(vector.find(&4), None);
        /// ```
        find,
        /// Returns the index of the first element equal to `value`.
        find_first,
        /// Returns the index of the last element equal to `value`.
        find_last,
        /// Returns the index of the last element `<=` `value`.
        ///
        /// # Examples
        ///
        /// ```rust
        /// use ordvec::ordered::OrderedVec;
        ///
        /// let vector = OrderedVec::from(vec![1, 3, 3, 5]);
        /// assert_eq!(vector.find_floor(&3), Some(2));
        /// assert_eq!(vector.find_floor(&4), Some(2));
        /// assert_eq!(vector.find_floor(&0), None);
        /// ```
        find_floor,
        /// Returns the index of the first element `>=` `value`.
        ///
        /// # Examples
        ///
        /// ```rust
        /// use ordvec::ordered::OrderedVec;
        ///
        /// let vector = OrderedVec::from(vec![1, 3, 3, 5]);
        /// assert_eq!(vector.find_ceil(&3), Some(1));
        /// assert_eq!(vector.find_ceil(&4), Some(3));
        /// assert_eq!(vector.find_ceil(&6), None);
        /// ```
        find_ceil,
        /// Returns the index of the first element equal to `value` by linear scan.
        find_linear,
        /// Returns the index of the first element equal to `value` by linear scan.
        find_linear_first,
        /// Returns the index of the last element equal to `value` by linear scan.
        find_linear_last,
    }

    /// Returns the index of any element in `range` equal to `value`.
    ///
    /// Binary search when sorted, otherwise a linear scan. The range is
    /// inclusive of both ends when given as `a..=b`; an end past the last
    /// element is clamped to it.
    #[must_use]
    pub fn find_in<R>(&self, value: &T, range: R) -> Option<usize>
    where
        R: RangeBounds<usize>,
    {
        let (low, high) = search::resolve_window(self.storage.len(), &range)?;
        if self.state.is_sorted() {
            search::binary_find(&self.storage, low, high, Self::probe(value))
        } else {
            search::linear_find_first(&self.storage, low, high, Self::probe(value))
        }
    }

    /// Returns the index of the first element in `range` equal to `value`.
    #[must_use]
    pub fn find_first_in<R>(&self, value: &T, range: R) -> Option<usize>
    where
        R: RangeBounds<usize>,
    {
        let (low, high) = search::resolve_window(self.storage.len(), &range)?;
        if self.state.is_sorted() {
            search::binary_find_first(&self.storage, low, high, Self::probe(value))
        } else {
            search::linear_find_first(&self.storage, low, high, Self::probe(value))
        }
    }

    /// Returns the index of the last element in `range` equal to `value`.
    #[must_use]
    pub fn find_last_in<R>(&self, value: &T, range: R) -> Option<usize>
    where
        R: RangeBounds<usize>,
    {
        let (low, high) = search::resolve_window(self.storage.len(), &range)?;
        if self.state.is_sorted() {
            search::binary_find_last(&self.storage, low, high, Self::probe(value))
        } else {
            search::linear_find_last(&self.storage, low, high, Self::probe(value))
        }
    }

    /// Returns the index of the last element in `range` that is `<=` `value`.
    ///
    /// When the vector is dirty the position of the greatest such element is
    /// returned instead, the last one among equals.
    #[must_use]
    pub fn find_floor_in<R>(&self, value: &T, range: R) -> Option<usize>
    where
        R: RangeBounds<usize>,
    {
        let (low, high) = search::resolve_window(self.storage.len(), &range)?;
        if self.state.is_sorted() {
            search::binary_floor(&self.storage, low, high, Self::probe(value))
        } else {
            search::linear_floor(&self.storage, low, high, Self::probe(value), T::cmp)
        }
    }

    /// Returns the index of the first element in `range` that is `>=` `value`.
    ///
    /// When the vector is dirty the position of the least such element is
    /// returned instead, the first one among equals.
    #[must_use]
    pub fn find_ceil_in<R>(&self, value: &T, range: R) -> Option<usize>
    where
        R: RangeBounds<usize>,
    {
        let (low, high) = search::resolve_window(self.storage.len(), &range)?;
        if self.state.is_sorted() {
            search::binary_ceil(&self.storage, low, high, Self::probe(value))
        } else {
            search::linear_ceil(&self.storage, low, high, Self::probe(value), T::cmp)
        }
    }

    /// Returns the index of the first element in `range` equal to `value`,
    /// scanning linearly whatever the state.
    #[must_use]
    pub fn find_linear_in<R>(&self, value: &T, range: R) -> Option<usize>
    where
        R: RangeBounds<usize>,
    {
        self.find_linear_first_in(value, range)
    }

    /// Returns the index of the first element in `range` equal to `value`,
    /// scanning linearly whatever the state.
    #[must_use]
    pub fn find_linear_first_in<R>(&self, value: &T, range: R) -> Option<usize>
    where
        R: RangeBounds<usize>,
    {
        let (low, high) = search::resolve_window(self.storage.len(), &range)?;
        search::linear_find_first(&self.storage, low, high, Self::probe(value))
    }

    /// Returns the index of the last element in `range` equal to `value`,
    /// scanning linearly whatever the state.
    #[must_use]
    pub fn find_linear_last_in<R>(&self, value: &T, range: R) -> Option<usize>
    where
        R: RangeBounds<usize>,
    {
        let (low, high) = search::resolve_window(self.storage.len(), &range)?;
        search::linear_find_last(&self.storage, low, high, Self::probe(value))
    }

    /// Returns `current + 1` if that element equals the one at `current`.
    ///
    /// When the vector is dirty, returns the next equal element anywhere
    /// after `current` instead.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordvec::ordered::OrderedVec;
    ///
    /// let vector = OrderedVec::from(vec![1, 3, 3, 5]);
    /// assert_eq!(vector.find_next(1), Some(2));
    /// assert_eq!(vector.find_next(2), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn find_next(&self, current: usize) -> Option<usize> {
        self.find_next_in(current, ..)
    }

    /// Like [`find_next`](Self::find_next), not looking past the end of `range`.
    #[must_use]
    pub fn find_next_in<R>(&self, current: usize, range: R) -> Option<usize>
    where
        R: RangeBounds<usize>,
    {
        let (_, high) = search::resolve_window(self.storage.len(), &range)?;
        if current >= high {
            return None;
        }
        let value = &self.storage[current];
        if self.state.is_sorted() {
            (self.storage[current + 1] == *value).then_some(current + 1)
        } else {
            search::linear_find_first(&self.storage, current + 1, high, Self::probe(value))
        }
    }

    /// Returns `current - 1` if that element equals the one at `current`.
    ///
    /// When the vector is dirty, returns the previous equal element anywhere
    /// before `current` instead.
    #[inline]
    #[must_use]
    pub fn find_prev(&self, current: usize) -> Option<usize> {
        self.find_prev_in(current, ..)
    }

    /// Like [`find_prev`](Self::find_prev), not looking before the start of `range`.
    #[must_use]
    pub fn find_prev_in<R>(&self, current: usize, range: R) -> Option<usize>
    where
        R: RangeBounds<usize>,
    {
        let (low, _) = search::resolve_window(self.storage.len(), &range)?;
        if current <= low || current >= self.storage.len() {
            return None;
        }
        let value = &self.storage[current];
        if self.state.is_sorted() {
            (self.storage[current - 1] == *value).then_some(current - 1)
        } else {
            search::linear_find_last(&self.storage, low, current - 1, Self::probe(value))
        }
    }

    fn probe(value: &T) -> impl Fn(&T) -> Ordering + '_ {
        move |element: &T| element.cmp(value)
    }

    fn before_mutation(&mut self) {
        if self.autorepair_active() && self.state.is_dirty() {
            self.repair();
        }
    }

    /// Moves the element at `index` to its place, assuming every other
    /// adjacent pair is ordered.
    fn relocate(&mut self, index: usize) {
        let Some(last) = self.storage.len().checked_sub(1) else {
            return;
        };
        if index > last {
            return;
        }

        let value = &self.storage[index];
        if index > 0 && *value < self.storage[index - 1] {
            let target = search::binary_ceil(&self.storage, 0, index - 1, Self::probe(value))
                .unwrap_or(0);
            log::trace!("relocating element from {index} down to {target}");
            self.storage[target..=index].rotate_right(1);
        } else if index < last && *value > self.storage[index + 1] {
            let target = search::binary_floor(&self.storage, index + 1, last, Self::probe(value))
                .unwrap_or(last);
            log::trace!("relocating element from {index} up to {target}");
            self.storage[index..=target].rotate_left(1);
        }
    }
}

impl<T> Default for OrderedVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> From<Vec<T>> for OrderedVec<T> {
    fn from(storage: Vec<T>) -> Self {
        let mut vector = Self {
            storage,
            ..Self::new()
        };
        vector.sort();
        vector
    }
}

impl<T> From<OrderedVec<T>> for Vec<T> {
    fn from(vector: OrderedVec<T>) -> Self {
        vector.storage
    }
}

impl<T: Ord> FromIterator<T> for OrderedVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<T: Ord> Extend<T> for OrderedVec<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.merge(iter);
    }
}

impl<T: Ord> Add<T> for OrderedVec<T> {
    type Output = Self;

    fn add(mut self, value: T) -> Self::Output {
        self.push(value);
        self
    }
}

impl<T: Ord> AddAssign<T> for OrderedVec<T> {
    fn add_assign(&mut self, value: T) {
        self.push(value);
    }
}

impl<T: Ord> Add for OrderedVec<T> {
    type Output = Self;

    /// Same as [`OrderedVec::merge`] with the elements of `other`.
    fn add(mut self, other: Self) -> Self::Output {
        self.merge(other.storage);
        self
    }
}

impl<T: Ord> AddAssign for OrderedVec<T> {
    /// Same as [`OrderedVec::merge`] with the elements of `other`.
    fn add_assign(&mut self, other: Self) {
        self.merge(other.storage);
    }
}

impl<T> Index<usize> for OrderedVec<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index >= self.len()`. Use [`OrderedVec::at`] for a checked
    /// access.
    fn index(&self, index: usize) -> &Self::Output {
        &self.storage[index]
    }
}

impl<T: Ord> IndexMut<usize> for OrderedVec<T> {
    /// Same as [`OrderedVec::get_mut`].
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`. Use [`OrderedVec::at_mut`] for a
    /// checked access.
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        let len = self.storage.len();
        match self.get_mut(index) {
            Some(element) => element,
            None => panic!("index out of bounds: the len is {len} but the index is {index}"),
        }
    }
}

impl<T> AsRef<[T]> for OrderedVec<T> {
    fn as_ref(&self) -> &[T] {
        &self.storage
    }
}

impl<T> IntoIterator for OrderedVec<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.storage.into_iter())
    }
}

impl<'a, T> IntoIterator for &'a OrderedVec<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for OrderedVec<T> {
    fn eq(&self, other: &Self) -> bool {
        self.storage == other.storage
    }
}

impl<T: Eq> Eq for OrderedVec<T> {}

impl<T: fmt::Debug> fmt::Debug for OrderedVec<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.storage.iter()).finish()
    }
}
