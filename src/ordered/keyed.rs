//! Searching an [`OrderedVec`] by a projected key.
//!
//! Searching normally takes a whole `T`. When building a `T` only to search
//! for it is expensive, [`KeyedView`] compares a key projected out of each
//! element against a caller-supplied key instead. The algorithms, including
//! the linear fallback on a dirty vector, are the ones the vector itself uses.
//!
//! The projection must order elements exactly as `T`'s `Ord` does, typically
//! by returning the field `Ord` compares first and only. Nothing checks this.

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use std::ops::RangeBounds;

use super::search;
use super::vector::OrderedVec;

/// A borrowed view of an [`OrderedVec`] searching by key.
///
/// Created by [`OrderedVec::keyed`].
///
/// # Type Parameters
///
/// * `T` - The element type of the vector
/// * `K` - The key type; may be unsized, such as `str`
/// * `F` - The projection from an element to its key
///
/// # Examples
///
/// ```rust
/// use ordvec::ordered::OrderedVec;
///
/// #[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
/// struct Account {
///     name: String,
///     balance: u64,
/// }
///
/// let accounts = OrderedVec::from(vec![
///     Account { name: "carol".to_string(), balance: 5 },
///     Account { name: "alice".to_string(), balance: 12 },
///     Account { name: "bob".to_string(), balance: 0 },
/// ]);
///
/// let by_name = accounts.keyed(|account: &Account| account.name.as_str());
/// assert_eq!(by_name.find("bob"), Some(1));
/// assert_eq!(by_name.get("carol").map(|account| account.balance), Some(5));
/// assert_eq!(by_name.find_ceil("b"), Some(1));
/// ```
pub struct KeyedView<'a, T, K: ?Sized, F> {
    vector: &'a OrderedVec<T>,
    projection: F,
    key: PhantomData<fn(&K)>,
}

impl<'a, T, K, F> KeyedView<'a, T, K, F>
where
    K: Ord + ?Sized,
    F: Fn(&T) -> &K,
{
    pub(crate) const fn new(vector: &'a OrderedVec<T>, projection: F) -> Self {
        Self {
            vector,
            projection,
            key: PhantomData,
        }
    }

    /// Returns the underlying vector.
    #[inline]
    #[must_use]
    pub const fn vector(&self) -> &'a OrderedVec<T> {
        self.vector
    }

    /// Returns the element whose key equals `key`, if any.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&'a T> {
        let vector = self.vector;
        self.find(key).and_then(|position| vector.get(position))
    }

    whole_range_search! {
        key: &K;
        /// Returns the index of any element whose key equals `key`.
        find,
        /// Returns the index of the first element whose key equals `key`.
        find_first,
        /// Returns the index of the last element whose key equals `key`.
        find_last,
        /// Returns the index of the last element whose key is `<=` `key`.
        find_floor,
        /// Returns the index of the first element whose key is `>=` `key`.
        find_ceil,
        /// Returns the index of the first element whose key equals `key` by
        /// linear scan.
        find_linear,
        /// Returns the index of the first element whose key equals `key` by
        /// linear scan.
        find_linear_first,
        /// Returns the index of the last element whose key equals `key` by
        /// linear scan.
        find_linear_last,
    }

    /// Returns the index of any element in `range` whose key equals `key`.
    #[must_use]
    pub fn find_in<R>(&self, key: &K, range: R) -> Option<usize>
    where
        R: RangeBounds<usize>,
    {
        let (elements, low, high) = self.window(&range)?;
        if self.is_sorted() {
            search::binary_find(elements, low, high, self.probe(key))
        } else {
            search::linear_find_first(elements, low, high, self.probe(key))
        }
    }

    /// Returns the index of the first element in `range` whose key equals `key`.
    #[must_use]
    pub fn find_first_in<R>(&self, key: &K, range: R) -> Option<usize>
    where
        R: RangeBounds<usize>,
    {
        let (elements, low, high) = self.window(&range)?;
        if self.is_sorted() {
            search::binary_find_first(elements, low, high, self.probe(key))
        } else {
            search::linear_find_first(elements, low, high, self.probe(key))
        }
    }

    /// Returns the index of the last element in `range` whose key equals `key`.
    #[must_use]
    pub fn find_last_in<R>(&self, key: &K, range: R) -> Option<usize>
    where
        R: RangeBounds<usize>,
    {
        let (elements, low, high) = self.window(&range)?;
        if self.is_sorted() {
            search::binary_find_last(elements, low, high, self.probe(key))
        } else {
            search::linear_find_last(elements, low, high, self.probe(key))
        }
    }

    /// Returns the index of the last element in `range` whose key is `<=` `key`.
    #[must_use]
    pub fn find_floor_in<R>(&self, key: &K, range: R) -> Option<usize>
    where
        R: RangeBounds<usize>,
    {
        let (elements, low, high) = self.window(&range)?;
        if self.is_sorted() {
            search::binary_floor(elements, low, high, self.probe(key))
        } else {
            search::linear_floor(elements, low, high, self.probe(key), self.compare())
        }
    }

    /// Returns the index of the first element in `range` whose key is `>=` `key`.
    #[must_use]
    pub fn find_ceil_in<R>(&self, key: &K, range: R) -> Option<usize>
    where
        R: RangeBounds<usize>,
    {
        let (elements, low, high) = self.window(&range)?;
        if self.is_sorted() {
            search::binary_ceil(elements, low, high, self.probe(key))
        } else {
            search::linear_ceil(elements, low, high, self.probe(key), self.compare())
        }
    }

    /// Returns the index of the first element in `range` whose key equals
    /// `key`, scanning linearly whatever the state.
    #[must_use]
    pub fn find_linear_in<R>(&self, key: &K, range: R) -> Option<usize>
    where
        R: RangeBounds<usize>,
    {
        self.find_linear_first_in(key, range)
    }

    /// Returns the index of the first element in `range` whose key equals
    /// `key`, scanning linearly whatever the state.
    #[must_use]
    pub fn find_linear_first_in<R>(&self, key: &K, range: R) -> Option<usize>
    where
        R: RangeBounds<usize>,
    {
        let (elements, low, high) = self.window(&range)?;
        search::linear_find_first(elements, low, high, self.probe(key))
    }

    /// Returns the index of the last element in `range` whose key equals
    /// `key`, scanning linearly whatever the state.
    #[must_use]
    pub fn find_linear_last_in<R>(&self, key: &K, range: R) -> Option<usize>
    where
        R: RangeBounds<usize>,
    {
        let (elements, low, high) = self.window(&range)?;
        search::linear_find_last(elements, low, high, self.probe(key))
    }

    fn is_sorted(&self) -> bool {
        self.vector.state().is_sorted()
    }

    fn window<R>(&self, range: &R) -> Option<(&'a [T], usize, usize)>
    where
        R: RangeBounds<usize>,
    {
        let elements = self.vector.as_slice();
        let (low, high) = search::resolve_window(elements.len(), range)?;
        Some((elements, low, high))
    }

    fn probe<'k>(&'k self, key: &'k K) -> impl Fn(&T) -> Ordering + 'k {
        move |element: &T| (self.projection)(element).cmp(key)
    }

    fn compare(&self) -> impl Fn(&T, &T) -> Ordering + '_ {
        move |left: &T, right: &T| (self.projection)(left).cmp((self.projection)(right))
    }
}

impl<T, K: ?Sized, F> fmt::Debug for KeyedView<'_, T, K, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("KeyedView")
            .field("len", &self.vector.len())
            .field("state", &self.vector.state())
            .finish_non_exhaustive()
    }
}
