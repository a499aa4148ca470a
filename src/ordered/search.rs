//! Search primitives over slices.
//!
//! Every function here works on an inclusive window `[low, high]` of a slice
//! and compares elements through a `probe` that returns the ordering of an
//! element relative to the searched value (`Ordering::Less` when the element
//! is smaller). Keeping the comparison behind a closure lets the container and
//! the keyed view share one implementation.
//!
//! The `binary_*` functions require the window to be sorted with respect to
//! the probe. The `linear_*` functions make no assumption about order.
//!
//! [`binary_find`] compares both window ends on every step. [`binary_floor`]
//! and [`binary_ceil`] compare the ends once, up front, to answer the
//! out-of-window cases directly, then bisect and walk the run of equal
//! elements they land in.
//!
//! Callers guarantee `low <= high < elements.len()`; [`resolve_window`] turns a
//! caller-facing range into such a window.

use std::cmp::Ordering;
use std::ops::{Bound, RangeBounds};

/// Converts a range into an inclusive window of a container of length `len`.
///
/// The end bound is clamped to the last valid index, so `..` and any range
/// reaching past the end mean "up to the last element". Returns `None` for an
/// empty container or an empty window.
pub(crate) fn resolve_window<R>(len: usize, range: &R) -> Option<(usize, usize)>
where
    R: RangeBounds<usize>,
{
    let last = len.checked_sub(1)?;
    let low = match range.start_bound() {
        Bound::Included(&start) => start,
        Bound::Excluded(&start) => start.checked_add(1)?,
        Bound::Unbounded => 0,
    };
    let high = match range.end_bound() {
        Bound::Included(&end) => end.min(last),
        Bound::Excluded(&end) => end.checked_sub(1)?.min(last),
        Bound::Unbounded => last,
    };
    (low <= high).then_some((low, high))
}

/// Returns the index of any element of the window equal to the searched value.
///
/// At each step the midpoint and both ends of the window are compared before
/// the window is narrowed, so runs of equal elements touching either end are
/// found without further halving.
pub(crate) fn binary_find<T, F>(elements: &[T], low: usize, high: usize, probe: F) -> Option<usize>
where
    F: Fn(&T) -> Ordering,
{
    let (mut low, mut high) = (low, high);
    while low <= high {
        let middle = low + (high - low) / 2;
        let middle_ordering = probe(&elements[middle]);
        if middle_ordering == Ordering::Equal {
            return Some(middle);
        }
        if probe(&elements[low]) == Ordering::Equal {
            return Some(low);
        }
        if probe(&elements[high]) == Ordering::Equal {
            return Some(high);
        }
        if middle_ordering == Ordering::Less {
            low = middle + 1;
        } else {
            if middle == low {
                return None;
            }
            high = middle - 1;
        }
    }
    None
}

/// Returns the leftmost index of the window equal to the searched value.
pub(crate) fn binary_find_first<T, F>(
    elements: &[T],
    low: usize,
    high: usize,
    probe: F,
) -> Option<usize>
where
    F: Fn(&T) -> Ordering,
{
    let mut position = binary_find(elements, low, high, &probe)?;
    while position > low && probe(&elements[position - 1]) == Ordering::Equal {
        position -= 1;
    }
    Some(position)
}

/// Returns the rightmost index of the window equal to the searched value.
pub(crate) fn binary_find_last<T, F>(
    elements: &[T],
    low: usize,
    high: usize,
    probe: F,
) -> Option<usize>
where
    F: Fn(&T) -> Ordering,
{
    let mut position = binary_find(elements, low, high, &probe)?;
    while position < high && probe(&elements[position + 1]) == Ordering::Equal {
        position += 1;
    }
    Some(position)
}

/// Returns the rightmost index of the window whose element is `<=` the
/// searched value, or `None` if every element is greater.
///
/// The window ends are compared once before bisecting.
pub(crate) fn binary_floor<T, F>(elements: &[T], low: usize, high: usize, probe: F) -> Option<usize>
where
    F: Fn(&T) -> Ordering,
{
    if probe(&elements[low]) == Ordering::Greater {
        return None;
    }
    if probe(&elements[high]) == Ordering::Less {
        return Some(high);
    }

    // Everything left of `first` is smaller than the value, everything from `bound` on is greater.
    let (mut first, mut bound) = (low, high + 1);
    while first < bound {
        let middle = first + (bound - first) / 2;
        match probe(&elements[middle]) {
            Ordering::Less => first = middle + 1,
            Ordering::Greater => bound = middle,
            Ordering::Equal => {
                let mut position = middle;
                while position + 1 < bound && probe(&elements[position + 1]) == Ordering::Equal {
                    position += 1;
                }
                return Some(position);
            }
        }
    }
    first.checked_sub(1).filter(|&position| position >= low)
}

/// Returns the leftmost index of the window whose element is `>=` the
/// searched value, or `None` if every element is smaller.
///
/// The window ends are compared once before bisecting.
pub(crate) fn binary_ceil<T, F>(elements: &[T], low: usize, high: usize, probe: F) -> Option<usize>
where
    F: Fn(&T) -> Ordering,
{
    if probe(&elements[high]) == Ordering::Less {
        return None;
    }
    if probe(&elements[low]) == Ordering::Greater {
        return Some(low);
    }

    // Everything left of `first` is smaller than the value, everything from `bound` on is greater.
    let (mut first, mut bound) = (low, high + 1);
    while first < bound {
        let middle = first + (bound - first) / 2;
        match probe(&elements[middle]) {
            Ordering::Less => first = middle + 1,
            Ordering::Greater => bound = middle,
            Ordering::Equal => {
                let mut position = middle;
                while position > first && probe(&elements[position - 1]) == Ordering::Equal {
                    position -= 1;
                }
                return Some(position);
            }
        }
    }
    (first <= high).then_some(first)
}

/// Returns the first index of the window equal to the searched value.
pub(crate) fn linear_find_first<T, F>(
    elements: &[T],
    low: usize,
    high: usize,
    probe: F,
) -> Option<usize>
where
    F: Fn(&T) -> Ordering,
{
    elements[low..=high]
        .iter()
        .position(|element| probe(element) == Ordering::Equal)
        .map(|offset| low + offset)
}

/// Returns the last index of the window equal to the searched value.
pub(crate) fn linear_find_last<T, F>(
    elements: &[T],
    low: usize,
    high: usize,
    probe: F,
) -> Option<usize>
where
    F: Fn(&T) -> Ordering,
{
    elements[low..=high]
        .iter()
        .rposition(|element| probe(element) == Ordering::Equal)
        .map(|offset| low + offset)
}

/// Returns the position of the greatest element `<=` the searched value in an
/// unordered window, the rightmost one on ties.
///
/// `compare` orders two elements the same way `probe` orders an element
/// against the searched value.
pub(crate) fn linear_floor<T, F, C>(
    elements: &[T],
    low: usize,
    high: usize,
    probe: F,
    compare: C,
) -> Option<usize>
where
    F: Fn(&T) -> Ordering,
    C: Fn(&T, &T) -> Ordering,
{
    let mut best: Option<usize> = None;
    for position in low..=high {
        if probe(&elements[position]) == Ordering::Greater {
            continue;
        }
        best = match best {
            Some(current) if compare(&elements[position], &elements[current]) == Ordering::Less => {
                Some(current)
            }
            _ => Some(position),
        };
    }
    best
}

/// Returns the position of the least element `>=` the searched value in an
/// unordered window, the leftmost one on ties.
pub(crate) fn linear_ceil<T, F, C>(
    elements: &[T],
    low: usize,
    high: usize,
    probe: F,
    compare: C,
) -> Option<usize>
where
    F: Fn(&T) -> Ordering,
    C: Fn(&T, &T) -> Ordering,
{
    let mut best: Option<usize> = None;
    for position in low..=high {
        if probe(&elements[position]) == Ordering::Less {
            continue;
        }
        best = match best {
            Some(current)
                if compare(&elements[position], &elements[current]) != Ordering::Less =>
            {
                Some(current)
            }
            _ => Some(position),
        };
    }
    best
}
