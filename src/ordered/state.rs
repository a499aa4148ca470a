//! Order knowledge tracked by an [`OrderedVec`](super::OrderedVec).
//!
//! # State Transitions
//!
//! ```text
//!                 mutable access at i
//!     Sorted ─────────────────────────────► DirtyAt(i)
//!       ▲                                      │
//!       │ repair (local shift)                 │ mutable access at j != i,
//!       │                                      │ bulk access, push while dirty
//!       │                                      ▼
//!       └──────────── repair (full sort) ◄─ DirtyUnknown
//! ```

use std::ops::Range;

/// What the container knows about the order of its storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OrderState {
    /// Every adjacent pair is non-decreasing; binary search is valid.
    #[default]
    Sorted,
    /// Only the element at this index may be out of place relative to its
    /// neighbours; every other adjacent pair is still ordered.
    DirtyAt(usize),
    /// Any number of elements may be out of place; only a full sort restores
    /// order.
    DirtyUnknown,
}

impl OrderState {
    /// Returns `true` if the storage is known to be sorted.
    #[inline]
    #[must_use]
    pub const fn is_sorted(self) -> bool {
        matches!(self, Self::Sorted)
    }

    /// Returns `true` if the storage may be out of order.
    #[inline]
    #[must_use]
    pub const fn is_dirty(self) -> bool {
        !self.is_sorted()
    }

    /// The state after mutable access to the single element at `index`.
    ///
    /// Only one suspect index is remembered: a second, different index
    /// degrades the knowledge to [`OrderState::DirtyUnknown`].
    #[inline]
    #[must_use]
    pub const fn touched(self, index: usize) -> Self {
        match self {
            Self::Sorted => Self::DirtyAt(index),
            Self::DirtyAt(suspect) if suspect == index => self,
            Self::DirtyAt(_) | Self::DirtyUnknown => Self::DirtyUnknown,
        }
    }

    /// The state after `removed` positions were erased from the storage.
    ///
    /// Erasing the single suspect element leaves the rest ordered, erasing
    /// elements before it shifts the suspect index down.
    #[must_use]
    pub(crate) const fn erased(self, removed: &Range<usize>, remaining: usize) -> Self {
        if remaining == 0 {
            return Self::Sorted;
        }
        match self {
            Self::DirtyAt(suspect) if suspect >= removed.start && suspect < removed.end => {
                Self::Sorted
            }
            Self::DirtyAt(suspect) if suspect >= removed.end => {
                Self::DirtyAt(suspect - (removed.end - removed.start))
            }
            other => other,
        }
    }
}
