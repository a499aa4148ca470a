//! Ordered vector with lazy repair.
//!
//! This module provides [`OrderedVec`], a vector that keeps its elements in
//! ascending order while still handing out `&mut T` to individual elements.
//!
//! # Overview
//!
//! Mutable access may break the order, so the container tracks how much it
//! still knows about its own order in an [`OrderState`]:
//!
//! - [`OrderState::Sorted`]: binary search is valid.
//! - [`OrderState::DirtyAt`]: a single element may be misplaced and can be
//!   moved back into place with one binary search and one shift.
//! - [`OrderState::DirtyUnknown`]: order is unknown, a full sort is needed.
//!
//! [`OrderedVec::repair`] restores the sorted state. By default every mutating
//! operation repairs a dirty container before it runs; [`Config`] switches this
//! off per instance, and [`OrderedVec::suspend_autorepair`] defers it while a
//! batch of mutations is applied.
//!
//! Searches never return a wrong answer: when the container is dirty they fall
//! back to a linear scan.
//!
//! # Components
//!
//! - [`OrderedVec`]: storage, state tracking, repair and the `find_*` family
//! - [`Cursor`] / [`CursorMut`]: position-based cursors
//! - [`KeyedView`]: searches by a projected key instead of a whole element
//!
//! # Examples
//!
//! ```rust
//! use ordvec::ordered::{OrderState, OrderedVec};
//!
//! let mut vector = OrderedVec::from(vec![9, 1, 7, 3, 5]);
//! assert_eq!(vector.as_slice(), &[1, 3, 5, 7, 9]);
//!
//! vector[2] = 20;
//! assert_eq!(vector.state(), OrderState::DirtyAt(2));
//!
//! vector.repair();
//! assert_eq!(vector.as_slice(), &[1, 3, 7, 9, 20]);
//! assert_eq!(vector.find(&20), Some(4));
//! ```

/// Generates whole-container search methods delegating to their `_in` forms.
macro_rules! whole_range_search {
    ($argument:ident: $argument_type:ty; $($(#[$meta:meta])* $name:ident),* $(,)?) => {
        paste::paste! {
            $(
                $(#[$meta])*
                #[inline]
                #[must_use]
                pub fn $name(&self, $argument: $argument_type) -> Option<usize> {
                    self.[<$name _in>]($argument, ..)
                }
            )*
        }
    };
}

mod config;
mod cursor;
mod error;
mod keyed;
mod search;
mod state;
mod vector;

pub use config::{Config, Tracking};
pub use cursor::{Cursor, CursorMut, IntoIter, Iter};
pub use error::OrderedVecError;
pub use keyed::KeyedView;
pub use state::OrderState;
pub use vector::OrderedVec;
