//! # ordvec
//!
//! A sorted vector that hands out mutable access to its elements and repairs
//! its order lazily.
//!
//! ## Overview
//!
//! Keeping a `Vec` sorted usually means giving up `&mut T`: once an element is
//! changed in place, nothing guarantees it still sits where binary search
//! expects it. [`OrderedVec`](ordered::OrderedVec) allows the mutation and
//! records what it means for the order:
//!
//! - **Single-element repair**: a container with one suspect element is
//!   repaired with one binary search and one shift, not a full sort
//! - **Correct searches in every state**: searches on a dirty container fall
//!   back to a linear scan
//! - **Configurable repair**: automatic repair can be disabled per instance
//!   or suspended around a batch of mutations
//!
//! ## Example
//!
//! ```rust
//! use ordvec::prelude::*;
//!
//! let mut scores = OrderedVec::from(vec![40, 10, 30, 20]);
//! assert_eq!(scores.as_slice(), &[10, 20, 30, 40]);
//!
//! scores[0] = 35;
//! assert_eq!(scores.find(&35), Some(0));
//!
//! scores.push(25);
//! assert_eq!(scores.as_slice(), &[20, 25, 30, 35, 40]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use ordvec::prelude::*;
/// ```
pub mod prelude {
    pub use crate::ordered::*;
}

pub mod ordered;
