//! Error types for ordered vector access.
//!
//! Searches never fail: a missing element is reported as `None`. The only
//! recoverable failure is a checked positional access past the end of the
//! container.

use std::fmt::{self, Display, Formatter};

/// Represents errors raised by checked positional operations on an
/// [`OrderedVec`](super::OrderedVec).
///
/// # Examples
///
/// ```rust
/// use ordvec::ordered::{OrderedVec, OrderedVecError};
///
/// let vector: OrderedVec<i32> = OrderedVec::new();
/// assert_eq!(
///     vector.at(0),
///     Err(OrderedVecError::OutOfRange { index: 0, len: 0 })
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderedVecError {
    /// The requested position is not a valid index of the container.
    OutOfRange {
        /// The rejected position.
        index: usize,
        /// The length of the container at the time of the access.
        len: usize,
    },
}

impl Display for OrderedVecError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, len } => write!(
                formatter,
                "index {index} is out of range for ordered vector of length {len}"
            ),
        }
    }
}

impl std::error::Error for OrderedVecError {}
