use thiserror::Error;

use crate::union_find::Element;

/// Failures raised at the boundary of a [`DisjointSet`](crate::DisjointSet).
///
/// Every operation validates its inputs before touching state, so an error
/// never leaves the structure partially updated.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DisjointSetError {
    #[error("capacity must be at least 1")]
    InvalidCapacity,
    #[error("cannot allocate storage for {capacity} elements")]
    CapacityTooLarge { capacity: usize },
    #[error("element {element} is out of range for capacity {capacity}")]
    OutOfRange { element: Element, capacity: usize },
}

pub type Result<T, E = DisjointSetError> = std::result::Result<T, E>;
