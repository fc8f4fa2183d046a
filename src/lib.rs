// Library exports for sizeforest
pub mod error;
pub mod union_find;

pub use error::{DisjointSetError, Result};
pub use union_find::{DisjointSet, Element};
