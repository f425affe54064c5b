//! Domain layer: route descriptors and the tree built from them
//!
//! This layer is independent of external concerns (no I/O, no CLI).

pub mod descriptor;
pub mod error;
pub mod tree;

pub use descriptor::RouteDescriptor;
pub use error::{DomainError, TreeResult};
pub use tree::{RouteNode, RouteNodeIter, RouteTree, RouteTreeIter};
