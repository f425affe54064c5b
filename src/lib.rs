//! Hierarchical navigation trees from flat route lists.
//!
//! A site declares its pages as a flat, ordered list of route descriptors
//! (`/`, `/blog`, `/blog/post`, ...). This crate groups them into a nested
//! tree by shared path prefixes and provides read-only traversals of it,
//! for sidebar/menu and sitemap generation.
//!
//! ```
//! use navtree::{RouteDescriptor, RouteTree};
//!
//! let tree = RouteTree::build([
//!     RouteDescriptor::new("/").with_meta("title", "Home"),
//!     RouteDescriptor::new("/blog").with_meta("title", "Blog"),
//!     RouteDescriptor::new("/blog/post").with_meta("title", "Post"),
//! ]);
//!
//! let post = tree.find("/blog/post").unwrap();
//! assert_eq!(post.route.as_ref().unwrap().meta["title"], "Post");
//! ```

pub mod domain;
pub mod tree_traits;
pub mod util;

pub use domain::{DomainError, RouteDescriptor, RouteNode, RouteTree, TreeResult};
pub use tree_traits::TreeNodeConvert;
