//! Route tree: nested nodes grouping routes by shared path prefixes.
//!
//! Built once from the static route list at startup, read-only afterwards.
//! Key order at every level is first-occurrence order of the processed
//! routes, since sidebar rendering relies on display order.

use indexmap::IndexMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::instrument;

use crate::domain::descriptor::RouteDescriptor;
use crate::domain::error::TreeResult;

/// One node in the route tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteNode {
    /// Descriptor whose path terminates exactly here, if any.
    /// Intermediate path components carry no descriptor.
    pub route: Option<RouteDescriptor>,
    /// Child nodes keyed by their next path segment, in first-seen order
    pub children: IndexMap<String, RouteNode>,
}

impl RouteNode {
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Longest chain from this node down to a leaf, counting this node.
    pub fn depth(&self) -> usize {
        1 + self
            .children
            .values()
            .map(RouteNode::depth)
            .max()
            .unwrap_or(0)
    }

    /// Depth-first pre-order walk over this node and all its descendants.
    ///
    /// Yields the node itself first, then its subtree in declaration order.
    #[instrument(level = "trace", skip(self))]
    pub fn iter(&self) -> RouteNodeIter<'_> {
        RouteNodeIter { stack: vec![self] }
    }
}

/// Nested tree of routes keyed by top-level path segment.
///
/// Not itself a node: the root container has no `route`/`children` wrapper.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteTree {
    roots: IndexMap<String, RouteNode>,
}

impl RouteTree {
    /// Builds a tree from descriptors, in declaration order.
    ///
    /// Each path is trimmed of leading/trailing slashes and walked segment
    /// by segment, inserting empty nodes for absent segments. The descriptor
    /// is attached to the node where its path terminates, overwriting any
    /// previous descriptor there but never touching existing children: a
    /// path may be both a terminal page and an ancestor of deeper routes,
    /// in either insertion order.
    #[instrument(level = "debug", skip(routes))]
    pub fn build<I>(routes: I) -> Self
    where
        I: IntoIterator<Item = RouteDescriptor>,
    {
        let mut roots: IndexMap<String, RouteNode> = IndexMap::new();
        for descriptor in routes {
            let segments: Vec<String> = descriptor
                .segments()
                .into_iter()
                .map(str::to_owned)
                .collect();
            // split always yields at least one segment
            let last = segments.len() - 1;
            let mut descriptor = Some(descriptor);
            let mut level = &mut roots;
            for (i, segment) in segments.into_iter().enumerate() {
                let node = level.entry(segment).or_default();
                if i == last {
                    node.route = descriptor.take();
                }
                level = &mut node.children;
            }
        }
        Self { roots }
    }

    /// Parses loose JSON objects into descriptors and builds the tree.
    ///
    /// Fails fast on the first object lacking a `route` key.
    #[instrument(level = "debug", skip(values))]
    pub fn from_values<I>(values: I) -> TreeResult<Self>
    where
        I: IntoIterator<Item = Value>,
    {
        let descriptors: Vec<RouteDescriptor> = values
            .into_iter()
            .map(RouteDescriptor::from_value)
            .collect::<TreeResult<_>>()?;
        Ok(Self::build(descriptors))
    }

    /// Top-level nodes keyed by their first path segment.
    pub fn roots(&self) -> &IndexMap<String, RouteNode> {
        &self.roots
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Total number of nodes in the tree.
    pub fn node_count(&self) -> usize {
        self.iter().count()
    }

    /// Looks up the node for a slash-delimited path.
    ///
    /// Uses the same normalization as [`RouteTree::build`], so `/a/b/`,
    /// `a/b` and `/a/b` address the same node.
    #[instrument(level = "trace", skip(self))]
    pub fn find(&self, path: &str) -> Option<&RouteNode> {
        let mut segments = path.trim_matches('/').split('/');
        let mut node = self.roots.get(segments.next()?)?;
        for segment in segments {
            node = node.children.get(segment)?;
        }
        Some(node)
    }

    /// Depth-first pre-order walk over every node in the tree.
    ///
    /// Yields `(segment, node)` pairs in construction order, left to right
    /// at each level. Each node is yielded exactly once; the walk is a pure
    /// function of the tree and can be restarted at will.
    #[instrument(level = "trace", skip(self))]
    pub fn iter(&self) -> RouteTreeIter<'_> {
        RouteTreeIter::new(&self.roots)
    }

    /// All attached descriptors in traversal (display) order.
    pub fn routes(&self) -> impl Iterator<Item = &RouteDescriptor> {
        self.iter().filter_map(|(_, node)| node.route.as_ref())
    }

    /// Longest root-to-leaf chain; 0 for the empty tree.
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        self.roots.values().map(RouteNode::depth).max().unwrap_or(0)
    }

    /// Collects the full paths of all leaf nodes, in traversal order.
    ///
    /// Paths are slash-joined from the root; the empty-segment node (the
    /// `/` route) renders as `/`.
    #[instrument(level = "debug", skip(self))]
    pub fn leaf_paths(&self) -> Vec<String> {
        let mut leaves = Vec::new();
        let mut prefix = Vec::new();
        for (segment, node) in &self.roots {
            collect_leaf_paths(segment, node, &mut prefix, &mut leaves);
        }
        leaves
    }
}

fn collect_leaf_paths<'a>(
    segment: &'a str,
    node: &'a RouteNode,
    prefix: &mut Vec<&'a str>,
    leaves: &mut Vec<String>,
) {
    prefix.push(segment);
    if node.children.is_empty() {
        leaves.push(format!("/{}", prefix.iter().join("/")));
    } else {
        for (seg, child) in &node.children {
            collect_leaf_paths(seg, child, prefix, leaves);
        }
    }
    prefix.pop();
}

pub struct RouteTreeIter<'a> {
    stack: Vec<(&'a str, &'a RouteNode)>,
}

impl<'a> RouteTreeIter<'a> {
    fn new(roots: &'a IndexMap<String, RouteNode>) -> Self {
        // Push in reverse for left-to-right traversal
        let stack = roots
            .iter()
            .rev()
            .map(|(segment, node)| (segment.as_str(), node))
            .collect();
        Self { stack }
    }
}

impl<'a> Iterator for RouteTreeIter<'a> {
    type Item = (&'a str, &'a RouteNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (segment, node) = self.stack.pop()?;
        for (seg, child) in node.children.iter().rev() {
            self.stack.push((seg.as_str(), child));
        }
        Some((segment, node))
    }
}

pub struct RouteNodeIter<'a> {
    stack: Vec<&'a RouteNode>,
}

impl<'a> Iterator for RouteNodeIter<'a> {
    type Item = &'a RouteNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        for child in node.children.values().rev() {
            self.stack.push(child);
        }
        Some(node)
    }
}
