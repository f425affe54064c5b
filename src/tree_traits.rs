/*
Workaround for error: https://doc.rust-lang.org/error_codes/E0116.html
Cannot define inherent `impl` for a type outside of the crate where the type is defined

define a trait that has the desired associated functions/types/constants and implement the trait for the type in question
 */
use termtree::Tree;

use crate::domain::{RouteNode, RouteTree};

pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl TreeNodeConvert for RouteTree {
    fn to_tree_string(&self) -> Tree<String> {
        let mut tree = Tree::new("/".to_string());
        for (segment, node) in self.roots() {
            tree.push(node_to_tree(segment, node));
        }
        tree
    }
}

fn node_to_tree(segment: &str, node: &RouteNode) -> Tree<String> {
    let leaves: Vec<_> = node
        .children
        .iter()
        .map(|(seg, child)| node_to_tree(seg, child))
        .collect();
    Tree::new(node_label(segment, node)).with_leaves(leaves)
}

// Label is the path segment, with the page title appended when one exists.
fn node_label(segment: &str, node: &RouteNode) -> String {
    let title = node
        .route
        .as_ref()
        .and_then(|r| r.meta.get("title"))
        .and_then(|v| v.as_str());
    match title {
        Some(title) => format!("{} ({})", segment, title),
        None => segment.to_string(),
    }
}
