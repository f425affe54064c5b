//! Tests for RouteTree construction

use rstest::rstest;
use serde_json::json;

use navtree::util::testing;
use navtree::{DomainError, RouteDescriptor, RouteTree};

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

fn portfolio_routes() -> Vec<RouteDescriptor> {
    vec![
        RouteDescriptor::new("/").with_meta("title", "Home"),
        RouteDescriptor::new("/blog").with_meta("title", "Blog"),
        RouteDescriptor::new("/blog/post").with_meta("title", "Post"),
        RouteDescriptor::new("/projects").with_meta("title", "Projects"),
    ]
}

#[test]
fn given_flat_routes_when_building_then_nests_by_shared_prefix() {
    // Arrange
    let routes = portfolio_routes();

    // Act
    let tree = RouteTree::build(routes);

    // Assert
    let blog = tree.roots().get("blog").unwrap();
    assert_eq!(blog.route.as_ref().unwrap().meta["title"], json!("Blog"));
    let post = blog.children.get("post").unwrap();
    assert_eq!(post.route.as_ref().unwrap().meta["title"], json!("Post"));
    assert!(post.is_leaf());
}

#[test]
fn given_root_route_when_building_then_maps_to_empty_segment() {
    // The "/" route trims to the empty segment and gets its own node.
    let tree = RouteTree::build(portfolio_routes());

    let home = tree.roots().get("").unwrap();
    assert_eq!(home.route.as_ref().unwrap().meta["title"], json!("Home"));
}

#[test]
fn given_intermediate_segment_when_building_then_node_has_no_descriptor() {
    let tree = RouteTree::build([RouteDescriptor::new("/blog/posts/1")]);

    let blog = tree.roots().get("blog").unwrap();
    assert!(blog.route.is_none());
    assert!(blog.children.get("posts").unwrap().route.is_none());
    assert!(blog.children["posts"].children["1"].route.is_some());
}

#[rstest]
#[case(vec!["/a", "/a/b"])]
#[case(vec!["/a/b", "/a"])]
fn given_ancestor_and_descendant_when_building_in_either_order_then_neither_is_lost(
    #[case] routes: Vec<&str>,
) {
    // Arrange
    let descriptors: Vec<_> = routes
        .iter()
        .map(|r| RouteDescriptor::new(*r).with_meta("title", *r))
        .collect();

    // Act
    let tree = RouteTree::build(descriptors);

    // Assert: node "a" keeps both its own descriptor and its child
    let a = tree.roots().get("a").unwrap();
    assert_eq!(a.route.as_ref().unwrap().route, "/a");
    let b = a.children.get("b").unwrap();
    assert_eq!(b.route.as_ref().unwrap().route, "/a/b");
}

#[test]
fn given_trailing_and_missing_slashes_when_building_then_trees_are_identical() {
    let with_slashes = RouteTree::build([RouteDescriptor::new("/x/y/")]);
    let without_slashes = RouteTree::build([RouteDescriptor::new("x/y")]);

    assert_eq!(with_slashes, without_slashes);
}

#[test]
fn given_same_route_list_when_building_twice_then_trees_are_equal() {
    let first = RouteTree::build(portfolio_routes());
    let second = RouteTree::build(portfolio_routes());

    assert_eq!(first, second);
}

#[test]
fn given_duplicate_terminal_route_when_building_then_later_descriptor_wins() {
    let tree = RouteTree::build([
        RouteDescriptor::new("/about").with_meta("title", "Old"),
        RouteDescriptor::new("/about").with_meta("title", "New"),
    ]);

    let about = tree.roots().get("about").unwrap();
    assert_eq!(about.route.as_ref().unwrap().meta["title"], json!("New"));
}

#[test]
fn given_routes_when_building_then_top_level_order_is_first_seen() {
    let tree = RouteTree::build([
        RouteDescriptor::new("/projects"),
        RouteDescriptor::new("/blog/post"),
        RouteDescriptor::new("/contact"),
        RouteDescriptor::new("/blog"),
    ]);

    let keys: Vec<_> = tree.roots().keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["projects", "blog", "contact"]);
}

#[test]
fn given_json_values_when_building_then_meta_is_passed_through() {
    // Arrange: the shape the page-routing configuration declares
    let values = vec![
        json!({"route": "/", "title": "Home", "image": "/reflex.png"}),
        json!({"route": "/contact", "title": "Contact", "icon": "mail"}),
    ];

    // Act
    let tree = RouteTree::from_values(values).unwrap();

    // Assert
    let contact = tree.find("/contact").unwrap();
    let descriptor = contact.route.as_ref().unwrap();
    assert_eq!(descriptor.meta["title"], json!("Contact"));
    assert_eq!(descriptor.meta["icon"], json!("mail"));
}

#[test]
fn given_value_without_route_when_building_then_fails_with_missing_field() {
    let values = vec![
        json!({"route": "/", "title": "Home"}),
        json!({"title": "Orphan"}),
    ];

    let result = RouteTree::from_values(values);

    assert!(matches!(result, Err(DomainError::MissingField(ref f)) if f == "route"));
}

#[test]
fn given_no_routes_when_building_then_tree_is_empty() {
    let tree = RouteTree::build(Vec::<RouteDescriptor>::new());

    assert!(tree.is_empty());
    assert_eq!(tree.depth(), 0);
    assert_eq!(tree.node_count(), 0);
}

#[test]
fn given_built_tree_when_serializing_then_structure_and_meta_survive() {
    let tree = RouteTree::build(portfolio_routes());

    let serialized = serde_json::to_string(&tree).unwrap();
    let restored: RouteTree = serde_json::from_str(&serialized).unwrap();

    assert_eq!(restored, tree);
    assert_eq!(
        restored.find("/blog/post").unwrap().route.as_ref().unwrap().meta["title"],
        json!("Post")
    );
}
