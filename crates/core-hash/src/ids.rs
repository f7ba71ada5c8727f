//! Content-addressed node IDs.

use core_grammar::Node;

use crate::{HashOptions, node::hash_node_shallow};

/// ID for `node` under `parent_path`: the first 12 characters of the shallow
/// hash plus the rounded percent position, e.g. `/33291968_0_0/e9934d7f_30_25`.
pub fn generate_node_id(node: &Node, parent_path: &str) -> String {
    let shallow = hash_node_shallow(node, &HashOptions::default());
    let prefix: String = shallow.chars().take(12).collect();
    format!(
        "{}/{}_{}_{}",
        parent_path,
        prefix,
        (node.bbox.x() * 100.0).round() as i64,
        (node.bbox.y() * 100.0).round() as i64
    )
}

/// Walk the tree in preorder, writing each node's ID before recursing into
/// its children with that ID as the parent path. This is the only operation
/// in the system that mutates a capture; callers that share the tree must
/// treat it as owned by this call for its duration.
pub fn assign_node_ids(root: &mut Node) {
    assign_from(root, "");
}

fn assign_from(node: &mut Node, parent_path: &str) {
    let id = generate_node_id(node, parent_path);
    node.id = id.clone();
    if let Some(children) = node.children.as_mut() {
        for child in children {
            assign_from(child, &id);
        }
    }
}
