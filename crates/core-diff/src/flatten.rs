//! Preorder flattening with role-trail paths.

use core_grammar::Node;
use core_hash::{HashOptions, hash_node_shallow};

use crate::DiffOptions;

/// One node of a flattened tree: the node itself, its depth, a role trail
/// like `PAGE/FORM[1]/INPUT[0]` (indices are input sibling positions), and
/// its shallow hash under the diff's signal options.
#[derive(Debug, Clone)]
pub struct FlatNode<'a> {
    pub node: &'a Node,
    pub depth: usize,
    pub path: String,
    pub hash: String,
}

/// Flatten a tree in preorder.
pub fn flatten<'a>(root: &'a Node, opts: &DiffOptions) -> Vec<FlatNode<'a>> {
    let hash_opts = HashOptions {
        include_text: opts.include_text,
        include_name: opts.include_name,
        include_z: false,
    };
    let mut out = Vec::new();
    walk(root, 0, root.role.as_tag().to_string(), &hash_opts, &mut out);
    out
}

fn walk<'a>(
    node: &'a Node,
    depth: usize,
    path: String,
    opts: &HashOptions,
    out: &mut Vec<FlatNode<'a>>,
) {
    out.push(FlatNode {
        node,
        depth,
        hash: hash_node_shallow(node, opts),
        path: path.clone(),
    });
    for (i, child) in node.children().iter().enumerate() {
        walk(
            child,
            depth + 1,
            format!("{path}/{}[{i}]", child.role.as_tag()),
            opts,
            out,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_grammar::{BBox01, Role};

    #[test]
    fn preorder_with_role_trails() {
        let mut form = Node::new(Role::Form, BBox01::new(0.3, 0.25, 0.4, 0.4), false, true);
        form.children = Some(vec![
            Node::new(Role::Input, BBox01::new(0.35, 0.38, 0.3, 0.05), true, true),
            Node::new(Role::Button, BBox01::new(0.35, 0.52, 0.3, 0.06), true, true),
        ]);
        let mut page = Node::new(Role::Page, BBox01::new(0.0, 0.0, 1.0, 1.0), false, true);
        page.children = Some(vec![form]);

        let flat = flatten(&page, &DiffOptions::default());
        let paths: Vec<&str> = flat.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                "PAGE",
                "PAGE/FORM[0]",
                "PAGE/FORM[0]/INPUT[0]",
                "PAGE/FORM[0]/BUTTON[1]",
            ]
        );
        assert_eq!(flat[0].depth, 0);
        assert_eq!(flat[3].depth, 2);
        assert!(flat.iter().all(|f| f.hash.len() == 8));
    }
}
