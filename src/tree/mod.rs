mod error;
mod moves;

pub use error::{TreeError, TreeResult};
pub use moves::{move_node, MoveOutcome};

use crate::models::{NodeId, TreeNode};

/// Left padding of a header row, in px.
pub fn indent_px(level: usize, node_padding: usize) -> usize {
    level.saturating_mul(node_padding)
}

/// Depth-first search; first match in document order wins.
pub fn find_node<'a>(tree: &'a [TreeNode], id: &NodeId) -> Option<&'a TreeNode> {
    for node in tree {
        if &node.id == id {
            return Some(node);
        }
        if let Some(found) = find_node(node.children(), id) {
            return Some(found);
        }
    }
    None
}

pub fn contains_node(tree: &[TreeNode], id: &NodeId) -> bool {
    find_node(tree, id).is_some()
}

pub fn node_count(tree: &[TreeNode]) -> usize {
    tree.iter().map(|n| 1 + node_count(n.children())).sum()
}

/// Whether `id` sits somewhere below `ancestor_id`.
///
/// Moves don't consult this; it only feeds a warning when a drop would
/// detach the dragged subtree.
pub fn is_descendant(tree: &[TreeNode], ancestor_id: &NodeId, id: &NodeId) -> bool {
    find_node(tree, ancestor_id).is_some_and(|a| contains_node(a.children(), id))
}

pub fn parse_tree_json(json: &str) -> TreeResult<Vec<TreeNode>> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<TreeNode> {
        vec![
            TreeNode::branch(
                "a",
                "A",
                vec![
                    TreeNode::leaf("a1", "A1"),
                    TreeNode::branch("a2", "A2", vec![TreeNode::leaf("a2x", "A2x")]),
                ],
            ),
            TreeNode::leaf("b", "B"),
        ]
    }

    #[test]
    fn test_indent_px_scales_with_level() {
        assert_eq!(indent_px(0, 12), 0);
        assert_eq!(indent_px(1, 12), 12);
        assert_eq!(indent_px(3, 20), 60);
    }

    #[test]
    fn test_find_node_nested() {
        let tree = sample();
        let n = find_node(&tree, &NodeId::from("a2x")).expect("a2x should exist");
        assert_eq!(n.name, "A2x");
        assert!(find_node(&tree, &NodeId::from("zzz")).is_none());
    }

    #[test]
    fn test_node_count() {
        assert_eq!(node_count(&sample()), 5);
        assert_eq!(node_count(&[]), 0);
    }

    #[test]
    fn test_is_descendant() {
        let tree = sample();
        assert!(is_descendant(&tree, &"a".into(), &"a2x".into()));
        assert!(is_descendant(&tree, &"a2".into(), &"a2x".into()));
        assert!(!is_descendant(&tree, &"a2x".into(), &"a".into()));
        assert!(!is_descendant(&tree, &"a".into(), &"a".into()));
        assert!(!is_descendant(&tree, &"b".into(), &"a1".into()));
    }

    #[test]
    fn test_parse_tree_json_rejects_garbage() {
        let err = parse_tree_json("{not json").expect_err("should fail");
        assert!(matches!(err, TreeError::InvalidTree(_)));

        let tree = parse_tree_json(r#"[{"id":1,"name":"one","children":[{"id":2,"name":"two"}]}]"#)
            .expect("should parse");
        assert_eq!(node_count(&tree), 2);
    }
}
