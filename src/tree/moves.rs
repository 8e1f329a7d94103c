use super::{TreeError, TreeResult};
use crate::models::{NodeId, TreeNode};

#[derive(Clone, Debug, PartialEq)]
pub enum MoveOutcome {
    /// Dropped onto itself. Nothing to report.
    Unchanged,
    Moved(Vec<TreeNode>),
}

/// Re-parent `dragged_id` (with its subtree) as the last child of `target_id`.
///
/// The input is left untouched. Ancestry is not checked: dropping a node into
/// its own subtree detaches the target together with the dragged node, so the
/// whole subtree is gone from the result.
pub fn move_node(
    tree: &[TreeNode],
    dragged_id: &NodeId,
    target_id: &NodeId,
) -> TreeResult<MoveOutcome> {
    if dragged_id == target_id {
        return Ok(MoveOutcome::Unchanged);
    }

    let mut dragged = None;
    let mut next = remove_node(tree, dragged_id, &mut dragged);
    let Some(dragged) = dragged else {
        return Err(TreeError::NodeNotFound(dragged_id.clone()));
    };

    insert_node(&mut next, target_id, &dragged);
    Ok(MoveOutcome::Moved(next))
}

/// Copy of `nodes` without any node matching `id`. The last removed match is
/// left in `removed`.
fn remove_node(nodes: &[TreeNode], id: &NodeId, removed: &mut Option<TreeNode>) -> Vec<TreeNode> {
    let mut out = Vec::with_capacity(nodes.len());
    for node in nodes {
        if &node.id == id {
            *removed = Some(node.clone());
            continue;
        }

        out.push(TreeNode {
            id: node.id.clone(),
            name: node.name.clone(),
            children: node.children.as_deref().map(|c| remove_node(c, id, removed)),
            extra: node.extra.clone(),
        });
    }
    out
}

/// Appends `dragged` to every node matching `target_id`. A match's own
/// subtree is not searched further.
fn insert_node(nodes: &mut [TreeNode], target_id: &NodeId, dragged: &TreeNode) {
    for node in nodes {
        if &node.id == target_id {
            node.children.get_or_insert_with(Vec::new).push(dragged.clone());
        } else if let Some(children) = node.children.as_mut() {
            insert_node(children, target_id, dragged);
        }
    }
}
