use crate::models::{NodeId, TreeNode};
use crate::tree::{is_descendant, move_node, MoveOutcome, TreeResult};
use leptos::logging::{log, warn};
use leptos::prelude::*;

/// Reported to `on_drag_end` after a successful move.
#[derive(Clone, Debug, PartialEq)]
pub struct DragEnd {
    pub tree: Vec<TreeNode>,
    pub dragged_id: NodeId,
    pub target_id: NodeId,
}

/// Drop resolution without any reactive state, so it can run anywhere.
pub fn resolve_drop(
    tree: &[TreeNode],
    dragged_id: &NodeId,
    target_id: &NodeId,
) -> TreeResult<Option<DragEnd>> {
    if is_descendant(tree, dragged_id, target_id) {
        warn!("dropping `{dragged_id}` into its own subtree at `{target_id}`; the subtree will be detached");
    }

    Ok(match move_node(tree, dragged_id, target_id)? {
        MoveOutcome::Unchanged => None,
        MoveOutcome::Moved(tree) => Some(DragEnd {
            tree,
            dragged_id: dragged_id.clone(),
            target_id: target_id.clone(),
        }),
    })
}

/// Shared by every row of one `TreeView`.
#[derive(Clone, Copy)]
pub struct TreeState {
    pub tree: RwSignal<Vec<TreeNode>>,

    /// Row currently hovered by a drag, for highlighting.
    pub drag_over: RwSignal<Option<NodeId>>,
    pub dragging: RwSignal<Option<NodeId>>,
}

impl TreeState {
    /// Seeded once; later changes to the caller's data are not picked up.
    pub fn new(data: Vec<TreeNode>) -> Self {
        Self {
            tree: RwSignal::new(data),
            drag_over: RwSignal::new(None),
            dragging: RwSignal::new(None),
        }
    }

    pub fn clear_drag(&self) {
        self.drag_over.set(None);
        self.dragging.set(None);
    }

    /// Applies a drop. The callback sees the new tree before the widget does.
    pub fn handle_drop(
        &self,
        dragged_id: &NodeId,
        target_id: &NodeId,
        on_drag_end: Option<Callback<DragEnd>>,
    ) -> Option<DragEnd> {
        self.clear_drag();

        let current = self.tree.get_untracked();
        let event = match resolve_drop(&current, dragged_id, target_id) {
            Ok(Some(event)) => event,
            Ok(None) => return None,
            Err(e) => {
                warn!("drop rejected: {e}");
                return None;
            }
        };

        log!("moved `{dragged_id}` under `{target_id}`");
        if let Some(cb) = on_drag_end {
            cb.run(event.clone());
        }
        self.tree.set(event.tree.clone());
        Some(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{find_node, TreeError};
    use std::sync::{Arc, Mutex};

    fn sample() -> Vec<TreeNode> {
        vec![
            TreeNode::branch("a", "A", vec![TreeNode::leaf("a1", "A1")]),
            TreeNode::leaf("b", "B"),
        ]
    }

    #[test]
    fn test_resolve_drop_reports_ids_and_tree() {
        let ev = resolve_drop(&sample(), &"a1".into(), &"b".into())
            .expect("no error")
            .expect("should move");
        assert_eq!(ev.dragged_id.as_str(), "a1");
        assert_eq!(ev.target_id.as_str(), "b");
        let b = find_node(&ev.tree, &"b".into()).expect("b");
        assert_eq!(b.children().len(), 1);
        assert!(!find_node(&ev.tree, &"a".into()).expect("a").has_children());
    }

    #[test]
    fn test_resolve_drop_onto_self() {
        let out = resolve_drop(&sample(), &"a".into(), &"a".into()).expect("no error");
        assert!(out.is_none());
    }

    #[test]
    fn test_resolve_drop_unknown_source() {
        let err = resolve_drop(&sample(), &"zz".into(), &"a".into()).expect_err("should fail");
        assert!(matches!(err, TreeError::NodeNotFound(_)));
    }

    #[test]
    fn test_handle_drop_runs_callback_before_storing_tree() {
        let owner = Owner::new();
        owner.set();

        let state = TreeState::new(sample());
        let seen: Arc<Mutex<Option<(Vec<TreeNode>, Vec<TreeNode>)>>> = Arc::new(Mutex::new(None));
        let sink = seen.clone();
        let tree = state.tree;
        let on_drag_end = Callback::new(move |ev: DragEnd| {
            if let Ok(mut slot) = sink.lock() {
                *slot = Some((tree.get_untracked(), ev.tree));
            }
        });

        let ev = state
            .handle_drop(&"a1".into(), &"b".into(), Some(on_drag_end))
            .expect("should move");

        let (stored_during_callback, reported) =
            seen.lock().expect("lock").clone().expect("callback should run");
        assert_eq!(stored_during_callback, sample());
        assert_eq!(reported, ev.tree);
        assert_eq!(state.tree.get_untracked(), ev.tree);
    }

    #[test]
    fn test_handle_drop_onto_self_keeps_tree_and_skips_callback() {
        let owner = Owner::new();
        owner.set();

        let state = TreeState::new(sample());
        state.drag_over.set(Some("a".into()));
        let calls = Arc::new(Mutex::new(0usize));
        let counter = calls.clone();
        let on_drag_end = Callback::new(move |_: DragEnd| {
            if let Ok(mut n) = counter.lock() {
                *n += 1;
            }
        });

        assert!(state.handle_drop(&"a".into(), &"a".into(), Some(on_drag_end)).is_none());
        assert_eq!(state.tree.get_untracked(), sample());
        assert_eq!(*calls.lock().expect("lock"), 0);
        assert!(state.drag_over.get_untracked().is_none());
    }
}
