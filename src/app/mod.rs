use crate::components::{NodeFooterContext, TreeView};
use crate::config::EnvConfig;
use crate::models::TreeNode;
use crate::state::DragEnd;
use crate::tree::node_count;
use leptos::prelude::*;
use leptos_ui::clx;

mod components {
    use super::*;
    clx! {DemoShell, div, "mx-auto flex w-full max-w-xl flex-col gap-4 px-4 py-8"}
    clx! {DemoTitle, h1, "text-lg font-semibold"}
    clx! {DemoStatus, p, "text-xs text-muted-foreground"}
}

use components::*;

pub(crate) fn sample_tree() -> Vec<TreeNode> {
    vec![
        TreeNode::branch(
            1,
            "Projects",
            vec![
                TreeNode::branch(
                    2,
                    "Website",
                    vec![TreeNode::leaf(3, "Landing page"), TreeNode::leaf(4, "Pricing")],
                ),
                TreeNode::leaf(5, "Mobile app"),
            ],
        ),
        TreeNode::branch(6, "Archive", vec![TreeNode::leaf(7, "2023 roadmap")]),
        TreeNode::leaf(8, "Inbox"),
    ]
}

pub(crate) fn describe_move(ev: &DragEnd) -> String {
    format!(
        "Moved {} under {} ({} nodes)",
        ev.dragged_id,
        ev.target_id,
        node_count(&ev.tree)
    )
}

#[component]
pub fn App() -> impl IntoView {
    let cfg = EnvConfig::from_window();
    let data = cfg.tree.clone().unwrap_or_else(sample_tree);

    let last_move: RwSignal<Option<String>> = RwSignal::new(None);
    let on_drag_end = Callback::new(move |ev: DragEnd| last_move.set(Some(describe_move(&ev))));

    let render_on_last_node = Callback::new(|ctx: NodeFooterContext| {
        let count = ctx.node.children().len();
        view! {
            <div class="pl-4 text-xs text-muted-foreground">
                {format!("{count} item(s) in {}", ctx.node.name)}
            </div>
        }
        .into_any()
    });

    view! {
        <DemoShell>
            <DemoTitle>"Tree"</DemoTitle>
            <TreeView
                data=data
                node_padding=cfg.node_padding
                draggable=cfg.draggable
                on_drag_end=on_drag_end
                render_on_last_node=render_on_last_node
            />
            <DemoStatus>
                {move || last_move.get().unwrap_or_else(|| "Drag a row onto another row to move it.".to_string())}
            </DemoStatus>
        </DemoShell>
    }
}
