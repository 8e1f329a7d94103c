use crate::config::DEFAULT_NODE_PADDING;
use crate::dnd::{accept_drag, read_payload, write_payload};
use crate::models::{NodeId, TreeNode};
use crate::state::{DragEnd, TreeState};
use crate::tree::indent_px;
use icons::ChevronRight;
use leptos::logging::warn;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use leptos_ui::clx;
use tw_merge::tw_merge;

mod components {
    use super::*;
    clx! {TreeBranch, div, "w-full flex flex-col gap-2"}
}

pub use components::*;

const ROOT_CLASS: &str = "w-full flex flex-col gap-2";
const ROW_CLASS: &str = "w-full h-[3rem] !px-4 rounded-t-[0.75rem] bg-[#115c88] text-[#fff] cursor-pointer flex items-center gap-2 group";
const ROW_DROP_CLASS: &str = "ring-2 ring-inset ring-white/70";

/// Handed to a custom `render_node_header`.
#[derive(Clone)]
pub struct NodeHeaderContext {
    pub node: TreeNode,
    pub level: usize,
    pub is_open: Signal<bool>,
    pub toggle_open: Callback<()>,
}

/// Handed to `render_on_last_node`, rendered below an open node's children.
#[derive(Clone)]
pub struct NodeFooterContext {
    pub node: TreeNode,
    pub level: usize,
    pub is_open: Signal<bool>,
}

/// Per-widget settings every row needs.
#[derive(Clone)]
struct RowOptions {
    node_padding: usize,
    class: String,
    draggable: bool,
    icon: Option<ViewFn>,
    render_node_header: Option<Callback<NodeHeaderContext, AnyView>>,
    render_on_last_node: Option<Callback<NodeFooterContext, AnyView>>,
    on_drag_end: Option<Callback<DragEnd>>,
}

/// Collapsible tree. Rows can be dragged onto other rows; the dragged node
/// (with its subtree) becomes the target's last child and `on_drag_end`
/// receives the resulting tree.
///
/// `data` seeds the widget once. After that the widget owns the tree.
#[component]
pub fn TreeView(
    #[prop(into)] data: Vec<TreeNode>,
    #[prop(optional)] render_node_header: Option<Callback<NodeHeaderContext, AnyView>>,
    #[prop(default = DEFAULT_NODE_PADDING)] node_padding: usize,
    #[prop(into, optional)] class: String,
    #[prop(optional)] render_on_last_node: Option<Callback<NodeFooterContext, AnyView>>,
    #[prop(optional, into)] icon: Option<ViewFn>,
    #[prop(default = true)] draggable: bool,
    #[prop(optional)] on_drag_end: Option<Callback<DragEnd>>,
) -> impl IntoView {
    let state = TreeState::new(data);
    let options = StoredValue::new(RowOptions {
        node_padding,
        class,
        draggable,
        icon,
        render_node_header,
        render_on_last_node,
        on_drag_end,
    });

    let root_ids = move || state.tree.with(|t| t.iter().map(|n| n.id.clone()).collect::<Vec<_>>());

    // `dragend` bubbles from the source row and the listener goes away with
    // the root element. A drag cancelled outside any row never fires `drop`.
    view! {
        <div data-name="TreeRoot" class=ROOT_CLASS on:dragend=move |_| state.clear_drag()>
            <For
                each=root_ids
                key=|id| id.clone()
                children=move |id| {
                    let lookup = id.clone();
                    let node = Memo::new(move |_| {
                        state.tree.with(|t| t.iter().find(|n| n.id == lookup).cloned())
                    });
                    view! { <TreeNodeView id=id node=node level=0 state=state options=options /> }
                }
            />
        </div>
    }
}

#[component]
fn TreeNodeView(
    id: NodeId,
    /// This node, sliced out of the parent's memo.
    node: Memo<Option<TreeNode>>,
    level: usize,
    state: TreeState,
    options: StoredValue<RowOptions>,
) -> impl IntoView {
    let is_open = RwSignal::new(false);
    let toggle_open = Callback::new(move |_: ()| is_open.update(|open| *open = !*open));

    let id_sv = StoredValue::new(id);
    let child_ids = Memo::new(move |_| {
        node.with(|n| {
            n.as_ref()
                .map(|n| n.children().iter().map(|c| c.id.clone()).collect::<Vec<_>>())
                .unwrap_or_default()
        })
    });

    let draggable = options.with_value(|o| o.draggable);
    let padding = options.with_value(|o| indent_px(level, o.node_padding));

    let row_class = move || {
        let extra = options.with_value(|o| o.class.clone());
        let is_target = id_sv.with_value(|id| state.drag_over.with(|over| over.as_ref() == Some(id)));
        tw_merge!(ROW_CLASS, if is_target { ROW_DROP_CLASS } else { "" }, extra)
    };

    let on_dragstart = move |ev: web_sys::DragEvent| {
        if !draggable {
            return;
        }
        id_sv.with_value(|id| write_payload(&ev, id));
        state.dragging.set(Some(id_sv.get_value()));
    };

    let on_dragover = move |ev: web_sys::DragEvent| {
        if !draggable {
            return;
        }
        accept_drag(&ev);
        let id = id_sv.get_value();
        // Dropping a row onto itself is a no-op, so don't advertise it.
        if state.dragging.with_untracked(|d| d.as_ref() == Some(&id)) {
            return;
        }
        if state.drag_over.with_untracked(|over| over.as_ref() != Some(&id)) {
            state.drag_over.set(Some(id));
        }
    };

    let on_dragleave = move |ev: web_sys::DragEvent| {
        // Moving onto the row's own icon or label isn't leaving the row.
        let row = ev
            .current_target()
            .and_then(|t| t.dyn_into::<web_sys::Node>().ok());
        let entered = ev
            .related_target()
            .and_then(|t| t.dyn_into::<web_sys::Node>().ok());
        if let (Some(row), Some(entered)) = (row, entered) {
            if row.contains(Some(&entered)) {
                return;
            }
        }

        let id = id_sv.get_value();
        if state.drag_over.with_untracked(|over| over.as_ref() == Some(&id)) {
            state.drag_over.set(None);
        }
    };

    let on_drop = move |ev: web_sys::DragEvent| {
        if !draggable {
            return;
        }
        ev.prevent_default();

        let dragged_id = match read_payload(&ev) {
            Ok(id) => id,
            Err(e) => {
                warn!("ignoring drop: {e}");
                state.clear_drag();
                return;
            }
        };
        let on_drag_end = options.with_value(|o| o.on_drag_end);
        let target_id = id_sv.get_value();
        state.handle_drop(&dragged_id, &target_id, on_drag_end);
    };

    let header = move || {
        let Some(n) = node.get() else {
            return ().into_any();
        };

        if let Some(render) = options.with_value(|o| o.render_node_header) {
            return render.run(NodeHeaderContext {
                node: n,
                level,
                is_open: is_open.into(),
                toggle_open,
            });
        }

        let toggle = if n.has_children() {
            let icon = options.with_value(|o| o.icon.clone());
            let icon_view = match icon {
                Some(icon) => icon.run(),
                None => view! { <ChevronRight class="size-4" /> }.into_any(),
            };
            view! {
                <p
                    data-name="TreeToggle"
                    class=move || {
                        let rotation = if is_open.get() { "rotate-90" } else { "rotate-0" };
                        tw_merge!("transform transition-transform duration-300 ease-in-out flex gap-2", rotation)
                    }
                    on:click=move |_| toggle_open.run(())
                >
                    <span class="size-4 fill-white">{icon_view}</span>
                </p>
            }
            .into_any()
        } else {
            view! { <span class="w-4"></span> }.into_any()
        };

        view! {
            {toggle}
            <span class="pl-2">{n.name}</span>
        }
        .into_any()
    };

    let footer = move || {
        let render = options.with_value(|o| o.render_on_last_node)?;
        let n = node.get()?;
        Some(render.run(NodeFooterContext {
            node: n,
            level,
            is_open: is_open.into(),
        }))
    };

    view! {
        <TreeBranch>
            <div
                class=row_class
                data-node-id=id_sv.get_value().to_string()
                data-level=level.to_string()
                draggable=if draggable { "true" } else { "false" }
                on:dragstart=on_dragstart
                on:dragover=on_dragover
                on:dragleave=on_dragleave
                on:drop=on_drop
            >
                <div
                    class="w-full flex items-center justify-start"
                    style=format!("padding-left: {padding}px")
                >
                    {header}
                </div>
            </div>

            <Show when=move || is_open.get()>
                <For
                    each=move || child_ids.get()
                    key=|id| id.clone()
                    children=move |child| {
                        let lookup = child.clone();
                        let child_node = Memo::new(move |_| {
                            node.with(|n| {
                                n.as_ref()
                                    .and_then(|n| n.children().iter().find(|c| c.id == lookup))
                                    .cloned()
                            })
                        });
                        view! {
                            <TreeNodeView
                                id=child
                                node=child_node
                                level=level + 1
                                state=state
                                options=options
                            />
                        }
                        .into_any()
                    }
                />
                {footer}
            </Show>
        </TreeBranch>
    }
}
