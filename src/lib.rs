pub mod app;
pub mod components;
pub mod config;
pub mod dnd;
pub mod models;
pub mod state;
pub mod tree;

pub use app::App;
pub use components::{NodeFooterContext, NodeHeaderContext, TreeView};
pub use models::{NodeId, TreeNode};
pub use state::DragEnd;
pub use tree::{move_node, MoveOutcome, TreeError};

use leptos::prelude::*;

// Needed for `#[wasm_bindgen(start)]` on the wasm entrypoint.
#[cfg(all(target_arch = "wasm32", not(test)))]
use wasm_bindgen::prelude::wasm_bindgen;


// Only register the WASM start function for normal builds (not for tests),
// otherwise wasm-bindgen-test will end up with multiple entry symbols.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
