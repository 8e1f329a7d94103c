pub mod tree_view;

pub use tree_view::*;
