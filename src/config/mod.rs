use crate::models::TreeNode;
use crate::tree::parse_tree_json;
use leptos::logging::warn;
use wasm_bindgen::JsValue;

pub const DEFAULT_NODE_PADDING: usize = 12;

/// Demo settings, read from `window.ENV` like the rest of the host page config.
#[derive(Clone, Debug, PartialEq)]
pub struct EnvConfig {
    pub node_padding: usize,
    pub draggable: bool,
    pub tree: Option<Vec<TreeNode>>,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            node_padding: DEFAULT_NODE_PADDING,
            draggable: true,
            tree: None,
        }
    }
}

impl EnvConfig {
    pub fn from_window() -> Self {
        let mut cfg = Self::default();

        let Some(env) = web_sys::window()
            .and_then(|w| w.get("ENV"))
            .filter(|env| !env.is_undefined() && env.is_object())
        else {
            return cfg;
        };
        let env: JsValue = env.into();

        if let Some(raw) = read_key(&env, "TREE_NODE_PADDING") {
            cfg.node_padding = parse_node_padding(&raw).unwrap_or(cfg.node_padding);
        }
        if let Some(raw) = read_key(&env, "TREE_DRAGGABLE") {
            cfg.draggable = parse_flag(&raw).unwrap_or(cfg.draggable);
        }
        if let Some(raw) = read_key(&env, "TREE_DATA") {
            match parse_tree_json(&raw) {
                Ok(tree) => cfg.tree = Some(tree),
                Err(e) => warn!("ignoring window.ENV.TREE_DATA: {e}"),
            }
        }

        cfg
    }
}

/// String or number values are both accepted; everything else reads as missing.
fn read_key(env: &JsValue, key: &str) -> Option<String> {
    let v = js_sys::Reflect::get(env, &key.into()).ok()?;
    if let Some(s) = v.as_string() {
        return Some(s);
    }
    if let Some(b) = v.as_bool() {
        return Some(b.to_string());
    }
    v.as_f64().map(|n| n.to_string())
}

pub(crate) fn parse_node_padding(raw: &str) -> Option<usize> {
    raw.trim().parse::<f64>().ok().filter(|n| n.is_finite() && *n >= 0.0).map(|n| n as usize)
}

pub(crate) fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = EnvConfig::default();
        assert_eq!(cfg.node_padding, 12);
        assert!(cfg.draggable);
        assert!(cfg.tree.is_none());
    }

    #[test]
    fn test_parse_node_padding() {
        assert_eq!(parse_node_padding("20"), Some(20));
        assert_eq!(parse_node_padding(" 16 "), Some(16));
        assert_eq!(parse_node_padding("24.0"), Some(24));
        assert_eq!(parse_node_padding("-4"), None);
        assert_eq!(parse_node_padding("wide"), None);
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("true"), Some(true));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag("No"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }
}
