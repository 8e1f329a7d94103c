use crate::models::NodeId;
use crate::tree::{TreeError, TreeResult};
use strum::{AsRefStr, Display};

/// DataTransfer format the dragged node id travels under.
pub const NODE_ID_FORMAT: &str = "nodeId";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum DropEffect {
    #[default]
    Move,
    Copy,
    #[strum(serialize = "none")]
    Forbid,
}

pub fn parse_payload(raw: &str) -> TreeResult<NodeId> {
    let id = raw.trim();
    if id.is_empty() {
        return Err(TreeError::EmptyPayload);
    }
    Ok(NodeId::from(id))
}

pub fn write_payload(ev: &web_sys::DragEvent, id: &NodeId) {
    if let Some(dt) = ev.data_transfer() {
        let _ = dt.set_data(NODE_ID_FORMAT, id.as_str());
        dt.set_effect_allowed(DropEffect::Move.as_ref());
    }
}

/// Marks the row as a valid drop target for the current drag.
pub fn accept_drag(ev: &web_sys::DragEvent) {
    ev.prevent_default();
    if let Some(dt) = ev.data_transfer() {
        dt.set_drop_effect(DropEffect::Move.as_ref());
    }
}

pub fn read_payload(ev: &web_sys::DragEvent) -> TreeResult<NodeId> {
    let raw = ev
        .data_transfer()
        .and_then(|dt| dt.get_data(NODE_ID_FORMAT).ok())
        .unwrap_or_default();
    parse_payload(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_payload_trims() {
        let id = parse_payload("  node-3 \n").expect("should parse");
        assert_eq!(id.as_str(), "node-3");
    }

    #[test]
    fn test_parse_payload_empty() {
        assert!(matches!(parse_payload(""), Err(TreeError::EmptyPayload)));
        assert!(matches!(parse_payload("   "), Err(TreeError::EmptyPayload)));
    }

    #[test]
    fn test_drop_effect_strings() {
        assert_eq!(DropEffect::Move.as_ref(), "move");
        assert_eq!(DropEffect::Forbid.to_string(), "none");
        assert_eq!(DropEffect::default(), DropEffect::Move);
    }
}
