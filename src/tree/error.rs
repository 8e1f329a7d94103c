use crate::models::NodeId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TreeError {
    #[error("node `{0}` is not in the tree")]
    NodeNotFound(NodeId),

    #[error("drag payload carried no node id")]
    EmptyPayload,

    #[error("invalid tree data: {0}")]
    InvalidTree(#[from] serde_json::Error),
}

pub type TreeResult<T> = Result<T, TreeError>;
