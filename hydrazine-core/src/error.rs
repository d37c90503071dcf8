use thiserror::Error;

use crate::topology::NodeId;

#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("duplicate node id: {0}")]
    DuplicateNode(NodeId),

    #[error("edge {source_id} -> {target_id} references unknown node {missing}")]
    UnknownEndpoint {
        source_id: NodeId,
        target_id: NodeId,
        missing: NodeId,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum OfflineError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("offline library has no builds")]
    Empty,
}
