use thiserror::Error;

use crate::graph::NodeId;


#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// An edge to this destination is already registered on the node
    #[error("successor {to} was already present on node {from}")]
    DuplicateEdge { from: NodeId, to: NodeId },
    /// Handle does not belong to the graph
    #[error("unknown node {0}")]
    UnknownNode(NodeId),
}
