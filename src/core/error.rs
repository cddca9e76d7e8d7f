use crate::core::node::NodeId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RingError {
    /// The handle was never issued by this ring. Traversal itself is
    /// infallible; only lookups with foreign handles can fail.
    #[error("unknown node id: {0}")]
    UnknownNode(NodeId),
}
