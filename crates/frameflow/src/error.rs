use crate::arena::NodeId;

/// Reasons a tree operation was rejected
///
/// A rejected operation leaves the tree untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// The id is stale, out of range, or was never issued by this tree
    #[error("invalid node handle {0}")]
    InvalidHandle(NodeId),
    /// A node cannot become its own parent
    #[error("node {0} cannot be its own parent")]
    SelfParent(NodeId),
    /// The requested parent lives inside the node's own subtree
    #[error("cannot move node {node} under its descendant {new_parent}")]
    CycleRejected { node: NodeId, new_parent: NodeId },
}
