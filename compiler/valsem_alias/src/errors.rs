//! Errors for alias graph access.

use crate::NodeId;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AliasError {
    /// The handle's node was freed (its slot may have been reused), or the
    /// handle belongs to another graph.
    #[error("stale handle: node {node} is no longer live")]
    StaleHandle { node: NodeId },
}
