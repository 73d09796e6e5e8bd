//! Shared mutable storage and the hash-container contract built on it.
//!
//! # Aliasing
//!
//! [`AliasGraph`] is a reference-counted arena of mutable sequences.
//! A [`Handle`] names one node; [`AliasGraph::share`] makes another
//! handle to the *same* node, [`AliasGraph::copy`] makes a handle to an
//! independent node. Mutation through any handle is observed through
//! every handle sharing the node.
//!
//! # Hash Invalidation
//!
//! [`HashSetModel`] caches each member's hash at insertion and dispatches
//! lookups by bucket. Mutating a member through an alias so that its hash
//! changes makes `contains` on that very member return `false`. The set
//! never rehashes members on its own; [`HashSetModel::audit`] reports
//! the stale entries.

mod errors;
mod graph;
mod hash_contract;

pub use errors::AliasError;
pub use graph::{AliasGraph, Handle, NodeId};
pub use hash_contract::{hash_items, HashSetModel, StaleEntry};
