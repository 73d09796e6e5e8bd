//! Reference-counted arena of shared mutable sequences.
//!
//! Each node holds one `Vec<T>` and counts the handles that reference it.
//! Releasing the last handle frees the node and puts its slot on a free
//! list for reuse. Slots carry a generation, bumped on every free, so a
//! handle that outlived its node is detected instead of silently reading
//! whatever now occupies the slot.
//!
//! Handles are not `Clone`: a second reference to a node
//! comes from [`AliasGraph::share`], which bumps the count.
//! Dropping a handle without releasing it leaks its reference.

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

use crate::AliasError;

static NEXT_GRAPH: AtomicU32 = AtomicU32::new(1);

/// Address of one node: owning graph, slot index, and the generation the
/// slot was allocated in.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct NodeId {
    graph: u32,
    slot: usize,
    generation: u32,
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "NodeId(graph={}, slot={}, gen={})",
            self.graph, self.slot, self.generation
        )
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}:{}.{}", self.graph, self.slot, self.generation)
    }
}

/// One reference to a node.
#[derive(Debug, PartialEq, Eq)]
pub struct Handle {
    node: NodeId,
}

impl Handle {
    #[inline]
    pub fn node(&self) -> NodeId {
        self.node
    }
}

struct Node<T> {
    ref_count: usize,
    items: Vec<T>,
}

enum Slot<T> {
    Live { generation: u32, node: Node<T> },
    Free { generation: u32 },
}

/// Arena of shared mutable sequences.
pub struct AliasGraph<T> {
    /// Stamped into every `NodeId`; handles from other graphs never match.
    id: u32,
    slots: Vec<Slot<T>>,
    /// Slots available for reuse. Populated by `release`, consumed by `alloc`.
    free_list: Vec<usize>,
}

impl<T> AliasGraph<T> {
    pub fn new() -> Self {
        AliasGraph {
            id: NEXT_GRAPH.fetch_add(1, Ordering::Relaxed),
            slots: Vec::new(),
            free_list: Vec::new(),
        }
    }

    /// Allocate a node holding `items`, returning its first handle.
    pub fn alloc(&mut self, items: Vec<T>) -> Handle {
        let node = Node {
            ref_count: 1,
            items,
        };
        let id = if let Some(slot) = self.free_list.pop() {
            // Reuse a freed slot under its bumped generation
            let generation = match self.slots[slot] {
                Slot::Free { generation } | Slot::Live { generation, .. } => generation,
            };
            self.slots[slot] = Slot::Live { generation, node };
            NodeId {
                graph: self.id,
                slot,
                generation,
            }
        } else {
            let slot = self.slots.len();
            self.slots.push(Slot::Live {
                generation: 0,
                node,
            });
            NodeId {
                graph: self.id,
                slot,
                generation: 0,
            }
        };
        tracing::trace!(node = %id, "allocated node");
        Handle { node: id }
    }

    fn node(&self, id: NodeId) -> Result<&Node<T>, AliasError> {
        if id.graph != self.id {
            return Err(AliasError::StaleHandle { node: id });
        }
        match self.slots.get(id.slot) {
            Some(Slot::Live { generation, node }) if *generation == id.generation => Ok(node),
            _ => Err(AliasError::StaleHandle { node: id }),
        }
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut Node<T>, AliasError> {
        if id.graph != self.id {
            return Err(AliasError::StaleHandle { node: id });
        }
        match self.slots.get_mut(id.slot) {
            Some(Slot::Live { generation, node }) if *generation == id.generation => Ok(node),
            _ => Err(AliasError::StaleHandle { node: id }),
        }
    }

    /// New handle to the same node.
    pub fn share(&mut self, handle: &Handle) -> Result<Handle, AliasError> {
        let node = self.node_mut(handle.node)?;
        node.ref_count += 1;
        tracing::trace!(node = %handle.node, ref_count = node.ref_count, "shared node");
        Ok(Handle { node: handle.node })
    }

    /// Handle to a new node holding a snapshot of the current content.
    pub fn copy(&mut self, handle: &Handle) -> Result<Handle, AliasError>
    where
        T: Clone,
    {
        let items = self.node(handle.node)?.items.clone();
        Ok(self.alloc(items))
    }

    /// Current content, as seen through any handle to the node.
    pub fn read(&self, handle: &Handle) -> Result<&[T], AliasError> {
        Ok(&self.node(handle.node)?.items)
    }

    /// Apply `op` to the node's content. Every alias observes the result.
    pub fn mutate_in_place<R>(
        &mut self,
        handle: &Handle,
        op: impl FnOnce(&mut Vec<T>) -> R,
    ) -> Result<R, AliasError> {
        let node = self.node_mut(handle.node)?;
        Ok(op(&mut node.items))
    }

    /// Sort the node's content in place.
    pub fn sort(&mut self, handle: &Handle) -> Result<(), AliasError>
    where
        T: Ord,
    {
        self.mutate_in_place(handle, |items| items.sort())
    }

    /// Give up one reference. The node is freed with its last handle.
    pub fn release(&mut self, handle: Handle) -> Result<(), AliasError> {
        let id = handle.node;
        let node = self.node_mut(id)?;
        if node.ref_count > 1 {
            node.ref_count -= 1;
            return Ok(());
        }
        self.slots[id.slot] = Slot::Free {
            generation: id.generation.wrapping_add(1),
        };
        self.free_list.push(id.slot);
        tracing::debug!(node = %id, "freed node");
        Ok(())
    }

    /// Whether both handles reference the same node.
    pub fn same_node(&self, a: &Handle, b: &Handle) -> bool {
        a.node == b.node
    }

    /// Number of live handles referencing the node.
    pub fn ref_count(&self, handle: &Handle) -> Result<usize, AliasError> {
        Ok(self.node(handle.node)?.ref_count)
    }

    /// Number of nodes still reachable from some handle.
    pub fn live_nodes(&self) -> usize {
        self.slots.len() - self.free_list.len()
    }
}

impl<T> Default for AliasGraph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for AliasGraph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (slot, entry) in self.slots.iter().enumerate() {
            if let Slot::Live { generation, node } = entry {
                let id = NodeId {
                    graph: self.id,
                    slot,
                    generation: *generation,
                };
                map.entry(&id, &node.items);
            }
        }
        map.finish()
    }
}
