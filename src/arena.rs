//! Slot storage for tree nodes.
//!
//! Nodes refer to each other through [`NodeId`]s into a single `Vec` instead of owning pointers.
//! Released slots go on a free list and are handed out again by the next allocation, so an id
//! is only meaningful while the node it was issued for is alive.

use std::ops::{Index, IndexMut};

/// Index of a node inside a tree's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone)]
pub(crate) struct Arena<N> {
    slots: Vec<Option<N>>,
    free: Vec<NodeId>,
}

impl<N> Default for Arena<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> Arena<N> {
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Number of live nodes.
    pub(crate) fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub(crate) fn alloc(&mut self, node: N) -> NodeId {
        if let Some(id) = self.free.pop() {
            debug_assert!(self.slots[id.index()].is_none());
            self.slots[id.index()] = Some(node);
            return id;
        }
        let idx = u32::try_from(self.slots.len()).expect("more than u32::MAX live nodes");
        self.slots.push(Some(node));
        NodeId(idx)
    }

    /// Empties the slot and returns what was in it.
    ///
    /// ## Panics
    ///
    /// When `id` was already released.
    pub(crate) fn release(&mut self, id: NodeId) -> N {
        let node = self.slots[id.index()]
            .take()
            .expect("released a node twice");
        self.free.push(id);
        node
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }
}

impl<N> Index<NodeId> for Arena<N> {
    type Output = N;

    fn index(&self, id: NodeId) -> &N {
        self.slots[id.index()]
            .as_ref()
            .expect("dangling NodeId")
    }
}

impl<N> IndexMut<NodeId> for Arena<N> {
    fn index_mut(&mut self, id: NodeId) -> &mut N {
        self.slots[id.index()]
            .as_mut()
            .expect("dangling NodeId")
    }
}
