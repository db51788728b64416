use crate::collections::FxHashMap;
use crate::graph::NodeId;

use std::cmp::Ordering;


/// Indexed binary min-heap over node handles
///
/// The queue never stores priorities itself. Every operation takes a comparison
/// function that reads the live node state, and `positions` maps each queued
/// node to its heap slot so a node whose cost was lowered can be moved in
/// place with [`NodeQueue::reposition`]. Callers must reposition a node after
/// every change to its priority, otherwise the heap order goes stale.
#[derive(Debug, Default, Clone)]
pub struct NodeQueue {
    heap: Vec<NodeId>,
    positions: FxHashMap<NodeId, usize>, // node -> slot in heap
}

impl NodeQueue {

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            positions: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.positions.contains_key(&id)
    }

    /// Smallest node without removing it
    pub fn peek(&self) -> Option<NodeId> {
        self.heap.first().copied()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
        self.positions.clear();
    }

    /// Insert a node, an already queued node is repositioned instead
    pub fn add<F>(&mut self, id: NodeId, cmp: F)
    where
        F: Fn(NodeId, NodeId) -> Ordering,
    {
        if self.contains(id) {
            self.reposition(id, cmp);
            return;
        }
        let slot = self.heap.len();
        self.heap.push(id);
        self.positions.insert(id, slot);
        self.sift_up(slot, &cmp);
    }

    /// Remove and return the smallest node
    pub fn poll<F>(&mut self, cmp: F) -> Option<NodeId>
    where
        F: Fn(NodeId, NodeId) -> Ordering,
    {
        let last = self.heap.len().checked_sub(1)?;
        self.swap(0, last);
        let min = self.heap.pop()?;
        self.positions.remove(&min);
        if !self.heap.is_empty() {
            self.sift_down(0, &cmp);
        }
        Some(min)
    }

    /// Restore heap order around `id` after its priority changed
    /// Returns false if the node is not queued
    pub fn reposition<F>(&mut self, id: NodeId, cmp: F) -> bool
    where
        F: Fn(NodeId, NodeId) -> Ordering,
    {
        let Some(&slot) = self.positions.get(&id) else {
            return false;
        };
        let slot = self.sift_up(slot, &cmp);
        self.sift_down(slot, &cmp);
        true
    }

    fn sift_up<F>(&mut self, mut slot: usize, cmp: &F) -> usize
    where
        F: Fn(NodeId, NodeId) -> Ordering,
    {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if cmp(self.heap[slot], self.heap[parent]) != Ordering::Less {
                break;
            }
            self.swap(slot, parent);
            slot = parent;
        }
        slot
    }

    fn sift_down<F>(&mut self, mut slot: usize, cmp: &F) -> usize
    where
        F: Fn(NodeId, NodeId) -> Ordering,
    {
        let len = self.heap.len();
        loop {
            let left = 2 * slot + 1;
            let right = left + 1;
            let mut smallest = slot;

            if left < len && cmp(self.heap[left], self.heap[smallest]) == Ordering::Less {
                smallest = left;
            }
            if right < len && cmp(self.heap[right], self.heap[smallest]) == Ordering::Less {
                smallest = right;
            }
            if smallest == slot {
                return slot;
            }
            self.swap(slot, smallest);
            slot = smallest;
        }
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.positions.insert(self.heap[a], a);
        self.positions.insert(self.heap[b], b);
    }
}
