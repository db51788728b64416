use crate::collections::FxIndexMap;
use crate::errors::GraphError;
use super::NodeId;


/// Vertex of a [`Graph`](super::Graph)
/// - `content` is the identity of the node, the graph never holds two nodes with equal content
/// - `cost` and `predecessor` are search state, rewritten by every search
/// - `successors` are the outgoing edges, keyed by destination
#[derive(Debug, Clone)]
pub struct Node<T, C> {
    pub(crate) id: NodeId,
    pub(crate) content: T,
    pub(crate) cost: f64, // accumulated cost from the search start, infinite when unreached
    pub(crate) predecessor: Option<NodeId>, // node that produced the current best cost
    pub(crate) successors: FxIndexMap<NodeId, C>,
}

impl<T, C> Node<T, C> {

    pub(crate) fn new(id: NodeId, content: T) -> Self {
        Self {
            id,
            content,
            cost: f64::INFINITY,
            predecessor: None,
            successors: FxIndexMap::default(),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn content(&self) -> &T {
        &self.content
    }

    /// Accumulated cost from the start of the last search
    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn predecessor(&self) -> Option<NodeId> {
        self.predecessor
    }

    /// True once a search assigned a finite cost to this node
    pub fn is_reached(&self) -> bool {
        self.cost.is_finite()
    }

    /// Register a directed edge to `successor`
    /// Fails if an edge to the same destination already exists, the edge set is left untouched
    pub(crate) fn add_successor(&mut self, successor: NodeId, criteria: C) -> Result<(), GraphError> {
        if self.successors.contains_key(&successor) {
            return Err(GraphError::DuplicateEdge { from: self.id, to: successor });
        }
        self.successors.insert(successor, criteria);
        Ok(())
    }

    pub fn has_successor(&self, successor: NodeId) -> bool {
        self.successors.contains_key(&successor)
    }

    /// Outgoing edges in insertion order
    pub fn successors(&self) -> impl Iterator<Item = (NodeId, &C)> {
        self.successors.iter().map(|(id, criteria)| (*id, criteria))
    }

    pub fn successor_count(&self) -> usize {
        self.successors.len()
    }

    pub(crate) fn reset(&mut self) {
        self.cost = f64::INFINITY;
        self.predecessor = None;
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_node_is_unreached() {
        let node: Node<&str, u32> = Node::new(NodeId(0), "A");
        assert_eq!(node.cost(), f64::INFINITY);
        assert!(!node.is_reached());
        assert_eq!(node.predecessor(), None);
        assert!(!node.has_successor(NodeId(1)));
    }

    #[test]
    fn test_duplicate_successor_is_rejected() {
        let mut node: Node<&str, u32> = Node::new(NodeId(0), "A");
        node.add_successor(NodeId(1), 5).unwrap();

        let result = node.add_successor(NodeId(1), 9);
        assert_eq!(result, Err(GraphError::DuplicateEdge { from: NodeId(0), to: NodeId(1) }));

        // The failed call must not overwrite the first edge
        let edges: Vec<_> = node.successors().map(|(id, c)| (id, *c)).collect();
        assert_eq!(edges, vec![(NodeId(1), 5)]);
    }

    #[test]
    fn test_self_loop_is_allowed() {
        let mut node: Node<&str, u32> = Node::new(NodeId(0), "A");
        node.add_successor(NodeId(0), 1).unwrap();
        assert!(node.has_successor(NodeId(0)));
    }

    #[test]
    fn test_successors_keep_insertion_order() {
        let mut node: Node<&str, u32> = Node::new(NodeId(0), "A");
        node.add_successor(NodeId(3), 1).unwrap();
        node.add_successor(NodeId(1), 2).unwrap();
        node.add_successor(NodeId(2), 3).unwrap();

        let order: Vec<_> = node.successors().map(|(id, _)| id).collect();
        assert_eq!(order, vec![NodeId(3), NodeId(1), NodeId(2)]);
        assert_eq!(node.successor_count(), 3);
    }
}
