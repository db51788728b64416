mod node;

pub use node::Node;

use crate::collections::FxHashMap;
use crate::criteria::Criteria;
use crate::errors::GraphError;

use std::{borrow::Borrow, fmt, hash::Hash};


/// Handle to a node inside a [`Graph`]
/// Handles are indices into the graph's arena and stay valid for the graph's lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}


/// Directed graph of unique nodes
/// T: Content - payload identity of a node, deduplicated by equality
/// C: Criteria - label carried by every edge
///
/// Nodes live in an arena and refer to each other by [`NodeId`], so cycles in
/// the edge structure never turn into ownership cycles.
#[derive(Debug, Clone)]
pub struct Graph<T, C> {
    nodes: Vec<Node<T, C>>,
    ids: FxHashMap<T, NodeId>, // content -> position in nodes
}

impl<T, C> Default for Graph<T, C> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            ids: FxHashMap::default(),
        }
    }
}

impl<T, C> Graph<T, C>
where
    T: Eq + Hash + Clone,
{

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            ids: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Add a node for `content` unless one already exists
    /// Returns the number of nodes in the graph afterwards
    pub fn add_node(&mut self, content: T) -> usize {
        self.insert(content);
        self.nodes.len()
    }

    /// Add a node for `content` unless one already exists
    /// Returns the handle of the new or the already present node
    pub fn insert(&mut self, content: T) -> NodeId {
        if let Some(&id) = self.ids.get(&content) {
            return id;
        }
        let id = NodeId(self.nodes.len());
        self.ids.insert(content.clone(), id);
        self.nodes.push(Node::new(id, content));
        id
    }

    pub fn contains<Q>(&self, content: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.ids.contains_key(content)
    }

    pub fn node_id<Q>(&self, content: &Q) -> Option<NodeId>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.ids.get(content).copied()
    }

    /// Register a directed edge `from -> to`
    /// This is the only way to add an edge, so both ends are always checked against the graph
    ///
    /// ```compile_fail
    /// use wayfind::{Graph, NodeId};
    ///
    /// let mut graph: Graph<&str, u32> = Graph::new();
    /// let a = graph.insert("A");
    /// let b = graph.insert("B");
    /// let mut other: Graph<&str, u32> = Graph::new();
    /// let foreign: NodeId = other.insert("X");
    /// // Nodes are not mutable from outside the graph
    /// graph.node_mut(a).unwrap().add_successor(foreign, 1).unwrap();
    /// ```
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, criteria: C) -> Result<(), GraphError> {
        self.check(to)?;
        self.node_mut(from)
            .ok_or(GraphError::UnknownNode(from))?
            .add_successor(to, criteria)
    }
}

impl<T, C> Graph<T, C> {

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node<T, C>> {
        self.nodes.get(id.0)
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> Option<&mut Node<T, C>> {
        self.nodes.get_mut(id.0)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node<T, C>> {
        self.nodes.iter()
    }

    /// Forget the costs and predecessors left behind by a previous search
    pub fn reset(&mut self) {
        self.nodes.iter_mut().for_each(Node::reset);
    }

    pub(crate) fn check(&self, id: NodeId) -> Result<(), GraphError> {
        if id.0 < self.nodes.len() {
            Ok(())
        } else {
            Err(GraphError::UnknownNode(id))
        }
    }

    pub(crate) fn as_slice(&self) -> &[Node<T, C>] {
        &self.nodes
    }

    pub(crate) fn set_cost(&mut self, id: NodeId, cost: f64) {
        self.nodes[id.0].cost = cost;
    }

    /// Lower the cost of `id` to `cost` via `predecessor` if that is an improvement
    /// Returns true when the node was updated
    pub(crate) fn relax(&mut self, id: NodeId, predecessor: NodeId, cost: f64) -> bool {
        let node = &mut self.nodes[id.0];
        if cost < node.cost {
            node.cost = cost;
            node.predecessor = Some(predecessor);
            true
        } else {
            false
        }
    }
}

impl<T, C: Criteria> Graph<T, C> {

    /// Destination and numeric cost of the `slot`-th outgoing edge of `id`
    pub(crate) fn edge(&self, id: NodeId, slot: usize) -> Option<(NodeId, f64)> {
        self.nodes
            .get(id.0)?
            .successors
            .get_index(slot)
            .map(|(&next, criteria)| (next, criteria.cost()))
    }
}
