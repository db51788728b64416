use crate::graph::{Graph, Node, NodeId};

use std::fmt;


/// Result of a search: the target node and the predecessor chain leading to it
///
/// A path is only a view on the graph, the route is rebuilt from the
/// predecessor links every time it is asked for. When the target was not
/// reached the route consists of the target alone and `is_found` is false.
#[derive(Debug, Clone)]
pub struct Path<'g, T, C> {
    graph: &'g Graph<T, C>,
    target: NodeId,
    found: bool,
}

impl<'g, T, C> Path<'g, T, C> {

    pub(crate) fn new(graph: &'g Graph<T, C>, target: NodeId, found: bool) -> Self {
        Self { graph, target, found }
    }

    pub fn target(&self) -> NodeId {
        self.target
    }

    /// False when the search ran out of nodes without settling the target
    pub fn is_found(&self) -> bool {
        self.found
    }

    /// Total cost of the route, infinite when the target was not found
    pub fn cost(&self) -> f64 {
        match (self.found, self.graph.node(self.target)) {
            (true, Some(node)) => node.cost(),
            _ => f64::INFINITY,
        }
    }

    /// Nodes from the target back to the start
    pub fn nodes(&self) -> Predecessors<'g, T, C> {
        Predecessors {
            graph: self.graph,
            next: self.graph.node(self.target),
            remaining: self.graph.len(),
        }
    }

    /// Ordered contents from the start to the target
    pub fn to_sequence(&self) -> Vec<&'g T> {
        let mut contents: Vec<&'g T> = self.nodes().map(Node::content).collect();
        // Walked backwards, so reverse it
        contents.reverse();
        contents
    }

    /// Number of nodes on the route, 1 when the target stands alone
    pub fn len(&self) -> usize {
        self.nodes().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: fmt::Display, C> fmt::Display for Path<'_, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, content) in self.to_sequence().into_iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{content}")?;
        }
        Ok(())
    }
}


/// Iterator following predecessor links towards the search start
pub struct Predecessors<'g, T, C> {
    graph: &'g Graph<T, C>,
    next: Option<&'g Node<T, C>>,
    remaining: usize, // predecessor chains are trees, this only bounds a corrupted chain
}

impl<'g, T, C> Iterator for Predecessors<'g, T, C> {
    type Item = &'g Node<T, C>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let node = self.next.take()?;
        self.next = node.predecessor().and_then(|id| self.graph.node(id));
        Some(node)
    }
}
