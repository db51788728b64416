use crate::graph::Node;

use std::cmp::Ordering;


/// Decides which of two nodes a search should expand first
/// Rules read the node's current state at comparison time, `Less` means `node` comes first
pub trait OrderingRule<T, C> {
    fn compare(&self, node: &Node<T, C>, other: &Node<T, C>) -> Ordering;

    /// Whether a settled node goes back into the queue when a cheaper route to it shows up
    /// Needed by rules whose order is not monotone in the accumulated cost, e.g. A* with an
    /// admissible but inconsistent heuristic
    fn reopens_settled(&self) -> bool {
        false
    }
}

/// Any `(node, other) -> Ordering` comparator over nodes is a rule
impl<T, C, F> OrderingRule<T, C> for F
where
    F: Fn(&Node<T, C>, &Node<T, C>) -> Ordering,
{
    fn compare(&self, node: &Node<T, C>, other: &Node<T, C>) -> Ordering {
        self(node, other)
    }
}

/// Uniform cost ordering: cheapest accumulated cost first, ties are equal
#[derive(Debug, Default, Clone, Copy)]
pub struct CostOrdering;

impl<T, C> OrderingRule<T, C> for CostOrdering {
    fn compare(&self, node: &Node<T, C>, other: &Node<T, C>) -> Ordering {
        node.cost.total_cmp(&other.cost)
    }
}
