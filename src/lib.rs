//! Shortest path search over weighted directed graphs
//!
//! Nodes carry an arbitrary payload, edges carry a domain [`Criteria`] that
//! turns into a numeric cost. A [`Strategy`] bound to a start node searches
//! the graph for a target and returns a [`Path`].
//!
//! ```
//! use wayfind::{Graph, Strategy};
//!
//! let mut graph: Graph<&str, u32> = Graph::new();
//! let a = graph.insert("A");
//! let b = graph.insert("B");
//! let c = graph.insert("C");
//! graph.add_edge(a, b, 1).unwrap();
//! graph.add_edge(b, c, 1).unwrap();
//! graph.add_edge(a, c, 5).unwrap();
//!
//! let mut dijkstra = Strategy::dijkstra(a);
//! let path = dijkstra.execute(&mut graph, c).unwrap();
//! assert_eq!(path.to_string(), "A -> B -> C");
//! assert_eq!(path.cost(), 2.0);
//! ```

mod collections;
mod criteria;
mod errors;
mod graph;
mod priority_queue;
pub mod geometry;
pub mod graph_algos;

pub use criteria::Criteria;
pub use errors::GraphError;
pub use graph::{Graph, Node, NodeId};
pub use graph_algos::{
    AStar, CostOrdering, Dijkstra, EstimatedCostOrdering, Heuristic, Ordered, OrderingRule, Path, SearchState,
    Strategy,
};
pub use priority_queue::NodeQueue;
