
pub mod dijkstra;
pub mod a_star;
mod ordered;
mod ordering;
mod shortest_path;
mod strategy;

pub use dijkstra::Dijkstra;
pub use a_star::{AStar, EstimatedCostOrdering, Heuristic};
pub use ordered::Ordered;
pub use ordering::{CostOrdering, OrderingRule};
pub use shortest_path::{Path, Predecessors};
pub use strategy::{SearchState, Strategy};
