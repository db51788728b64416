use crate::criteria::Criteria;
use crate::errors::GraphError;
use crate::graph::{Graph, NodeId};
use crate::priority_queue::NodeQueue;
use super::strategy::{Episode, seed, traverse};
use super::{CostOrdering, Path, SearchState};

use std::fmt::Debug;



/// Identify the shortest path using Dijkstra's Algorithm
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
/// Nodes are expanded strictly by accumulated cost, edge costs must not be negative
#[derive(Debug, Clone)]
pub struct Dijkstra {
    episode: Episode,
    queue: NodeQueue, // unsettled nodes
}

impl Dijkstra {

    pub const NAME: &'static str = "dijkstra";

    pub fn new(start: NodeId) -> Self {
        Self {
            episode: Episode::new(start),
            queue: NodeQueue::new(),
        }
    }

    pub fn start(&self) -> NodeId {
        self.episode.start
    }

    pub fn state(&self) -> SearchState {
        self.episode.state
    }

    pub fn elapsed_seconds(&self) -> f64 {
        self.episode.elapsed_seconds()
    }

    /// Zero the start node and queue every node of the graph
    /// The target plays no part in uniform cost ordering
    pub fn setup<T, C>(&mut self, graph: &mut Graph<T, C>, _target: NodeId) -> Result<(), GraphError> {
        seed(graph, self.episode.start, &mut self.queue, &CostOrdering)?;
        self.episode.state = SearchState::Setup;
        Ok(())
    }

    /// From the start node, settle nodes in cost order until the target is settled
    /// An unreachable target still yields a path, see [`Path::is_found`]
    pub fn execute<'g, T, C>(&mut self, graph: &'g mut Graph<T, C>, target: NodeId) -> Result<Path<'g, T, C>, GraphError>
    where
        T: Debug,
        C: Criteria,
    {
        self.episode.begin(Self::NAME, graph, target)?;
        self.setup(graph, target)?;

        self.episode.state = SearchState::Running;
        let state = traverse(graph, &mut self.queue, &CostOrdering, target);

        Ok(self.episode.finish(Self::NAME, graph, target, state))
    }
}



#[cfg(test)]
mod tests {
    use super::*;

    // Builds a graph from (from, to, cost) triples
    fn build_graph(edges: &[(&'static str, &'static str, u32)]) -> Graph<&'static str, u32> {
        let mut graph = Graph::new();
        for &(from, to, cost) in edges {
            let from = graph.insert(from);
            let to = graph.insert(to);
            graph.add_edge(from, to, cost).unwrap();
        }
        graph
    }

    fn id(graph: &Graph<&'static str, u32>, content: &'static str) -> NodeId {
        graph.node_id(&content).unwrap()
    }

    fn cost_of(graph: &Graph<&'static str, u32>, content: &'static str) -> f64 {
        graph.node(id(graph, content)).unwrap().cost()
    }

    // Diamond-shaped graph: A -> B -> D and A -> C -> D
    fn create_test_graph() -> Graph<&'static str, u32> {
        build_graph(&[
            ("A", "B", 1),
            ("A", "C", 3),
            ("B", "D", 5),
            ("C", "D", 1),
        ])
    }

    #[test]
    fn test_dijkstra_finds_optimal_path() {
        let mut graph = create_test_graph();
        let (a, d) = (id(&graph, "A"), id(&graph, "D"));

        let mut dijkstra = Dijkstra::new(a);
        let path = dijkstra.execute(&mut graph, d).unwrap();

        // The expected path is A -> C -> D (the cheapest path)
        assert_eq!(path.to_sequence(), vec![&"A", &"C", &"D"]);
        assert_eq!(path.cost(), 4.0);
        assert!(path.is_found());
        assert_eq!(dijkstra.state(), SearchState::Found);
    }

    #[test]
    fn test_dijkstra_costs() {
        let mut graph = create_test_graph();
        let (a, d) = (id(&graph, "A"), id(&graph, "D"));

        Dijkstra::new(a).execute(&mut graph, d).unwrap();

        assert_eq!(cost_of(&graph, "A"), 0.0);
        assert_eq!(cost_of(&graph, "B"), 1.0);
        assert_eq!(cost_of(&graph, "C"), 3.0);
        assert_eq!(cost_of(&graph, "D"), 4.0); // Should be 4 via the A->C->D path
    }

    #[test]
    fn test_dijkstra_with_cycle() {
        // Create a graph with a cycle: A -> B -> C -> A
        let mut graph = build_graph(&[
            ("A", "B", 1),
            ("B", "C", 1),
            ("C", "A", 1),
            ("C", "D", 2),
        ]);
        let (a, d) = (id(&graph, "A"), id(&graph, "D"));

        let path = Dijkstra::new(a).execute(&mut graph, d).unwrap();
        assert_eq!(path.to_sequence(), vec![&"A", &"B", &"C", &"D"]);

        assert_eq!(cost_of(&graph, "A"), 0.0);
        assert_eq!(cost_of(&graph, "B"), 1.0);
        assert_eq!(cost_of(&graph, "C"), 2.0);
        assert_eq!(cost_of(&graph, "D"), 4.0);
        // The back edge C -> A must not rewire the start
        assert_eq!(graph.node(a).unwrap().predecessor(), None);
    }

    #[test]
    fn test_dijkstra_handles_unreachable_goal() {
        let mut graph = build_graph(&[
            ("A", "B", 1),
            ("B", "C", 1),
        ]);
        let d = graph.insert("D"); // D is not connected
        let a = id(&graph, "A");

        let mut dijkstra = Dijkstra::new(a);
        let path = dijkstra.execute(&mut graph, d).unwrap();

        assert!(!path.is_found());
        assert_eq!(path.to_sequence(), vec![&"D"]);
        assert_eq!(path.cost(), f64::INFINITY);
        assert_eq!(dijkstra.state(), SearchState::Exhausted);
    }

    #[test]
    fn test_dijkstra_start_is_target() {
        let mut graph = create_test_graph();
        let a = id(&graph, "A");

        let path = Dijkstra::new(a).execute(&mut graph, a).unwrap();

        assert!(path.is_found());
        assert_eq!(path.to_sequence(), vec![&"A"]);
        assert_eq!(path.cost(), 0.0);
    }

    #[test]
    fn test_dijkstra_stops_at_target() {
        // A -> B -> D (cost 2) is the shortest path to goal
        // A -> C -> E/F -> G/H are high-cost paths that shouldn't be expanded
        let mut graph = build_graph(&[
            ("A", "B", 1),
            ("A", "C", 10),
            ("B", "D", 1),
            ("C", "E", 5),
            ("C", "F", 20),
            ("E", "G", 5),
            ("F", "H", 1),
        ]);
        let (a, d) = (id(&graph, "A"), id(&graph, "D"));

        let path = Dijkstra::new(a).execute(&mut graph, d).unwrap();
        assert_eq!(path.cost(), 2.0); // A->B->D = 1+1 = 2

        // C was reached but never expanded
        assert_eq!(cost_of(&graph, "C"), 10.0);
        for unexplored in ["E", "F", "G", "H"] {
            assert!(!graph.node(id(&graph, unexplored)).unwrap().is_reached(), "Node {unexplored} should not be reached");
        }
    }

    #[test]
    fn test_dijkstra_complex_graph() {
        let mut graph = build_graph(&[
            ("A", "B", 4),
            ("A", "C", 2),
            ("B", "C", 1),
            ("B", "D", 5),
            ("C", "D", 8),
            ("C", "E", 10),
            ("D", "E", 2),
            ("D", "F", 6),
            ("E", "F", 3),
        ]);
        let (a, f) = (id(&graph, "A"), id(&graph, "F"));

        let path = Dijkstra::new(a).execute(&mut graph, f).unwrap();

        // The total cost should be 14 (A->B->D->E->F)
        assert_eq!(path.cost(), 14.0);
        assert_eq!(path.to_sequence(), vec![&"A", &"B", &"D", &"E", &"F"]);
    }

    #[test]
    fn test_dijkstra_reuses_graph() {
        let mut graph = create_test_graph();
        let (a, b, d) = (id(&graph, "A"), id(&graph, "B"), id(&graph, "D"));

        Dijkstra::new(a).execute(&mut graph, d).unwrap();

        // A second search from another start must not see the stale costs
        let path = Dijkstra::new(b).execute(&mut graph, d).unwrap();
        assert_eq!(path.to_sequence(), vec![&"B", &"D"]);
        assert_eq!(path.cost(), 5.0);
        assert!(!graph.node(a).unwrap().is_reached());
    }

    #[test]
    fn test_dijkstra_rejects_foreign_handles() {
        let mut graph = create_test_graph();
        let a = id(&graph, "A");

        let result = Dijkstra::new(a).execute(&mut graph, NodeId(42));
        assert!(matches!(result, Err(GraphError::UnknownNode(NodeId(42)))));

        let result = Dijkstra::new(NodeId(42)).execute(&mut graph, a);
        assert!(matches!(result, Err(GraphError::UnknownNode(NodeId(42)))));
    }

    #[test]
    fn test_dijkstra_lifecycle() {
        let mut graph = create_test_graph();
        let (a, d) = (id(&graph, "A"), id(&graph, "D"));

        let mut dijkstra = Dijkstra::new(a);
        assert_eq!(dijkstra.state(), SearchState::Constructed);
        assert_eq!(dijkstra.start(), a);

        dijkstra.setup(&mut graph, d).unwrap();
        assert_eq!(dijkstra.state(), SearchState::Setup);
        assert_eq!(cost_of(&graph, "A"), 0.0);
        assert_eq!(cost_of(&graph, "D"), f64::INFINITY);

        dijkstra.execute(&mut graph, d).unwrap();
        assert_eq!(dijkstra.state(), SearchState::Found);
        assert!(dijkstra.elapsed_seconds() >= 0.0);
    }
}
