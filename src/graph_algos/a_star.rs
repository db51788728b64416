use crate::criteria::Criteria;
use crate::errors::GraphError;
use crate::graph::{Graph, Node, NodeId};
use crate::priority_queue::NodeQueue;
use super::strategy::{Episode, seed, traverse};
use super::{OrderingRule, Path, SearchState};

use std::{cmp::Ordering, fmt::Debug};
use log::debug;



/// Estimate of the remaining cost from `node` to `target`
/// Must never overestimate the true remaining cost, otherwise A* may return a longer route
pub trait Heuristic<T> {
    fn estimate(&self, node: &T, target: &T) -> f64;
}

impl<T, F> Heuristic<T> for F
where
    F: Fn(&T, &T) -> f64,
{
    fn estimate(&self, node: &T, target: &T) -> f64 {
        self(node, target)
    }
}


/// Best-first ordering on cost + estimate
/// Estimates are indexed by node and fixed for the duration of a search
#[derive(Debug, Default, Clone)]
pub struct EstimatedCostOrdering {
    estimates: Vec<f64>,
}

impl EstimatedCostOrdering {

    pub fn new(estimates: Vec<f64>) -> Self {
        Self { estimates }
    }

    /// Total cost = accumulated cost + h(n)
    fn f_cost<T, C>(&self, node: &Node<T, C>) -> f64 {
        node.cost() + self.estimates.get(node.id().index()).copied().unwrap_or(0.0)
    }
}

impl<T, C> OrderingRule<T, C> for EstimatedCostOrdering {
    fn compare(&self, node: &Node<T, C>, other: &Node<T, C>) -> Ordering {
        self.f_cost(node).total_cmp(&self.f_cost(other))
    }

    // An admissible estimate may still drop faster than the edge costs along a route
    fn reopens_settled(&self) -> bool {
        true
    }
}


/// A* Algorithm
/// https://en.wikipedia.org/wiki/A*_search_algorithm
/// The Approach has 2 requirements:
/// 1. The heuristic function must be admissible (never overestimates the true cost to reach the goal)
/// 2. Edge costs are non-negative
pub struct AStar<'a, T> {
    episode: Episode,
    queue: NodeQueue,
    heuristic: Box<dyn Heuristic<T> + 'a>,
    ordering: EstimatedCostOrdering,
}

impl<'a, T> AStar<'a, T> {

    pub const NAME: &'static str = "a_star";

    pub fn new<H>(start: NodeId, heuristic: H) -> Self
    where
        H: Heuristic<T> + 'a,
    {
        Self {
            episode: Episode::new(start),
            queue: NodeQueue::new(),
            heuristic: Box::new(heuristic),
            ordering: EstimatedCostOrdering::default(),
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

    /// Estimate every node against the target, zero the start node and queue the graph
    pub fn setup<C>(&mut self, graph: &mut Graph<T, C>, target: NodeId) -> Result<(), GraphError> {
        let goal = graph.node(target).ok_or(GraphError::UnknownNode(target))?.content();
        let estimates = graph
            .nodes()
            .map(|node| self.heuristic.estimate(node.content(), goal))
            .collect::<Vec<_>>();
        if estimates.iter().any(|h| *h < 0.0) {
            debug!("negative heuristic estimate towards {target}");
        }
        self.ordering = EstimatedCostOrdering::new(estimates);

        seed(graph, self.episode.start, &mut self.queue, &self.ordering)?;
        self.episode.state = SearchState::Setup;
        Ok(())
    }

    /// From the start node, expand nodes by cost + estimate until the target is settled
    pub fn execute<'g, C>(&mut self, graph: &'g mut Graph<T, C>, target: NodeId) -> Result<Path<'g, T, C>, GraphError>
    where
        T: Debug,
        C: Criteria,
    {
        self.episode.begin(Self::NAME, graph, target)?;
        self.setup(graph, target)?;

        self.episode.state = SearchState::Running;
        let state = traverse(graph, &mut self.queue, &self.ordering, target);

        Ok(self.episode.finish(Self::NAME, graph, target, state))
    }
}
