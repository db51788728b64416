use crate::criteria::Criteria;
use crate::errors::GraphError;
use crate::graph::{Graph, NodeId};
use crate::priority_queue::NodeQueue;
use super::strategy::{Episode, seed, traverse};
use super::{OrderingRule, Path, SearchState};

use std::fmt::Debug;



/// Best-first search under a caller supplied [`OrderingRule`]
/// Any `(node, other) -> Ordering` closure works as a rule, as do [`CostOrdering`](super::CostOrdering)
/// and [`EstimatedCostOrdering`](super::EstimatedCostOrdering)
/// Whether the returned route is the cheapest one depends on the rule
#[derive(Debug, Clone)]
pub struct Ordered<R> {
    episode: Episode,
    queue: NodeQueue,
    rule: R,
}

impl<R> Ordered<R> {

    pub const NAME: &'static str = "ordered";

    pub fn new(start: NodeId, rule: R) -> Self {
        Self {
            episode: Episode::new(start),
            queue: NodeQueue::new(),
            rule,
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

    pub fn rule(&self) -> &R {
        &self.rule
    }

    /// Zero the start node and queue every node of the graph under the rule
    pub fn setup<T, C>(&mut self, graph: &mut Graph<T, C>, _target: NodeId) -> Result<(), GraphError>
    where
        R: OrderingRule<T, C>,
    {
        seed(graph, self.episode.start, &mut self.queue, &self.rule)?;
        self.episode.state = SearchState::Setup;
        Ok(())
    }

    pub fn execute<'g, T, C>(&mut self, graph: &'g mut Graph<T, C>, target: NodeId) -> Result<Path<'g, T, C>, GraphError>
    where
        T: Debug,
        C: Criteria,
        R: OrderingRule<T, C>,
    {
        self.episode.begin(Self::NAME, graph, target)?;
        self.setup(graph, target)?;

        self.episode.state = SearchState::Running;
        let state = traverse(graph, &mut self.queue, &self.rule, target);

        Ok(self.episode.finish(Self::NAME, graph, target, state))
    }
}
