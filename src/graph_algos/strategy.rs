use crate::criteria::Criteria;
use crate::errors::GraphError;
use crate::graph::{Graph, Node, NodeId};
use crate::priority_queue::NodeQueue;
use super::{AStar, Dijkstra, Heuristic, OrderingRule, Path};

use std::{
    cmp::Ordering,
    fmt::Debug,
    time::{Duration, Instant},
};
use log::{debug, info, trace};


/// Lifecycle of a strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    Constructed,
    Setup, // queue seeded, nothing expanded yet
    Running,
    Found, // target settled
    Exhausted, // queue ran dry or only unreachable nodes were left
}


/// Search strategy, bound to a start node at construction
/// Every variant returns a [`Path`] from `execute`, whether the target was reached or not
pub enum Strategy<'a, T> {
    Dijkstra(Dijkstra),
    AStar(AStar<'a, T>),
}

impl<'a, T> Strategy<'a, T> {

    pub fn dijkstra(start: NodeId) -> Self {
        Strategy::Dijkstra(Dijkstra::new(start))
    }

    pub fn a_star<H>(start: NodeId, heuristic: H) -> Self
    where
        H: Heuristic<T> + 'a,
    {
        Strategy::AStar(AStar::new(start, heuristic))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Dijkstra(_) => Dijkstra::NAME,
            Strategy::AStar(_) => AStar::<T>::NAME,
        }
    }

    pub fn start(&self) -> NodeId {
        match self {
            Strategy::Dijkstra(s) => s.start(),
            Strategy::AStar(s) => s.start(),
        }
    }

    pub fn state(&self) -> SearchState {
        match self {
            Strategy::Dijkstra(s) => s.state(),
            Strategy::AStar(s) => s.state(),
        }
    }

    /// Wall clock time of the last `execute` call
    pub fn elapsed_seconds(&self) -> f64 {
        match self {
            Strategy::Dijkstra(s) => s.elapsed_seconds(),
            Strategy::AStar(s) => s.elapsed_seconds(),
        }
    }

    pub fn setup<C>(&mut self, graph: &mut Graph<T, C>, target: NodeId) -> Result<(), GraphError> {
        match self {
            Strategy::Dijkstra(s) => s.setup(graph, target),
            Strategy::AStar(s) => s.setup(graph, target),
        }
    }

    pub fn execute<'g, C>(&mut self, graph: &'g mut Graph<T, C>, target: NodeId) -> Result<Path<'g, T, C>, GraphError>
    where
        T: Debug,
        C: Criteria,
    {
        match self {
            Strategy::Dijkstra(s) => s.execute(graph, target),
            Strategy::AStar(s) => s.execute(graph, target),
        }
    }
}


/// Bookkeeping every strategy carries: start node, state and timing
#[derive(Debug, Clone)]
pub(crate) struct Episode {
    pub(crate) start: NodeId,
    pub(crate) state: SearchState,
    started_at: Option<Instant>,
    elapsed: Duration,
}

impl Episode {

    pub(crate) fn new(start: NodeId) -> Self {
        Self {
            start,
            state: SearchState::Constructed,
            started_at: None,
            elapsed: Duration::ZERO,
        }
    }

    /// Validate both ends and start the clock
    pub(crate) fn begin<T: Debug, C>(&mut self, name: &str, graph: &Graph<T, C>, target: NodeId) -> Result<(), GraphError> {
        let start = graph.node(self.start).ok_or(GraphError::UnknownNode(self.start))?;
        let goal = graph.node(target).ok_or(GraphError::UnknownNode(target))?;
        info!("{name}: calculate path from {:?} to {:?}", start.content(), goal.content());

        self.started_at = Some(Instant::now());
        self.elapsed = Duration::ZERO;
        Ok(())
    }

    /// Stop the clock and wrap the target into a path
    pub(crate) fn finish<'g, T, C>(&mut self, name: &str, graph: &'g Graph<T, C>, target: NodeId, state: SearchState) -> Path<'g, T, C> {
        self.state = state;
        if let Some(started_at) = self.started_at {
            self.elapsed = started_at.elapsed();
        }

        let path = Path::new(graph, target, state == SearchState::Found);
        info!("{name}: {state:?} with cost {} in {:.3} s", path.cost(), self.elapsed_seconds());
        path
    }

    pub(crate) fn elapsed_seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}


/// Reset every node, zero the start and queue the whole graph under `rule`
pub(crate) fn seed<T, C, R>(graph: &mut Graph<T, C>, start: NodeId, queue: &mut NodeQueue, rule: &R) -> Result<(), GraphError>
where
    R: OrderingRule<T, C>,
{
    graph.check(start)?;
    graph.reset();
    graph.set_cost(start, 0.0);

    queue.clear();
    let nodes = graph.as_slice();
    for node in nodes {
        queue.add(node.id(), by_rule(nodes, rule));
    }
    Ok(())
}


/// Expand nodes in the order given by `rule` until `target` is settled
/// Unless the rule reopens settled nodes, relaxation only touches nodes that are still queued
pub(crate) fn traverse<T, C, R>(graph: &mut Graph<T, C>, queue: &mut NodeQueue, rule: &R, target: NodeId) -> SearchState
where
    C: Criteria,
    R: OrderingRule<T, C>,
{
    let reopen = rule.reopens_settled();
    while let Some(current) = queue.poll(by_rule(graph.as_slice(), rule)) {
        let (cost, edges) = match graph.node(current) {
            Some(node) => (node.cost(), node.successor_count()),
            None => continue,
        };

        // Everything left in the queue is at least as far away
        if cost.is_infinite() {
            debug!("{} unreachable nodes left in queue", queue.len() + 1);
            return SearchState::Exhausted;
        }

        if current == target {
            debug!("settled target {current} at cost {cost}");
            return SearchState::Found;
        }

        for slot in 0..edges {
            let Some((next, step)) = graph.edge(current, slot) else {
                continue;
            };
            let queued = queue.contains(next);
            if !queued && !reopen {
                continue;
            }

            debug_assert!(step >= 0.0, "negative edge cost {step} on {current} -> {next}");
            let alt = cost + step;
            if graph.relax(next, current, alt) {
                if queued {
                    trace!("relaxed {next} to {alt} via {current}");
                } else {
                    trace!("reopened {next} at {alt} via {current}");
                }
                // Repositions a queued node, pushes a settled one back
                queue.add(next, by_rule(graph.as_slice(), rule));
            }
        }
    }

    debug!("queue exhausted without settling {target}");
    SearchState::Exhausted
}


fn by_rule<'a, T, C, R>(nodes: &'a [Node<T, C>], rule: &'a R) -> impl Fn(NodeId, NodeId) -> Ordering
where
    R: OrderingRule<T, C>,
{
    move |a, b| rule.compare(&nodes[a.index()], &nodes[b.index()])
}
