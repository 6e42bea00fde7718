//! Greedy best-first and A* search over an [`OccupancyGrid`].
//!
//! Both strategies share one engine: a [`Frontier`] ordered by a priority
//! key, a node arena of back-linked [`SearchNode`]s, and a visited set. They
//! differ only in how a node's priority is computed and whether the cost
//! from the start is accumulated (see [`Strategy`]).
//!
//! # Visited marking
//!
//! A position is marked visited as soon as it is *enqueued*, not when it is
//! expanded, and is never enqueued again even if a cheaper route to it turns
//! up later. Every edge on this grid costs 1, and the frontier pops the
//! smaller cost from start among equal priorities, so a cell is always
//! claimed through a shortest route and A* stays exact. Ordering by priority
//! alone is not enough: a longer route with the same priority, pushed
//! earlier, would claim the cell first. With weighted edges this marking no
//! longer holds at all: A* would have to close cells on dequeue and relax
//! costs of already-queued cells instead.

use std::fmt;

use wayfind_core::{OccupancyGrid, Position};

use crate::distance::manhattan;
use crate::frontier::Frontier;
use crate::node::{NodeArena, NodeId, SearchNode};
use crate::path::build_path;
use crate::traits::Pather;

// ---------------------------------------------------------------------------
// Strategy
// ---------------------------------------------------------------------------

/// Which search variant to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Order by heuristic alone. Fast, not guaranteed shortest.
    Greedy,
    /// Order by cost so far plus heuristic. Shortest in edge count.
    AStar,
}

impl Strategy {
    /// Both strategies, in reporting order.
    pub const ALL: [Strategy; 2] = [Strategy::Greedy, Strategy::AStar];

    /// Frontier key for a node with cost `g` and heuristic `h`.
    #[inline]
    pub fn priority(self, g: u32, h: u32) -> u32 {
        match self {
            Self::Greedy => h,
            Self::AStar => g + h,
        }
    }

    /// Cost from start of a node reached from a predecessor with cost `g`.
    #[inline]
    pub fn successor_cost(self, g: u32) -> u32 {
        match self {
            Self::Greedy => 0,
            Self::AStar => g + 1,
        }
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Greedy => "Greedy Best-First Search",
            Self::AStar => "A* Search",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Which end of the query an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::Goal => f.write_str("goal"),
        }
    }
}

/// Errors that prevent a search from starting.
///
/// An unreachable goal is not an error: it is reported as `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The endpoint is out of bounds or on a blocked cell.
    InvalidEndpoint { endpoint: Endpoint, pos: Position },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEndpoint { endpoint, pos } => {
                write!(f, "{endpoint} {pos} is out of bounds or not walkable")
            }
        }
    }
}

impl std::error::Error for SearchError {}

// ---------------------------------------------------------------------------
// State and reporting
// ---------------------------------------------------------------------------

/// Lifecycle of a [`Search`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    /// Start node queued, nothing expanded yet.
    Initialized,
    Searching,
    /// The goal node was popped.
    Succeeded,
    /// The frontier emptied without reaching the goal.
    Exhausted,
}

impl SearchState {
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Succeeded | Self::Exhausted)
    }
}

/// Counters collected while searching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Nodes popped from the frontier.
    pub expanded: usize,
    /// Nodes pushed to the frontier, start included.
    pub enqueued: usize,
    /// Largest frontier size observed.
    pub peak_frontier: usize,
}

/// Result of running a search to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub strategy: Strategy,
    /// Start-to-goal positions, or `None` if the goal is unreachable.
    pub path: Option<Vec<Position>>,
    pub stats: SearchStats,
}

impl SearchReport {
    /// Number of positions on the path, endpoints included.
    pub fn path_len(&self) -> Option<usize> {
        self.path.as_ref().map(Vec::len)
    }
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// One search from `start` to `goal`, advanced with [`step`](Search::step)
/// or driven to completion with [`run`](Search::run).
///
/// The search owns its frontier, node arena and visited set; the grid is
/// only borrowed and never modified.
pub struct Search<'g> {
    grid: &'g OccupancyGrid,
    goal: Position,
    strategy: Strategy,
    arena: NodeArena,
    frontier: Frontier,
    visited: Vec<bool>,
    state: SearchState,
    goal_node: Option<NodeId>,
    stats: SearchStats,
    // scratch buffer for neighbor queries
    nbuf: Vec<Position>,
}

impl<'g> Search<'g> {
    /// Validate the endpoints and queue the start node.
    pub fn new(
        grid: &'g OccupancyGrid,
        start: Position,
        goal: Position,
        strategy: Strategy,
    ) -> Result<Self, SearchError> {
        check_endpoint(grid, start, Endpoint::Start)?;
        check_endpoint(grid, goal, Endpoint::Goal)?;

        let mut search = Self {
            grid,
            goal,
            strategy,
            arena: NodeArena::new(),
            frontier: Frontier::new(),
            visited: vec![false; grid.len()],
            state: SearchState::Initialized,
            goal_node: None,
            stats: SearchStats::default(),
            nbuf: Vec::with_capacity(4),
        };
        search.enqueue(SearchNode {
            position: start,
            cost_from_start: 0,
            heuristic_estimate: manhattan(start, goal),
            predecessor: None,
        });
        Ok(search)
    }

    #[inline]
    pub fn state(&self) -> SearchState {
        self.state
    }

    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Pop one node and expand it.
    ///
    /// Returns the state after the step. Once terminal, further calls do
    /// nothing.
    pub fn step(&mut self) -> SearchState {
        if self.state.is_terminal() {
            return self.state;
        }
        self.state = SearchState::Searching;

        let Some(current) = self.frontier.pop_min() else {
            return self.exhaust();
        };
        self.stats.expanded += 1;

        let node = self.arena.get(current);
        let (cur_pos, cur_cost) = (node.position, node.cost_from_start);

        if cur_pos == self.goal {
            self.goal_node = Some(current);
            self.state = SearchState::Succeeded;
            log::debug!(
                "{}: reached {} after expanding {} of {} queued nodes",
                self.strategy,
                self.goal,
                self.stats.expanded,
                self.stats.enqueued
            );
            return self.state;
        }

        log::trace!(
            "{}: expanding {} (g={}, frontier={})",
            self.strategy,
            cur_pos,
            cur_cost,
            self.frontier.len()
        );

        let mut nbuf = std::mem::take(&mut self.nbuf);
        nbuf.clear();
        self.grid.neighbors(cur_pos, &mut nbuf);

        for &np in nbuf.iter() {
            self.enqueue(SearchNode {
                position: np,
                cost_from_start: self.strategy.successor_cost(cur_cost),
                heuristic_estimate: manhattan(np, self.goal),
                predecessor: Some(current),
            });
        }

        self.nbuf = nbuf;

        if self.frontier.is_empty() {
            return self.exhaust();
        }
        self.state
    }

    /// Step until the search succeeds or exhausts, then report.
    pub fn run(mut self) -> SearchReport {
        while !self.step().is_terminal() {}
        SearchReport {
            strategy: self.strategy,
            path: self.path(),
            stats: self.stats,
        }
    }

    /// The found path, available once the search has succeeded.
    pub fn path(&self) -> Option<Vec<Position>> {
        self.goal_node.map(|id| build_path(&self.arena, id))
    }

    /// Queue `node` unless its position was already queued.
    fn enqueue(&mut self, node: SearchNode) {
        let Some(idx) = self.grid.index(node.position) else {
            return;
        };
        if self.visited[idx] {
            return;
        }
        self.visited[idx] = true;

        let priority = node.priority(self.strategy);
        let cost = node.cost_from_start;
        let id = self.arena.alloc(node);
        self.frontier.push(id, priority, cost);
        self.stats.enqueued += 1;
        self.stats.peak_frontier = self.stats.peak_frontier.max(self.frontier.len());
    }

    fn exhaust(&mut self) -> SearchState {
        self.state = SearchState::Exhausted;
        log::debug!(
            "{}: no path to {} after expanding {} nodes",
            self.strategy,
            self.goal,
            self.stats.expanded
        );
        self.state
    }
}

fn check_endpoint(
    grid: &OccupancyGrid,
    pos: Position,
    endpoint: Endpoint,
) -> Result<(), SearchError> {
    if grid.is_walkable(pos) {
        Ok(())
    } else {
        Err(SearchError::InvalidEndpoint { endpoint, pos })
    }
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Run `strategy` from `start` to `goal` and report the path and counters.
pub fn search(
    grid: &OccupancyGrid,
    start: Position,
    goal: Position,
    strategy: Strategy,
) -> Result<SearchReport, SearchError> {
    Ok(Search::new(grid, start, goal, strategy)?.run())
}

/// Greedy best-first search. The path is valid but not necessarily
/// shortest. `Ok(None)` means the goal is unreachable.
pub fn greedy_search(
    grid: &OccupancyGrid,
    start: Position,
    goal: Position,
) -> Result<Option<Vec<Position>>, SearchError> {
    Ok(search(grid, start, goal, Strategy::Greedy)?.path)
}

/// A* search. The path is a shortest one in edge count. `Ok(None)` means
/// the goal is unreachable.
pub fn a_star_search(
    grid: &OccupancyGrid,
    start: Position,
    goal: Position,
) -> Result<Option<Vec<Position>>, SearchError> {
    Ok(search(grid, start, goal, Strategy::AStar)?.path)
}
