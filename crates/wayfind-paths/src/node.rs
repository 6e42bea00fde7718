use wayfind_core::Position;

use crate::search::Strategy;

/// Index of a [`SearchNode`] inside a [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in arena order.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Per-position search record.
///
/// Nodes are created once per enqueued position and never mutated after
/// that; the `predecessor` links form a tree rooted at the start node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNode {
    pub position: Position,
    /// Edges walked from the start. Always 0 under [`Strategy::Greedy`].
    pub cost_from_start: u32,
    pub heuristic_estimate: u32,
    pub predecessor: Option<NodeId>,
}

impl SearchNode {
    /// Ordering key for the frontier under `strategy`.
    #[inline]
    pub fn priority(&self, strategy: Strategy) -> u32 {
        strategy.priority(self.cost_from_start, self.heuristic_estimate)
    }
}

/// Owns every node created during one search.
#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `node` and return its id.
    pub fn alloc(&mut self, node: SearchNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Ids of every stored node, in allocation order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + use<> {
        (0..self.nodes.len()).map(NodeId)
    }

    /// Walk predecessor links from `id` up to the root.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            arena: self,
            next: Some(id),
        }
    }
}

/// Iterator over a node and its predecessors, ending at the start node.
pub struct Ancestors<'a> {
    arena: &'a NodeArena,
    next: Option<NodeId>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a SearchNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.arena.get(self.next?);
        self.next = node.predecessor;
        Some(node)
    }
}
