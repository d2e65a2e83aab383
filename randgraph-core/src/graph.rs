//! Simple undirected graph value produced by the generators.
//!
//! A [`GraphModel`] owns `node_count` nodes identified by `0..node_count` and a
//! set of undirected edges. It never contains self-loops or repeated pairs and
//! is immutable once built.

use std::{collections::BTreeSet, ops::Range};

use crate::error::GraphModelError;

/// Undirected edge stored with its smaller endpoint first.
///
/// # Examples
/// ```
/// use randgraph_core::Edge;
///
/// let edge = Edge::new(4, 1);
/// assert_eq!((edge.source(), edge.target()), (1, 4));
/// assert_eq!(edge, Edge::new(1, 4));
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Edge {
    source: usize,
    target: usize,
}

impl Edge {
    /// Creates an edge between `a` and `b`, normalising endpoint order.
    #[must_use]
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            source: a.min(b),
            target: a.max(b),
        }
    }

    /// Returns the smaller endpoint.
    #[must_use]
    pub fn source(&self) -> usize {
        self.source
    }

    /// Returns the larger endpoint.
    #[must_use]
    pub fn target(&self) -> usize {
        self.target
    }
}

/// Simple undirected graph over nodes `0..node_count`.
///
/// # Examples
/// ```
/// use randgraph_core::GraphModel;
///
/// let graph = GraphModel::from_edges(3, [(0, 1), (2, 1)]).expect("edges are valid");
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// assert!(graph.contains_edge(1, 2));
/// assert_eq!(graph.degrees(), vec![1, 2, 1]);
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GraphModel {
    node_count: usize,
    edges: BTreeSet<Edge>,
}

impl GraphModel {
    /// Creates a graph with `node_count` isolated nodes.
    #[must_use]
    pub fn empty(node_count: usize) -> Self {
        Self {
            node_count,
            edges: BTreeSet::new(),
        }
    }

    /// Builds a graph from an explicit edge list, validating every edge.
    ///
    /// # Errors
    /// Returns [`GraphModelError::SelfLoop`] for an edge joining a node to
    /// itself, [`GraphModelError::NodeOutOfRange`] for an endpoint outside
    /// `0..node_count`, and [`GraphModelError::DuplicateEdge`] when an
    /// unordered pair is listed twice.
    pub fn from_edges(
        node_count: usize,
        edges: impl IntoIterator<Item = (usize, usize)>,
    ) -> Result<Self, GraphModelError> {
        let mut set = BTreeSet::new();
        for (index, (a, b)) in edges.into_iter().enumerate() {
            if a == b {
                return Err(GraphModelError::SelfLoop { index, node: a });
            }
            if let Some(node) = [a, b].into_iter().find(|&node| node >= node_count) {
                return Err(GraphModelError::NodeOutOfRange {
                    index,
                    node,
                    node_count,
                });
            }
            let edge = Edge::new(a, b);
            if !set.insert(edge) {
                return Err(GraphModelError::DuplicateEdge {
                    index,
                    source_node: edge.source(),
                    target_node: edge.target(),
                });
            }
        }
        Ok(Self {
            node_count,
            edges: set,
        })
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the node ids in creation order.
    #[must_use]
    pub fn nodes(&self) -> Range<usize> {
        0..self.node_count
    }

    /// Iterates over the edges in ascending `(source, target)` order.
    pub fn edges(&self) -> impl ExactSizeIterator<Item = Edge> + '_ {
        self.edges.iter().copied()
    }

    /// Returns whether `a` and `b` are adjacent.
    #[must_use]
    pub fn contains_edge(&self, a: usize, b: usize) -> bool {
        self.edges.contains(&Edge::new(a, b))
    }

    /// Returns the degree of every node, indexed by node id.
    #[must_use]
    pub fn degrees(&self) -> Vec<usize> {
        let mut degrees = vec![0_usize; self.node_count];
        for edge in &self.edges {
            for node in [edge.source, edge.target] {
                if let Some(slot) = degrees.get_mut(node) {
                    *slot += 1;
                }
            }
        }
        degrees
    }

    /// Builds ascending neighbour lists for every node.
    #[must_use]
    pub fn adjacency(&self) -> Vec<Vec<usize>> {
        let mut adjacency = vec![Vec::new(); self.node_count];
        for edge in &self.edges {
            if let Some(list) = adjacency.get_mut(edge.source) {
                list.push(edge.target);
            }
            if let Some(list) = adjacency.get_mut(edge.target) {
                list.push(edge.source);
            }
        }
        // Edge order already yields sorted lists; keep the guarantee explicit.
        for list in &mut adjacency {
            list.sort_unstable();
        }
        adjacency
    }
}

/// Mutable edge accumulator used by the generators.
///
/// Unlike [`GraphModel::from_edges`], proposals that would repeat a pair or
/// loop on a node are dropped rather than rejected: several models propose
/// the same pair more than once by construction.
#[derive(Debug)]
pub(crate) struct GraphBuilder {
    node_count: usize,
    edges: BTreeSet<Edge>,
}

impl GraphBuilder {
    pub(crate) fn new(node_count: usize) -> Self {
        Self {
            node_count,
            edges: BTreeSet::new(),
        }
    }

    /// Adds `{a, b}` and reports whether the edge set changed.
    pub(crate) fn add_edge(&mut self, a: usize, b: usize) -> bool {
        if a == b || a >= self.node_count || b >= self.node_count {
            return false;
        }
        self.edges.insert(Edge::new(a, b))
    }

    pub(crate) fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub(crate) fn build(self) -> GraphModel {
        GraphModel {
            node_count: self.node_count,
            edges: self.edges,
        }
    }
}
