//! Append-only expression graph
//!
//! ## Design
//!
//! - Nodes live in a single `Vec`, in execution order; a node's
//!   [`ExpressionId`] is its index into that vector.
//! - The graph is append-only: a node never changes index, and nothing
//!   is deleted. Edges are ids, not references, so storage growth can
//!   never dangle an edge (arena-plus-index).
//! - Every argument id is strictly smaller than the referring node's
//!   id, so all edges point backward and the graph is acyclic by
//!   construction. `depends_on` needs no cycle detection.
//! - Nodes need not be reachable from anywhere; dead and side-effect
//!   nodes are allowed.
//!
//! A is a parent of B, and B a child of A, when B appears in A's
//! argument list (A "depends on" B). `depends_on` is the reflexive-
//! transitive closure of that relation.

use serde::{Deserialize, Serialize};
use tracegraph_core::{Error, ExpressionId, Node, OpKind, Result};

/// A directed, acyclic, possibly unconnected graph of recorded
/// operations
///
/// Created empty when a trace starts, grows monotonically while the
/// trace is open, and is an ordinary immutable value once the recorder
/// finalizes it.
///
/// # Example
///
/// ```
/// use tracegraph_store::ExpressionGraph;
/// use tracegraph_core::OpKind;
///
/// let mut graph = ExpressionGraph::new();
/// let a = graph.create_node(OpKind::CompileTimeConstant);
/// let b = graph.create_node(OpKind::CompileTimeConstant);
/// let sum = graph.create_node(OpKind::Plus);
/// graph.add_argument(sum, a)?;
/// graph.add_argument(sum, b)?;
///
/// assert_eq!(graph.len(), 3);
/// assert!(graph.depends_on(sum, a)?);
/// assert!(!graph.depends_on(a, sum)?);
/// # Ok::<(), tracegraph_core::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExpressionGraph {
    /// All nodes, indexed by their `ExpressionId`. The argument ids
    /// inside each node form the edges of the graph.
    nodes: Vec<Node>,
}

// Deserialization re-establishes what construction guarantees: each
// node's id equals its index (node decoding already rejected self and
// forward argument edges), so `depends_on` can keep trusting that
// every edge points strictly backward.
impl<'de> Deserialize<'de> for ExpressionGraph {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct RawGraph {
            nodes: Vec<Node>,
        }

        let raw = RawGraph::deserialize(deserializer)?;
        for (index, node) in raw.nodes.iter().enumerate() {
            if node.id().index() != index {
                return Err(serde::de::Error::custom(format!(
                    "node at index {} carries id {}",
                    index,
                    node.id()
                )));
            }
        }
        Ok(ExpressionGraph { nodes: raw.nodes })
    }
}

impl ExpressionGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        ExpressionGraph { nodes: Vec::new() }
    }

    /// Create an empty graph with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        ExpressionGraph {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Append a new node with the given kind, no arguments, and an
    /// empty payload, returning its freshly assigned id.
    ///
    /// The returned id always equals the node count before the call.
    /// Ids are never reused.
    pub fn create_node(&mut self, kind: OpKind) -> ExpressionId {
        let id = ExpressionId::from_index(self.nodes.len());
        tracing::trace!(%id, ?kind, "create node");
        self.nodes.push(Node::new(id, kind));
        id
    }

    /// Append `arg` to the argument list of node `id`.
    ///
    /// Fails with [`Error::OutOfRange`] when `id` is not a node of
    /// this graph, and with [`Error::ForwardReference`] when `arg`
    /// does not refer to a strictly earlier node. A failed call leaves
    /// the graph untouched.
    pub fn add_argument(&mut self, id: ExpressionId, arg: ExpressionId) -> Result<()> {
        self.node_mut(id)?.push_arg(arg)
    }

    /// Resolve an id to its node.
    ///
    /// Fails with [`Error::OutOfRange`] when `id` is not a node of
    /// this graph.
    #[inline]
    pub fn node(&self, id: ExpressionId) -> Result<&Node> {
        self.nodes.get(id.index()).ok_or(Error::OutOfRange {
            id: id.index(),
            len: self.nodes.len(),
        })
    }

    /// Resolve an id to its node, mutably.
    ///
    /// Only the kind and payload of the node can be replaced through
    /// this handle; argument insertion is validated by the node itself
    /// (see [`Node::push_arg`]). Callers must re-resolve after any
    /// `create_node` call rather than holding the reference across
    /// growth.
    #[inline]
    pub fn node_mut(&mut self, id: ExpressionId) -> Result<&mut Node> {
        let len = self.nodes.len();
        self.nodes
            .get_mut(id.index())
            .ok_or(Error::OutOfRange { id: id.index(), len })
    }

    /// Current node count, which is also the next id to be assigned.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the graph has no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Check whether `a` depends on `b`: true iff `b` is reachable
    /// from `a` by following argument edges zero or more times.
    ///
    /// The relation is reflexive, so `depends_on(a, a)` is true for
    /// every valid `a`. Fails with [`Error::OutOfRange`] when either
    /// id is not a node of this graph; a failed query mutates nothing.
    pub fn depends_on(&self, a: ExpressionId, b: ExpressionId) -> Result<bool> {
        // Validate both ids up front so the error does not depend on
        // where the traversal happens to stop.
        self.node(a)?;
        self.node(b)?;

        if b > a {
            // Edges only point backward, so nothing above `a` is
            // reachable from it.
            return Ok(false);
        }
        if a == b {
            return Ok(true);
        }

        // Iterative DFS. The visited marker only needs a+1 slots:
        // traversal from `a` never sees a larger id.
        let mut visited = vec![false; a.index() + 1];
        let mut stack = vec![a];
        visited[a.index()] = true;

        while let Some(current) = stack.pop() {
            for &arg in self.nodes[current.index()].args() {
                if arg == b {
                    return Ok(true);
                }
                if !visited[arg.index()] {
                    visited[arg.index()] = true;
                    stack.push(arg);
                }
            }
        }
        Ok(false)
    }

    /// Iterate over all nodes in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (ExpressionId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (ExpressionId::from_index(index), node))
    }
}
