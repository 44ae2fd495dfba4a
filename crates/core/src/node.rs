//! A single recorded operation
//!
//! [`Node`] is one entry of an expression graph: an opaque operation
//! tag, an ordered list of argument ids, and an uninterpreted payload.
//!
//! ## Argument discipline
//!
//! Every argument must refer to a node created strictly earlier, which
//! is what keeps the graph acyclic without any cycle detection. A node
//! knows its own id, and [`Node::push_arg`] rejects any argument id
//! that is not strictly smaller, so there is no way to express a self
//! or forward edge through the public API.

use crate::error::{Error, Result};
use crate::types::{ExpressionId, OpKind, Payload};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// One recorded operation in an expression graph
///
/// Nodes are created by the graph, which assigns the id; they are not
/// inserted by value. Argument order is significant and preserved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawNode")]
pub struct Node {
    id: ExpressionId,
    kind: OpKind,
    // Most traced operations are unary or binary.
    args: SmallVec<[ExpressionId; 2]>,
    payload: Payload,
}

/// Wire shape of [`Node`]: same fields, no invariants. Promoted to a
/// `Node` only after the argument check in `TryFrom`.
#[derive(Deserialize)]
struct RawNode {
    id: ExpressionId,
    kind: OpKind,
    args: SmallVec<[ExpressionId; 2]>,
    payload: Payload,
}

impl TryFrom<RawNode> for Node {
    type Error = Error;

    fn try_from(raw: RawNode) -> Result<Node> {
        // Decoded data gets the same check as push_arg, so a self or
        // forward edge cannot be smuggled in through serialization.
        for &arg in &raw.args {
            if arg >= raw.id {
                return Err(Error::ForwardReference {
                    id: raw.id.index(),
                    arg: arg.index(),
                });
            }
        }
        Ok(Node {
            id: raw.id,
            kind: raw.kind,
            args: raw.args,
            payload: raw.payload,
        })
    }
}

impl Node {
    /// Create a node with the given identity and kind, no arguments,
    /// and an empty payload.
    ///
    /// The id fixes the ceiling for [`Node::push_arg`]: only strictly
    /// smaller ids are accepted as arguments. Graphs assign the id
    /// themselves when appending and never ingest nodes by value, so
    /// a node built directly cannot enter a graph.
    pub fn new(id: ExpressionId, kind: OpKind) -> Self {
        Node {
            id,
            kind,
            args: SmallVec::new(),
            payload: Payload::None,
        }
    }

    /// This node's identity within its owning graph.
    #[inline]
    pub fn id(&self) -> ExpressionId {
        self.id
    }

    /// The operation tag.
    #[inline]
    pub fn kind(&self) -> OpKind {
        self.kind
    }

    /// Replace the operation tag.
    pub fn set_kind(&mut self, kind: OpKind) {
        self.kind = kind;
    }

    /// The ordered argument ids.
    #[inline]
    pub fn args(&self) -> &[ExpressionId] {
        &self.args
    }

    /// Append an argument reference.
    ///
    /// Fails with [`Error::ForwardReference`] when `arg` does not
    /// refer to a strictly earlier node; the argument list is left
    /// unchanged in that case.
    pub fn push_arg(&mut self, arg: ExpressionId) -> Result<()> {
        if arg >= self.id {
            return Err(Error::ForwardReference {
                id: self.id.index(),
                arg: arg.index(),
            });
        }
        self.args.push(arg);
        Ok(())
    }

    /// Check whether `id` appears in the direct argument list.
    ///
    /// This is the one-step edge relation; for the transitive version
    /// see the graph's `depends_on`.
    pub fn references(&self, id: ExpressionId) -> bool {
        self.args.contains(&id)
    }

    /// The uninterpreted payload.
    #[inline]
    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    /// Replace the payload. Payloads are opaque and cannot affect the
    /// graph's structure.
    pub fn set_payload(&mut self, payload: Payload) {
        self.payload = payload;
    }
}
