//! Identity and tag types for the expression graph
//!
//! This module defines the value types every layer shares:
//! - [`ExpressionId`]: stable integer identity of a node within its graph
//! - [`OpKind`]: the opaque operation tag carried by each node
//! - [`Payload`]: uninterpreted extra data attached to a node

use serde::{Deserialize, Serialize};

/// Stable, dense identity of a node within its owning graph
///
/// Ids are zero-based, assigned in creation order, and never reused.
/// The total order on ids equals creation order, and every argument
/// edge points at a strictly smaller id.
///
/// An `ExpressionId` is only meaningful inside the graph that produced
/// it. An id taken from another graph either exceeds that graph's node
/// count (and accessors report it out of range) or silently resolves
/// to an unrelated node at the same index; no cross-graph detection is
/// attempted.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ExpressionId(usize);

impl ExpressionId {
    /// Create an id from a raw index.
    ///
    /// Normally ids are obtained from `create_node`; this constructor
    /// exists for consumers that persist and reload graphs.
    pub fn from_index(index: usize) -> Self {
        ExpressionId(index)
    }

    /// The raw index this id denotes.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for ExpressionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "e{}", self.0)
    }
}

impl From<ExpressionId> for usize {
    fn from(id: ExpressionId) -> usize {
        id.0
    }
}

/// Opaque operation tag carried by a node
///
/// The builder records these tags without interpreting them; what an
/// operation *means* (its simplification, differentiation, or emission
/// rule) is entirely the consumer's business. The variant set covers
/// the operations an arithmetic tracer emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OpKind {
    /// A constant known at trace time
    CompileTimeConstant,
    /// A constant resolved at execution time
    RuntimeConstant,
    /// An input parameter of the traced program
    Parameter,
    /// Plain assignment of one traced value to another
    Assignment,
    /// Binary addition
    Plus,
    /// Binary subtraction
    Minus,
    /// Binary multiplication
    Multiplication,
    /// Binary division
    Division,
    /// Unary negation
    UnaryMinus,
    /// Unary plus
    UnaryPlus,
    /// Call to a named function
    FunctionCall,
    /// Binary comparison producing a boolean
    BinaryComparison,
    /// Logical negation of a boolean
    LogicalNegation,
    /// Assignment to an output slot of the traced program
    OutputAssignment,
    /// No operation
    Nop,
}

/// Uninterpreted payload attached to a node
///
/// Stored and returned unexamined; which variant a given [`OpKind`]
/// carries is a convention between the tracing layer and the graph's
/// consumers, not something the builder checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub enum Payload {
    /// No payload
    #[default]
    None,
    /// A numeric literal (constants)
    Value(f64),
    /// A name (parameters, function calls, output slots)
    Name(String),
}
