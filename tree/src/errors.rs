use thiserror::Error;

use crate::{Name, NodeId};

/// Errors raised when a [Name] is rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConstructionError {
    #[error("name must not be empty")]
    Empty,

    #[error("name {0:?} must not contain line breaks")]
    LineBreak(String),
}

/// Errors related to wiring up nodes in a [crate::Hierarchy].
/// A rejected mutation leaves the hierarchy untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid name: {0}")]
    Construction(#[from] ConstructionError),

    #[error("adding {child:?} to {parent:?} would create a cycle")]
    Cycle { parent: Name, child: Name },

    #[error("{0:?} already has a parent")]
    AlreadyAttached(Name),

    #[error("{0:?} is a leaf and can not hold children")]
    NotAComposite(Name),

    #[error("{0:?} is listed more than once")]
    DuplicateChild(Name),

    #[error("{0} does not belong to this hierarchy")]
    UnknownNode(NodeId),
}
