//! Named resources organized into a hierarchy of leaves and composites,
//! and the uniform pre-order listing of their contents.
mod errors;
mod hierarchy;
mod list;
mod manifest;
mod name;
mod nodes;

pub mod fixtures;

pub use errors::{ConstructionError, Error};
pub use hierarchy::{Hierarchy, NodeId};
pub use list::{List, EMPTY_MARKER};
pub use manifest::Manifest;
pub use name::Name;
pub use nodes::{Composite, Leaf, Node};

#[cfg(test)]
mod tests;
