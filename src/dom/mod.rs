pub mod document;
pub mod skeleton;

pub use document::{Document, Mutation, MutationKind, NodeId, NodeSnapshot};
pub use skeleton::page_skeleton;
