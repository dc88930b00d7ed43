pub mod component;
pub mod dependency_graph;
pub mod edge;
pub mod rendered_tree;
pub mod resolution_metadata;
pub mod scope;

pub use component::ComponentName;
pub use dependency_graph::{DependencyGraph, MergeOutcome};
pub use edge::DependencyEdge;
pub use rendered_tree::{RenderedTree, TreeNode};
pub use resolution_metadata::ResolutionMetadata;
pub use scope::QueryScope;
