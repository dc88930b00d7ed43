use crate::dependency_resolution::domain::{
    ComponentName, QueryScope, RenderedTree, ResolutionMetadata,
};

/// Counters describing one resolution run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolutionSummary {
    /// Distinct components in the graph, root included
    pub components: usize,
    /// Distinct dependency edges
    pub edges: usize,
    /// Breadth-first rounds it took to empty the frontier
    pub rounds: usize,
    /// Relationship queries issued (one per batch)
    pub queries: usize,
}

/// ResolutionResponse - Response DTO from the dependency resolution use case
#[derive(Debug, Clone)]
pub struct ResolutionResponse {
    /// The validated root component
    pub artifact: ComponentName,
    /// Release and dependency types the edges were fetched under
    pub scope: QueryScope,
    /// Rendered tree; `None` when the artifact has no dependencies
    pub tree: Option<RenderedTree>,
    pub summary: ResolutionSummary,
    pub metadata: ResolutionMetadata,
}

impl ResolutionResponse {
    pub fn new(
        artifact: ComponentName,
        scope: QueryScope,
        tree: Option<RenderedTree>,
        summary: ResolutionSummary,
        metadata: ResolutionMetadata,
    ) -> Self {
        Self {
            artifact,
            scope,
            tree,
            summary,
            metadata,
        }
    }

    pub fn has_dependencies(&self) -> bool {
        self.tree.is_some()
    }
}
