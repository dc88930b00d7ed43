use crate::application::dto::{ResolutionRequest, ResolutionResponse, ResolutionSummary};
use crate::dependency_resolution::domain::{
    ComponentName, DependencyEdge, DependencyGraph, QueryScope,
};
use crate::dependency_resolution::services::{FrontierPlanner, MetadataGenerator, TreeRenderer};
use crate::ports::outbound::{EdgeProvider, ProgressReporter, ProviderResult};
use crate::shared::error::TangleError;
use crate::shared::Result;
use futures::stream::{self, StreamExt, TryStreamExt};

/// Relationship queries kept in flight at once within one round
pub const DEFAULT_MAX_CONCURRENCY: usize = 4;

/// ResolveDependenciesUseCase - Resolves and renders the dependency tree of
/// one component
///
/// Orchestrates the existence check, the breadth-first expansion of the
/// dependency graph, and the rendering pass.
///
/// # Type Parameters
/// * `P` - EdgeProvider implementation
/// * `PR` - ProgressReporter implementation
pub struct ResolveDependenciesUseCase<P, PR> {
    edge_provider: P,
    progress_reporter: PR,
    planner: FrontierPlanner,
    max_concurrency: usize,
}

impl<P, PR> ResolveDependenciesUseCase<P, PR>
where
    P: EdgeProvider,
    PR: ProgressReporter,
{
    /// Creates a new use case with injected dependencies
    pub fn new(edge_provider: P, progress_reporter: PR) -> Self {
        Self {
            edge_provider,
            progress_reporter,
            planner: FrontierPlanner::default(),
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
        }
    }

    /// Sets how many batch queries of a round may be in flight at once
    /// (at least one)
    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.max_concurrency = max_concurrency.max(1);
        self
    }

    /// Overrides the batch size; values above `MAX_BATCH_SIZE` are clamped
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.planner = FrontierPlanner::new(batch_size);
        self
    }

    /// Executes the use case
    ///
    /// # Errors
    /// * `TangleError::InvalidComponentName` / `TangleError::Validation` for bad input
    /// * `TangleError::Connectivity` if the existence check cannot reach PDC
    /// * `TangleError::ArtifactNotFound` if the artifact is not registered;
    ///   no relationship query is issued in that case
    /// * `TangleError::ResolutionFailed` if any round fails; the partial
    ///   graph is dropped
    pub async fn execute(&self, request: ResolutionRequest) -> Result<ResolutionResponse> {
        // Step 1: Validate input into domain types
        let root = ComponentName::new(request.artifact)?;
        let scope = QueryScope::new(request.release, request.dependency_types)?;

        // Step 2: Make sure the root exists before expanding anything
        self.ensure_component_exists(&root).await?;

        // Step 3: Expand the graph round by round
        self.progress_reporter.report(&format!(
            "📊 Resolving dependencies of \"{}\" in {} ({})...",
            root,
            scope.release(),
            scope.dependency_types().join(", ")
        ));

        let (graph, summary) = self.resolve_graph(root.clone(), &scope).await.map_err(
            |source| TangleError::ResolutionFailed {
                artifact: root.to_string(),
                source,
            },
        )?;

        self.progress_reporter.report(&format!(
            "✅ Resolved {} component(s) and {} edge(s) in {} round(s)",
            summary.components, summary.edges, summary.rounds
        ));

        // Step 4: Render the tree, breaking cycles
        let tree = TreeRenderer::render(&graph);
        let metadata = MetadataGenerator::generate_default_metadata(self.edge_provider.server());

        Ok(ResolutionResponse::new(root, scope, tree, summary, metadata))
    }

    /// Queries the provider for the root component
    async fn ensure_component_exists(&self, root: &ComponentName) -> Result<()> {
        self.progress_reporter.report(&format!(
            "🔍 Looking up \"{}\" on {}...",
            root,
            self.edge_provider.server()
        ));

        let exists = self
            .edge_provider
            .component_exists(root)
            .await
            .map_err(TangleError::Connectivity)?;

        if !exists {
            return Err(TangleError::ArtifactNotFound {
                artifact: root.to_string(),
            }
            .into());
        }

        Ok(())
    }

    /// Expands the graph from `root` until the frontier is empty
    ///
    /// Each component is queried exactly once: the frontier only ever holds
    /// components that are not expanded yet, and a round expands all of
    /// them. The loop therefore runs at most once per distinct component,
    /// whether or not the dependency relation has cycles.
    pub async fn resolve_graph(
        &self,
        root: ComponentName,
        scope: &QueryScope,
    ) -> ProviderResult<(DependencyGraph, ResolutionSummary)> {
        let mut graph = DependencyGraph::new(root);
        let mut summary = ResolutionSummary::default();

        loop {
            let frontier = graph.frontier();
            if frontier.is_empty() {
                break;
            }

            summary.rounds += 1;
            let batches = self.planner.plan(&frontier);
            self.progress_reporter.report(&format!(
                "   - Round {}: querying {} component(s) in {} batch(es)",
                summary.rounds,
                frontier.len(),
                batches.len()
            ));

            let edges = self.fetch_round(&batches, scope).await?;
            summary.queries += batches.len();

            // All batches of the round are in: only now does the graph change
            let outcome = graph.merge_round(&frontier, edges);
            if outcome.ignored_edges > 0 {
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: Ignored {} edge(s) from components that were not queried in round {}",
                    outcome.ignored_edges, summary.rounds
                ));
            }
        }

        summary.components = graph.component_count();
        summary.edges = graph.edge_count();
        Ok((graph, summary))
    }

    /// Issues one query per batch, up to `max_concurrency` at a time, and
    /// concatenates the results in batch order
    ///
    /// The first failing batch fails the round; batches still in flight are
    /// dropped with it.
    async fn fetch_round(
        &self,
        batches: &[Vec<ComponentName>],
        scope: &QueryScope,
    ) -> ProviderResult<Vec<DependencyEdge>> {
        let total = batches.len();
        let mut completed = 0;

        let results: Vec<Vec<DependencyEdge>> = stream::iter(batches)
            .map(|batch| self.edge_provider.fetch_edges(batch, scope))
            .buffered(self.max_concurrency)
            .inspect_ok(|_| {
                completed += 1;
                self.progress_reporter
                    .report_progress(completed, total, Some("relationship queries"));
            })
            .try_collect()
            .await?;

        Ok(results.into_iter().flatten().collect())
    }
}
