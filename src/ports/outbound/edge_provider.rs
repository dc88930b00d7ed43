use crate::dependency_resolution::domain::{ComponentName, DependencyEdge, QueryScope};
use crate::shared::error::ConnectivityError;
use async_trait::async_trait;

/// Result type of edge provider calls
pub type ProviderResult<T> = std::result::Result<T, ConnectivityError>;

/// EdgeProvider port for querying a component-relationship service
///
/// Implementations hold no state between calls and never retry: any
/// transport failure comes back as one `ConnectivityError`.
///
/// # Async Support
/// Methods are async so that the batches of one resolution round can be
/// in flight at the same time. Implementations must be `Send + Sync`.
#[async_trait]
pub trait EdgeProvider: Send + Sync {
    /// Checks whether a component with exactly this name is registered,
    /// in any release
    ///
    /// # Errors
    /// Returns a `ConnectivityError` if the provider cannot be reached or
    /// answers with something that cannot be decoded.
    async fn component_exists(&self, name: &ComponentName) -> ProviderResult<bool>;

    /// Fetches every edge whose source is in `names`, scoped to the
    /// release and dependency types of `scope`
    ///
    /// All result pages are drained before returning. `names` must already
    /// be batched by the caller (see `FrontierPlanner`).
    ///
    /// # Errors
    /// Returns a `ConnectivityError` if any page cannot be fetched.
    async fn fetch_edges(
        &self,
        names: &[ComponentName],
        scope: &QueryScope,
    ) -> ProviderResult<Vec<DependencyEdge>>;

    /// Human-readable identity of the provider (used in messages)
    fn server(&self) -> &str;
}
