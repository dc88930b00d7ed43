//! pdc-tangle - Dependency tree explorer for PDC
//!
//! Resolves the transitive dependencies of one component registered in a
//! Product Definition Center (PDC) instance and renders them as a finite
//! tree, marking every dependency cycle instead of following it.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`dependency_resolution`): Graph model, batching and tree rendering
//! - **Application Layer** (`application`): Use cases, DTOs and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): PDC REST client, formatters, console and file output
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use pdc_tangle::prelude::*;
//!
//! # async fn run() -> Result<()> {
//! let edge_provider = PdcEdgeProvider::new("pdc.stg.fedoraproject.org")?;
//! let progress_reporter = StderrProgressReporter::new();
//! let use_case = ResolveDependenciesUseCase::new(edge_provider, progress_reporter);
//!
//! let request = ResolutionRequest::new(
//!     "python3".to_string(),
//!     "fedora-26".to_string(),
//!     vec!["RPMRequires".to_string()],
//! );
//! let response = use_case.execute(request).await?;
//!
//! let output = TextTreeFormatter::without_color().format(&response)?;
//! print!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod dependency_resolution;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::{JsonTreeFormatter, TextTreeFormatter};
    pub use crate::adapters::outbound::network::PdcEdgeProvider;
    pub use crate::application::dto::{
        OutputFormat, ResolutionRequest, ResolutionResponse, ResolutionSummary,
    };
    pub use crate::application::use_cases::ResolveDependenciesUseCase;
    pub use crate::dependency_resolution::domain::{
        ComponentName, DependencyEdge, DependencyGraph, QueryScope, RenderedTree, TreeNode,
    };
    pub use crate::dependency_resolution::services::{FrontierPlanner, TreeRenderer};
    pub use crate::ports::outbound::{
        EdgeProvider, OutputPresenter, ProgressReporter, ProviderResult, TreeFormatter,
    };
    pub use crate::shared::Result;
}
