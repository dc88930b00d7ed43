/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to reach PDC, the console and the output destination.
pub mod edge_provider;
pub mod output_presenter;
pub mod progress_reporter;
pub mod tree_formatter;

pub use edge_provider::{EdgeProvider, ProviderResult};
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use tree_formatter::TreeFormatter;
