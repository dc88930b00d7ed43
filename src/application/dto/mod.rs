/// Data Transfer Objects for application layer
///
/// DTOs carry data between the CLI, the use case and the formatters,
/// keeping the domain layer isolated.
mod output_format;
mod resolution_request;
mod resolution_response;

pub use output_format::OutputFormat;
pub use resolution_request::ResolutionRequest;
pub use resolution_response::{ResolutionResponse, ResolutionSummary};
