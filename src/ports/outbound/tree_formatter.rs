use crate::application::dto::ResolutionResponse;
use crate::shared::Result;

/// TreeFormatter port for turning a resolution result into printable text
pub trait TreeFormatter {
    /// Formats the response, including the "no dependencies" case
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, response: &ResolutionResponse) -> Result<String>;
}
