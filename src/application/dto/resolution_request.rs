/// ResolutionRequest - Request DTO for the dependency resolution use case
///
/// Values are raw strings as typed by the user; the use case validates them
/// into domain types before any network call.
#[derive(Debug, Clone)]
pub struct ResolutionRequest {
    /// Name of the component whose dependencies are resolved
    pub artifact: String,
    /// Release to search under (e.g. `fedora-26`)
    pub release: String,
    /// Relationship type labels (e.g. `RPMRequires`)
    pub dependency_types: Vec<String>,
}

impl ResolutionRequest {
    pub fn new(artifact: String, release: String, dependency_types: Vec<String>) -> Self {
        Self {
            artifact,
            release,
            dependency_types,
        }
    }
}
