/// ResolutionMetadata value object describing how and when a tree was produced
#[derive(Debug, Clone)]
pub struct ResolutionMetadata {
    timestamp: String,
    tool_name: String,
    tool_version: String,
    server: String,
}

impl ResolutionMetadata {
    pub fn new(timestamp: String, tool_name: String, tool_version: String, server: String) -> Self {
        Self {
            timestamp,
            tool_name,
            tool_version,
            server,
        }
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }

    /// PDC instance the edges were fetched from
    pub fn server(&self) -> &str {
        &self.server
    }
}
