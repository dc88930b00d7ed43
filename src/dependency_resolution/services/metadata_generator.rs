use crate::dependency_resolution::domain::ResolutionMetadata;
use chrono::Utc;

/// MetadataGenerator service stamping a resolution with tool and time info
pub struct MetadataGenerator;

impl MetadataGenerator {
    /// Generates metadata with the current UTC time in RFC 3339 format
    pub fn generate_metadata(tool_name: &str, tool_version: &str, server: &str) -> ResolutionMetadata {
        ResolutionMetadata::new(
            Utc::now().to_rfc3339(),
            tool_name.to_string(),
            tool_version.to_string(),
            server.to_string(),
        )
    }

    /// Generates metadata for this binary, using the compile-time version
    pub fn generate_default_metadata(server: &str) -> ResolutionMetadata {
        Self::generate_metadata("pdc-tangle", env!("CARGO_PKG_VERSION"), server)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_metadata() {
        let metadata = MetadataGenerator::generate_metadata("test-tool", "1.0.0", "pdc.example.org");

        assert_eq!(metadata.tool_name(), "test-tool");
        assert_eq!(metadata.tool_version(), "1.0.0");
        assert_eq!(metadata.server(), "pdc.example.org");
        assert!(chrono::DateTime::parse_from_rfc3339(metadata.timestamp()).is_ok());
    }

    #[test]
    fn test_generate_default_metadata() {
        let metadata = MetadataGenerator::generate_default_metadata("pdc.example.org");

        assert_eq!(metadata.tool_name(), "pdc-tangle");
        assert_eq!(metadata.tool_version(), env!("CARGO_PKG_VERSION"));
    }
}
