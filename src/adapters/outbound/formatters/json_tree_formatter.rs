use crate::application::dto::ResolutionResponse;
use crate::dependency_resolution::domain::RenderedTree;
use crate::ports::outbound::TreeFormatter;
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct TreeDocument<'a> {
    metadata: Metadata<'a>,
    artifact: &'a str,
    release: &'a str,
    dependency_types: &'a [String],
    summary: Summary,
    tree: Option<&'a RenderedTree>,
}

#[derive(Debug, Serialize)]
struct Metadata<'a> {
    timestamp: &'a str,
    tool: Tool<'a>,
    server: &'a str,
}

#[derive(Debug, Serialize)]
struct Tool<'a> {
    name: &'a str,
    version: &'a str,
}

#[derive(Debug, Serialize)]
struct Summary {
    components: usize,
    edges: usize,
    rounds: usize,
    queries: usize,
}

/// JsonTreeFormatter adapter for a machine-readable tree document
///
/// Tree nodes are tagged by `kind`: `component` nodes carry `name` and
/// `dependencies`, `circular` nodes carry the `target` they point back to.
/// `tree` is `null` when the artifact has no dependencies.
pub struct JsonTreeFormatter;

impl JsonTreeFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonTreeFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeFormatter for JsonTreeFormatter {
    fn format(&self, response: &ResolutionResponse) -> Result<String> {
        let document = TreeDocument {
            metadata: Metadata {
                timestamp: response.metadata.timestamp(),
                tool: Tool {
                    name: response.metadata.tool_name(),
                    version: response.metadata.tool_version(),
                },
                server: response.metadata.server(),
            },
            artifact: response.artifact.as_str(),
            release: response.scope.release(),
            dependency_types: response.scope.dependency_types(),
            summary: Summary {
                components: response.summary.components,
                edges: response.summary.edges,
                rounds: response.summary.rounds,
                queries: response.summary.queries,
            },
            tree: response.tree.as_ref(),
        };

        let mut json = serde_json::to_string_pretty(&document)?;
        json.push('\n');
        Ok(json)
    }
}
