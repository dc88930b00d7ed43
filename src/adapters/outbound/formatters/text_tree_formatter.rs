use super::no_dependencies_message;
use crate::application::dto::ResolutionResponse;
use crate::dependency_resolution::domain::TreeNode;
use crate::ports::outbound::TreeFormatter;
use crate::shared::Result;
use owo_colors::OwoColorize;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE: &str = "│   ";
const SPACE: &str = "    ";

/// TextTreeFormatter adapter for the left-aligned box-drawing tree
///
/// ```text
/// pkgA
/// └── pkgB
///     └── pkgC
///         └── circular dependency on pkgA
/// ```
pub struct TextTreeFormatter {
    color: bool,
}

impl TextTreeFormatter {
    pub fn new() -> Self {
        Self { color: true }
    }

    /// Plain output with no ANSI escape codes
    pub fn without_color() -> Self {
        Self { color: false }
    }

    pub fn with_color(color: bool) -> Self {
        Self { color }
    }

    fn node_label(&self, node: &TreeNode) -> String {
        if node.is_circular() && self.color {
            node.label().yellow().to_string()
        } else {
            node.label()
        }
    }

    fn write_children(&self, out: &mut String, node: &TreeNode, prefix: &str) {
        let children = node.children();
        for (index, child) in children.iter().enumerate() {
            let last = index + 1 == children.len();
            out.push_str(prefix);
            out.push_str(if last { LAST_BRANCH } else { BRANCH });
            out.push_str(&self.node_label(child));
            out.push('\n');

            let child_prefix = format!("{}{}", prefix, if last { SPACE } else { PIPE });
            self.write_children(out, child, &child_prefix);
        }
    }
}

impl Default for TextTreeFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeFormatter for TextTreeFormatter {
    fn format(&self, response: &ResolutionResponse) -> Result<String> {
        let Some(tree) = &response.tree else {
            return Ok(format!(
                "{}\n",
                no_dependencies_message(response.artifact.as_str())
            ));
        };

        let mut out = String::new();
        out.push_str(&self.node_label(tree.root()));
        out.push('\n');
        self.write_children(&mut out, tree.root(), "");
        Ok(out)
    }
}
