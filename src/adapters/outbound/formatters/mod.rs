/// Formatter adapters for the rendered dependency tree
mod json_tree_formatter;
mod text_tree_formatter;

pub use json_tree_formatter::JsonTreeFormatter;
pub use text_tree_formatter::TextTreeFormatter;

/// Line printed in place of a tree when the artifact has no dependencies
pub fn no_dependencies_message(artifact: &str) -> String {
    format!("There are no dependencies for \"{}\"", artifact)
}
