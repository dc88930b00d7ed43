use serde::Serialize;
use std::fmt;

/// One node of a rendered dependency tree
///
/// A `Circular` node is always a leaf: it stands in for a component that is
/// already on the path from the root, which is what keeps the tree finite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TreeNode {
    Component {
        name: String,
        dependencies: Vec<TreeNode>,
    },
    Circular {
        target: String,
    },
}

impl TreeNode {
    pub fn component(name: impl Into<String>, dependencies: Vec<TreeNode>) -> Self {
        TreeNode::Component {
            name: name.into(),
            dependencies,
        }
    }

    pub fn circular(target: impl Into<String>) -> Self {
        TreeNode::Circular {
            target: target.into(),
        }
    }

    /// Text shown for this node
    pub fn label(&self) -> String {
        match self {
            TreeNode::Component { name, .. } => name.clone(),
            TreeNode::Circular { target } => format!("circular dependency on {}", target),
        }
    }

    pub fn children(&self) -> &[TreeNode] {
        match self {
            TreeNode::Component { dependencies, .. } => dependencies,
            TreeNode::Circular { .. } => &[],
        }
    }

    pub fn is_circular(&self) -> bool {
        matches!(self, TreeNode::Circular { .. })
    }
}

/// Compact one-line notation: `a → [b → ["circular dependency on a"]]`
impl fmt::Display for TreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeNode::Circular { .. } => write!(f, "\"{}\"", self.label()),
            TreeNode::Component { name, dependencies } if dependencies.is_empty() => {
                write!(f, "{}", name)
            }
            TreeNode::Component { name, dependencies } => {
                write!(f, "{} → [", name)?;
                for (i, child) in dependencies.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", child)?;
                }
                write!(f, "]")
            }
        }
    }
}

/// A finite, acyclic rendering of a dependency graph, rooted at the
/// requested artifact
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RenderedTree {
    root: TreeNode,
}

impl RenderedTree {
    pub fn new(root: TreeNode) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &TreeNode {
        &self.root
    }

    /// Number of nodes, circular markers included
    pub fn node_count(&self) -> usize {
        fn count(node: &TreeNode) -> usize {
            1 + node.children().iter().map(count).sum::<usize>()
        }
        count(&self.root)
    }

    /// Number of circular markers in the tree
    pub fn circular_count(&self) -> usize {
        fn count(node: &TreeNode) -> usize {
            usize::from(node.is_circular()) + node.children().iter().map(count).sum::<usize>()
        }
        count(&self.root)
    }

    /// Length of the longest root-to-leaf path, in edges
    pub fn depth(&self) -> usize {
        fn depth(node: &TreeNode) -> usize {
            node.children()
                .iter()
                .map(|child| 1 + depth(child))
                .max()
                .unwrap_or(0)
        }
        depth(&self.root)
    }
}

impl fmt::Display for RenderedTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.root)
    }
}
