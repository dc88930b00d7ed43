use crate::dependency_resolution::domain::{
    ComponentName, DependencyGraph, RenderedTree, TreeNode,
};
use std::collections::btree_set;

/// TreeRenderer service turning a resolved graph into a printable tree
///
/// Depth-first walk that keeps the path from the root on a stack. A
/// dependency already on that path (including the component itself) becomes
/// a `Circular` leaf instead of being walked again, so every root-to-leaf
/// path visits a component at most once and the output is finite.
///
/// The stack lives on the heap, so long dependency chains do not grow the
/// call stack. The renderer is the only place cycles are turned into
/// markers; the graph itself stays a plain adjacency map.
pub struct TreeRenderer;

/// A component on the current path, with the dependencies still to visit
struct Frame<'g> {
    name: &'g ComponentName,
    pending: Option<btree_set::Iter<'g, ComponentName>>,
    children: Vec<TreeNode>,
}

impl<'g> Frame<'g> {
    fn enter(graph: &'g DependencyGraph, name: &'g ComponentName) -> Self {
        Self {
            name,
            pending: graph.dependencies_of(name).map(|deps| deps.iter()),
            children: Vec::new(),
        }
    }
}

impl TreeRenderer {
    /// Renders the tree rooted at the graph's root.
    ///
    /// Returns `None` when the root has no dependencies at all: callers report
    /// that case with a message rather than printing a lone root node.
    pub fn render(graph: &DependencyGraph) -> Option<RenderedTree> {
        let root = graph.root();
        if !graph.has_dependencies(root) {
            return None;
        }

        let mut stack = vec![Frame::enter(graph, root)];
        let mut rendered = None;

        while let Some(frame) = stack.last_mut() {
            let next = frame.pending.as_mut().and_then(Iterator::next);
            match next {
                Some(dependency) if stack.iter().any(|f| f.name == dependency) => {
                    if let Some(frame) = stack.last_mut() {
                        frame.children.push(TreeNode::circular(dependency.as_str()));
                    }
                }
                Some(dependency) => stack.push(Frame::enter(graph, dependency)),
                None => {
                    let Some(done) = stack.pop() else { break };
                    let node = TreeNode::component(done.name.as_str(), done.children);
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(node),
                        None => rendered = Some(node),
                    }
                }
            }
        }

        rendered.map(RenderedTree::new)
    }
}
