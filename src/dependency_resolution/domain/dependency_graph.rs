use super::{ComponentName, DependencyEdge};
use std::collections::{BTreeMap, BTreeSet};

/// DependencyGraph aggregate: the working graph of one resolution run
///
/// The graph is a flat adjacency map. A cycle such as `a -> b -> a` is two
/// keys pointing at each other, never nested structure, so the graph stays
/// finite whatever the provider returns.
///
/// Every component is either *expanded* (its outgoing edges were fetched and
/// its adjacency set is frozen) or merely *referenced* (it appeared as an edge
/// target, or is the root, and has not been queried yet). The referenced
/// components form the frontier of the next round.
#[derive(Debug, Clone)]
pub struct DependencyGraph {
    root: ComponentName,
    adjacency: BTreeMap<ComponentName, BTreeSet<ComponentName>>,
    expanded: BTreeSet<ComponentName>,
}

/// What a single round contributed to the graph
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeOutcome {
    /// Edges that were not already present
    pub edges_added: usize,
    /// Components seen for the first time (the next frontier grows by this)
    pub new_components: usize,
    /// Edges whose source was not queried in this round
    pub ignored_edges: usize,
    /// Components marked expanded by this round
    pub expanded: usize,
}

impl DependencyGraph {
    /// Creates a graph holding only the (unexpanded) root
    pub fn new(root: ComponentName) -> Self {
        let mut adjacency = BTreeMap::new();
        adjacency.insert(root.clone(), BTreeSet::new());
        Self {
            root,
            adjacency,
            expanded: BTreeSet::new(),
        }
    }

    pub fn root(&self) -> &ComponentName {
        &self.root
    }

    pub fn contains(&self, name: &ComponentName) -> bool {
        self.adjacency.contains_key(name)
    }

    pub fn is_expanded(&self, name: &ComponentName) -> bool {
        self.expanded.contains(name)
    }

    /// Records `from -> to`.
    ///
    /// Returns `true` if the edge was not present before. Adding an edge twice
    /// is a no-op. Edges out of an already expanded component are refused,
    /// since its adjacency set is frozen.
    pub fn add_edge(&mut self, from: ComponentName, to: ComponentName) -> bool {
        if self.expanded.contains(&from) {
            return false;
        }

        self.adjacency.entry(to.clone()).or_default();
        self.adjacency.entry(from).or_default().insert(to)
    }

    /// Marks a component as expanded. Returns `false` if it already was.
    pub fn mark_expanded(&mut self, name: &ComponentName) -> bool {
        self.adjacency.entry(name.clone()).or_default();
        self.expanded.insert(name.clone())
    }

    /// Components referenced but not yet expanded, in name order
    pub fn frontier(&self) -> Vec<ComponentName> {
        self.adjacency
            .keys()
            .filter(|name| !self.expanded.contains(*name))
            .cloned()
            .collect()
    }

    /// Merges the edges fetched for `queried` and marks every queried
    /// component expanded, including the ones that returned no edges.
    ///
    /// Edges whose source is not in `queried` are counted and dropped, so a
    /// round can only ever fill in the adjacency of the components it asked
    /// about.
    pub fn merge_round(
        &mut self,
        queried: &[ComponentName],
        edges: Vec<DependencyEdge>,
    ) -> MergeOutcome {
        let requested: BTreeSet<&ComponentName> = queried
            .iter()
            .filter(|name| !self.expanded.contains(*name))
            .collect();
        let mut outcome = MergeOutcome::default();

        for edge in edges {
            if !requested.contains(edge.from()) {
                outcome.ignored_edges += 1;
                continue;
            }

            let (from, to) = edge.into_parts();
            if !self.adjacency.contains_key(&to) {
                outcome.new_components += 1;
            }
            if self.add_edge(from, to) {
                outcome.edges_added += 1;
            }
        }

        let to_expand: Vec<ComponentName> = requested.into_iter().cloned().collect();
        for name in &to_expand {
            if self.mark_expanded(name) {
                outcome.expanded += 1;
            }
        }

        outcome
    }

    /// Direct dependencies of a component, if it is part of the graph
    pub fn dependencies_of(&self, name: &ComponentName) -> Option<&BTreeSet<ComponentName>> {
        self.adjacency.get(name)
    }

    pub fn has_dependencies(&self, name: &ComponentName) -> bool {
        self.adjacency
            .get(name)
            .is_some_and(|deps| !deps.is_empty())
    }

    pub fn component_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(|deps| deps.len()).sum()
    }

    pub fn expanded_count(&self) -> usize {
        self.expanded.len()
    }

    /// True once the frontier is empty
    pub fn is_fully_expanded(&self) -> bool {
        self.expanded.len() == self.adjacency.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> ComponentName {
        ComponentName::new(s.to_string()).unwrap()
    }

    fn edge(from: &str, to: &str) -> DependencyEdge {
        DependencyEdge::new(name(from), name(to))
    }

    #[test]
    fn test_new_graph_has_unexpanded_root() {
        let graph = DependencyGraph::new(name("pkgA"));

        assert_eq!(graph.root().as_str(), "pkgA");
        assert_eq!(graph.component_count(), 1);
        assert_eq!(graph.edge_count(), 0);
        assert!(!graph.is_expanded(&name("pkgA")));
        assert_eq!(graph.frontier(), vec![name("pkgA")]);
    }

    #[test]
    fn test_add_same_edge_twice_is_idempotent() {
        let mut graph = DependencyGraph::new(name("pkgA"));

        assert!(graph.add_edge(name("pkgA"), name("pkgB")));
        assert!(!graph.add_edge(name("pkgA"), name("pkgB")));

        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.dependencies_of(&name("pkgA")).unwrap().len(), 1);
    }

    #[test]
    fn test_add_edge_refused_for_expanded_component() {
        let mut graph = DependencyGraph::new(name("pkgA"));
        graph.mark_expanded(&name("pkgA"));

        assert!(!graph.add_edge(name("pkgA"), name("pkgB")));
        assert!(!graph.has_dependencies(&name("pkgA")));
        assert!(!graph.contains(&name("pkgB")));
    }

    #[test]
    fn test_merge_round_marks_queried_expanded() {
        let mut graph = DependencyGraph::new(name("pkgA"));

        let outcome = graph.merge_round(
            &[name("pkgA")],
            vec![edge("pkgA", "pkgB"), edge("pkgA", "pkgC")],
        );

        assert_eq!(outcome.edges_added, 2);
        assert_eq!(outcome.new_components, 2);
        assert_eq!(outcome.expanded, 1);
        assert!(graph.is_expanded(&name("pkgA")));
        assert_eq!(graph.frontier(), vec![name("pkgB"), name("pkgC")]);
    }

    #[test]
    fn test_merge_round_without_edges_still_expands() {
        let mut graph = DependencyGraph::new(name("leaf"));

        let outcome = graph.merge_round(&[name("leaf")], vec![]);

        assert_eq!(outcome.expanded, 1);
        assert!(graph.is_fully_expanded());
        assert!(graph.frontier().is_empty());
        assert!(!graph.has_dependencies(&name("leaf")));
    }

    #[test]
    fn test_merge_round_ignores_edges_from_unqueried_sources() {
        let mut graph = DependencyGraph::new(name("pkgA"));

        let outcome = graph.merge_round(
            &[name("pkgA")],
            vec![edge("pkgA", "pkgB"), edge("stranger", "pkgC")],
        );

        assert_eq!(outcome.edges_added, 1);
        assert_eq!(outcome.ignored_edges, 1);
        assert!(!graph.contains(&name("stranger")));
        assert!(!graph.contains(&name("pkgC")));
    }

    #[test]
    fn test_merge_round_does_not_touch_expanded_adjacency() {
        let mut graph = DependencyGraph::new(name("pkgA"));
        graph.merge_round(&[name("pkgA")], vec![edge("pkgA", "pkgB")]);

        // pkgA is already expanded; a second round naming it changes nothing
        let outcome = graph.merge_round(
            &[name("pkgA"), name("pkgB")],
            vec![edge("pkgA", "pkgZ"), edge("pkgB", "pkgA")],
        );

        assert_eq!(outcome.ignored_edges, 1);
        assert_eq!(outcome.expanded, 1);
        let deps: Vec<&str> = graph
            .dependencies_of(&name("pkgA"))
            .unwrap()
            .iter()
            .map(|n| n.as_str())
            .collect();
        assert_eq!(deps, vec!["pkgB"]);
    }

    #[test]
    fn test_cycle_reuses_existing_component() {
        let mut graph = DependencyGraph::new(name("pkgA"));
        graph.merge_round(&[name("pkgA")], vec![edge("pkgA", "pkgB")]);

        let outcome = graph.merge_round(&[name("pkgB")], vec![edge("pkgB", "pkgA")]);

        assert_eq!(outcome.new_components, 0);
        assert!(graph.is_fully_expanded());
        assert_eq!(graph.component_count(), 2);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_self_loop_is_recorded_once() {
        let mut graph = DependencyGraph::new(name("pkgA"));

        let outcome = graph.merge_round(
            &[name("pkgA")],
            vec![edge("pkgA", "pkgA"), edge("pkgA", "pkgA")],
        );

        assert_eq!(outcome.edges_added, 1);
        assert_eq!(outcome.new_components, 0);
        assert!(graph.is_fully_expanded());
        assert!(graph.has_dependencies(&name("pkgA")));
    }
}
