use super::ComponentName;

/// A directed "depends on" relation: `from` requires `to`.
///
/// Edges carry no release or type label of their own; they are only
/// meaningful within the `QueryScope` they were fetched under.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DependencyEdge {
    from: ComponentName,
    to: ComponentName,
}

impl DependencyEdge {
    pub fn new(from: ComponentName, to: ComponentName) -> Self {
        Self { from, to }
    }

    pub fn from(&self) -> &ComponentName {
        &self.from
    }

    pub fn to(&self) -> &ComponentName {
        &self.to
    }

    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }

    pub fn into_parts(self) -> (ComponentName, ComponentName) {
        (self.from, self.to)
    }
}
