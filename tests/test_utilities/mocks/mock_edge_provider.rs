use async_trait::async_trait;
use pdc_tangle::prelude::*;
use pdc_tangle::shared::error::ConnectivityError;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Mutex};

/// Mock EdgeProvider serving an in-memory relation
///
/// Clones share the recorded calls, so a test can keep one handle and move
/// another into the use case.
#[derive(Default, Clone)]
pub struct MockEdgeProvider {
    components: BTreeSet<String>,
    edges: BTreeMap<String, Vec<String>>,
    unreachable: bool,
    batches: Arc<Mutex<Vec<Vec<String>>>>,
    scopes: Arc<Mutex<Vec<(String, Vec<String>)>>>,
}

impl MockEdgeProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_component(mut self, name: &str) -> Self {
        self.components.insert(name.to_string());
        self
    }

    pub fn with_edge(mut self, from: &str, to: &str) -> Self {
        self.components.insert(from.to_string());
        self.components.insert(to.to_string());
        self.edges
            .entry(from.to_string())
            .or_default()
            .push(to.to_string());
        self
    }

    /// Every call fails as if the server could not be reached
    pub fn unreachable(mut self) -> Self {
        self.unreachable = true;
        self
    }

    pub fn batches(&self) -> Vec<Vec<String>> {
        self.batches.lock().unwrap().clone()
    }

    pub fn scopes(&self) -> Vec<(String, Vec<String>)> {
        self.scopes.lock().unwrap().clone()
    }

    fn failure(&self) -> ConnectivityError {
        ConnectivityError::Unreachable {
            server: "mock-pdc".to_string(),
            details: "connection refused".to_string(),
        }
    }
}

#[async_trait]
impl EdgeProvider for MockEdgeProvider {
    async fn component_exists(&self, name: &ComponentName) -> ProviderResult<bool> {
        if self.unreachable {
            return Err(self.failure());
        }
        Ok(self.components.contains(name.as_str()))
    }

    async fn fetch_edges(
        &self,
        names: &[ComponentName],
        scope: &QueryScope,
    ) -> ProviderResult<Vec<DependencyEdge>> {
        if self.unreachable {
            return Err(self.failure());
        }

        self.batches
            .lock()
            .unwrap()
            .push(names.iter().map(|n| n.to_string()).collect());
        self.scopes.lock().unwrap().push((
            scope.release().to_string(),
            scope.dependency_types().to_vec(),
        ));

        let mut result = Vec::new();
        for name in names {
            for to in self.edges.get(name.as_str()).into_iter().flatten() {
                let to = ComponentName::new(to.clone()).unwrap();
                result.push(DependencyEdge::new(name.clone(), to));
            }
        }
        Ok(result)
    }

    fn server(&self) -> &str {
        "mock-pdc"
    }
}
