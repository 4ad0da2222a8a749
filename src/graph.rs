//! Dependency graph engine
//!
//! Owns the directed "requires" edges between bundles as an adjacency list
//! in insertion order. Edge insertion is cycle-safe: validation (self-edge,
//! unknown endpoints, reachability) completes before any mutation, so no
//! operation ever observes a cyclic graph.
//!
//! The reverse (dependants) relation is always derived by scanning the edge
//! set, never stored as a second mapping. O(E) per lookup is fine at the
//! expected scale and removes a whole class of dual-bookkeeping desyncs.

use std::collections::HashSet;

use crate::error::{Result, cyclic_dependency, self_dependency, unknown_bundle};
use crate::store::BundleStore;

/// Directed dependency edges: dependant -> ordered set of dependencies
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    edges: Vec<(String, Vec<String>)>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an edge `dependant -> dependency`.
    ///
    /// Fails on self-edges, unknown endpoints, and edges that would close a
    /// cycle (detected by depth-first reachability from `dependency` before
    /// anything is mutated). Inserting an existing edge is a no-op.
    pub fn add_dependency(
        &mut self,
        store: &BundleStore,
        dependant: &str,
        dependency: &str,
    ) -> Result<()> {
        if dependant == dependency {
            return Err(self_dependency(dependant));
        }
        for endpoint in [dependant, dependency] {
            if !store.contains(endpoint) {
                return Err(unknown_bundle(endpoint));
            }
        }
        if self.reachable_from(dependency).contains(&dependant.to_string()) {
            return Err(cyclic_dependency(dependant, dependency));
        }

        match self.edges.iter_mut().find(|(name, _)| name == dependant) {
            Some((_, deps)) => {
                if !deps.iter().any(|d| d == dependency) {
                    deps.push(dependency.to_string());
                }
            }
            None => self
                .edges
                .push((dependant.to_string(), vec![dependency.to_string()])),
        }
        Ok(())
    }

    /// Direct dependencies of a bundle, in insertion order.
    ///
    /// Unknown names yield an empty slice rather than an error.
    pub fn dependencies_of(&self, name: &str) -> &[String] {
        self.edges
            .iter()
            .find(|(dependant, _)| dependant == name)
            .map(|(_, deps)| deps.as_slice())
            .unwrap_or(&[])
    }

    /// Bundles that directly require `name`, derived by scanning all edges
    pub fn dependants_of(&self, name: &str) -> Vec<String> {
        self.edges
            .iter()
            .filter(|(_, deps)| deps.iter().any(|d| d == name))
            .map(|(dependant, _)| dependant.clone())
            .collect()
    }

    /// Whether any bundle other than `excluding` still requires `name`
    pub fn is_used_by_others(&self, name: &str, excluding: Option<&str>) -> bool {
        self.dependants_of(name)
            .iter()
            .any(|d| Some(d.as_str()) != excluding)
    }

    /// Drop the bundle's own edge entry and strip it from every other
    /// bundle's dependency set. Called after the bundle has left the store.
    pub fn remove_bundle_edges(&mut self, name: &str) {
        self.edges.retain(|(dependant, _)| dependant != name);
        for (_, deps) in &mut self.edges {
            deps.retain(|d| d != name);
        }
    }

    /// Transitive dependency closure of `name`, depth-first.
    ///
    /// Carries a visited set so the walk terminates even if a hand-edited
    /// state file smuggled in a cycle.
    pub fn reachable_from(&self, name: &str) -> Vec<String> {
        let mut visited = HashSet::new();
        let mut order = Vec::new();
        self.visit(name, &mut visited, &mut order);
        order
    }

    fn visit(&self, name: &str, visited: &mut HashSet<String>, order: &mut Vec<String>) {
        for dep in self.dependencies_of(name) {
            if visited.insert(dep.clone()) {
                order.push(dep.clone());
                self.visit(dep, visited, order);
            }
        }
    }

    /// Insert an edge entry without validation.
    ///
    /// Only for rebuilding the graph from a persisted state file; traversals
    /// stay cycle-safe regardless of what the file contained.
    pub(crate) fn insert_raw(&mut self, dependant: String, dependencies: Vec<String>) {
        if dependencies.is_empty() {
            return;
        }
        self.edges.push((dependant, dependencies));
    }
}
