//! Dependency graph validation for task lists.
//!
//! Task dependencies must form a DAG: every dependency refers to a task
//! created earlier in the list, and no chain of dependencies loops back on
//! itself. [`DependencyGraph::build`] checks both before a simulation run.

use petgraph::algo::is_cyclic_directed;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;

use crate::core::task::Task;
use crate::error::{Error, Result};

/// Directed graph over task ids, edges pointing from a prerequisite to the
/// task that depends on it.
pub struct DependencyGraph {
    graph: DiGraph<String, ()>,
    /// Index mapping from task id to NodeIndex for fast lookups.
    index: HashMap<String, NodeIndex>,
}

impl DependencyGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            index: HashMap::new(),
        }
    }

    /// Validate a task list and build its dependency graph.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Two tasks share an id
    /// - A dependency names a task not in the list
    /// - A dependency names the task itself or a task created later
    pub fn build(tasks: &[Task]) -> Result<Self> {
        let mut dag = Self::new();
        for task in tasks {
            dag.add_task(&task.id)?;
        }

        let position: HashMap<&str, usize> = tasks
            .iter()
            .enumerate()
            .map(|(i, t)| (t.id.as_str(), i))
            .collect();

        for (i, task) in tasks.iter().enumerate() {
            for dep in &task.dependencies {
                let dep_position = position
                    .get(dep.as_str())
                    .copied()
                    .ok_or_else(|| Error::TaskNotFound(dep.clone()))?;
                if dep_position >= i {
                    return Err(Error::Validation(format!(
                        "task {} depends on {}, which is not created earlier",
                        task.id, dep
                    )));
                }
                dag.add_dependency(&task.id, dep)?;
            }
        }

        Ok(dag)
    }

    /// Add a task node to the graph.
    ///
    /// # Errors
    ///
    /// Returns `Error::DuplicateTask` if the id is already present.
    pub fn add_task(&mut self, id: &str) -> Result<NodeIndex> {
        if self.index.contains_key(id) {
            return Err(Error::DuplicateTask(id.to_string()));
        }

        let node = self.graph.add_node(id.to_string());
        self.index.insert(id.to_string(), node);
        Ok(node)
    }

    /// Add a dependency edge: `depends_on` must complete before `task`.
    ///
    /// The edge is rolled back if it would close a cycle.
    ///
    /// # Errors
    ///
    /// Returns `Error::TaskNotFound` if either id is unknown, or
    /// `Error::DependencyCycle` if the edge would create a cycle.
    pub fn add_dependency(&mut self, task: &str, depends_on: &str) -> Result<()> {
        let task_node = self
            .index
            .get(task)
            .copied()
            .ok_or_else(|| Error::TaskNotFound(task.to_string()))?;
        let dep_node = self
            .index
            .get(depends_on)
            .copied()
            .ok_or_else(|| Error::TaskNotFound(depends_on.to_string()))?;

        let edge = self.graph.add_edge(dep_node, task_node, ());

        if is_cyclic_directed(&self.graph) {
            self.graph.remove_edge(edge);
            return Err(Error::DependencyCycle(task.to_string()));
        }

        Ok(())
    }

    /// Check if the graph contains a task.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Get the number of tasks in the graph.
    pub fn task_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Get the number of dependency edges in the graph.
    pub fn dependency_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Ids of the tasks that `id` depends on (prerequisites).
    pub fn dependencies_of(&self, id: &str) -> Vec<&str> {
        if let Some(&node) = self.index.get(id) {
            self.graph
                .neighbors_directed(node, petgraph::Direction::Incoming)
                .filter_map(|n| self.graph.node_weight(n))
                .map(String::as_str)
                .collect()
        } else {
            Vec::new()
        }
    }

    /// Ids of the tasks that depend on `id` (dependents).
    pub fn dependents_of(&self, id: &str) -> Vec<&str> {
        if let Some(&node) = self.index.get(id) {
            self.graph
                .neighbors_directed(node, petgraph::Direction::Outgoing)
                .filter_map(|n| self.graph.node_weight(n))
                .map(String::as_str)
                .collect()
        } else {
            Vec::new()
        }
    }
}

impl Default for DependencyGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for DependencyGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DependencyGraph")
            .field("tasks", &self.task_count())
            .field("dependencies", &self.dependency_count())
            .finish()
    }
}
