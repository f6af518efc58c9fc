//! Dependency graph construction and cycle detection.
//!
//! Both maps keep first-seen order so that traversal, and therefore the set
//! of tasks flagged as cyclic, is deterministic for a given input order.
//!
//! Duplicate ids are not rejected here: the dependency list of the last task
//! with a given id wins, while dependents counts and cycle flags are keyed by
//! id and so shared by every task carrying it. Use [`check_unique_ids`] to
//! refuse such batches up front.

use indexmap::IndexMap;
use std::collections::{HashMap, HashSet};

use crate::error::ValidationError;
use crate::task::{Task, TaskId};

/// Dependency and reverse-dependency view over one batch of tasks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DependencyGraph {
    /// task id -> ids it depends on
    deps: IndexMap<TaskId, Vec<TaskId>>,
    /// id -> number of tasks depending on it; covers dangling ids too
    dependents: IndexMap<TaskId, usize>,
}

impl DependencyGraph {
    /// Build the graph for a normalized batch.
    pub fn build(tasks: &[Task]) -> Self {
        let mut deps: IndexMap<TaskId, Vec<TaskId>> = IndexMap::with_capacity(tasks.len());
        let mut dependents: IndexMap<TaskId, usize> = IndexMap::with_capacity(tasks.len());

        for task in tasks {
            deps.insert(task.id.clone(), task.dependencies.clone());
            dependents.entry(task.id.clone()).or_insert(0);
        }

        for task in tasks {
            for dep in &task.dependencies {
                *dependents.entry(dep.clone()).or_insert(0) += 1;
            }
        }

        Self { deps, dependents }
    }

    /// Dependency map, in first-seen order.
    pub fn dependencies(&self) -> &IndexMap<TaskId, Vec<TaskId>> {
        &self.deps
    }

    /// Dependency ids declared by `id`, empty for unknown ids.
    pub fn dependencies_of(&self, id: &TaskId) -> &[TaskId] {
        self.deps.get(id).map_or(&[][..], Vec::as_slice)
    }

    /// Number of tasks in the batch that list `id` as a dependency.
    pub fn dependents_count(&self, id: &TaskId) -> usize {
        self.dependents.get(id).copied().unwrap_or(0)
    }

    /// Reverse-dependency counts, including ids only seen as dependencies.
    pub fn dependents(&self) -> &IndexMap<TaskId, usize> {
        &self.dependents
    }

    /// Whether `id` belongs to a task in the batch.
    pub fn contains(&self, id: &TaskId) -> bool {
        self.deps.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.deps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deps.is_empty()
    }

    /// Ids participating in at least one circular dependency chain.
    pub fn detect_cycles(&self) -> HashSet<TaskId> {
        detect_cycles(&self.deps)
    }
}

/// Find every id that lies on a path which loops back onto itself.
///
/// Depth-first from each unexplored id in map order. When an edge reaches an
/// id that is on the active path, every id on that path is flagged. Edges to
/// ids that are not keys of `deps` are skipped, and fully explored ids are
/// never entered again.
pub fn detect_cycles(deps: &IndexMap<TaskId, Vec<TaskId>>) -> HashSet<TaskId> {
    let mut visited: HashSet<&TaskId> = HashSet::with_capacity(deps.len());
    let mut on_path: HashSet<&TaskId> = HashSet::new();
    let mut in_cycle: HashSet<TaskId> = HashSet::new();
    // (node, index of the next edge to follow)
    let mut stack: Vec<(&TaskId, usize)> = Vec::new();

    for start in deps.keys() {
        if !visited.insert(start) {
            continue;
        }
        on_path.insert(start);
        stack.push((start, 0));

        while let Some(frame) = stack.last_mut() {
            let node = frame.0;
            let edges = deps.get(node).map_or(&[][..], Vec::as_slice);

            if frame.1 >= edges.len() {
                on_path.remove(node);
                stack.pop();
                continue;
            }

            let target = &edges[frame.1];
            frame.1 += 1;

            let Some((next, _)) = deps.get_key_value(target) else {
                continue;
            };

            if on_path.contains(next) {
                in_cycle.extend(on_path.iter().map(|id| (*id).clone()));
            } else if visited.insert(next) {
                on_path.insert(next);
                stack.push((next, 0));
            }
        }
    }

    in_cycle
}

/// Reject batches in which two tasks share an id.
pub fn check_unique_ids(tasks: &[Task]) -> Result<(), ValidationError> {
    let mut seen: HashMap<&TaskId, usize> = HashMap::with_capacity(tasks.len());
    for (index, task) in tasks.iter().enumerate() {
        if let Some(first) = seen.insert(&task.id, index) {
            return Err(ValidationError::DuplicateId {
                id: task.id.clone(),
                first,
                second: index,
            });
        }
    }
    Ok(())
}
