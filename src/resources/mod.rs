/*!
 * Resource Allocation Graph
 * Tracks holds and requests per process and detects wait-for cycles
 *
 * Independent of the scheduling loop: callers record which resources a
 * process holds and which it is waiting on, then ask for a deadlock
 * check. A deadlock is a cycle in the combined graph of allocation
 * edges (resource -> holder) and request edges (process -> resource).
 */

use crate::core::types::Pid;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Resource identifier, assigned by the caller
pub type ResourceId = u32;

/// Vertex in the wait-for graph
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Node {
    Process(Pid),
    Resource(ResourceId),
}

/// Allocation and request state for a set of processes
#[derive(Debug, Clone, Default)]
pub struct ResourceGraph {
    allocations: BTreeMap<Pid, Vec<ResourceId>>,
    requests: BTreeMap<Pid, Vec<ResourceId>>,
}

impl ResourceGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record what a process currently holds and what it is waiting on.
    /// Replaces any previous record for the same process.
    pub fn record(&mut self, pid: Pid, allocated: Vec<ResourceId>, requested: Vec<ResourceId>) {
        self.allocations.insert(pid, allocated);
        self.requests.insert(pid, requested);
    }

    /// Look for a wait-for cycle; returns its vertices in order if found
    pub fn detect_deadlock(&self) -> Option<Vec<Node>> {
        let adjacency = self.adjacency();
        let mut done = BTreeSet::new();

        for &start in adjacency.keys() {
            if done.contains(&start) {
                continue;
            }
            let mut path = Vec::new();
            let mut on_path = BTreeSet::new();
            if let Some(cycle) =
                Self::find_cycle(start, &adjacency, &mut path, &mut on_path, &mut done)
            {
                return Some(cycle);
            }
        }
        None
    }

    /// Combined graph: holders block requesters
    fn adjacency(&self) -> BTreeMap<Node, Vec<Node>> {
        let mut adjacency: BTreeMap<Node, Vec<Node>> = BTreeMap::new();

        for (&pid, held) in &self.allocations {
            for &resource in held {
                adjacency
                    .entry(Node::Resource(resource))
                    .or_default()
                    .push(Node::Process(pid));
            }
        }
        for (&pid, wanted) in &self.requests {
            for &resource in wanted {
                adjacency
                    .entry(Node::Process(pid))
                    .or_default()
                    .push(Node::Resource(resource));
            }
        }
        adjacency
    }

    fn find_cycle(
        node: Node,
        adjacency: &BTreeMap<Node, Vec<Node>>,
        path: &mut Vec<Node>,
        on_path: &mut BTreeSet<Node>,
        done: &mut BTreeSet<Node>,
    ) -> Option<Vec<Node>> {
        path.push(node);
        on_path.insert(node);

        if let Some(neighbors) = adjacency.get(&node) {
            for &next in neighbors {
                if on_path.contains(&next) {
                    let start = path.iter().position(|n| *n == next).unwrap_or(0);
                    return Some(path[start..].to_vec());
                }
                if !done.contains(&next) {
                    if let Some(cycle) = Self::find_cycle(next, adjacency, path, on_path, done) {
                        return Some(cycle);
                    }
                }
            }
        }

        on_path.remove(&node);
        path.pop();
        done.insert(node);
        None
    }
}
