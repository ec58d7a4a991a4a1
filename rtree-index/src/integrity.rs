//! Structural verification of an R-Tree.

use crate::node::{Entry, NodeId};
use crate::spatial::Spatial;
use crate::tree::RTree;

/// Result of an integrity check
#[derive(Debug, Clone, PartialEq)]
pub struct IntegrityReport {
    /// Whether every structural invariant holds
    pub is_valid: bool,
    /// One message per violation found
    pub errors: Vec<String>,
    /// Nodes reached from the root
    pub nodes_checked: usize,
    /// Distinct depths at which leaves were found, sorted
    pub leaf_depths: Vec<usize>,
}

impl IntegrityReport {
    pub fn new() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            nodes_checked: 0,
            leaf_depths: Vec::new(),
        }
    }

    fn fail(&mut self, message: String) {
        self.is_valid = false;
        self.errors.push(message);
    }
}

impl Default for IntegrityReport {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Spatial> RTree<T> {
    /// Walks the whole tree and reports every violated invariant:
    ///
    /// - all leaves sit at depth [`RTree::depth`]
    /// - non-root nodes hold between `min_children` and `max_children`
    ///   entries, an internal root at least two
    /// - every entry box is exactly the bounds of what it points to
    /// - parent links match the entries that own each node
    /// - the number of stored objects equals [`RTree::size`]
    ///
    /// A tree only ever mutated through its public API always passes.
    pub fn check_integrity(&self) -> IntegrityReport {
        let mut report = IntegrityReport::new();
        let mut objects = 0;
        let min = self.config.min_children();
        let max = self.config.max_children();

        if self.arena.try_get(self.root).is_some_and(|root| root.parent.is_some()) {
            report.fail(format!("Root node {} has a parent", self.root.index()));
        }

        let mut stack: Vec<(NodeId, usize)> = vec![(self.root, 1)];
        while let Some((id, depth)) = stack.pop() {
            let Some(node) = self.arena.try_get(id) else {
                report.fail(format!("Root {} is a dangling node reference", id.index()));
                continue;
            };
            report.nodes_checked += 1;

            if id == self.root {
                if !node.leaf && node.len() < 2 {
                    report.fail(format!(
                        "Internal root {} has {} entries",
                        id.index(),
                        node.len()
                    ));
                }
                if node.len() > max {
                    report.fail(format!("Root {} has {} entries", id.index(), node.len()));
                }
            } else if node.len() < min || node.len() > max {
                report.fail(format!(
                    "Node {} has {} entries, expected {}..={}",
                    id.index(),
                    node.len(),
                    min,
                    max
                ));
            }

            if node.leaf && !report.leaf_depths.contains(&depth) {
                report.leaf_depths.push(depth);
            }

            for entry in &node.entries {
                match entry {
                    Entry::Object { bb, obj } => {
                        objects += 1;
                        if !node.leaf {
                            report.fail(format!("Internal node {} holds an object", id.index()));
                        }
                        if *bb != obj.bounds() {
                            report.fail(format!(
                                "Object entry {} in node {} does not match its bounds",
                                bb,
                                id.index()
                            ));
                        }
                    }
                    Entry::Node { bb, child } => {
                        if node.leaf {
                            report.fail(format!("Leaf {} holds a child reference", id.index()));
                        }
                        let Some(child_node) = self.arena.try_get(*child) else {
                            report.fail(format!(
                                "Node {} holds a dangling child reference {}",
                                id.index(),
                                child.index()
                            ));
                            continue;
                        };
                        if child_node.parent != Some(id) {
                            report.fail(format!(
                                "Node {} does not point back at its parent {}",
                                child.index(),
                                id.index()
                            ));
                        }
                        match child_node.compute_bbox() {
                            Some(mbr) if mbr == *bb => {}
                            Some(mbr) => report.fail(format!(
                                "Entry for node {} is {}, node bounds are {}",
                                child.index(),
                                bb,
                                mbr
                            )),
                            None => report.fail(format!("Node {} is empty", child.index())),
                        }
                        stack.push((*child, depth + 1));
                    }
                }
            }
        }

        report.leaf_depths.sort_unstable();
        if report.leaf_depths.iter().any(|d| *d != self.height) {
            let depths = report.leaf_depths.clone();
            report.fail(format!(
                "Leaves found at depths {:?}, tree height is {}",
                depths, self.height
            ));
        }

        if objects != self.size {
            report.fail(format!(
                "Found {} objects, tree size is {}",
                objects, self.size
            ));
        }

        if report.nodes_checked != self.arena.len() {
            let checked = report.nodes_checked;
            report.fail(format!(
                "Reached {} nodes, {} are allocated",
                checked,
                self.arena.len()
            ));
        }

        if !report.is_valid {
            log::warn!("Integrity check found {} errors", report.errors.len());
        }
        report
    }
}
