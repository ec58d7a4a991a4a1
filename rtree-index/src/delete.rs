//! Deletion and tree condensation.
//!
//! Implemented per Section 3.3 of "R-trees: A Dynamic Index Structure for
//! Spatial Searching" by A. Guttman, Proceedings of ACM SIGMOD, p. 47-57, 1984.

use crate::errors::{RTreeError, RTreeResult};
use crate::node::{Entry, NodeId};
use crate::rect::Rect;
use crate::spatial::Spatial;
use crate::tree::RTree;

impl<T: Spatial + PartialEq> RTree<T> {
    /// Removes an object from the tree.
    ///
    /// Returns `Ok(true)` if a stored object equal to `obj` was found and
    /// removed, `Ok(false)` if there was none. Fails with
    /// [`RTreeError::DimensionMismatch`] if `obj` has the wrong
    /// dimensionality.
    pub fn delete(&mut self, obj: &T) -> RTreeResult<bool> {
        Ok(self.remove(obj)?.is_some())
    }

    /// Removes an object from the tree and returns the stored value.
    ///
    /// Nodes left with fewer than `min_children` entries are dissolved and
    /// their entries reinserted at their original level; the root is
    /// collapsed while it is an internal node with a single child.
    pub fn remove(&mut self, obj: &T) -> RTreeResult<Option<T>> {
        let bb = obj.bounds();
        RTreeError::check_dimensions(self.config.dimensions(), bb.dim())?;
        log::trace!("Deleting object with bounds {}", bb);

        let Some((leaf, idx)) = self.find_leaf(&bb, obj) else {
            return Ok(None);
        };

        let removed = self.arena.get_mut(leaf).entries.remove(idx);
        self.condense_tree(leaf);
        self.size -= 1;

        match removed {
            Entry::Object { obj, .. } => Ok(Some(obj)),
            Entry::Node { .. } => unreachable!("leaf held a node entry"),
        }
    }

    /// Locates the leaf holding `obj` and the index of its entry. Every
    /// subtree whose box contains `bb` is searched.
    fn find_leaf(&self, bb: &Rect, obj: &T) -> Option<(NodeId, usize)> {
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            let node = self.arena.get(id);
            if node.leaf {
                let found = node.entries.iter().position(|e| match e {
                    Entry::Object { obj: stored, .. } => stored == obj,
                    Entry::Node { .. } => false,
                });
                if let Some(idx) = found {
                    return Some((id, idx));
                }
                continue;
            }

            // reversed so that entries are visited in order
            for entry in node.entries.iter().rev() {
                if let Entry::Node { bb: entry_bb, child } = entry {
                    if entry_bb.contains(bb) {
                        stack.push(*child);
                    }
                }
            }
        }
        None
    }
}

impl<T: Spatial> RTree<T> {
    /// Walks from `leaf` to the root after a removal. Underfull nodes are
    /// unlinked and their entries reinserted at the level they came from;
    /// other nodes get their parent entry's box refreshed.
    fn condense_tree(&mut self, leaf: NodeId) {
        let mut orphans: Vec<(Entry<T>, usize)> = Vec::new();
        let mut n = leaf;
        let mut level = 0;

        while n != self.root {
            let parent = self.parent_of(n);

            if self.arena.get(n).len() < self.config.min_children() {
                let idx = self.entry_index_in_parent(parent, n);
                self.arena.get_mut(parent).entries.remove(idx);

                let node = self.arena.free(n);
                log::debug!(
                    "Condensing underfull node {} at level {} with {} entries",
                    n.index(),
                    level,
                    node.len()
                );
                for entry in node.entries {
                    if let Some(child) = entry.child() {
                        self.arena.get_mut(child).parent = None;
                    }
                    orphans.push((entry, level));
                }
            } else {
                self.refresh_parent_entry(parent, n);
            }

            n = parent;
            level += 1;
        }

        // subtrees first, so that object entries see the final shape
        orphans.sort_by(|a, b| b.1.cmp(&a.1));
        for (entry, level) in orphans {
            self.insert_entry(entry, level);
        }

        self.collapse_root();
    }

    /// Replaces an internal root that has a single child by that child.
    fn collapse_root(&mut self) {
        loop {
            let root = self.arena.get(self.root);
            if root.leaf || root.len() != 1 {
                return;
            }

            let child = match root.entries[0].child() {
                Some(child) => child,
                None => unreachable!("internal root held an object entry"),
            };
            self.arena.free(self.root);
            self.arena.get_mut(child).parent = None;
            self.root = child;
            self.height -= 1;
            log::debug!("Collapsed root, tree height is now {}", self.height);
        }
    }
}
