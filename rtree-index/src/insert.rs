//! Insertion.
//!
//! Implemented per Section 3.2 of "R-trees: A Dynamic Index Structure for
//! Spatial Searching" by A. Guttman, Proceedings of ACM SIGMOD, p. 47-57, 1984.

use crate::errors::{RTreeError, RTreeResult};
use crate::node::{Entry, Node, NodeId};
use crate::rect::Rect;
use crate::spatial::Spatial;
use crate::split::quadratic_split;
use crate::tree::RTree;

impl<T: Spatial> RTree<T> {
    /// Inserts a spatial object into the tree.
    ///
    /// Fails with [`RTreeError::DimensionMismatch`] if the object's bounds do
    /// not have the tree's dimensionality; the tree is left untouched in that
    /// case. Overflowing nodes are split and the tree grows by one level
    /// when the root itself splits.
    pub fn insert(&mut self, obj: T) -> RTreeResult<()> {
        let bb = obj.bounds();
        RTreeError::check_dimensions(self.config.dimensions(), bb.dim())?;
        log::trace!("Inserting object with bounds {}", bb);

        self.insert_entry(Entry::Object { bb, obj }, 0);
        self.size += 1;
        Ok(())
    }

    /// Inserts every object of `objs`, stopping at the first failure.
    /// Objects inserted before the failure stay in the tree.
    pub fn insert_all<I>(&mut self, objs: I) -> RTreeResult<()>
    where
        I: IntoIterator<Item = T>,
    {
        for obj in objs {
            self.insert(obj)?;
        }
        Ok(())
    }

    /// Adds `entry` to a node `level` levels above the leaves (0 for object
    /// entries) and restores the tree invariants.
    pub(crate) fn insert_entry(&mut self, entry: Entry<T>, level: usize) {
        let node = self.choose_node(entry.bb(), level);
        if let Some(child) = entry.child() {
            self.arena.get_mut(child).parent = Some(node);
        }
        self.arena.get_mut(node).entries.push(entry);

        let split = if self.arena.get(node).len() > self.config.max_children() {
            Some(self.split_node(node))
        } else {
            None
        };

        if let Some(sibling) = self.adjust_tree(node, split) {
            self.grow_root(sibling);
        }
    }

    /// Descends from the root to the node at `level` whose entry needs the
    /// least enlargement to include `bb`, breaking ties by smaller area.
    fn choose_node(&self, bb: &Rect, level: usize) -> NodeId {
        let mut node = self.root;
        let mut node_level = self.height - 1;

        while node_level > level {
            let mut best: Option<(&Entry<T>, f64, f64)> = None;
            for entry in &self.arena.get(node).entries {
                let enlargement = entry.bb().enlargement(bb);
                let area = entry.bb().size();
                let better = match best {
                    None => true,
                    Some((_, best_enlargement, best_area)) => {
                        enlargement < best_enlargement
                            || (enlargement == best_enlargement && area < best_area)
                    }
                };
                if better {
                    best = Some((entry, enlargement, area));
                }
            }

            node = match best {
                Some((Entry::Node { child, .. }, _, _)) => *child,
                Some((Entry::Object { .. }, _, _)) => {
                    unreachable!("object entry above the leaf level")
                }
                None => panic!("internal node {} has no entries", node.index()),
            };
            node_level -= 1;
        }

        node
    }

    /// Splits an overflowing node in place and returns the new sibling,
    /// which shares the node's parent but is not yet linked from it.
    fn split_node(&mut self, id: NodeId) -> NodeId {
        let (parent, leaf, entries) = {
            let node = self.arena.get_mut(id);
            (node.parent, node.leaf, std::mem::take(&mut node.entries))
        };

        let (left, right) = quadratic_split(entries, self.config.min_children());
        log::debug!(
            "Split {} node {} into {} + {} entries",
            if leaf { "leaf" } else { "internal" },
            id.index(),
            left.len(),
            right.len()
        );

        let moved: Vec<NodeId> = right.iter().filter_map(Entry::child).collect();
        self.arena.get_mut(id).entries = left;
        let sibling = self.arena.allocate(Node::new(parent, leaf, right));
        for child in moved {
            self.arena.get_mut(child).parent = Some(sibling);
        }
        sibling
    }

    /// Walks from `node` up to the root, refreshing bounding boxes and
    /// linking split siblings into their parents. Returns the sibling of the
    /// root if the root itself was split.
    fn adjust_tree(&mut self, node: NodeId, split: Option<NodeId>) -> Option<NodeId> {
        let mut n = node;
        let mut nn = split;

        while n != self.root {
            let parent = self.parent_of(n);
            self.refresh_parent_entry(parent, n);

            if let Some(sibling) = nn.take() {
                let bb = self.node_bbox(sibling);
                self.arena.get_mut(sibling).parent = Some(parent);
                self.arena
                    .get_mut(parent)
                    .entries
                    .push(Entry::Node { bb, child: sibling });

                if self.arena.get(parent).len() > self.config.max_children() {
                    nn = Some(self.split_node(parent));
                }
            }

            n = parent;
        }

        nn
    }

    /// Puts a new root above the old root and its split sibling.
    fn grow_root(&mut self, sibling: NodeId) {
        let old_root = self.root;
        let entries = vec![
            Entry::Node {
                bb: self.node_bbox(old_root),
                child: old_root,
            },
            Entry::Node {
                bb: self.node_bbox(sibling),
                child: sibling,
            },
        ];

        let new_root = self.arena.allocate(Node::new(None, false, entries));
        self.arena.get_mut(old_root).parent = Some(new_root);
        self.arena.get_mut(sibling).parent = Some(new_root);
        self.root = new_root;
        self.height += 1;
        log::debug!("Root split, tree height is now {}", self.height);
    }
}
