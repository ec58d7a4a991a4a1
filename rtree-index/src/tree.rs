//! The R-Tree type: construction, inspection and shared internal helpers.
//!
//! Mutation lives in `insert.rs` and `delete.rs`, queries in `search.rs` and
//! structural verification in `integrity.rs`.

use crate::config::{RTreeBuilder, RTreeConfig};
use crate::errors::RTreeResult;
use crate::node::{Entry, Node, NodeArena, NodeId};
use crate::rect::Rect;
use crate::spatial::Spatial;

/// A balanced spatial index of objects with axis-aligned bounding boxes.
///
/// The tree owns every node; nodes own the entries pointing at their
/// children and the objects stored in its leaves. Mutating operations take
/// `&mut self` and run to completion before returning, so a tree shared
/// between threads needs external synchronization (see
/// [`SharedRTree`](crate::SharedRTree)).
///
/// # Examples
///
/// ```rust
/// use rtree_index::{RTree, Rect};
///
/// let mut tree = RTree::new(2, 2, 4).unwrap();
/// for i in 0..10 {
///     let x = i as f64;
///     tree.insert(Rect::new(vec![x, x], vec![x + 1.0, x + 1.0]).unwrap()).unwrap();
/// }
/// assert_eq!(tree.size(), 10);
/// assert!(tree.depth() > 1);
///
/// let target = Rect::new(vec![3.0, 3.0], vec![4.0, 4.0]).unwrap();
/// assert!(tree.delete(&target).unwrap());
/// assert_eq!(tree.size(), 9);
/// ```
#[derive(Debug, Clone)]
pub struct RTree<T> {
    pub(crate) config: RTreeConfig,
    pub(crate) arena: NodeArena<T>,
    pub(crate) root: NodeId,
    /// Number of levels, 1 when the root is a leaf
    pub(crate) height: usize,
    pub(crate) size: usize,
}

/// Statistics about the shape of an R-Tree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RTreeStats {
    pub total_entries: usize,
    pub node_count: usize,
    pub leaf_count: usize,
    pub tree_height: usize,
}

impl<T: Spatial> Default for RTree<T> {
    fn default() -> Self {
        RTree::with_config(RTreeConfig::default())
    }
}

impl<T: Spatial> RTree<T> {
    /// Creates an empty tree for `dimensions`-dimensional objects whose
    /// nodes hold between `min_children` and `max_children` entries.
    pub fn new(dimensions: usize, min_children: usize, max_children: usize) -> RTreeResult<Self> {
        let config = RTreeConfig::new(dimensions, min_children, max_children)?;
        Ok(RTree::with_config(config))
    }

    /// Starts building a tree with the default configuration.
    pub fn builder() -> RTreeBuilder<T> {
        RTreeBuilder::new()
    }

    /// Creates an empty tree from an already validated configuration.
    pub(crate) fn with_config(config: RTreeConfig) -> Self {
        let mut arena = NodeArena::default();
        let root = arena.allocate(Node::new(None, true, Vec::new()));
        RTree {
            config,
            arena,
            root,
            height: 1,
            size: 0,
        }
    }

    pub fn config(&self) -> &RTreeConfig {
        &self.config
    }

    pub fn dimensions(&self) -> usize {
        self.config.dimensions()
    }

    /// Number of objects currently stored.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Number of levels from the root down to the leaves. Every leaf sits at
    /// this depth; an empty tree has depth 1.
    pub fn depth(&self) -> usize {
        self.height
    }

    /// Bounding box of everything stored, `None` for an empty tree.
    pub fn bounds(&self) -> Option<Rect> {
        self.arena.get(self.root).compute_bbox()
    }

    /// Iterates over all stored objects in no particular order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            arena: &self.arena,
            stack: vec![self.arena.get(self.root).entries.iter()],
        }
    }

    /// Removes every object, leaving an empty tree with the same configuration.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = self.arena.allocate(Node::new(None, true, Vec::new()));
        self.height = 1;
        self.size = 0;
    }

    pub fn stats(&self) -> RTreeStats {
        let mut leaf_count = 0;
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            let node = self.arena.get(id);
            if node.leaf {
                leaf_count += 1;
            } else {
                stack.extend(node.entries.iter().filter_map(Entry::child));
            }
        }

        RTreeStats {
            total_entries: self.size,
            node_count: self.arena.len(),
            leaf_count,
            tree_height: self.height,
        }
    }

    /// Parent of a non-root node.
    pub(crate) fn parent_of(&self, id: NodeId) -> NodeId {
        match self.arena.get(id).parent {
            Some(parent) => parent,
            None => panic!("node {} is detached from the tree", id.index()),
        }
    }

    /// MBR of a node that is known to hold entries.
    pub(crate) fn node_bbox(&self, id: NodeId) -> Rect {
        match self.arena.get(id).compute_bbox() {
            Some(bb) => bb,
            None => panic!("node {} has no entries to bound", id.index()),
        }
    }

    /// Index of the entry in `parent` that points at `child`.
    pub(crate) fn entry_index_in_parent(&self, parent: NodeId, child: NodeId) -> usize {
        match self.arena.get(parent).entry_index_of(child) {
            Some(idx) => idx,
            None => panic!(
                "node {} is not referenced by its parent {}",
                child.index(),
                parent.index()
            ),
        }
    }

    /// Recomputes the bounding box stored in `child`'s parent entry.
    pub(crate) fn refresh_parent_entry(&mut self, parent: NodeId, child: NodeId) {
        let idx = self.entry_index_in_parent(parent, child);
        let bb = self.node_bbox(child);
        match &mut self.arena.get_mut(parent).entries[idx] {
            Entry::Node { bb: slot, .. } => *slot = bb,
            Entry::Object { .. } => unreachable!("child lookup matched an object entry"),
        }
    }
}

/// Iterator over the objects of an [`RTree`], created by [`RTree::iter`].
pub struct Iter<'a, T> {
    arena: &'a NodeArena<T>,
    stack: Vec<std::slice::Iter<'a, Entry<T>>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        loop {
            let entries = self.stack.last_mut()?;
            match entries.next() {
                Some(Entry::Object { obj, .. }) => return Some(obj),
                Some(Entry::Node { child, .. }) => {
                    let arena = self.arena;
                    self.stack.push(arena.get(*child).entries.iter());
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

impl<'a, T: Spatial> IntoIterator for &'a RTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
