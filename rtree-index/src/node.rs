//! Node and entry types, and the arena that owns every node of a tree.
//!
//! Nodes live in a slot vector owned by the tree and refer to each other by
//! [`NodeId`]. A child is owned by exactly one entry of its parent; the
//! `parent` link stored in every node is a plain index used for walking
//! upwards and owns nothing.

use crate::rect::Rect;

/// Slot index of a node in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

impl NodeId {
    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0
    }
}

/// A spatial index record stored in a node.
///
/// `bb` is always the bounding box of what the entry points to: the
/// object's own bounds for a leaf entry, or the MBR of the child's entries.
#[derive(Debug, Clone)]
pub(crate) enum Entry<T> {
    /// Entry of an internal node, pointing at a child node
    Node { bb: Rect, child: NodeId },
    /// Entry of a leaf node, holding a stored object
    Object { bb: Rect, obj: T },
}

impl<T> Entry<T> {
    #[inline]
    pub(crate) fn bb(&self) -> &Rect {
        match self {
            Entry::Node { bb, .. } | Entry::Object { bb, .. } => bb,
        }
    }

    #[inline]
    pub(crate) fn child(&self) -> Option<NodeId> {
        match self {
            Entry::Node { child, .. } => Some(*child),
            Entry::Object { .. } => None,
        }
    }
}

/// A tree node: either a leaf holding objects or an internal node holding
/// child references.
#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
    pub(crate) parent: Option<NodeId>,
    pub(crate) leaf: bool,
    pub(crate) entries: Vec<Entry<T>>,
}

impl<T> Node<T> {
    pub(crate) fn new(parent: Option<NodeId>, leaf: bool, entries: Vec<Entry<T>>) -> Self {
        Node {
            parent,
            leaf,
            entries,
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// MBR of this node's entries, `None` for an empty node.
    pub(crate) fn compute_bbox(&self) -> Option<Rect> {
        Rect::union_all(self.entries.iter().map(Entry::bb))
    }

    /// Position of the entry pointing at `child`.
    pub(crate) fn entry_index_of(&self, child: NodeId) -> Option<usize> {
        self.entries.iter().position(|e| e.child() == Some(child))
    }
}

/// Slot storage for nodes with reuse of freed slots.
#[derive(Debug, Clone)]
pub(crate) struct NodeArena<T> {
    slots: Vec<Option<Node<T>>>,
    free_slots: Vec<NodeId>,
}

impl<T> Default for NodeArena<T> {
    fn default() -> Self {
        NodeArena {
            slots: Vec::new(),
            free_slots: Vec::new(),
        }
    }
}

impl<T> NodeArena<T> {
    /// Stores `node`, reusing a freed slot when one is available.
    pub(crate) fn allocate(&mut self, node: Node<T>) -> NodeId {
        if let Some(id) = self.free_slots.pop() {
            self.slots[id.0] = Some(node);
            return id;
        }
        self.slots.push(Some(node));
        NodeId(self.slots.len() - 1)
    }

    /// Removes the node at `id` and returns it. The slot becomes reusable.
    pub(crate) fn free(&mut self, id: NodeId) -> Node<T> {
        match self.slots.get_mut(id.0).and_then(Option::take) {
            Some(node) => {
                self.free_slots.push(id);
                node
            }
            None => panic!("freeing unallocated node slot {}", id.0),
        }
    }

    /// The node at `id`, or `None` if the slot is free or out of range.
    pub(crate) fn try_get(&self, id: NodeId) -> Option<&Node<T>> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    #[inline]
    pub(crate) fn get(&self, id: NodeId) -> &Node<T> {
        match self.slots.get(id.0) {
            Some(Some(node)) => node,
            _ => panic!("dangling node reference {}", id.0),
        }
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut Node<T> {
        match self.slots.get_mut(id.0) {
            Some(Some(node)) => node,
            _ => panic!("dangling node reference {}", id.0),
        }
    }

    /// Number of live nodes.
    pub(crate) fn len(&self) -> usize {
        self.slots.len() - self.free_slots.len()
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free_slots.clear();
    }
}
