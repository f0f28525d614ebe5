use std::fmt;
use std::mem;
use std::cmp::Ordering;

#[cfg(test)]
use static_assertions::const_assert_eq;

/// An owning link from a parent slot (or the root of the map) to a child node
pub(crate) type Link<K, V> = Option<Box<Node<K, V>>>;

// An empty link is represented by the null pointer, so a link costs no more than a `Box`
#[cfg(test)]
const_assert_eq!(mem::size_of::<Link<u64, u64>>(), mem::size_of::<usize>());

/// A single node of the binary search tree
///
/// Every node is exclusively owned by its parent (or by the map, for the root). Only the value of
/// a node can be modified from outside the map, since modifying the key or the links could
/// invalidate the ordering properties of the tree.
pub struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) left: Link<K, V>,
    pub(crate) right: Link<K, V>,
}

// Only this node is printed. Printing the subtrees would recurse once per level of the tree.
impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Node<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", &self.key)
            .field("value", &self.value)
            .field("has_left", &self.has_left())
            .field("has_right", &self.has_right())
            .finish()
    }
}

impl<K, V> Node<K, V> {
    pub(crate) fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            left: None,
            right: None,
        }
    }

    /// Returns the key of this node
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Returns the value of this node
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Returns the value of this node
    pub fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    /// Returns true if this node has a left subtree
    pub fn has_left(&self) -> bool {
        self.left.is_some()
    }

    /// Returns true if this node has a right subtree
    pub fn has_right(&self) -> bool {
        self.right.is_some()
    }

    /// Returns true if this node has no subtrees
    pub fn is_leaf(&self) -> bool {
        !self.has_left() && !self.has_right()
    }

    /// Returns the left child node (subtree) of this node, if any
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// Returns the right child node (subtree) of this node, if any
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Returns the link that a search for a key comparing as `ordering` against this node's key
    /// continues through: the left link for `Less`, the right link otherwise
    pub(crate) fn link_mut(&mut self, ordering: Ordering) -> &mut Link<K, V> {
        debug_assert_ne!(ordering, Ordering::Equal);
        match ordering {
            Ordering::Less => &mut self.left,
            _ => &mut self.right,
        }
    }

    /// Replaces the value of this node and returns the previous value
    pub(crate) fn replace_value(&mut self, value: V) -> V {
        mem::replace(&mut self.value, value)
    }

    /// Consumes a detached node, returning its key and value
    pub(crate) fn into_entry(self) -> (K, V) {
        debug_assert!(self.is_leaf(), "bug: subtrees must be detached before a node is consumed");
        (self.key, self.value)
    }
}
