use std::cmp::Ordering;

use tracing::trace;

use crate::error::{MapError, Result};
use crate::order::TotalOrder;

use super::BSTMap;
use super::node::{Link, Node};

impl<K, V, O: TotalOrder<K>> BSTMap<K, V, O> {
    /// Removes a key from the map, returning the value at the key if the key was previously in the
    /// map
    ///
    /// Removing a key that is not in the map leaves the map untouched and returns `Ok(None)`.
    ///
    /// Only the node holding the key is discarded. If that node has two subtrees, one of them
    /// takes its place and the other is grafted onto the outermost edge of the replacement that
    /// faces it.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::InvalidArgument`] if the key is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstmap::BSTMap;
    ///
    /// let mut map = BSTMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.remove(&1), Ok(Some("a")));
    /// assert_eq!(map.remove(&1), Ok(None));
    /// ```
    pub fn remove<'k>(&mut self, key: impl Into<Option<&'k K>>) -> Result<Option<V>>
        where K: 'k,
    {
        let key = key.into().ok_or(MapError::InvalidArgument)?;

        let order = &self.order;
        // The slot (the root, or the left/right link of the parent) that owns the current node
        let mut link = &mut self.root;
        loop {
            let ordering = match link.as_deref() {
                Some(node) => order.compare(key, node.key()),
                None => return Ok(None),
            };
            if ordering == Ordering::Equal {
                break;
            }

            link = match link {
                Some(node) => node.link_mut(ordering),
                None => return Ok(None),
            };
        }

        let mut target = match link.take() {
            Some(target) => target,
            None => return Ok(None),
        };
        *link = detach_subtrees(order, &mut target);

        debug_assert!(self.len > 0);
        self.len -= 1;

        let (_, value) = (*target).into_entry();
        Ok(Some(value))
    }
}

/// Detaches both subtrees of a node that is being removed and returns the subtree that takes its
/// place in the tree
fn detach_subtrees<K, V, O>(order: &O, target: &mut Node<K, V>) -> Link<K, V>
    where O: TotalOrder<K>,
{
    match (target.left.take(), target.right.take()) {
        (None, None) => {
            trace!("removed leaf node");
            None
        },

        (None, Some(right)) => {
            trace!("removed node with only a right subtree");
            Some(right)
        },

        (Some(left), None) => {
            trace!("removed node with only a left subtree");
            Some(left)
        },

        (Some(left), Some(right)) => Some(join(order, left, right)),
    }
}

/// Joins the two subtrees of a removed node into a single subtree
///
/// Whichever subtree has the greater root replaces the removed node and keeps its own shape. The
/// other subtree is attached at the extreme position of the replacement: below its rightmost node
/// when the left subtree replaces, below its leftmost node when the right subtree replaces.
fn join<K, V, O>(order: &O, left: Box<Node<K, V>>, right: Box<Node<K, V>>) -> Box<Node<K, V>>
    where O: TotalOrder<K>,
{
    if order.compare(left.key(), right.key()) == Ordering::Greater {
        trace!(replacement = "left", "removed node with two subtrees");
        let mut replacement = left;
        graft_rightmost(&mut replacement, right);
        replacement

    } else {
        trace!(replacement = "right", "removed node with two subtrees");
        let mut replacement = right;
        graft_leftmost(&mut replacement, left);
        replacement
    }
}

/// Attaches `subtree` as the right child of the rightmost node of the tree rooted at `node`
fn graft_rightmost<K, V>(mut node: &mut Box<Node<K, V>>, subtree: Box<Node<K, V>>) {
    loop {
        match node.right {
            Some(ref mut next) => node = next,
            None => {
                node.right = Some(subtree);
                return;
            },
        }
    }
}

/// Attaches `subtree` as the left child of the leftmost node of the tree rooted at `node`
fn graft_leftmost<K, V>(mut node: &mut Box<Node<K, V>>, subtree: Box<Node<K, V>>) {
    loop {
        match node.left {
            Some(ref mut next) => node = next,
            None => {
                node.left = Some(subtree);
                return;
            },
        }
    }
}
