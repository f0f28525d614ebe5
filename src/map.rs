mod node;
mod remove;
mod preorder;
mod inorder;
mod postorder;
mod iter_mut;
mod into_iter;
mod keys;
mod values;
mod dump;

pub use node::*;
pub use preorder::*;
pub use inorder::*;
pub use postorder::*;
pub use iter_mut::*;
pub use into_iter::*;
pub use keys::*;
pub use values::*;

use std::fmt;
use std::mem;
use std::cmp::Ordering;
use std::iter::FromIterator;

use tracing::trace;

use crate::error::{MapError, Result};
use crate::order::{NaturalOrder, TotalOrder};

use node::Link;

/// An ordered map backed by an unbalanced binary search tree (BST)
///
/// BST properties: For each node with key `k`:
/// - The key of each node in the left subtree is less than `k`
/// - The key of each node in the right subtree is greater than `k`
///
/// Keys are compared with the [`TotalOrder`] `O` supplied at construction. Keys that compare equal
/// are the same key, so the map never holds two of them.
///
/// The tree is not rebalanced. Inserting keys in sorted order produces a tree with depth `n`, so
/// the time complexity of the keyed operations is `O(depth)`, which is `O(n)` in the worst case.
/// None of the operations or traversals recurse, so deep trees never exhaust the call stack.
///
/// Keyed operations that can be passed an absent key accept anything that converts into an
/// `Option` of the key. Passing a key directly works as you would expect. Passing `None` fails
/// with [`MapError::InvalidArgument`] and leaves the map untouched.
pub struct BSTMap<K, V, O = NaturalOrder> {
    root: Link<K, V>,
    order: O,
    len: usize,
}

impl<K, V, O: Default> Default for BSTMap<K, V, O> {
    fn default() -> Self {
        Self {
            root: None,
            order: O::default(),
            len: 0,
        }
    }
}

impl<K, V, O> Drop for BSTMap<K, V, O> {
    fn drop(&mut self) {
        // The default drop glue of `Box` would recurse once per level of the tree
        self.clear();
    }
}

impl<K: Ord, V> BSTMap<K, V> {
    /// Creates an empty `BSTMap` that orders its keys by their `Ord` implementation
    ///
    /// # Examples
    ///
    /// ```
    /// use bstmap::BSTMap;
    /// let mut map: BSTMap<&str, i32> = BSTMap::new();
    /// ```
    pub fn new() -> Self {
        Self::with_order(NaturalOrder)
    }
}

impl<K, V, O> BSTMap<K, V, O> {
    /// Returns the number of entries in the map (i.e. the number of nodes in the binary search
    /// tree)
    ///
    /// Time complexity: `O(1)`
    ///
    /// # Examples
    ///
    /// ```
    /// use bstmap::BSTMap;
    ///
    /// let mut map = BSTMap::new();
    /// assert_eq!(map.len(), 0);
    /// map.insert(1, "a");
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the map is empty
    ///
    /// Time complexity: `O(1)`
    pub fn is_empty(&self) -> bool {
        debug_assert_eq!(self.len == 0, self.root.is_none());
        self.len == 0
    }

    /// Returns the order used to compare keys
    pub fn order(&self) -> &O {
        &self.order
    }

    /// Clears the map, removing all entries
    ///
    /// The nodes are torn down one at a time, without recursion. The map can be reused afterwards.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstmap::BSTMap;
    ///
    /// let mut map = BSTMap::new();
    /// map.insert(1, "a");
    /// assert!(!map.is_empty());
    /// map.clear();
    /// assert!(map.is_empty());
    /// ```
    pub fn clear(&mut self) {
        if self.root.is_none() {
            return;
        }

        let len = mem::replace(&mut self.len, 0);
        trace!(len, "clearing map");
        drop(IntoIter::new(self.root.take(), len));
    }

    /// Returns an iterator over the entries of the map, in ascending key order
    pub fn iter(&self) -> IterInorder<K, V> {
        IterInorder::new(self.root(), self.len)
    }

    /// Returns an iterator over the entries of the map with mutable references to the values, in
    /// ascending key order
    pub fn iter_mut(&mut self) -> IterMutInorder<K, V> {
        IterMutInorder::new(self.root.as_deref_mut(), self.len)
    }

    /// Returns an iterator over the keys of the map, in ascending order
    ///
    /// # Examples
    ///
    /// ```
    /// use bstmap::BSTMap;
    ///
    /// let mut map = BSTMap::new();
    /// map.insert(2, "b");
    /// map.insert(3, "c");
    /// map.insert(1, "a");
    ///
    /// let keys: Vec<_> = map.keys().copied().collect();
    /// assert_eq!(keys, [1, 2, 3]);
    /// ```
    pub fn keys(&self) -> Keys<K, V> {
        Keys::new(self.iter())
    }

    /// Returns an iterator over the values of the map, in ascending order of their keys
    pub fn values(&self) -> Values<K, V> {
        Values::new(self.iter())
    }

    /// Returns an iterator over mutable references to the values of the map, in ascending order of
    /// their keys
    pub fn values_mut(&mut self) -> ValuesMut<K, V> {
        ValuesMut::new(self.iter_mut())
    }

    /// Calls `action` with every key-value pair of the map, in ascending key order
    ///
    /// # Examples
    ///
    /// ```
    /// use bstmap::BSTMap;
    ///
    /// let mut map = BSTMap::new();
    /// map.insert("b", 2);
    /// map.insert("a", 1);
    ///
    /// let mut seen = Vec::new();
    /// map.for_each(|key, value| seen.push(format!("{}={}", key, value)));
    /// assert_eq!(seen, ["a=1", "b=2"]);
    /// ```
    pub fn for_each<F>(&self, mut action: F)
        where F: FnMut(&K, &V),
    {
        for (key, value) in self.iter() {
            action(key, value);
        }
    }

    /// Performs a pre-order traversal of the tree
    pub fn iter_preorder(&self) -> IterPreorder<K, V> {
        IterPreorder::new(self.root())
    }

    /// Performs an in-order traversal of the tree
    pub fn iter_inorder(&self) -> IterInorder<K, V> {
        self.iter()
    }

    /// Performs a post-order traversal of the tree
    pub fn iter_postorder(&self) -> IterPostorder<K, V> {
        IterPostorder::new(self.root())
    }

    /// Returns the root node of the tree, or `None` if the tree is empty
    ///
    /// Note that the root can be **any** node inserted into the tree. Removals may also move
    /// entire subtrees around. For a guaranteed ordering, use the various iteration methods.
    ///
    /// This is a low-level API meant to be used for implementing traversals. The inner structure of
    /// the tree can be anything that satisfies the BST properties.
    pub fn root(&self) -> Option<&Node<K, V>> {
        self.root.as_deref()
    }
}

impl<K, V, O: TotalOrder<K>> BSTMap<K, V, O> {
    /// Creates an empty `BSTMap` that orders its keys with `order`
    ///
    /// # Examples
    ///
    /// ```
    /// use bstmap::BSTMap;
    /// use bstmap::order::{NaturalOrder, ReverseOrder};
    ///
    /// let mut map = BSTMap::with_order(ReverseOrder(NaturalOrder));
    /// map.insert(1, "a");
    /// map.insert(2, "b");
    ///
    /// let keys: Vec<_> = map.keys().copied().collect();
    /// assert_eq!(keys, [2, 1]);
    /// ```
    pub fn with_order(order: O) -> Self {
        Self {
            root: None,
            order,
            len: 0,
        }
    }

    /// Associates `value` with `key`
    ///
    /// Returns the previous value if the key was already present in an existing node or `None` if
    /// a new node was inserted.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::InvalidArgument`] if the key is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstmap::{BSTMap, MapError};
    ///
    /// let mut map = BSTMap::new();
    /// assert_eq!(map.set(37, "a"), Ok(None));
    /// assert_eq!(map.set(37, "b"), Ok(Some("a")));
    /// assert_eq!(map.set(None, "c"), Err(MapError::InvalidArgument));
    /// assert_eq!(map.get(&37), Ok(&"b"));
    /// ```
    pub fn set(&mut self, key: impl Into<Option<K>>, value: V) -> Result<Option<V>> {
        let key = key.into().ok_or(MapError::InvalidArgument)?;
        Ok(self.insert(key, value))
    }

    /// Inserts a new value into the binary search tree
    ///
    /// Returns the previous value if the key was already present in an existing node or `None` if
    /// a new node was inserted.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstmap::BSTMap;
    ///
    /// let mut map = BSTMap::new();
    /// # assert!(map.is_empty());
    /// assert_eq!(map.insert(37, "a"), None);
    /// assert!(!map.is_empty());
    ///
    /// map.insert(37, "b");
    /// assert_eq!(map.insert(37, "c"), Some("b"));
    /// assert_eq!(map.try_get(&37), Some(&"c"));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let order = &self.order;
        let mut current = match self.root.as_deref_mut() {
            Some(root) => root,
            None => {
                debug_assert_eq!(self.len, 0);
                self.root = Some(Box::new(Node::new(key, value)));
                self.len = 1;
                trace!(len = self.len, "inserted root node");

                return None;
            },
        };

        loop {
            match order.compare(&key, current.key()) {
                Ordering::Equal => {
                    // Replacing, so `self.len` does not change
                    trace!(len = self.len, "replaced value of existing node");
                    return Some(current.replace_value(value));
                },

                ordering => {
                    let link = current.link_mut(ordering);
                    match link {
                        Some(child) => current = &mut **child,

                        // Key not found, insert where we stopped
                        None => {
                            *link = Some(Box::new(Node::new(key, value)));
                            break;
                        },
                    }
                },
            }
        }

        self.len += 1;
        trace!(len = self.len, "inserted node");

        // A new node was inserted
        None
    }

    /// Returns a reference to the value corresponding to the given key
    ///
    /// Time complexity: `O(depth)`
    ///
    /// # Errors
    ///
    /// Returns [`MapError::InvalidArgument`] if the key is absent and [`MapError::KeyNotFound`] if
    /// no node in the tree has the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstmap::{BSTMap, MapError};
    ///
    /// let mut map = BSTMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.get(&1), Ok(&"a"));
    /// assert_eq!(map.get(&2), Err(MapError::KeyNotFound));
    /// assert_eq!(map.get(None), Err(MapError::InvalidArgument));
    /// ```
    pub fn get<'k>(&self, key: impl Into<Option<&'k K>>) -> Result<&V>
        where K: 'k,
    {
        let key = key.into().ok_or(MapError::InvalidArgument)?;
        self.try_get(key).ok_or(MapError::KeyNotFound)
    }

    /// Returns a mutable reference to the value corresponding to the given key
    ///
    /// # Errors
    ///
    /// Same as [`get`](Self::get).
    ///
    /// # Examples
    ///
    /// ```
    /// use bstmap::BSTMap;
    ///
    /// let mut map = BSTMap::new();
    /// map.insert(1, "a");
    /// if let Ok(x) = map.get_mut(&1) {
    ///     *x = "b";
    /// }
    /// assert_eq!(map.get(&1), Ok(&"b"));
    /// ```
    pub fn get_mut<'k>(&mut self, key: impl Into<Option<&'k K>>) -> Result<&mut V>
        where K: 'k,
    {
        let key = key.into().ok_or(MapError::InvalidArgument)?;

        let order = &self.order;
        let mut current = self.root.as_deref_mut();
        while let Some(node) = current.take() {
            match order.compare(key, node.key()) {
                Ordering::Less => current = node.left.as_deref_mut(),
                Ordering::Greater => current = node.right.as_deref_mut(),
                Ordering::Equal => return Ok(node.value_mut()),
            }
        }

        Err(MapError::KeyNotFound)
    }

    /// Returns a reference to the value corresponding to the given key, or `None` if no such key
    /// exists in the binary search tree
    ///
    /// Time complexity: `O(depth)`
    pub fn try_get(&self, key: &K) -> Option<&V> {
        self.find(key).map(Node::value)
    }

    /// Returns `true` if the map contains a value for the specified key
    ///
    /// Time complexity: `O(depth)`
    ///
    /// # Examples
    ///
    /// ```
    /// use bstmap::BSTMap;
    ///
    /// let mut map = BSTMap::new();
    /// map.insert(1, "a");
    /// assert!(map.contains_key(&1));
    /// assert!(!map.contains_key(&2));
    /// ```
    pub fn contains_key(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Returns the entry with the smallest key, or `None` if the map is empty
    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        let mut node = self.root()?;
        while let Some(left) = node.left() {
            node = left;
        }

        Some((node.key(), node.value()))
    }

    /// Returns the entry with the largest key, or `None` if the map is empty
    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        let mut node = self.root()?;
        while let Some(right) = node.right() {
            node = right;
        }

        Some((node.key(), node.value()))
    }

    fn find(&self, key: &K) -> Option<&Node<K, V>> {
        let mut current = self.root();
        while let Some(node) = current {
            match self.order.compare(key, node.key()) {
                Ordering::Less => current = node.left(),
                Ordering::Greater => current = node.right(),
                Ordering::Equal => return Some(node),
            }
        }

        None
    }

    /// Panics if any BST property is violated or if `len` does not match the number of nodes
    #[cfg(test)]
    pub(crate) fn assert_invariants(&self)
        where K: fmt::Debug,
    {
        let mut count = 0;
        let mut stack: Vec<(&Node<K, V>, Option<&K>, Option<&K>)> = self.root()
            .map(|root| (root, None, None))
            .into_iter()
            .collect();

        while let Some((node, lower, upper)) = stack.pop() {
            count += 1;

            if let Some(lower) = lower {
                assert_eq!(self.order.compare(lower, node.key()), Ordering::Less,
                    "{:?} is in the right subtree of {:?}", node.key(), lower);
            }
            if let Some(upper) = upper {
                assert_eq!(self.order.compare(node.key(), upper), Ordering::Less,
                    "{:?} is in the left subtree of {:?}", node.key(), upper);
            }

            let key = node.key();
            stack.extend(node.left().map(|left| (left, lower, Some(key))));
            stack.extend(node.right().map(|right| (right, Some(key), upper)));
        }

        assert_eq!(count, self.len, "length does not match the number of reachable nodes");
    }
}

impl<K, V, O> Clone for BSTMap<K, V, O>
    where K: Clone,
          V: Clone,
          O: Clone,
{
    fn clone(&self) -> Self {
        // Post-order visits both subtrees of a node right before the node itself, so their copies
        // are always the last (at most) two entries of `built`
        let mut built: Vec<Box<Node<K, V>>> = Vec::new();
        let mut nodes = IterPostorder::new(self.root());
        while let Some(node) = nodes.next_node() {
            let mut copy = Box::new(Node::new(node.key().clone(), node.value().clone()));
            if node.has_right() {
                copy.right = built.pop();
            }
            if node.has_left() {
                copy.left = built.pop();
            }
            built.push(copy);
        }

        let root = built.pop();
        debug_assert!(built.is_empty());

        Self {
            root,
            order: self.order.clone(),
            len: self.len,
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug, O> fmt::Debug for BSTMap<K, V, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: PartialEq, V: PartialEq, O> PartialEq for BSTMap<K, V, O> {
    fn eq(&self, other: &Self) -> bool {
        // We can't just compare the binary trees structurally, since they may be structured
        // differently while still having all the same elements (e.g. if insertion order is
        // different). Instead, we use in-order traversal since we know that that is guaranteed to
        // produce the elements in sorted order. If their sorted orders are equal, the maps are
        // equal.

        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq, O> Eq for BSTMap<K, V, O> {}

impl<K, V, O: TotalOrder<K>> Extend<(K, V)> for BSTMap<K, V, O> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V, O: TotalOrder<K> + Default> FromIterator<(K, V)> for BSTMap<K, V, O> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::default();
        map.extend(iter);
        map
    }
}

impl<'a, K, V, O> IntoIterator for &'a BSTMap<K, V, O> {
    type Item = (&'a K, &'a V);
    type IntoIter = IterInorder<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V, O> IntoIterator for &'a mut BSTMap<K, V, O> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMutInorder<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<K, V, O> IntoIterator for BSTMap<K, V, O> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(mut self) -> Self::IntoIter {
        let len = mem::replace(&mut self.len, 0);
        IntoIter::new(self.root.take(), len)
    }
}
