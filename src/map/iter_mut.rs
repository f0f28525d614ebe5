use std::iter::FusedIterator;

use super::Node;

/// A stack entry: the key and value of a node whose left subtree is still being visited, along
/// with its right subtree
type Pending<'a, K, V> = (&'a K, &'a mut V, Option<&'a mut Node<K, V>>);

/// An iterator over the entries of a map in ascending key order, with mutable references to the
/// values
pub struct IterMutInorder<'a, K, V> {
    stack: Vec<Pending<'a, K, V>>,
    remaining: usize,
}

impl<'a, K, V> IterMutInorder<'a, K, V> {
    pub(crate) fn new(root: Option<&'a mut Node<K, V>>, len: usize) -> Self {
        let mut iter = Self {stack: Vec::new(), remaining: len};
        iter.push_left_edge(root);
        iter
    }

    fn push_left_edge(&mut self, mut current: Option<&'a mut Node<K, V>>) {
        while let Some(node) = current {
            // Splitting the node into disjoint borrows of its fields lets the value be handed out
            // later while the left subtree is walked now
            let Node {key, value, left, right} = node;
            self.stack.push((&*key, value, right.as_deref_mut()));
            current = left.as_deref_mut();
        }
    }
}

impl<'a, K, V> Iterator for IterMutInorder<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        let (key, value, right) = self.stack.pop()?;
        self.push_left_edge(right);

        debug_assert!(self.remaining > 0);
        self.remaining -= 1;
        Some((key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K, V> ExactSizeIterator for IterMutInorder<'a, K, V> {}

impl<'a, K, V> FusedIterator for IterMutInorder<'a, K, V> {}
