use std::iter::FusedIterator;

use super::Node;

/// An owning iterator over the entries of a map in ascending key order
///
/// Every node is detached from its subtrees before it is yielded, so dropping the iterator (or
/// the entries it yields) never recurses into the tree.
pub struct IntoIter<K, V> {
    stack: Vec<Box<Node<K, V>>>,
    remaining: usize,
}

impl<K, V> IntoIter<K, V> {
    pub(crate) fn new(root: Option<Box<Node<K, V>>>, len: usize) -> Self {
        let mut iter = Self {stack: Vec::new(), remaining: len};
        iter.push_left_edge(root);
        iter
    }

    /// Pushes `node` and all of the nodes reachable from it through left links, detaching each of
    /// them from its left subtree along the way
    fn push_left_edge(&mut self, mut current: Option<Box<Node<K, V>>>) {
        while let Some(mut node) = current {
            current = node.left.take();
            self.stack.push(node);
        }
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        let mut node = self.stack.pop()?;
        self.push_left_edge(node.right.take());

        debug_assert!(self.remaining > 0);
        self.remaining -= 1;
        Some((*node).into_entry())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

impl<K, V> FusedIterator for IntoIter<K, V> {}

impl<K, V> Drop for IntoIter<K, V> {
    fn drop(&mut self) {
        // The nodes still on the stack own their right subtrees
        for _ in self {}
    }
}

#[cfg(test)]
mod tests {
    use crate::BSTMap;

    #[test]
    fn yields_owned_entries_in_order() {
        let mut map = BSTMap::new();
        for &key in &[5, 3, 8, 1, 4, 7, 9] {
            map.insert(key, key.to_string());
        }

        let mut iter = map.into_iter();
        assert_eq!(iter.len(), 7);
        assert_eq!(iter.next(), Some((1, "1".to_string())));

        let rest: Vec<_> = iter.map(|(key, _)| key).collect();
        assert_eq!(rest, [3, 4, 5, 7, 8, 9]);
    }

    #[test]
    fn dropping_part_way_releases_everything() {
        use std::rc::Rc;

        let shared = Rc::new(());
        let mut map = BSTMap::new();
        for key in 0..50 {
            map.insert(key, Rc::clone(&shared));
        }
        assert_eq!(Rc::strong_count(&shared), 51);

        let mut iter = map.into_iter();
        iter.next();
        iter.next();
        drop(iter);
        assert_eq!(Rc::strong_count(&shared), 1);
    }
}
