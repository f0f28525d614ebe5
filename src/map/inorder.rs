use std::iter::FusedIterator;

use super::Node;

/// An iterator over the entries of a map in ascending key order
///
/// The iterator keeps an explicit stack holding the path of nodes whose left subtrees are still
/// being visited, so it never recurses and does work only when asked for the next entry.
pub struct IterInorder<'a, K, V> {
    stack: Vec<&'a Node<K, V>>,
    remaining: usize,
}

impl<'a, K, V> Clone for IterInorder<'a, K, V> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

// See: https://www.geeksforgeeks.org/inorder-tree-traversal-without-recursion/
impl<'a, K, V> IterInorder<'a, K, V> {
    pub(crate) fn new(root: Option<&'a Node<K, V>>, len: usize) -> Self {
        let mut iter = Self {stack: Vec::new(), remaining: len};
        iter.push_left_edge(root);
        iter
    }

    /// Pushes `node` and all of the nodes reachable from it through left links
    fn push_left_edge(&mut self, mut current: Option<&'a Node<K, V>>) {
        while let Some(node) = current {
            self.stack.push(node);
            current = node.left();
        }
    }
}

impl<'a, K, V> Iterator for IterInorder<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_edge(node.right());

        debug_assert!(self.remaining > 0);
        self.remaining -= 1;
        Some((node.key(), node.value()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K, V> ExactSizeIterator for IterInorder<'a, K, V> {}

impl<'a, K, V> FusedIterator for IterInorder<'a, K, V> {}

#[cfg(test)]
mod tests {
    use crate::BSTMap;

    #[test]
    fn visits_in_ascending_order() {
        let mut map = BSTMap::new();
        for &key in &[5, 3, 8, 1, 4, 7, 9] {
            map.insert(key, key * 100);
        }

        let mut iter = map.iter();
        assert_eq!(iter.len(), 7);
        assert_eq!(iter.next(), Some((&1, &100)));
        assert_eq!(iter.next(), Some((&3, &300)));
        assert_eq!(iter.len(), 5);

        // Each clone resumes from where it was taken
        let rest: Vec<_> = iter.clone().map(|(&key, _)| key).collect();
        assert_eq!(rest, [4, 5, 7, 8, 9]);
        let rest: Vec<_> = iter.map(|(&key, _)| key).collect();
        assert_eq!(rest, [4, 5, 7, 8, 9]);
    }

    #[test]
    fn fresh_iterators_start_over() {
        let map: BSTMap<_, _> = (0..4).map(|i| (i, ())).collect();

        let mut iter = map.iter();
        assert_eq!(iter.by_ref().count(), 4);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);

        assert_eq!(map.iter().count(), 4);
    }
}
