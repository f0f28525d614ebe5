use std::iter::FusedIterator;

use super::Node;

/// An iterator that visits the left subtree, then the right subtree and finally the node itself
pub struct IterPostorder<'a, K, V> {
    /// Each entry is a node and whether its subtrees have already been scheduled
    stack: Vec<(&'a Node<K, V>, bool)>,
}

impl<'a, K, V> IterPostorder<'a, K, V> {
    pub(crate) fn new(root: Option<&'a Node<K, V>>) -> Self {
        Self {
            stack: root.map(|root| (root, false)).into_iter().collect(),
        }
    }

    /// Returns the next node in post-order
    pub(crate) fn next_node(&mut self) -> Option<&'a Node<K, V>> {
        while let Some((node, expanded)) = self.stack.pop() {
            if expanded {
                return Some(node);
            }

            self.stack.push((node, true));
            self.stack.extend(node.right().map(|right| (right, false)));
            self.stack.extend(node.left().map(|left| (left, false)));
        }

        None
    }
}

impl<'a, K, V> Iterator for IterPostorder<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.next_node().map(|node| (node.key(), node.value()))
    }
}

impl<'a, K, V> FusedIterator for IterPostorder<'a, K, V> {}
