use std::iter::FusedIterator;

use super::IterInorder;

/// An iterator over the keys of a map, in ascending order
pub struct Keys<'a, K, V> {
    inner: IterInorder<'a, K, V>,
}

impl<'a, K, V> Clone for Keys<'a, K, V> {
    fn clone(&self) -> Self {
        Self {inner: self.inner.clone()}
    }
}

impl<'a, K, V> Keys<'a, K, V> {
    pub(crate) fn new(inner: IterInorder<'a, K, V>) -> Self {
        Self {inner}
    }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, K, V> ExactSizeIterator for Keys<'a, K, V> {}

impl<'a, K, V> FusedIterator for Keys<'a, K, V> {}
