use std::fmt;
use std::io;

use super::BSTMap;

impl<K: fmt::Display, V: fmt::Display, O> BSTMap<K, V, O> {
    /// Writes an indented picture of the tree to `pen`, one node per line
    ///
    /// Each node is written as `key: value`, followed by its left and then its right subtree
    /// indented by two more spaces. A missing child of a node that has the other child is written
    /// as `<>`, as is the root of an empty tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstmap::BSTMap;
    ///
    /// let mut map = BSTMap::new();
    /// map.insert(2, "b");
    /// map.insert(3, "c");
    ///
    /// let mut out = Vec::new();
    /// map.dump(&mut out).unwrap();
    /// assert_eq!(String::from_utf8(out).unwrap(), "2: b\n  <>\n  3: c\n");
    /// ```
    pub fn dump<W: io::Write>(&self, pen: &mut W) -> io::Result<()> {
        let mut stack = vec![(self.root(), 0)];
        while let Some((node, depth)) = stack.pop() {
            let indent = depth * 2;
            let node = match node {
                Some(node) => node,
                None => {
                    writeln!(pen, "{:indent$}<>", "", indent = indent)?;
                    continue;
                },
            };

            writeln!(pen, "{:indent$}{}: {}", "", node.key(), node.value(), indent = indent)?;
            if !node.is_leaf() {
                stack.push((node.right(), depth + 1));
                stack.push((node.left(), depth + 1));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::BSTMap;

    fn dump_to_string(map: &BSTMap<i32, &str>) -> String {
        let mut out = Vec::new();
        map.dump(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn dump_empty() {
        let map = BSTMap::new();
        assert_eq!(dump_to_string(&map), "<>\n");
    }

    #[test]
    fn dump_tree() {
        let mut map = BSTMap::new();
        for &(key, value) in &[(5, "e"), (3, "c"), (8, "h"), (1, "a"), (9, "i")] {
            map.insert(key, value);
        }

        let expected = "\
5: e
  3: c
    1: a
    <>
  8: h
    <>
    9: i
";
        assert_eq!(dump_to_string(&map), expected);
    }
}
