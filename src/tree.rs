//! An unbalanced binary search tree with owned nodes.
//!
//! Smaller elements go left, larger go right. Equal elements are never
//! inserted twice, so the tree holds a set of distinct values and the
//! in-order traversal is strictly ascending.

use std::cmp::Ordering;
use std::fmt;

struct Node<T> {
    elem: T,
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    fn new(elem: T) -> Box<Node<T>> {
        Box::new(Node {
            elem,
            left: None,
            right: None,
        })
    }

    fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// A binary search tree without balancing.
pub struct BinarySearchTree<T> {
    root: Option<Box<Node<T>>>,
    len: usize,
}

impl<T> BinarySearchTree<T> {
    /// Creates an empty tree.
    pub fn new() -> Self {
        BinarySearchTree { root: None, len: 0 }
    }

    /// Number of elements in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no elements.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Edges on the longest downward path from the root.
    ///
    /// Both an empty tree and a lone leaf have height 0, so the leaf
    /// case is detected explicitly instead of counting missing
    /// children.
    pub fn height(&self) -> usize {
        height(self.root.as_deref())
    }

    /// Number of nodes with no children. Empty tree: 0.
    pub fn leaf_count(&self) -> usize {
        leaf_count(self.root.as_deref())
    }

    /// Materializes the in-order traversal: every element, ascending.
    pub fn to_sorted_vec(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.len);
        collect_in_order(self.root.as_deref(), &mut out);
        out
    }
}

impl<T: Ord> BinarySearchTree<T> {
    /// Looks for `elem` by descending from the root.
    pub fn contains(&self, elem: &T) -> bool {
        let mut node = self.root.as_deref();
        while let Some(cur) = node {
            node = match elem.cmp(&cur.elem) {
                Ordering::Equal => return true,
                Ordering::Less => cur.left.as_deref(),
                Ordering::Greater => cur.right.as_deref(),
            };
        }
        false
    }

    /// Inserts `elem` at the first vacant slot on its search path.
    ///
    /// Returns false and leaves the tree untouched if an equal element
    /// is already present. An empty tree roots the new node directly.
    pub fn insert(&mut self, elem: T) -> bool {
        let mut slot = &mut self.root;
        while let Some(cur) = slot {
            slot = match elem.cmp(&cur.elem) {
                Ordering::Equal => return false,
                Ordering::Less => &mut cur.left,
                Ordering::Greater => &mut cur.right,
            };
        }
        *slot = Some(Node::new(elem));
        self.len += 1;
        true
    }
}

impl<T> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for BinarySearchTree<T> {
    fn drop(&mut self) {
        // A skewed tree would recurse once per node through the `Box`
        // links; drop with an explicit worklist instead.
        let mut pending = Vec::new();
        pending.extend(self.root.take());
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl<T: fmt::Display> fmt::Display for BinarySearchTree<T> {
    /// Renders the sorted form `[e1, e2, ..., en]`, or `[]` when empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, elem) in self.to_sorted_vec().into_iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", elem)?;
        }
        f.write_str("]")
    }
}

fn height<T>(node: Option<&Node<T>>) -> usize {
    match node {
        None => 0,
        Some(node) if node.is_leaf() => 0,
        Some(node) => {
            1 + height(node.left.as_deref()).max(height(node.right.as_deref()))
        }
    }
}

fn leaf_count<T>(node: Option<&Node<T>>) -> usize {
    match node {
        None => 0,
        Some(node) if node.is_leaf() => 1,
        Some(node) => leaf_count(node.left.as_deref()) + leaf_count(node.right.as_deref()),
    }
}

fn collect_in_order<'a, T>(node: Option<&'a Node<T>>, out: &mut Vec<&'a T>) {
    if let Some(node) = node {
        collect_in_order(node.left.as_deref(), out);
        out.push(&node.elem);
        collect_in_order(node.right.as_deref(), out);
    }
}
