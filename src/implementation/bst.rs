use crate::compare::{Comparator, NaturalOrder};
use crate::error::{ErrorKind, Result};
use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;
use std::iter::FromIterator;

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// An unbalanced binary search tree.
///
/// Values that are ordered before a node are stored in its left subtree, all others in its right subtree.
/// In particular, duplicates are stored in the right subtree.
/// All operations walk the tree with explicit stacks and queues, so a degenerate tree does not overflow the call stack.
pub struct BinarySearchTree<T, C = NaturalOrder> {
    root: Link<T>,
    comparator: C,
}

impl<T: Ord> BinarySearchTree<T> {
    /// Creates an empty tree ordered by the `Ord` implementation of the values.
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<T, C: Comparator<T> + Default> Default for BinarySearchTree<T, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T, C: Comparator<T>> BinarySearchTree<T, C> {
    /// Creates an empty tree ordered by the given comparator.
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            root: None,
            comparator,
        }
    }

    /// Inserts the value as a new leaf.
    pub fn add(&mut self, value: T) {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = if self.comparator.is_less(&value, &node.value) {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *link = Some(Box::new(Node::new(value)));
    }

    /// Returns true if the tree contains a value that compares equal to the given value.
    pub fn contains(&self, value: &T) -> bool {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match self.comparator.compare(value, &node.value) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return true,
            };
        }
        false
    }

    /// Returns the value stored at the root, or `None` if the tree is empty.
    pub fn get_first(&self) -> Option<&T> {
        self.root.as_ref().map(|root| &root.value)
    }

    /// Removes the root and returns its value.
    pub fn remove_first(&mut self) -> Result<T> {
        Self::unlink(&mut self.root).ok_or_else(|| ErrorKind::EmptyTree.into())
    }

    /// Removes the first node found from the root whose value compares equal to the given value.
    /// Returns false if there is no such node.
    pub fn remove(&mut self, value: &T) -> bool {
        let mut link = &mut self.root;
        loop {
            let ordering = match link {
                Some(node) => self.comparator.compare(value, &node.value),
                None => return false,
            };

            match ordering {
                Ordering::Equal => break,
                Ordering::Less => {
                    if let Some(node) = link {
                        link = &mut node.left;
                    }
                }
                Ordering::Greater => {
                    if let Some(node) = link {
                        link = &mut node.right;
                    }
                }
            }
        }

        Self::unlink(link).is_some()
    }

    /// Returns the values in pre-order, i.e. each node before its left subtree, and the left subtree before the right subtree.
    pub fn pre_order_traversal(&self) -> Vec<&T> {
        let mut result = Vec::new();
        let mut stack: Vec<&Node<T>> = self.root.as_deref().into_iter().collect();

        while let Some(node) = stack.pop() {
            result.push(&node.value);
            stack.extend(node.right.as_deref());
            stack.extend(node.left.as_deref());
        }
        result
    }

    /// Returns the values in in-order, i.e. in ascending order.
    pub fn in_order_traversal(&self) -> Vec<&T> {
        let mut result = Vec::new();
        let mut stack = Vec::new();
        let mut current = self.root.as_deref();

        loop {
            while let Some(node) = current {
                stack.push(node);
                current = node.left.as_deref();
            }

            match stack.pop() {
                Some(node) => {
                    result.push(&node.value);
                    current = node.right.as_deref();
                }
                None => break,
            }
        }
        result
    }

    /// Returns the values in post-order, i.e. the left subtree before the right subtree, and both before their root.
    pub fn post_order_traversal(&self) -> Vec<&T> {
        // Reverse of the pre-order that visits the right subtree first
        let mut result = Vec::new();
        let mut stack: Vec<&Node<T>> = self.root.as_deref().into_iter().collect();

        while let Some(node) = stack.pop() {
            result.push(&node.value);
            stack.extend(node.left.as_deref());
            stack.extend(node.right.as_deref());
        }
        result.reverse();
        result
    }

    /// Returns the values level by level from the root, and from left to right within a level.
    pub fn by_level_traversal(&self) -> Vec<&T> {
        let mut result = Vec::new();
        let mut queue: VecDeque<&Node<T>> = self.root.as_deref().into_iter().collect();

        while let Some(node) = queue.pop_front() {
            result.push(&node.value);
            queue.extend(node.left.as_deref());
            queue.extend(node.right.as_deref());
        }
        result
    }

    /// Returns true if every node has either no or two children.
    pub fn is_full(&self) -> bool {
        self.nodes()
            .all(|node| node.left.is_some() == node.right.is_some())
    }

    /// Returns true if every level except the last is filled, and the nodes of the last level are as far left as possible.
    pub fn is_complete(&self) -> bool {
        let mut queue: VecDeque<Option<&Node<T>>> = VecDeque::new();
        queue.push_back(self.root.as_deref());
        let mut seen_gap = false;

        while let Some(entry) = queue.pop_front() {
            match entry {
                None => seen_gap = true,
                Some(_) if seen_gap => return false,
                Some(node) => {
                    queue.push_back(node.left.as_deref());
                    queue.push_back(node.right.as_deref());
                }
            }
        }
        true
    }

    /// Returns true if every inner node has two children and all leaves are on the same level.
    pub fn is_perfect(&self) -> bool {
        let mut level: Vec<&Node<T>> = self.root.as_deref().into_iter().collect();

        while !level.is_empty() {
            let leaves = level.iter().filter(|node| node.is_leaf()).count();
            if leaves == level.len() {
                return true;
            }
            if leaves > 0 || !level.iter().all(|node| node.left.is_some() && node.right.is_some()) {
                return false;
            }

            level = level
                .iter()
                .flat_map(|node| node.left.as_deref().into_iter().chain(node.right.as_deref()))
                .collect();
        }
        true
    }

    /// Returns the amount of nodes in the tree.
    pub fn size(&self) -> usize {
        self.nodes().count()
    }

    /// Returns the length of the longest path from the root to a leaf, which is `-1` for the empty tree.
    pub fn height(&self) -> isize {
        let mut height = -1;
        let mut level: Vec<&Node<T>> = self.root.as_deref().into_iter().collect();

        while !level.is_empty() {
            height += 1;
            level = level
                .iter()
                .flat_map(|node| node.left.as_deref().into_iter().chain(node.right.as_deref()))
                .collect();
        }
        height
    }

    /// Returns the amount of nodes without children.
    pub fn count_leaves(&self) -> usize {
        self.nodes().filter(|node| node.is_leaf()).count()
    }

    /// Returns the amount of distinct values in the tree.
    pub fn count_unique(&self) -> usize {
        let values = self.in_order_traversal();
        match values.first() {
            None => 0,
            Some(_) => {
                1 + values
                    .windows(2)
                    .filter(|pair| self.comparator.compare(pair[0], pair[1]) != Ordering::Equal)
                    .count()
            }
        }
    }

    /// Returns true if the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Iterates over all nodes in pre-order.
    fn nodes(&self) -> impl Iterator<Item = &Node<T>> {
        let mut stack: Vec<&Node<T>> = self.root.as_deref().into_iter().collect();
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.right.as_deref());
            stack.extend(node.left.as_deref());
            Some(node)
        })
    }

    /// Removes the node at `link` and returns its value.
    /// A node with two children is replaced by the leftmost node of its right subtree.
    fn unlink(link: &mut Link<T>) -> Option<T> {
        let node = link.take()?;
        let Node { value, left, right } = *node;

        *link = match (left, right) {
            (None, None) => None,
            (Some(child), None) | (None, Some(child)) => Some(child),
            (Some(left), Some(right)) => {
                let mut right = Some(right);
                Self::take_leftmost(&mut right).map(|mut successor| {
                    successor.left = Some(left);
                    successor.right = right;
                    successor
                })
            }
        };
        Some(value)
    }

    /// Detaches the leftmost node of the subtree at `link`, and puts its right subtree in its place.
    fn take_leftmost(mut link: &mut Link<T>) -> Option<Box<Node<T>>> {
        while link.as_ref().map_or(false, |node| node.left.is_some()) {
            if let Some(node) = link {
                link = &mut node.left;
            }
        }

        let mut leftmost = link.take()?;
        *link = leftmost.right.take();
        Some(leftmost)
    }
}

impl<T, C> Drop for BinarySearchTree<T, C> {
    fn drop(&mut self) {
        let mut stack: Vec<_> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T, C: Comparator<T>> Extend<T> for BinarySearchTree<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<T, C: Comparator<T> + Default> FromIterator<T> for BinarySearchTree<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::default();
        tree.extend(iter);
        tree
    }
}

impl<T: fmt::Display, C: Comparator<T>> fmt::Display for BinarySearchTree<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values: Vec<_> = self
            .pre_order_traversal()
            .into_iter()
            .map(ToString::to_string)
            .collect();
        write!(f, "TREE pre-order {{ {} }}", values.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use crate::compare::Reversed;
    use crate::error::ErrorKind;
    use crate::implementation::bst::BinarySearchTree;
    use crate::NaturalOrder;

    fn values(traversal: Vec<&i32>) -> Vec<i32> {
        traversal.into_iter().copied().collect()
    }

    fn example_tree() -> BinarySearchTree<i32> {
        vec![10, 20, 5, 15, 17, 7, 12].into_iter().collect()
    }

    #[test]
    fn test_traversals() {
        let tree = example_tree();
        assert_eq!(values(tree.pre_order_traversal()), vec![10, 5, 7, 20, 15, 12, 17]);
        assert_eq!(values(tree.in_order_traversal()), vec![5, 7, 10, 12, 15, 17, 20]);
        assert_eq!(values(tree.post_order_traversal()), vec![7, 5, 12, 17, 15, 20, 10]);
        assert_eq!(values(tree.by_level_traversal()), vec![10, 5, 20, 7, 15, 12, 17]);
    }

    #[test]
    fn test_shape_queries() {
        let tree = example_tree();
        assert!(!tree.is_full());
        assert!(!tree.is_complete());
        assert!(!tree.is_perfect());
        assert_eq!(tree.size(), 7);
        assert_eq!(tree.height(), 3);
        assert_eq!(tree.count_leaves(), 3);
        assert_eq!(tree.count_unique(), 7);

        let perfect: BinarySearchTree<_> = vec![10, 5, 15, 3, 7, 12, 17].into_iter().collect();
        assert!(perfect.is_full());
        assert!(perfect.is_complete());
        assert!(perfect.is_perfect());
        assert_eq!(perfect.height(), 2);
        assert_eq!(perfect.count_leaves(), 4);

        let complete: BinarySearchTree<_> = vec![10, 5, 15, 3].into_iter().collect();
        assert!(!complete.is_full());
        assert!(complete.is_complete());
        assert!(!complete.is_perfect());

        let full: BinarySearchTree<_> = vec![10, 5, 15, 12, 17].into_iter().collect();
        assert!(full.is_full());
        assert!(!full.is_complete());
        assert!(!full.is_perfect());
    }

    #[test]
    fn test_empty_and_single_node_shapes() {
        let mut tree = BinarySearchTree::new();
        assert!(tree.is_full() && tree.is_complete() && tree.is_perfect());
        assert_eq!(tree.height(), -1);
        assert_eq!(tree.size(), 0);
        assert_eq!(tree.count_leaves(), 0);
        assert_eq!(tree.count_unique(), 0);
        assert_eq!(tree.get_first(), None);

        tree.add(1);
        assert!(tree.is_full() && tree.is_complete() && tree.is_perfect());
        assert_eq!(tree.height(), 0);
        assert_eq!(tree.count_leaves(), 1);
        assert_eq!(tree.get_first(), Some(&1));
    }

    #[test]
    fn test_remove() {
        let mut tree = example_tree();
        assert!(tree.remove(&20));
        assert_eq!(values(tree.pre_order_traversal()), vec![10, 5, 7, 15, 12, 17]);

        assert!(tree.remove(&10));
        assert_eq!(values(tree.pre_order_traversal()), vec![12, 5, 7, 15, 17]);

        assert!(!tree.remove(&10));
        assert!(tree.remove(&7));
        assert_eq!(values(tree.pre_order_traversal()), vec![12, 5, 15, 17]);
        assert!(!tree.contains(&7));
        assert!(tree.contains(&17));
    }

    #[test]
    fn test_remove_two_children_with_deep_successor() {
        let mut tree: BinarySearchTree<_> = vec![10, 5, 20, 15, 25, 12, 13].into_iter().collect();
        assert!(tree.remove(&10));
        assert_eq!(values(tree.pre_order_traversal()), vec![12, 5, 20, 15, 13, 25]);
    }

    #[test]
    fn test_remove_first() {
        let mut tree = example_tree();
        assert_eq!(tree.remove_first().unwrap(), 10);
        assert_eq!(tree.get_first(), Some(&12));
        assert_eq!(tree.size(), 6);

        let mut empty = BinarySearchTree::<i32>::new();
        match empty.remove_first() {
            Err(error) => assert!(matches!(error.kind(), ErrorKind::EmptyTree)),
            Ok(value) => panic!("expected an error, got {}", value),
        }
    }

    #[test]
    fn test_duplicates() {
        let mut tree: BinarySearchTree<_> = vec![5, 5, 3, 5, 7, 3].into_iter().collect();
        assert_eq!(values(tree.pre_order_traversal()), vec![5, 3, 3, 5, 5, 7]);
        assert_eq!(tree.size(), 6);
        assert_eq!(tree.count_unique(), 3);

        assert!(tree.remove(&5));
        assert_eq!(tree.size(), 5);
        assert!(tree.contains(&5));
        assert_eq!(values(tree.in_order_traversal()), vec![3, 3, 5, 5, 7]);
    }

    #[test]
    fn test_reversed_comparator() {
        let mut tree = BinarySearchTree::with_comparator(Reversed(NaturalOrder));
        tree.extend(vec![2, 1, 3]);
        assert_eq!(values(tree.in_order_traversal()), vec![3, 2, 1]);
        assert!(tree.contains(&1));
    }

    #[test]
    fn test_display() {
        let tree = example_tree();
        assert_eq!(tree.to_string(), "TREE pre-order { 10, 5, 7, 20, 15, 12, 17 }");
        assert_eq!(
            BinarySearchTree::<i32>::new().to_string(),
            "TREE pre-order {  }"
        );
    }

    #[test]
    fn test_degenerate_tree() {
        let tree: BinarySearchTree<_> = (0..10_000).collect();
        assert_eq!(tree.height(), 9_999);
        assert_eq!(tree.count_leaves(), 1);
        assert!(tree.contains(&9_999));
        assert_eq!(tree.post_order_traversal().first(), Some(&&9_999));
        // Dropping the tree must not recurse along the path
        drop(tree);
    }
}
