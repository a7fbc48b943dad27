use crate::compare::{Comparator, NaturalOrder};
use crate::error::{ErrorKind, Result};
use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
struct NodeId(usize);

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    left: Option<NodeId>,
    right: Option<NodeId>,
    parent: Option<NodeId>,
    /// A leaf has height zero.
    height: isize,
}

/// A self-balancing binary search tree.
///
/// The nodes are stored in an arena and refer to each other by index.
/// Each node links to its children and its parent, and stores the height of its subtree.
/// After every insertion and removal, the heights are recomputed on the path to the root,
/// and each node on that path whose subtrees differ in height by two is rebalanced by one or two rotations.
///
/// The arena has no holes: removing a node moves the last node of the arena into the freed slot.
///
/// The order of the values is defined by a [Comparator](Comparator), and values that compare as equal are stored only once.
#[derive(Debug, Clone)]
pub struct AvlTree<T, C = NaturalOrder> {
    nodes: Vec<Node<T>>,
    root: Option<NodeId>,
    comparator: C,
}

impl<T: Ord> AvlTree<T> {
    /// Creates an empty tree ordered by the `Ord` implementation of the values.
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<T, C: Comparator<T> + Default> Default for AvlTree<T, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T, C: Comparator<T>> AvlTree<T, C> {
    /// Creates an empty tree ordered by the given comparator.
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
            comparator,
        }
    }

    /// Returns the amount of values in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the tree contains no values.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the height of the tree, which is `-1` for the empty tree and `0` for a single node.
    pub fn height(&self) -> isize {
        self.height_of(self.root)
    }

    /// Returns the value stored at the root.
    pub fn root(&self) -> Option<&T> {
        self.root.map(|root| &self.node(root).value)
    }

    /// Returns true if the tree contains a value that compares equal to the given value.
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Inserts the value and rebalances the tree.
    /// Returns false and leaves the tree unchanged if an equal value is contained already.
    pub fn add(&mut self, value: T) -> bool {
        let mut parent = None;
        let mut current = self.root;
        let mut ordering = Ordering::Equal;

        while let Some(id) = current {
            ordering = self.comparator.compare(&value, &self.node(id).value);
            parent = Some(id);
            current = match ordering {
                Ordering::Less => self.node(id).left,
                Ordering::Greater => self.node(id).right,
                Ordering::Equal => return false,
            };
        }

        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            value,
            left: None,
            right: None,
            parent,
            height: 0,
        });

        match parent {
            None => self.root = Some(id),
            Some(parent) if ordering == Ordering::Less => self.node_mut(parent).left = Some(id),
            Some(parent) => self.node_mut(parent).right = Some(id),
        }

        self.retrace(parent);
        true
    }

    /// Removes the value that compares equal to the given value and rebalances the tree.
    /// Returns false if there is no such value.
    pub fn remove(&mut self, value: &T) -> bool {
        match self.find(value) {
            Some(id) => {
                self.remove_node(id);
                true
            }
            None => false,
        }
    }

    /// Returns the smallest value.
    pub fn first(&self) -> Result<&T> {
        let root = self.root.ok_or(ErrorKind::EmptyTree)?;
        Ok(&self.node(self.leftmost(root)).value)
    }

    /// Removes and returns the smallest value.
    pub fn pop_first(&mut self) -> Result<T> {
        let root = self.root.ok_or(ErrorKind::EmptyTree)?;
        let first = self.leftmost(root);
        Ok(self.remove_node(first))
    }

    /// Returns an iterator over the values in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        let mut iter = Iter {
            nodes: &self.nodes,
            stack: Vec::new(),
        };
        iter.push_left_spine(self.root);
        iter
    }

    /// Returns the values in pre-order, i.e. each node before its left subtree, and the left subtree before the right subtree.
    pub fn pre_order_traversal(&self) -> Vec<&T> {
        let mut result = Vec::with_capacity(self.len());
        let mut stack: Vec<_> = self.root.into_iter().collect();

        while let Some(id) = stack.pop() {
            let node = self.node(id);
            result.push(&node.value);
            stack.extend(node.right);
            stack.extend(node.left);
        }
        result
    }

    /// Returns the values in ascending order.
    pub fn in_order_traversal(&self) -> Vec<&T> {
        self.iter().collect()
    }

    /// Checks the structure of the tree.
    ///
    /// Returns true if all nodes are reachable from the root, the parent and child links agree,
    /// the stored heights are correct, no node is out of balance and the values are strictly ascending in-order.
    pub fn is_valid_avl(&self) -> bool {
        let root = match self.root {
            Some(root) => root,
            None => return self.nodes.is_empty(),
        };
        if self.node(root).parent.is_some() {
            return false;
        }

        let mut reachable = 0;
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            reachable += 1;
            if reachable > self.nodes.len() {
                // There is a loop in the child links
                return false;
            }

            let node = self.node(id);
            for child in [node.left, node.right].iter().flatten() {
                if self.node(*child).parent != Some(id) {
                    return false;
                }
                stack.push(*child);
            }

            let left_height = self.height_of(node.left);
            let right_height = self.height_of(node.right);
            if node.height != 1 + left_height.max(right_height)
                || (left_height - right_height).abs() > 1
            {
                return false;
            }
        }

        if reachable != self.nodes.len() {
            return false;
        }

        let mut previous: Option<&T> = None;
        for value in self.iter() {
            if let Some(previous) = previous {
                if !self.comparator.is_less(previous, value) {
                    return false;
                }
            }
            previous = Some(value);
        }
        true
    }

    #[inline]
    fn node(&self, id: NodeId) -> &Node<T> {
        &self.nodes[id.0]
    }

    #[inline]
    fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        &mut self.nodes[id.0]
    }

    fn height_of(&self, id: Option<NodeId>) -> isize {
        id.map(|id| self.node(id).height).unwrap_or(-1)
    }

    fn balance_factor(&self, id: NodeId) -> isize {
        let node = self.node(id);
        self.height_of(node.left) - self.height_of(node.right)
    }

    fn update_height(&mut self, id: NodeId) {
        let node = self.node(id);
        let height = 1 + self.height_of(node.left).max(self.height_of(node.right));
        self.node_mut(id).height = height;
    }

    fn find(&self, value: &T) -> Option<NodeId> {
        let mut current = self.root;
        while let Some(id) = current {
            let node = self.node(id);
            current = match self.comparator.compare(value, &node.value) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(id),
            };
        }
        None
    }

    fn leftmost(&self, mut id: NodeId) -> NodeId {
        while let Some(left) = self.node(id).left {
            id = left;
        }
        id
    }

    /// Makes `new` the child of `parent` in place of `old`, or the root if `parent` is `None`.
    fn replace_child(&mut self, parent: Option<NodeId>, old: NodeId, new: Option<NodeId>) {
        match parent {
            None => self.root = new,
            Some(parent) => {
                let parent = self.node_mut(parent);
                if parent.left == Some(old) {
                    parent.left = new;
                } else {
                    debug_assert_eq!(parent.right, Some(old));
                    parent.right = new;
                }
            }
        }
    }

    fn swap_values(&mut self, a: NodeId, b: NodeId) {
        debug_assert_ne!(a, b);
        let (low, high) = if a.0 < b.0 { (a.0, b.0) } else { (b.0, a.0) };
        let (head, tail) = self.nodes.split_at_mut(high);
        std::mem::swap(&mut head[low].value, &mut tail[0].value);
    }

    /// Unlinks the node, frees its slot and rebalances the tree.
    /// A node with two children trades values with its in-order successor, which is removed instead.
    fn remove_node(&mut self, mut id: NodeId) -> T {
        if let (Some(_), Some(right)) = (self.node(id).left, self.node(id).right) {
            let successor = self.leftmost(right);
            self.swap_values(id, successor);
            id = successor;
        }

        let node = self.node(id);
        let child = node.left.or(node.right);
        let parent = node.parent;
        if let Some(child) = child {
            self.node_mut(child).parent = parent;
        }
        self.replace_child(parent, id, child);

        let last = NodeId(self.nodes.len() - 1);
        let value = self.free(id);
        let parent = parent.map(|parent| if parent == last { id } else { parent });
        self.retrace(parent);
        value
    }

    /// Removes an unlinked node from the arena.
    /// The last node of the arena takes its slot, and the links to the moved node are updated.
    fn free(&mut self, id: NodeId) -> T {
        let last = NodeId(self.nodes.len() - 1);
        let node = self.nodes.swap_remove(id.0);

        if id != last {
            let moved = self.node(id);
            let (parent, left, right) = (moved.parent, moved.left, moved.right);
            self.replace_child(parent, last, Some(id));
            for child in [left, right].iter().flatten() {
                self.node_mut(*child).parent = Some(id);
            }
        }

        node.value
    }

    /// Recomputes heights and rebalances from `start` up to the root.
    fn retrace(&mut self, start: Option<NodeId>) {
        let mut current = start;
        while let Some(id) = current {
            self.update_height(id);
            let subtree_root = self.rebalance(id);
            current = self.node(subtree_root).parent;
        }
    }

    /// Rebalances the subtree rooted at `id` and returns its new root.
    fn rebalance(&mut self, id: NodeId) -> NodeId {
        let balance_factor = self.balance_factor(id);
        if balance_factor > 1 {
            if let Some(left) = self.node(id).left {
                if self.balance_factor(left) < 0 {
                    self.rotate_left(left);
                }
            }
            self.rotate_right(id)
        } else if balance_factor < -1 {
            if let Some(right) = self.node(id).right {
                if self.balance_factor(right) > 0 {
                    self.rotate_right(right);
                }
            }
            self.rotate_left(id)
        } else {
            id
        }
    }

    /// Makes the right child of `id` the root of the subtree and returns it.
    fn rotate_left(&mut self, id: NodeId) -> NodeId {
        let pivot = match self.node(id).right {
            Some(pivot) => pivot,
            None => return id,
        };
        trace!("Rotating left, subtree height {}", self.node(id).height);

        let moved = self.node(pivot).left;
        let parent = self.node(id).parent;

        self.node_mut(id).right = moved;
        if let Some(moved) = moved {
            self.node_mut(moved).parent = Some(id);
        }
        self.node_mut(pivot).left = Some(id);
        self.node_mut(id).parent = Some(pivot);
        self.node_mut(pivot).parent = parent;
        self.replace_child(parent, id, Some(pivot));

        self.update_height(id);
        self.update_height(pivot);
        pivot
    }

    /// Makes the left child of `id` the root of the subtree and returns it.
    fn rotate_right(&mut self, id: NodeId) -> NodeId {
        let pivot = match self.node(id).left {
            Some(pivot) => pivot,
            None => return id,
        };
        trace!("Rotating right, subtree height {}", self.node(id).height);

        let moved = self.node(pivot).right;
        let parent = self.node(id).parent;

        self.node_mut(id).left = moved;
        if let Some(moved) = moved {
            self.node_mut(moved).parent = Some(id);
        }
        self.node_mut(pivot).right = Some(id);
        self.node_mut(id).parent = Some(pivot);
        self.node_mut(pivot).parent = parent;
        self.replace_child(parent, id, Some(pivot));

        self.update_height(id);
        self.update_height(pivot);
        pivot
    }
}

/// An iterator over the values of an [AvlTree](AvlTree) in ascending order.
pub struct Iter<'a, T> {
    nodes: &'a [Node<T>],
    stack: Vec<NodeId>,
}

impl<'a, T> Iter<'a, T> {
    fn push_left_spine(&mut self, mut current: Option<NodeId>) {
        while let Some(id) = current {
            self.stack.push(id);
            current = self.nodes[id.0].left;
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let nodes = self.nodes;
        let node = &nodes[id.0];
        self.push_left_spine(node.right);
        Some(&node.value)
    }
}

impl<'a, T, C: Comparator<T>> IntoIterator for &'a AvlTree<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, C: Comparator<T>> Extend<T> for AvlTree<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<T, C: Comparator<T> + Default> FromIterator<T> for AvlTree<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::default();
        tree.extend(iter);
        tree
    }
}

impl<T: fmt::Display, C: Comparator<T>> fmt::Display for AvlTree<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AVL pre-order {{ ")?;
        for (index, value) in self.pre_order_traversal().into_iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, " }}")
    }
}
