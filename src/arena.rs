//! An arena-backed BST that keeps a parent back-reference on every node.
//!
//! Nodes live in a [`generational_arena::Arena`] and point at each other
//! through copyable [`Index`] handles. Child handles own their subtrees in
//! the sense that every structural removal pairs clearing the handle with
//! freeing the node, while the parent handle is observation only. That
//! split is what lets the tree carry parent references in safe code with
//! no reference counting and no cycle hazards.
//!
//! Removing a key whose node still has two children promotes an in-order
//! neighbor chosen by a [`RemovalPolicy`]; everything else about the tree
//! is the classic unbalanced BST.
//!
//! # Examples
//!
//! ```
//! use bstree::arena::Tree;
//!
//! let mut tree = Tree::from([5, 3, 8, 1, 4, 7, 9]);
//! assert_eq!(tree.len(), 7);
//! assert_eq!(tree.height(), 3);
//!
//! // Removing a key whose node has two children promotes the in-order
//! // successor by default.
//! assert!(tree.remove(&5));
//! assert!(!tree.contains(&5));
//!
//! let mut sorted = Vec::new();
//! tree.in_order(|key| sorted.push(*key));
//! assert_eq!(sorted, [1, 3, 4, 7, 8, 9]);
//! ```

use std::cmp;
use std::collections::VecDeque;
use std::fmt;
use std::mem;

use generational_arena::{Arena, Index};

/// A child or parent slot. `None` marks an absent node.
type Link = Option<Index>;

/// Which in-order neighbor of a node is promoted when the node is removed
/// while it still has two children.
///
/// Under either policy the promoted node has at most one child of its own,
/// so detaching it afterwards is a plain splice.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RemovalPolicy {
    /// Promote the smallest key of the right subtree.
    Successor,
    /// Promote the largest key of the left subtree.
    Predecessor,
}

impl Default for RemovalPolicy {
    fn default() -> Self {
        Self::Successor
    }
}

/// One stored key plus its structural links.
#[derive(Clone)]
struct Node<T> {
    key: T,
    parent: Link,
    left: Link,
    right: Link,
}

impl<T> Node<T> {
    fn new(key: T, parent: Link) -> Self {
        Self {
            key,
            parent,
            left: None,
            right: None,
        }
    }
}

/// An unbalanced Binary Search Tree.
///
/// Every node carries a non-owning back-reference to its parent, and
/// removal of a node with two children promotes the in-order neighbor
/// chosen by the tree's [`RemovalPolicy`].
///
/// The tree never rebalances. Insertion, removal, traversal, and height
/// all recurse to a depth equal to the tree's height, which is `O(len)`
/// when keys arrive in sorted order. See the crate docs for why that
/// trade-off is accepted.
///
/// # Examples
///
/// ```
/// use bstree::arena::Tree;
///
/// let mut tree = Tree::new();
/// assert!(tree.insert("hello"));
/// assert!(tree.insert("world"));
/// assert!(!tree.insert("hello"));
///
/// assert_eq!(tree.len(), 2);
/// assert!(tree.remove(&"world"));
/// assert_eq!(tree.len(), 1);
/// ```
// Cloning the arena copies every slot and generation verbatim, so the
// `Index` handles stored inside the cloned nodes stay correct without any
// fixup pass.
#[derive(Clone)]
pub struct Tree<T> {
    nodes: Arena<Node<T>>,
    root: Link,
    len: usize,
    policy: RemovalPolicy,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree` using [`RemovalPolicy::Successor`].
    pub fn new() -> Self {
        Self::with_policy(RemovalPolicy::Successor)
    }

    /// Generates a new, empty `Tree` that removes two-child nodes with the
    /// given policy.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::arena::{RemovalPolicy, Tree};
    ///
    /// let mut tree = Tree::with_policy(RemovalPolicy::Predecessor);
    /// tree.extend([5, 3, 8, 1, 4, 7, 9]);
    /// tree.remove(&5);
    ///
    /// // The in-order predecessor of 5 took its place.
    /// let mut preorder = Vec::new();
    /// tree.pre_order(|key| preorder.push(*key));
    /// assert_eq!(preorder, [4, 3, 1, 8, 7, 9]);
    /// ```
    pub fn with_policy(policy: RemovalPolicy) -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
            len: 0,
            policy,
        }
    }

    /// Returns the policy this tree removes two-child nodes with.
    pub fn policy(&self) -> RemovalPolicy {
        self.policy
    }

    /// Returns the number of keys stored in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree stores no keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::arena::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert!(tree.is_empty());
    /// tree.insert(1);
    /// assert!(!tree.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of levels in the tree. An empty tree has height
    /// 0 and a lone root has height 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::arena::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.height(), 0);
    ///
    /// // Sorted insertion order degenerates the tree into a chain.
    /// tree.extend([1, 2, 3]);
    /// assert_eq!(tree.height(), 3);
    /// ```
    pub fn height(&self) -> usize {
        self.height_below(self.root)
    }

    fn height_below(&self, link: Link) -> usize {
        match link {
            None => 0,
            Some(id) => {
                let node = &self.nodes[id];
                1 + self
                    .height_below(node.left)
                    .max(self.height_below(node.right))
            }
        }
    }

    /// Returns `true` if the given key is stored in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::arena::Tree;
    ///
    /// let tree = Tree::from([1, 2]);
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&3));
    /// ```
    pub fn contains(&self, key: &T) -> bool
    where
        T: cmp::Ord,
    {
        self.find_id(key).is_some()
    }

    /// Potentially finds the stored key equal to the given key. If no node
    /// holds such a key, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::arena::Tree;
    ///
    /// let tree = Tree::from(["pear", "apple"]);
    /// assert_eq!(tree.get(&"apple"), Some(&"apple"));
    /// assert_eq!(tree.get(&"plum"), None);
    /// ```
    pub fn get(&self, key: &T) -> Option<&T>
    where
        T: cmp::Ord,
    {
        self.find_id(key).map(|id| &self.nodes[id].key)
    }

    /// Returns the smallest stored key, or `None` for an empty tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::arena::Tree;
    ///
    /// let tree = Tree::from([2, 9, 4]);
    /// assert_eq!(tree.min(), Some(&2));
    /// assert_eq!(Tree::<i32>::new().min(), None);
    /// ```
    pub fn min(&self) -> Option<&T> {
        self.root.map(|root| &self.nodes[self.leftmost(root)].key)
    }

    /// Returns the largest stored key, or `None` for an empty tree.
    pub fn max(&self) -> Option<&T> {
        self.root.map(|root| &self.nodes[self.rightmost(root)].key)
    }

    /// Inserts the given key as a new leaf in its ordered position.
    /// Returns whether the key was inserted; inserting a key that is
    /// already stored changes nothing and returns `false`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::arena::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert!(tree.insert(2));
    /// assert!(tree.insert(1));
    ///
    /// assert!(!tree.insert(2));
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert(&mut self, key: T) -> bool
    where
        T: cmp::Ord,
    {
        let inserted = match self.root {
            None => {
                self.root = Some(self.nodes.insert(Node::new(key, None)));
                true
            }
            Some(root) => self.insert_below(root, key),
        };
        if inserted {
            self.len += 1;
        }

        if cfg!(debug_assertions) {
            self.check_invariants();
        }
        inserted
    }

    fn insert_below(&mut self, at: Index, key: T) -> bool
    where
        T: cmp::Ord,
    {
        match key.cmp(&self.nodes[at].key) {
            cmp::Ordering::Less => match self.nodes[at].left {
                Some(left) => self.insert_below(left, key),
                None => {
                    let leaf = self.nodes.insert(Node::new(key, Some(at)));
                    self.nodes[at].left = Some(leaf);
                    true
                }
            },
            cmp::Ordering::Equal => false,
            cmp::Ordering::Greater => match self.nodes[at].right {
                Some(right) => self.insert_below(right, key),
                None => {
                    let leaf = self.nodes.insert(Node::new(key, Some(at)));
                    self.nodes[at].right = Some(leaf);
                    true
                }
            },
        }
    }

    /// Removes the given key from the tree. Returns whether the key was
    /// present; removing a missing key changes nothing and returns
    /// `false`.
    ///
    /// A node with at most one child is spliced out directly: its only
    /// subtree, if any, is hung in its place. A node with two children is
    /// not detached. Instead it trades keys with the in-order neighbor
    /// chosen by the tree's [`RemovalPolicy`], and that neighbor, which
    /// has at most one child, is spliced out of the subtree it came from.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::arena::Tree;
    ///
    /// let mut tree = Tree::from([4, 2, 6, 1, 3, 5, 7]);
    /// assert!(tree.remove(&1));
    /// assert!(!tree.remove(&1));
    /// assert_eq!(tree.len(), 6);
    ///
    /// // Removing the root exercises the two-children case.
    /// assert!(tree.remove(&4));
    /// let mut sorted = Vec::new();
    /// tree.in_order(|key| sorted.push(*key));
    /// assert_eq!(sorted, [2, 3, 5, 6, 7]);
    /// ```
    pub fn remove(&mut self, key: &T) -> bool
    where
        T: cmp::Ord,
    {
        let (new_root, removed) = self.remove_in(self.root, None, key);
        self.root = new_root;
        if removed {
            self.len -= 1;
        }

        if cfg!(debug_assertions) {
            self.check_invariants();
        }
        removed
    }

    /// Recursive worker for [`Tree::remove`]. Receives the slot being
    /// searched together with the node that owns the slot, and returns the
    /// slot's new occupant plus whether a node was freed. The caller's
    /// slot stays the single source of truth for the subtree, so a splice
    /// never has to reach back up through parent handles.
    fn remove_in(&mut self, slot: Link, parent: Link, key: &T) -> (Link, bool)
    where
        T: cmp::Ord,
    {
        let Some(id) = slot else {
            return (None, false);
        };

        match key.cmp(&self.nodes[id].key) {
            cmp::Ordering::Less => {
                let left = self.nodes[id].left;
                let (new_left, removed) = self.remove_in(left, Some(id), key);
                self.nodes[id].left = new_left;
                (Some(id), removed)
            }
            cmp::Ordering::Greater => {
                let right = self.nodes[id].right;
                let (new_right, removed) = self.remove_in(right, Some(id), key);
                self.nodes[id].right = new_right;
                (Some(id), removed)
            }
            cmp::Ordering::Equal => {
                let left = self.nodes[id].left;
                let right = self.nodes[id].right;
                match (left, right) {
                    // No left child. Splice in the right subtree, which may
                    // itself be absent when `id` is a leaf. Only a present
                    // replacement gets its parent handle rewritten.
                    (None, spliced) => {
                        self.nodes.remove(id);
                        if let Some(child) = spliced {
                            self.nodes[child].parent = parent;
                        }
                        (spliced, true)
                    }
                    (Some(kept), None) => {
                        self.nodes.remove(id);
                        self.nodes[kept].parent = parent;
                        (Some(kept), true)
                    }
                    (Some(left), Some(right)) => {
                        let policy = self.policy;
                        let replacement = match policy {
                            RemovalPolicy::Successor => self.leftmost(right),
                            RemovalPolicy::Predecessor => self.rightmost(left),
                        };
                        match self.nodes.get2_mut(id, replacement) {
                            (Some(node), Some(rep)) => mem::swap(&mut node.key, &mut rep.key),
                            _ => unreachable!("a node with two children is distinct from its replacement"),
                        }

                        // The sought key now sits on the replacement node,
                        // and every key above it in this subtree compares
                        // away from it. The replacement also has no child
                        // on the policy side, so the recursion below ends
                        // in one of the splice cases above.
                        let removed = match policy {
                            RemovalPolicy::Successor => {
                                let (new_right, removed) = self.remove_in(Some(right), Some(id), key);
                                self.nodes[id].right = new_right;
                                removed
                            }
                            RemovalPolicy::Predecessor => {
                                let (new_left, removed) = self.remove_in(Some(left), Some(id), key);
                                self.nodes[id].left = new_left;
                                removed
                            }
                        };
                        debug_assert!(removed, "the swapped-out key is always found");
                        (Some(id), removed)
                    }
                }
            }
        }
    }

    /// Removes every key, keeping the policy.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::arena::Tree;
    ///
    /// let mut tree = Tree::from([1, 2, 3]);
    /// tree.clear();
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.height(), 0);
    /// ```
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
        self.len = 0;
    }

    /// Moves the whole tree out, leaving `self` empty but fully usable,
    /// with its policy intact. Takes constant time.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::arena::Tree;
    ///
    /// let mut tree = Tree::from([2, 1, 3]);
    /// let taken = tree.take();
    ///
    /// assert!(tree.is_empty());
    /// assert_eq!(taken.len(), 3);
    ///
    /// // The emptied tree keeps working.
    /// assert!(tree.insert(7));
    /// ```
    pub fn take(&mut self) -> Self {
        Self {
            nodes: mem::replace(&mut self.nodes, Arena::new()),
            root: self.root.take(),
            len: mem::take(&mut self.len),
            policy: self.policy,
        }
    }

    /// Visits every key in ascending order: left subtree, then the node
    /// itself, then the right subtree.
    ///
    /// The visitor borrows from the tree, so it may collect the references
    /// it is handed.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::arena::Tree;
    ///
    /// let tree = Tree::from([2, 1, 3]);
    ///
    /// let mut keys = Vec::new();
    /// tree.in_order(|key| keys.push(key));
    /// assert_eq!(keys, [&1, &2, &3]);
    /// ```
    pub fn in_order<'a, F>(&'a self, mut f: F)
    where
        F: FnMut(&'a T),
    {
        self.in_order_below(self.root, &mut f);
    }

    fn in_order_below<'a, F>(&'a self, link: Link, f: &mut F)
    where
        F: FnMut(&'a T),
    {
        let Some(id) = link else {
            return;
        };
        let node = &self.nodes[id];
        self.in_order_below(node.left, f);
        f(&node.key);
        self.in_order_below(node.right, f);
    }

    /// Visits every key in pre-order: the node itself, then its left
    /// subtree, then its right subtree.
    pub fn pre_order<'a, F>(&'a self, mut f: F)
    where
        F: FnMut(&'a T),
    {
        self.pre_order_below(self.root, &mut f);
    }

    fn pre_order_below<'a, F>(&'a self, link: Link, f: &mut F)
    where
        F: FnMut(&'a T),
    {
        let Some(id) = link else {
            return;
        };
        let node = &self.nodes[id];
        f(&node.key);
        self.pre_order_below(node.left, f);
        self.pre_order_below(node.right, f);
    }

    /// Visits every key in post-order: the left subtree, then the right
    /// subtree, then the node itself.
    pub fn post_order<'a, F>(&'a self, mut f: F)
    where
        F: FnMut(&'a T),
    {
        self.post_order_below(self.root, &mut f);
    }

    fn post_order_below<'a, F>(&'a self, link: Link, f: &mut F)
    where
        F: FnMut(&'a T),
    {
        let Some(id) = link else {
            return;
        };
        let node = &self.nodes[id];
        self.post_order_below(node.left, f);
        self.post_order_below(node.right, f);
        f(&node.key);
    }

    /// Visits every key in breadth-first order, shallowest level first and
    /// left before right within a level. The visitor also receives the
    /// node's depth, counted from 1 at the root. An empty tree performs no
    /// visits.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::arena::Tree;
    ///
    /// let tree = Tree::from([2, 1, 3]);
    ///
    /// let mut flat = Vec::new();
    /// tree.level_order(|key, depth| flat.push((*key, depth)));
    /// assert_eq!(flat, [(2, 1), (1, 2), (3, 2)]);
    /// ```
    pub fn level_order<'a, F>(&'a self, mut f: F)
    where
        F: FnMut(&'a T, usize),
    {
        let mut queue = VecDeque::new();
        if let Some(root) = self.root {
            queue.push_back((root, 1));
        }
        while let Some((id, depth)) = queue.pop_front() {
            let node = &self.nodes[id];
            f(&node.key, depth);
            if let Some(left) = node.left {
                queue.push_back((left, depth + 1));
            }
            if let Some(right) = node.right {
                queue.push_back((right, depth + 1));
            }
        }
    }

    /// Returns a diagnostic renderer that prints the tree one level per
    /// line, e.g. `level 1: 8` followed by `level 2: 3 10`. An empty tree
    /// renders nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::arena::Tree;
    ///
    /// let tree = Tree::from([2, 1, 3]);
    /// assert_eq!(tree.dump().to_string(), "level 1: 2\nlevel 2: 1 3");
    /// ```
    pub fn dump(&self) -> Dump<'_, T> {
        Dump {
            tree: self,
            detailed: false,
        }
    }

    /// Like [`Tree::dump`], but annotates every key with the keys of its
    /// parent and children, using `-` for an absent neighbor.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::arena::Tree;
    ///
    /// let tree = Tree::from([2, 1, 3]);
    /// assert_eq!(
    ///     tree.dump_detailed().to_string(),
    ///     "level 1: 2 [parent -, left 1, right 3]\n\
    ///      level 2: 1 [parent 2, left -, right -] 3 [parent 2, left -, right -]",
    /// );
    /// ```
    pub fn dump_detailed(&self) -> Dump<'_, T> {
        Dump {
            tree: self,
            detailed: true,
        }
    }

    /// Walks the left spine of the subtree rooted at `id`.
    fn leftmost(&self, mut id: Index) -> Index {
        while let Some(left) = self.nodes[id].left {
            id = left;
        }
        id
    }

    /// Walks the right spine of the subtree rooted at `id`.
    fn rightmost(&self, mut id: Index) -> Index {
        while let Some(right) = self.nodes[id].right {
            id = right;
        }
        id
    }

    fn find_id(&self, key: &T) -> Link
    where
        T: cmp::Ord,
    {
        let mut current = self.root;
        while let Some(id) = current {
            let node = &self.nodes[id];
            current = match key.cmp(&node.key) {
                cmp::Ordering::Less => node.left,
                cmp::Ordering::Equal => return Some(id),
                cmp::Ordering::Greater => node.right,
            };
        }
        None
    }

    /// Checks every structural invariant of the whole tree. Runs after
    /// each mutation in debug builds so tests catch a broken splice at the
    /// operation that performed it.
    fn check_invariants(&self)
    where
        T: cmp::Ord,
    {
        let reachable = self.check_subtree(self.root, None, None, None);
        assert_eq!(reachable, self.len);
        assert_eq!(reachable, self.nodes.len());
    }

    /// Returns the node count of the subtree in `link` while asserting
    /// that every node's parent handle names its owner and that every key
    /// lies strictly between the bounds inherited from its ancestors.
    fn check_subtree(&self, link: Link, parent: Link, lower: Option<&T>, upper: Option<&T>) -> usize
    where
        T: cmp::Ord,
    {
        let Some(id) = link else {
            return 0;
        };
        let node = &self.nodes[id];
        assert_eq!(node.parent, parent);
        if let Some(lower) = lower {
            assert!(*lower < node.key);
        }
        if let Some(upper) = upper {
            assert!(node.key < *upper);
        }
        1 + self.check_subtree(node.left, Some(id), lower, Some(&node.key))
            + self.check_subtree(node.right, Some(id), Some(&node.key), upper)
    }
}

/// Diagnostic renderer returned by [`Tree::dump`] and
/// [`Tree::dump_detailed`]. Displays the tree it borrows level by level.
pub struct Dump<'a, T> {
    tree: &'a Tree<T>,
    detailed: bool,
}

impl<T> Dump<'_, T>
where
    T: fmt::Display,
{
    fn write_link(&self, f: &mut fmt::Formatter<'_>, link: Link) -> fmt::Result {
        match link {
            None => f.write_str("-"),
            Some(id) => write!(f, "{}", self.tree.nodes[id].key),
        }
    }
}

impl<T> fmt::Display for Dump<'_, T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut queue = VecDeque::new();
        if let Some(root) = self.tree.root {
            queue.push_back((root, 1));
        }

        let mut current_level = 0;
        while let Some((id, depth)) = queue.pop_front() {
            if depth > current_level {
                if current_level > 0 {
                    f.write_str("\n")?;
                }
                write!(f, "level {}:", depth)?;
                current_level = depth;
            }

            let node = &self.tree.nodes[id];
            write!(f, " {}", node.key)?;
            if self.detailed {
                f.write_str(" [parent ")?;
                self.write_link(f, node.parent)?;
                f.write_str(", left ")?;
                self.write_link(f, node.left)?;
                f.write_str(", right ")?;
                self.write_link(f, node.right)?;
                f.write_str("]")?;
            }

            if let Some(left) = node.left {
                queue.push_back((left, depth + 1));
            }
            if let Some(right) = node.right {
                queue.push_back((right, depth + 1));
            }
        }
        Ok(())
    }
}

/// Renders the stored keys in ascending order, e.g. `{1, 3, 5}`.
impl<T> fmt::Display for Tree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys = Vec::with_capacity(self.len);
        self.in_order(|key| keys.push(key));

        f.write_str("{")?;
        for (i, key) in keys.into_iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", key)?;
        }
        f.write_str("}")
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("policy", &self.policy)
            .field("len", &self.len)
            .field("root", &NodeDebug {
                tree: self,
                link: self.root,
            })
            .finish()
    }
}

/// Recursive helper for the [`Tree`] `Debug` impl, so nesting shows up
/// with `{:#?}`.
struct NodeDebug<'a, T> {
    tree: &'a Tree<T>,
    link: Link,
}

impl<T> fmt::Debug for NodeDebug<'_, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.link {
            None => f.write_str("None"),
            Some(id) => {
                let node = &self.tree.nodes[id];
                f.debug_struct("Node")
                    .field("key", &node.key)
                    .field("left", &NodeDebug {
                        tree: self.tree,
                        link: node.left,
                    })
                    .field("right", &NodeDebug {
                        tree: self.tree,
                        link: node.right,
                    })
                    .finish()
            }
        }
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: cmp::Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: cmp::Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T, const N: usize> From<[T; N]> for Tree<T>
where
    T: cmp::Ord,
{
    fn from(keys: [T; N]) -> Self {
        keys.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_order_keys<T: Copy + Ord>(tree: &Tree<T>) -> Vec<T> {
        let mut keys = Vec::new();
        tree.in_order(|key| keys.push(*key));
        keys
    }

    #[test]
    fn test_insert_into_empty() {
        let mut tree = Tree::new();
        assert!(tree.insert(1));

        assert_eq!(tree.len(), 1);
        assert_eq!(tree.height(), 1);
        assert_eq!(tree.min(), Some(&1));
        assert_eq!(tree.max(), Some(&1));
    }

    #[test]
    fn test_insert_duplicate_changes_nothing() {
        let mut tree = Tree::from([2, 1, 3]);
        assert!(!tree.insert(2));

        assert_eq!(tree.len(), 3);
        assert_eq!(tree.height(), 2);
        assert_eq!(in_order_keys(&tree), [1, 2, 3]);
    }

    #[test]
    fn test_insert_places_leaves() {
        let tree = Tree::from([5, 3, 8, 1, 4, 7, 9]);

        let mut flat = Vec::new();
        tree.level_order(|key, depth| flat.push((*key, depth)));
        assert_eq!(
            flat,
            [(5, 1), (3, 2), (8, 2), (1, 3), (4, 3), (7, 3), (9, 3)]
        );
    }

    #[test]
    fn test_remove_from_empty() {
        let mut tree = Tree::new();
        assert!(!tree.remove(&5));
        assert_eq!(tree.len(), 0);
    }

    #[test]
    fn test_remove_missing_key() {
        let mut tree = Tree::from([2, 1]);
        assert!(!tree.remove(&5));

        assert_eq!(tree.len(), 2);
        assert_eq!(in_order_keys(&tree), [1, 2]);
    }

    #[test]
    fn test_remove_leaf() {
        // The leaf path has neither child, so the splice installs an
        // absent node and must not touch any parent handle.
        let mut tree = Tree::from([2, 1]);
        assert!(tree.remove(&1));

        assert_eq!(tree.len(), 1);
        assert_eq!(in_order_keys(&tree), [2]);
    }

    #[test]
    fn test_remove_head_of_chain() {
        let mut tree = Tree::from([1, 2, 3]);
        assert_eq!(tree.height(), 3);

        assert!(tree.remove(&1));
        assert_eq!(in_order_keys(&tree), [2, 3]);
        assert_eq!(tree.height(), 2);
    }

    #[test]
    fn test_remove_node_with_only_right_child() {
        let mut tree = Tree::from([1, 2, 3]);
        assert!(tree.remove(&2));

        let mut flat = Vec::new();
        tree.level_order(|key, depth| flat.push((*key, depth)));
        assert_eq!(flat, [(1, 1), (3, 2)]);
    }

    #[test]
    fn test_remove_node_with_only_left_child() {
        let mut tree = Tree::from([3, 2, 1]);
        assert!(tree.remove(&2));

        let mut flat = Vec::new();
        tree.level_order(|key, depth| flat.push((*key, depth)));
        assert_eq!(flat, [(3, 1), (1, 2)]);
    }

    #[test]
    fn test_remove_two_children_with_successor() {
        let mut tree = Tree::from([5, 3, 8, 1, 4, 7, 9]);
        assert!(tree.remove(&5));

        assert_eq!(tree.len(), 6);
        assert_eq!(in_order_keys(&tree), [1, 3, 4, 7, 8, 9]);

        // 7 was the smallest key to the right of 5, so it took over the root.
        let mut preorder = Vec::new();
        tree.pre_order(|key| preorder.push(*key));
        assert_eq!(preorder, [7, 3, 1, 4, 8, 9]);
    }

    #[test]
    fn test_remove_two_children_with_predecessor() {
        let mut tree = Tree::with_policy(RemovalPolicy::Predecessor);
        tree.extend([5, 3, 8, 1, 4, 7, 9]);
        assert!(tree.remove(&5));

        assert_eq!(tree.len(), 6);
        assert_eq!(in_order_keys(&tree), [1, 3, 4, 7, 8, 9]);

        // 4 was the largest key to the left of 5, so it took over the root.
        let mut preorder = Vec::new();
        tree.pre_order(|key| preorder.push(*key));
        assert_eq!(preorder, [4, 3, 1, 8, 7, 9]);
    }

    #[test]
    fn test_successor_replacement_with_child_of_its_own() {
        // The successor of 10 is 15, which still holds a right child that
        // has to be spliced into 20's left slot.
        let mut tree = Tree::from([10, 5, 20, 15, 30, 17]);
        assert!(tree.remove(&10));

        assert_eq!(in_order_keys(&tree), [5, 15, 17, 20, 30]);

        let mut flat = Vec::new();
        tree.level_order(|key, depth| flat.push((*key, depth)));
        assert_eq!(flat, [(15, 1), (5, 2), (20, 2), (17, 3), (30, 3)]);
    }

    #[test]
    fn test_predecessor_replacement_with_child_of_its_own() {
        // The predecessor of 10 is 7, which still holds a left child that
        // has to be spliced into 5's right slot.
        let mut tree = Tree::with_policy(RemovalPolicy::Predecessor);
        tree.extend([10, 5, 20, 3, 7, 6]);
        assert!(tree.remove(&10));

        assert_eq!(in_order_keys(&tree), [3, 5, 6, 7, 20]);

        let mut flat = Vec::new();
        tree.level_order(|key, depth| flat.push((*key, depth)));
        assert_eq!(flat, [(7, 1), (5, 2), (20, 2), (3, 3), (6, 3)]);
    }

    #[test]
    fn test_remove_then_insert_restores_sequence() {
        let mut tree = Tree::from([5, 3, 8, 1, 4, 7, 9]);
        let before = in_order_keys(&tree);

        assert!(tree.insert(6));
        assert!(tree.remove(&6));

        assert_eq!(tree.len(), 7);
        assert_eq!(in_order_keys(&tree), before);
    }

    #[test]
    fn test_remove_with_string_keys() {
        let mut tree: Tree<String> =
            ["m", "f", "t", "a", "h", "p", "z"].map(String::from).into();
        assert!(tree.remove(&"m".to_string()));

        let mut keys = Vec::new();
        tree.in_order(|key| keys.push(key.as_str()));
        assert_eq!(keys, ["a", "f", "h", "p", "t", "z"]);

        let mut preorder = Vec::new();
        tree.pre_order(|key| preorder.push(key.as_str()));
        assert_eq!(preorder[0], "p");
    }

    #[test]
    fn test_in_order_is_sorted() {
        let tree = Tree::from([8, 3, 10, 1, 6, 14, 4, 7, 13]);
        assert_eq!(in_order_keys(&tree), [1, 3, 4, 6, 7, 8, 10, 13, 14]);
    }

    #[test]
    fn test_pre_order() {
        let tree = Tree::from([8, 3, 10, 1, 6, 14, 4, 7, 13]);

        let mut keys = Vec::new();
        tree.pre_order(|key| keys.push(*key));
        assert_eq!(keys, [8, 3, 1, 6, 4, 7, 10, 14, 13]);
    }

    #[test]
    fn test_post_order() {
        let tree = Tree::from([8, 3, 10, 1, 6, 14, 4, 7, 13]);

        let mut keys = Vec::new();
        tree.post_order(|key| keys.push(*key));
        assert_eq!(keys, [1, 4, 7, 6, 3, 13, 14, 10, 8]);
    }

    #[test]
    fn test_level_order_depths() {
        let tree = Tree::from([8, 3, 10, 1, 6, 14, 4, 7, 13]);

        let mut flat = Vec::new();
        tree.level_order(|key, depth| flat.push((*key, depth)));
        assert_eq!(
            flat,
            [
                (8, 1),
                (3, 2),
                (10, 2),
                (1, 3),
                (6, 3),
                (14, 3),
                (4, 4),
                (7, 4),
                (13, 4)
            ]
        );
    }

    #[test]
    fn test_traversals_of_empty_tree_visit_nothing() {
        let tree = Tree::<i32>::new();

        tree.in_order(|_| panic!("visited a key in an empty tree"));
        tree.pre_order(|_| panic!("visited a key in an empty tree"));
        tree.post_order(|_| panic!("visited a key in an empty tree"));
        tree.level_order(|_, _| panic!("visited a key in an empty tree"));
    }

    #[test]
    fn test_height() {
        let mut tree = Tree::new();
        assert_eq!(tree.height(), 0);

        tree.insert(4);
        assert_eq!(tree.height(), 1);

        tree.insert(2);
        assert_eq!(tree.height(), 2);

        tree.extend([6, 1]);
        assert_eq!(tree.height(), 3);

        // Removing the only node at the deepest level shrinks the height.
        tree.remove(&1);
        assert_eq!(tree.height(), 2);
    }

    #[test]
    fn test_min_max() {
        let tree = Tree::from([5, 1, 9, 7]);
        assert_eq!(tree.min(), Some(&1));
        assert_eq!(tree.max(), Some(&9));

        let empty = Tree::<i32>::new();
        assert_eq!(empty.min(), None);
        assert_eq!(empty.max(), None);
    }

    #[test]
    fn test_clone_is_independent() {
        let source = Tree::from([5, 3, 8, 1]);
        let mut copy = source.clone();

        copy.insert(4);
        copy.remove(&8);

        assert_eq!(in_order_keys(&source), [1, 3, 5, 8]);
        assert_eq!(source.len(), 4);
        assert_eq!(in_order_keys(&copy), [1, 3, 4, 5]);
    }

    #[test]
    fn test_take_resets_source() {
        let mut source = Tree::with_policy(RemovalPolicy::Predecessor);
        source.extend([2, 1, 3]);

        let taken = source.take();
        assert_eq!(in_order_keys(&taken), [1, 2, 3]);
        assert_eq!(taken.policy(), RemovalPolicy::Predecessor);

        assert!(source.is_empty());
        assert_eq!(source.height(), 0);
        assert_eq!(source.policy(), RemovalPolicy::Predecessor);

        // The emptied tree keeps working.
        assert!(source.insert(9));
        assert_eq!(in_order_keys(&source), [9]);
    }

    #[test]
    fn test_clear() {
        let mut tree = Tree::from([2, 1, 3]);
        tree.clear();

        assert!(tree.is_empty());
        assert_eq!(tree.height(), 0);
        assert!(!tree.contains(&2));

        assert!(tree.insert(2));
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_collect_skips_duplicates() {
        let tree: Tree<i32> = [3, 1, 3, 2, 1].into_iter().collect();
        assert_eq!(tree.len(), 3);
        assert_eq!(in_order_keys(&tree), [1, 2, 3]);
    }

    #[test]
    fn test_reinsert_after_remove() {
        let mut tree = Tree::from([2, 1, 3]);
        assert!(tree.remove(&3));
        assert!(tree.insert(3));

        assert_eq!(tree.len(), 3);
        assert_eq!(in_order_keys(&tree), [1, 2, 3]);
    }

    #[test]
    fn test_display() {
        let tree = Tree::from([2, 1, 3]);
        assert_eq!(tree.to_string(), "{1, 2, 3}");

        let empty = Tree::<i32>::new();
        assert_eq!(empty.to_string(), "{}");
    }

    #[test]
    fn test_debug_single_node() {
        let tree = Tree::from([7]);
        assert_eq!(
            format!("{:?}", tree),
            "Tree { policy: Successor, len: 1, root: Node { key: 7, left: None, right: None } }"
        );
    }

    #[test]
    fn test_dump_lists_levels() {
        let tree = Tree::from([8, 3, 10, 1, 6, 14]);
        assert_eq!(
            tree.dump().to_string(),
            "level 1: 8\nlevel 2: 3 10\nlevel 3: 1 6 14"
        );
    }

    #[test]
    fn test_dump_of_empty_tree_is_empty() {
        let tree = Tree::<i32>::new();
        assert_eq!(tree.dump().to_string(), "");
        assert_eq!(tree.dump_detailed().to_string(), "");
    }

    #[test]
    fn test_dump_detailed_shows_neighbors() {
        let tree = Tree::from([2, 1, 3]);
        assert_eq!(
            tree.dump_detailed().to_string(),
            "level 1: 2 [parent -, left 1, right 3]\n\
             level 2: 1 [parent 2, left -, right -] 3 [parent 2, left -, right -]"
        );
    }
}
