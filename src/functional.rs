//! A Functional BST. This is modeled after a BST one would see in
//! a functional language like Haskell. `insert` does not modify the
//! tree, it returns a new tree that references most of the nodes of
//! the original tree.
//!
//! The tree stores keys only (it behaves like an ordered set) and never
//! rebalances.
//!
//! # Examples
//!
//! ```
//! use persistent_bst::functional::Tree;
//!
//! let tree: Tree<String> = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains("b"));
//! assert_eq!(tree.to_string(), "()");
//!
//! // This `insert` returns a new tree!
//! let new_tree = tree.insert(String::from("b"));
//!
//! // The new tree has this new key but the old one doesn't.
//! assert!(new_tree.contains("b"));
//! assert!(!tree.contains("b"));
//!
//! let newer_tree = new_tree
//!     .insert(String::from("a"))
//!     .insert(String::from("c"));
//!
//! // All history is preserved.
//! assert_eq!(newer_tree.to_string(), "((a)b(c))");
//! assert_eq!(new_tree.to_string(), "(b)");
//! assert_eq!(tree.size(), 0);
//! ```

use std::borrow::Borrow;
use std::cmp;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::{FromIterator, FusedIterator};
use std::mem;
use std::sync::Arc;

/// A persistent Binary Search Tree of keys. Note that this data structure
/// is functional - [`insert`][Tree::insert] returns a new tree instead of
/// modifying this one.
///
/// The key type must be totally ordered. An `Ord` implementation that is
/// inconsistent (not transitive, or disagreeing with `Eq`) is a logic error:
/// it is not detected and keys may end up on the wrong side of a node.
#[derive(Debug)]
pub enum Tree<T> {
    /// The empty tree. Also marks the missing child below a leaf `Node`.
    Empty,
    /// A `Node` that has a key and two children (which are
    /// both `Tree`s). This enum trivially wraps the [`Node`] struct.
    Node(Node<T>),
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Cloning a tree is `O(1)`: the clone shares every node with the original.
impl<T> Clone for Tree<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Empty => Self::Empty,
            Self::Node(n) => Self::Node(n.clone()),
        }
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self::Empty
    }

    /// Returns a new tree that also contains the given key. The new tree
    /// shares every subtree not on the path to the new key with `self`.
    ///
    /// If the key is already present the returned tree is `self` again
    /// (a clone sharing the same nodes).
    ///
    /// # Examples
    ///
    /// ```
    /// use persistent_bst::functional::Tree;
    ///
    /// let tree = Tree::new().insert(2);
    /// let new_tree = tree.insert(1);
    ///
    /// assert_eq!(new_tree.size(), 2);
    /// assert_eq!(tree.size(), 1);
    ///
    /// // Inserting an existing key changes nothing.
    /// assert_eq!(new_tree.insert(2), new_tree);
    /// ```
    pub fn insert(&self, key: T) -> Self
    where
        T: cmp::Ord,
    {
        match self {
            Self::Empty => Self::Node(Node::new(key)),
            Self::Node(n) => match n.insert(key) {
                Some(new_root) => Self::Node(new_root),
                None => self.clone(),
            },
        }
    }

    /// Returns whether the tree contains the given key.
    ///
    /// The key may be any borrowed form of the tree's key type, so a
    /// `Tree<String>` can be searched with a `&str`.
    ///
    /// # Examples
    ///
    /// ```
    /// use persistent_bst::functional::Tree;
    ///
    /// let tree = Tree::new().insert(String::from("x"));
    ///
    /// assert!(tree.contains("x"));
    /// assert!(!tree.contains("y"));
    /// ```
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: cmp::Ord + ?Sized,
    {
        match self {
            Self::Empty => false,
            Self::Node(n) => n.contains(key),
        }
    }

    /// Returns the number of keys in this tree.
    pub fn size(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Node(n) => n.size,
        }
    }

    /// Returns `true` if the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Gets the height of this tree. The empty tree has a height of 0 and a
    /// single leaf has a height of 1.
    ///
    /// Since the tree never rebalances, inserting keys in ascending order
    /// gives a tree whose height equals its size.
    ///
    /// ```
    /// use persistent_bst::functional::Tree;
    ///
    /// let tree: Tree<_> = (1..=5).collect();
    /// assert_eq!(tree.height(), 5);
    /// ```
    pub fn height(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Node(n) => n.height,
        }
    }

    /// Returns an iterator over the keys in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use persistent_bst::functional::Tree;
    ///
    /// let tree: Tree<_> = vec![3, 1, 2].into_iter().collect();
    ///
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Returns the keys in ascending order. This is the same iterator as
    /// [`iter`][Tree::iter]; every call starts a fresh traversal.
    pub fn inorder(&self) -> Iter<'_, T> {
        self.iter()
    }
}

/// Renders the tree with parentheses around every node: `"(" + left + key +
/// right + ")"`. An empty child renders as nothing, so a leaf is `"(k)"`,
/// but an empty tree on its own renders as `"()"`.
impl<T> fmt::Display for Tree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("()"),
            Self::Node(n) => fmt::Display::fmt(n, f),
        }
    }
}

impl<T> PartialEq for Tree<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Empty, Self::Empty) => true,
            (Self::Node(a), Self::Node(b)) => a == b,
            _ => false,
        }
    }
}

impl<T> Eq for Tree<T> where T: Eq {}

impl<T> Hash for Tree<T>
where
    T: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        mem::discriminant(self).hash(state);
        if let Self::Node(n) = self {
            n.hash(state);
        }
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: cmp::Ord,
{
    /// Inserts every key in iteration order, so the shape of the tree follows
    /// the order of the iterator.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), |tree, key| tree.insert(key))
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

struct Child<T>(Arc<Tree<T>>);
impl<T> Clone for Child<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}
impl<T> Child<T> {
    fn new() -> Self {
        Self(Arc::new(Tree::new()))
    }

    fn from_node(node: Node<T>) -> Self {
        Self(Arc::new(Tree::Node(node)))
    }

    fn tree(&self) -> &Tree<T> {
        &self.0
    }

    fn size(&self) -> usize {
        self.0.size()
    }

    fn height(&self) -> usize {
        self.0.height()
    }

    /// Returns `None` when the key is already in this subtree.
    fn insert(&self, key: T) -> Option<Self>
    where
        T: cmp::Ord,
    {
        match self.tree() {
            Tree::Empty => Some(Self::from_node(Node::new(key))),
            Tree::Node(n) => n.insert(key).map(Self::from_node),
        }
    }

    fn contains<Q>(&self, key: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: cmp::Ord + ?Sized,
    {
        self.0.contains(key)
    }
}

impl<T> PartialEq for Child<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || self.tree() == other.tree()
    }
}

/// A `Node` has a key that is used for searching/sorting. It always has two
/// children although those children may be [`Empty`][Tree::Empty].
pub struct Node<T> {
    key: Arc<T>,
    left: Child<T>,
    right: Child<T>,

    /// How many keys are in the subtree rooted at this node.
    size: usize,
    /// How many levels are in the subtree rooted at this node.
    /// A node with no children has a height of 1.
    height: usize,
}

/// Manual implementation of `Clone` so we don't clone references when the generic parameters
/// aren't `Clone` themselves.
///
/// Note the comment on generic structs in
/// [the docs][<https://doc.rust-lang.org/std/clone/trait.Clone.html#derivable>].
impl<T> Clone for Node<T> {
    fn clone(&self) -> Self {
        Self {
            height: self.height,
            key: Arc::clone(&self.key),
            left: self.left.clone(),
            right: self.right.clone(),
            size: self.size,
        }
    }
}

impl<T> Node<T> {
    /// Construct a new leaf `Node` with the given `key`.
    fn new(key: T) -> Self {
        Self {
            height: 1,
            key: Arc::new(key),
            left: Child::new(),
            right: Child::new(),
            size: 1,
        }
    }

    /// The key stored in this node.
    pub fn key(&self) -> &T {
        &self.key
    }

    /// The subtree holding every key smaller than this node's key.
    pub fn left(&self) -> &Tree<T> {
        self.left.tree()
    }

    /// The subtree holding every key greater than this node's key.
    pub fn right(&self) -> &Tree<T> {
        self.right.tree()
    }

    /// Create a new Node with the same key as this node
    /// but with the given children.
    fn clone_with_children(&self, left_child: Child<T>, right_child: Child<T>) -> Self {
        Self {
            height: left_child.height().max(right_child.height()) + 1,
            key: Arc::clone(&self.key),
            size: left_child.size() + right_child.size() + 1,
            left: left_child,
            right: right_child,
        }
    }

    /// Returns the rebuilt node, or `None` if the key is already present and
    /// nothing needs rebuilding.
    fn insert(&self, key: T) -> Option<Self>
    where
        T: cmp::Ord,
    {
        match key.cmp(self.key()) {
            cmp::Ordering::Less => {
                let new_left = self.left.insert(key)?;
                Some(self.clone_with_children(new_left, self.right.clone()))
            }
            cmp::Ordering::Equal => None,
            cmp::Ordering::Greater => {
                let new_right = self.right.insert(key)?;
                Some(self.clone_with_children(self.left.clone(), new_right))
            }
        }
    }

    fn contains<Q>(&self, key: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: cmp::Ord + ?Sized,
    {
        match key.cmp(self.key().borrow()) {
            cmp::Ordering::Less => self.left.contains(key),
            cmp::Ordering::Equal => true,
            cmp::Ordering::Greater => self.right.contains(key),
        }
    }
}

impl<T> fmt::Display for Node<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        if let Tree::Node(left) = self.left() {
            fmt::Display::fmt(left, f)?;
        }
        fmt::Display::fmt(self.key(), f)?;
        if let Tree::Node(right) = self.right() {
            fmt::Display::fmt(right, f)?;
        }
        f.write_str(")")
    }
}

impl<T> fmt::Debug for Node<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", self.key())
            .field("left", self.left())
            .field("right", self.right())
            .finish()
    }
}

impl<T> PartialEq for Node<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size
            && self.key == other.key
            && self.left == other.left
            && self.right == other.right
    }
}

impl<T> Eq for Node<T> where T: Eq {}

impl<T> Hash for Node<T>
where
    T: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
        self.left().hash(state);
        self.right().hash(state);
    }
}

/// An in-order iterator over the keys of a [`Tree`].
///
/// It keeps the path of nodes still to be visited on an explicit stack, so
/// walking a degenerate (list shaped) tree does not recurse.
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iter<'a, T> {
    fn new(tree: &'a Tree<T>) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: tree.size(),
        };
        iter.push_left_spine(tree);
        iter
    }

    /// Pushes `tree` and all of its left descendants so the smallest key
    /// ends up on top of the stack.
    fn push_left_spine(&mut self, mut tree: &'a Tree<T>) {
        while let Tree::Node(n) = tree {
            self.stack.push(n);
            tree = n.left();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        self.remaining -= 1;
        Some(node.key())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}
