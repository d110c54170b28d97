//! Persistent (immutable) height-balanced binary search tree.
//!
//! This module provides [`BalancedTree`], an immutable ordered collection of
//! unique values based on a persistent AVL tree with structural sharing.
//!
//! # Overview
//!
//! - O(log N) insert
//! - O(log N) contains
//! - O(log N) min/max
//! - O(1) height and `is_empty`
//! - O(N) iteration in ascending order
//!
//! Every operation returns a new tree without modifying the original;
//! untouched subtrees are shared between versions.
//!
//! # Invariants
//!
//! After every public operation, every reachable node satisfies:
//!
//! 1. **Ordering**: all values in the left subtree compare less than the
//!    node's value, all values in the right subtree compare greater. There
//!    are no duplicates; inserting an existing value returns the tree
//!    unchanged.
//! 2. **Balance**: the heights of the two subtrees differ by at most one.
//! 3. **Height cache**: the stored height equals one plus the larger child
//!    height, and the empty tree has height zero.
//!
//! Balance is restored after insertion by the classic single and double
//! rotations, expressed here purely through whole-subtree replacement: the
//! structural operations [`replace_left`], [`replace_right`], [`swap_left`]
//! and [`swap_right`] are the only vocabulary the rebalancing code uses.
//!
//! # Examples
//!
//! ```rust
//! use treefold::persistent::BalancedTree;
//!
//! let tree: BalancedTree<i32> = [3, 1, 6, 4, 2, 5].into_iter().collect();
//!
//! // Iteration is always in ascending order, whatever the insertion order.
//! let values: Vec<i32> = tree.iter().copied().collect();
//! assert_eq!(values, vec![1, 2, 3, 4, 5, 6]);
//!
//! // A balanced tree over n values has logarithmic height.
//! assert!(tree.height() <= 3);
//! ```
//!
//! [`replace_left`]: BalancedTree::replace_left
//! [`replace_right`]: BalancedTree::replace_right
//! [`swap_left`]: BalancedTree::swap_left
//! [`swap_right`]: BalancedTree::swap_right

use super::ReferenceCounter;
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::container::{Container, TypeConstructor};

// =============================================================================
// Node Definition
// =============================================================================

/// Internal node structure. Children are whole trees, so the empty sentinel
/// (`root: None`) doubles as the leaf boundary and the tagged representation
/// never crosses the public API.
#[derive(Clone)]
struct Node<T> {
    value: T,
    /// Cached height of the subtree rooted here; kept consistent by
    /// rebuilding nodes through [`BalancedTree::branch`] only.
    height: usize,
    left: BalancedTree<T>,
    right: BalancedTree<T>,
}

// =============================================================================
// BalancedTree Definition
// =============================================================================

/// A persistent height-balanced binary search tree of unique values.
///
/// `BalancedTree` keeps two interlocking invariants under purely functional
/// mutation: binary-search-tree ordering and an AVL height balance (sibling
/// subtree heights differ by at most one). Insertion returns a new root that
/// shares every untouched subtree with the previous version.
///
/// The element type needs a total order (`Ord`); a tree over a type without
/// one simply does not implement the operations, so ordering violations are
/// compile errors rather than runtime failures.
///
/// # Time Complexity
///
/// | Operation   | Complexity |
/// |-------------|------------|
/// | `new`       | O(1)       |
/// | `insert`    | O(log N)   |
/// | `contains`  | O(log N)   |
/// | `min`/`max` | O(log N)   |
/// | `height`    | O(1)       |
/// | `is_empty`  | O(1)       |
/// | `len`       | O(N)       |
/// | `iter`      | O(N)       |
///
/// # Examples
///
/// ```rust
/// use treefold::persistent::BalancedTree;
///
/// let tree = BalancedTree::new().insert(2).insert(1).insert(3);
/// assert!(tree.contains(&2));
///
/// // Inserting a strictly increasing run still yields a balanced shape.
/// let chain: BalancedTree<i32> = (1..=7).collect();
/// assert_eq!(chain.height(), 3);
/// ```
pub struct BalancedTree<T> {
    root: Option<ReferenceCounter<Node<T>>>,
}

impl<T> Clone for BalancedTree<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
        }
    }
}

impl<T> BalancedTree<T> {
    /// Creates a new empty tree.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treefold::persistent::BalancedTree;
    ///
    /// let tree: BalancedTree<i32> = BalancedTree::new();
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.height(), 0);
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { root: None }
    }

    /// Returns `true` if the tree contains no values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treefold::persistent::BalancedTree;
    ///
    /// assert!(BalancedTree::<i32>::new().is_empty());
    /// assert!(!BalancedTree::new().insert(1).is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the cached height of the tree.
    ///
    /// The empty tree has height zero; a node's height is one plus the
    /// larger of its children's heights.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treefold::persistent::BalancedTree;
    ///
    /// let tree = BalancedTree::new().insert(2).insert(1).insert(3);
    /// assert_eq!(tree.height(), 2);
    /// ```
    #[inline]
    #[must_use]
    pub fn height(&self) -> usize {
        self.root.as_deref().map_or(0, |node| node.height)
    }

    /// Returns the number of values in the tree.
    ///
    /// # Complexity
    ///
    /// O(N) — the node layout caches heights, not subtree sizes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treefold::persistent::BalancedTree;
    ///
    /// let tree = BalancedTree::new().insert(1).insert(2).insert(2);
    /// assert_eq!(tree.len(), 2);
    /// ```
    #[must_use]
    pub fn len(&self) -> usize {
        fn count<T>(node: Option<&Node<T>>) -> usize {
            node.map_or(0, |node| {
                1 + count(node.left.root.as_deref()) + count(node.right.root.as_deref())
            })
        }
        count(self.root.as_deref())
    }

    /// Returns a reference to the value at the root, or `None` for the
    /// empty tree.
    ///
    /// Together with [`left`](Self::left) and [`right`](Self::right) this
    /// allows structural inspection without exposing the internal node
    /// representation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treefold::persistent::BalancedTree;
    ///
    /// let tree = BalancedTree::new().insert(1).insert(2).insert(3);
    /// assert_eq!(tree.value(), Some(&2));
    /// ```
    #[inline]
    #[must_use]
    pub fn value(&self) -> Option<&T> {
        self.root.as_deref().map(|node| &node.value)
    }

    /// Returns the left subtree, or the empty tree for an empty receiver.
    ///
    /// This is a cheap pointer clone thanks to structural sharing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treefold::persistent::BalancedTree;
    ///
    /// let tree = BalancedTree::new().insert(1).insert(2).insert(3);
    /// assert_eq!(tree.left().value(), Some(&1));
    /// ```
    #[inline]
    #[must_use]
    pub fn left(&self) -> Self {
        self.root.as_deref().map_or_else(Self::new, |node| node.left.clone())
    }

    /// Returns the right subtree, or the empty tree for an empty receiver.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treefold::persistent::BalancedTree;
    ///
    /// let tree = BalancedTree::new().insert(1).insert(2).insert(3);
    /// assert_eq!(tree.right().value(), Some(&3));
    /// ```
    #[inline]
    #[must_use]
    pub fn right(&self) -> Self {
        self.root.as_deref().map_or_else(Self::new, |node| node.right.clone())
    }

    /// Returns a reference to the smallest value, or `None` for the empty
    /// tree.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treefold::persistent::BalancedTree;
    ///
    /// let tree = BalancedTree::new().insert(5).insert(1).insert(3);
    /// assert_eq!(tree.min(), Some(&1));
    /// ```
    #[must_use]
    pub fn min(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(next) = node.left.root.as_deref() {
            node = next;
        }
        Some(&node.value)
    }

    /// Returns a reference to the largest value, or `None` for the empty
    /// tree.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treefold::persistent::BalancedTree;
    ///
    /// let tree = BalancedTree::new().insert(5).insert(1).insert(3);
    /// assert_eq!(tree.max(), Some(&5));
    /// ```
    #[must_use]
    pub fn max(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(next) = node.right.root.as_deref() {
            node = next;
        }
        Some(&node.value)
    }

    /// Returns an iterator over the values in ascending order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treefold::persistent::BalancedTree;
    ///
    /// let tree = BalancedTree::new().insert(2).insert(3).insert(1);
    /// let values: Vec<&i32> = tree.iter().collect();
    /// assert_eq!(values, vec![&1, &2, &3]);
    /// ```
    #[must_use]
    pub fn iter(&self) -> BalancedTreeIterator<'_, T> {
        let mut elements = Vec::new();
        Self::collect_in_order(self.root.as_deref(), &mut elements);
        BalancedTreeIterator {
            elements,
            current_index: 0,
        }
    }

    /// Collects all values in ascending order (in-order traversal).
    fn collect_in_order<'a>(node: Option<&'a Node<T>>, elements: &mut Vec<&'a T>) {
        if let Some(node) = node {
            Self::collect_in_order(node.left.root.as_deref(), elements);
            elements.push(&node.value);
            Self::collect_in_order(node.right.root.as_deref(), elements);
        }
    }

    /// Builds a node from a value and two subtrees, recomputing the cached
    /// height from the children. All structural operations construct nodes
    /// through here, so the height cache can never go stale.
    fn branch(value: T, left: Self, right: Self) -> Self {
        let height = 1 + left.height().max(right.height());
        Self {
            root: Some(ReferenceCounter::new(Node {
                value,
                height,
                left,
                right,
            })),
        }
    }

    /// Builds a node with two empty children.
    fn leaf(value: T) -> Self {
        Self::branch(value, Self::new(), Self::new())
    }
}

// =============================================================================
// Structural Operations
// =============================================================================

impl<T: Clone> BalancedTree<T> {
    /// Returns a new tree identical to the receiver except that its left
    /// subtree is replaced by `replacement(current_left)`.
    ///
    /// The height cache is recomputed; ordering and balance are *not*
    /// re-established — this is a raw structural operation, the vocabulary
    /// the rotation algebra is written in. On the empty tree it is a no-op.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treefold::container::Container;
    /// use treefold::persistent::BalancedTree;
    ///
    /// let tree = BalancedTree::new().insert(2).insert(1).insert(3);
    /// let pruned = tree.replace_left(|_| BalancedTree::new());
    /// assert_eq!(pruned.height(), 2);
    /// assert_eq!(pruned.to_list(), vec![2, 3]);
    /// ```
    #[must_use]
    pub fn replace_left<F>(&self, replacement: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        self.root.as_deref().map_or_else(Self::new, |node| {
            Self::branch(
                node.value.clone(),
                replacement(node.left.clone()),
                node.right.clone(),
            )
        })
    }

    /// Returns a new tree identical to the receiver except that its right
    /// subtree is replaced by `replacement(current_right)`.
    ///
    /// Mirror of [`replace_left`](Self::replace_left).
    #[must_use]
    pub fn replace_right<F>(&self, replacement: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        self.root.as_deref().map_or_else(Self::new, |node| {
            Self::branch(
                node.value.clone(),
                node.left.clone(),
                replacement(node.right.clone()),
            )
        })
    }

    /// Promotes the left child into the receiver's position.
    ///
    /// The receiver's value is pushed down to the right: the result is the
    /// left child with *its* right subtree replaced by a new node carrying
    /// the receiver's value, the left child's original right subtree, and
    /// the receiver's original right subtree. Expressed in the structural
    /// vocabulary:
    ///
    /// ```text
    /// left.replace_right(|left_right| node(self.value, left_right, self.right))
    /// ```
    ///
    /// This is the rotation-preparation step used when repairing left-heavy
    /// imbalance; heights are recomputed, ordering is preserved. When the
    /// receiver or its left child is empty there is nothing to promote and
    /// the tree is returned unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treefold::persistent::BalancedTree;
    ///
    /// let tree = BalancedTree::new().insert(2).insert(1).insert(3);
    /// let rotated = tree.swap_left();
    ///
    /// assert_eq!(rotated.value(), Some(&1));
    /// assert_eq!(rotated.right().value(), Some(&2));
    /// assert_eq!(rotated.right().right().value(), Some(&3));
    /// ```
    #[must_use]
    pub fn swap_left(&self) -> Self {
        let Some(node) = self.root.as_deref() else {
            return self.clone();
        };
        if node.left.is_empty() {
            return self.clone();
        }
        let value = node.value.clone();
        let right = node.right.clone();
        node.left
            .replace_right(move |left_right| Self::branch(value, left_right, right))
    }

    /// Promotes the right child into the receiver's position.
    ///
    /// Mirror of [`swap_left`](Self::swap_left):
    ///
    /// ```text
    /// right.replace_left(|right_left| node(self.value, self.left, right_left))
    /// ```
    ///
    /// Used when repairing right-heavy imbalance.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treefold::persistent::BalancedTree;
    ///
    /// let tree = BalancedTree::new().insert(2).insert(1).insert(3);
    /// let rotated = tree.swap_right();
    ///
    /// assert_eq!(rotated.value(), Some(&3));
    /// assert_eq!(rotated.left().value(), Some(&2));
    /// assert_eq!(rotated.left().left().value(), Some(&1));
    /// ```
    #[must_use]
    pub fn swap_right(&self) -> Self {
        let Some(node) = self.root.as_deref() else {
            return self.clone();
        };
        if node.right.is_empty() {
            return self.clone();
        }
        let value = node.value.clone();
        let left = node.left.clone();
        node.right
            .replace_left(move |right_left| Self::branch(value, left, right_left))
    }
}

// =============================================================================
// Ordered Operations
// =============================================================================

impl<T: Clone + Ord> BalancedTree<T> {
    /// Creates a tree containing a single value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treefold::persistent::BalancedTree;
    ///
    /// let tree = BalancedTree::singleton(42);
    /// assert_eq!(tree.len(), 1);
    /// assert!(tree.contains(&42));
    /// ```
    #[inline]
    #[must_use]
    pub fn singleton(value: T) -> Self {
        Self::leaf(value)
    }

    /// Returns `true` if the tree contains the given value.
    ///
    /// The value may be any borrowed form of the element type, as long as
    /// the borrowed form's ordering matches the element type's.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treefold::persistent::BalancedTree;
    ///
    /// let tree = BalancedTree::new()
    ///     .insert("hello".to_string())
    ///     .insert("world".to_string());
    ///
    /// // Lookup with &str, no allocation needed.
    /// assert!(tree.contains("hello"));
    /// assert!(!tree.contains("missing"));
    /// ```
    #[must_use]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        Self::contains_in_node(self.root.as_deref(), element)
    }

    /// Recursive helper for contains, exploiting the ordering invariant to
    /// descend a single path.
    fn contains_in_node<Q>(node: Option<&Node<T>>, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        node.is_some_and(|node| match element.cmp(node.value.borrow()) {
            Ordering::Less => Self::contains_in_node(node.left.root.as_deref(), element),
            Ordering::Greater => Self::contains_in_node(node.right.root.as_deref(), element),
            Ordering::Equal => true,
        })
    }

    /// Inserts a value, returning a new tree. The original is unchanged.
    ///
    /// Inserting a value that is already present is a no-op returning a
    /// tree with the same contents (this is a fixed policy; callers who
    /// need "reject duplicates" semantics can test
    /// [`contains`](Self::contains) first).
    ///
    /// The insertion is a single descent with a post-order rebalancing
    /// decision on the way back up: when the grown child's height exceeds
    /// the untouched sibling's by two, the imbalance is repaired with a
    /// single rotation ([`replace_left`](Self::replace_left) /
    /// [`replace_right`](Self::replace_right) alone) or a double rotation
    /// ([`swap_left`](Self::swap_left) / [`swap_right`](Self::swap_right)
    /// composed with a replacement).
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treefold::persistent::BalancedTree;
    ///
    /// let tree = BalancedTree::new().insert(1);
    /// let grown = tree.insert(2);
    ///
    /// assert!(!tree.contains(&2)); // Original unchanged
    /// assert!(grown.contains(&2)); // New version
    ///
    /// // Duplicate insertion changes nothing.
    /// assert_eq!(grown.insert(2), grown);
    /// ```
    #[must_use]
    pub fn insert(&self, element: T) -> Self {
        let Some(node) = self.root.as_deref() else {
            return Self::leaf(element);
        };
        match element.cmp(&node.value) {
            Ordering::Equal => self.clone(),
            Ordering::Less => {
                let grown = node.left.insert(element.clone());
                Self::rebalance_left(node, grown, &element)
            }
            Ordering::Greater => {
                let grown = node.right.insert(element.clone());
                Self::rebalance_right(node, grown, &element)
            }
        }
    }

    /// Rebuilds `node` after an insertion into its left subtree, restoring
    /// the balance invariant if the grown child now overshoots the right
    /// sibling by two.
    ///
    /// Whether a single or a double rotation applies is decided by
    /// comparing the freshly inserted value against the grown subtree's
    /// root value: smaller means the outer (left-left) shape, larger means
    /// the inner (left-right) shape, which is first converted to left-left
    /// by promoting the grown child's right child.
    fn rebalance_left(node: &Node<T>, grown: Self, inserted: &T) -> Self {
        if grown.height() != node.right.height() + 2 {
            return Self::branch(node.value.clone(), grown, node.right.clone());
        }
        let outer = grown
            .value()
            .is_some_and(|grown_value| inserted < grown_value);
        let pivot = if outer { grown } else { grown.swap_right() };
        let value = node.value.clone();
        let right = node.right.clone();
        pivot.replace_right(move |pivot_right| Self::branch(value, pivot_right, right))
    }

    /// Mirror of [`rebalance_left`](Self::rebalance_left) for insertions
    /// into the right subtree.
    fn rebalance_right(node: &Node<T>, grown: Self, inserted: &T) -> Self {
        if grown.height() != node.left.height() + 2 {
            return Self::branch(node.value.clone(), node.left.clone(), grown);
        }
        let outer = grown
            .value()
            .is_some_and(|grown_value| inserted > grown_value);
        let pivot = if outer { grown } else { grown.swap_left() };
        let value = node.value.clone();
        let left = node.left.clone();
        pivot.replace_left(move |pivot_left| Self::branch(value, left, pivot_left))
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for BalancedTree<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Ord> FromIterator<T> for BalancedTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        for element in iter {
            tree = tree.insert(element);
        }
        tree
    }
}

impl<T: PartialEq> PartialEq for BalancedTree<T> {
    /// Trees compare equal when their ascending value sequences are equal;
    /// the internal shape (which depends on insertion order) does not
    /// participate.
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for BalancedTree<T> {}

impl<T: Hash> Hash for BalancedTree<T> {
    /// Hashes the length and then every value in ascending order, so equal
    /// trees hash equally regardless of insertion order.
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for BalancedTree<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for BalancedTree<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// A borrowing iterator over the values of a [`BalancedTree`] in ascending
/// order.
pub struct BalancedTreeIterator<'a, T> {
    elements: Vec<&'a T>,
    current_index: usize,
}

impl<'a, T> Iterator for BalancedTreeIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current_index >= self.elements.len() {
            None
        } else {
            let element = self.elements[self.current_index];
            self.current_index += 1;
            Some(element)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.elements.len().saturating_sub(self.current_index);
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for BalancedTreeIterator<'_, T> {
    fn len(&self) -> usize {
        self.elements.len().saturating_sub(self.current_index)
    }
}

/// An owning iterator over the values of a [`BalancedTree`] in ascending
/// order.
pub struct BalancedTreeIntoIterator<T> {
    elements: Vec<T>,
    current_index: usize,
}

impl<T: Clone> Iterator for BalancedTreeIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current_index >= self.elements.len() {
            None
        } else {
            let element = self.elements[self.current_index].clone();
            self.current_index += 1;
            Some(element)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.elements.len().saturating_sub(self.current_index);
        (remaining, Some(remaining))
    }
}

impl<T: Clone> ExactSizeIterator for BalancedTreeIntoIterator<T> {
    fn len(&self) -> usize {
        self.elements.len().saturating_sub(self.current_index)
    }
}

impl<T: Clone> IntoIterator for BalancedTree<T> {
    type Item = T;
    type IntoIter = BalancedTreeIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        let elements: Vec<T> = self.iter().cloned().collect();
        BalancedTreeIntoIterator {
            elements,
            current_index: 0,
        }
    }
}

impl<'a, T> IntoIterator for &'a BalancedTree<T> {
    type Item = &'a T;
    type IntoIter = BalancedTreeIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Container Protocol Implementation
// =============================================================================

impl<T> TypeConstructor for BalancedTree<T> {
    type Inner = T;
    type WithType<B> = BalancedTree<B>;
}

/// `BalancedTree` satisfies the container protocol: `empty` is the empty
/// tree, `build` is ordered insertion, and `fold_left` visits values in
/// ascending order.
///
/// Note that because building de-duplicates, derived operations that route
/// values through a non-injective function (such as `fmap` with `|_| 0`)
/// may collapse values.
impl<T: Clone + Ord> Container for BalancedTree<T> {
    #[inline]
    fn empty<B>() -> BalancedTree<B> {
        BalancedTree::new()
    }

    #[inline]
    fn build(self, element: T) -> Self {
        self.insert(element)
    }

    fn fold_left<B, F>(self, seed: B, mut function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        fn fold_node<T: Clone, B, F>(node: Option<&Node<T>>, seed: B, function: &mut F) -> B
        where
            F: FnMut(B, T) -> B,
        {
            match node {
                None => seed,
                Some(node) => {
                    let seed = fold_node(node.left.root.as_deref(), seed, function);
                    let seed = function(seed, node.value.clone());
                    fold_node(node.right.root.as_deref(), seed, function)
                }
            }
        }
        fold_node(self.root.as_deref(), seed, &mut function)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_insert_shares_untouched_subtree() {
        let tree = BalancedTree::new().insert(2).insert(1).insert(3);
        let grown = tree.insert(4);

        let original_left = tree.root.as_ref().unwrap().left.root.as_ref().unwrap();
        let new_left = grown.root.as_ref().unwrap().left.root.as_ref().unwrap();
        assert!(ReferenceCounter::ptr_eq(original_left, new_left));
    }

    #[rstest]
    fn test_branch_recomputes_height_from_children() {
        let tree = BalancedTree::new().insert(2).insert(1).insert(3);
        let taller = tree.replace_right(|right| right.insert(4).insert(5));

        assert_eq!(taller.right().height(), 2);
        assert_eq!(taller.height(), 3);
    }

    #[rstest]
    fn test_swap_left_matches_structural_formula() {
        let tree = BalancedTree::new().insert(2).insert(1).insert(3);

        let by_formula = tree.left().replace_right(|left_right| {
            BalancedTree::branch(2, left_right, tree.right())
        });
        let swapped = tree.swap_left();

        assert_eq!(swapped.value(), by_formula.value());
        assert_eq!(swapped.height(), by_formula.height());
        assert_eq!(swapped, by_formula);
    }

    #[rstest]
    fn test_swap_on_empty_or_one_sided_tree_is_a_no_op() {
        let empty: BalancedTree<i32> = BalancedTree::new();
        assert!(empty.swap_left().is_empty());
        assert!(empty.swap_right().is_empty());

        // 1 has no left child to promote.
        let right_only = BalancedTree::new().insert(1).insert(2);
        assert_eq!(right_only.swap_left(), right_only);
        assert_eq!(right_only.swap_left().value(), Some(&1));
    }

    #[rstest]
    fn test_fold_left_visits_in_ascending_order() {
        let tree: BalancedTree<i32> = [3, 1, 6, 4, 2, 5].into_iter().collect();
        let visited = tree.fold_left(Vec::new(), |mut accumulator, element| {
            accumulator.push(element);
            accumulator
        });
        assert_eq!(visited, vec![1, 2, 3, 4, 5, 6]);
    }

    #[rstest]
    fn test_duplicate_insert_returns_shared_root() {
        let tree = BalancedTree::new().insert(2).insert(1);
        let same = tree.insert(2);
        assert!(ReferenceCounter::ptr_eq(
            tree.root.as_ref().unwrap(),
            same.root.as_ref().unwrap()
        ));
    }
}
