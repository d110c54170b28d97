//! # treefold
//!
//! Persistent height-balanced search trees with a fold-derived container
//! algebra.
//!
//! ## Overview
//!
//! This library is built from two layers:
//!
//! - **Container protocol** ([`container`]): the minimal capability set a
//!   persistent container must supply — produce an empty instance, build a
//!   new instance with one more value, and left-fold over contained values.
//!   An entire algebra of higher-order operations (map, filter,
//!   concatenation, flat-map, applicative apply, lift, traverse, sequence)
//!   is derived once from those three primitives and inherited by every
//!   conforming container.
//! - **Balanced search tree** ([`persistent`]): [`BalancedTree`], a
//!   persistent AVL tree that implements the protocol while maintaining
//!   binary-search-tree ordering and a height difference of at most one
//!   between sibling subtrees, using only whole-subtree replacement.
//!
//! All operations are pure: they never mutate the receiver and return new
//! versions that share untouched subtrees with prior versions.
//!
//! ## Example
//!
//! ```rust
//! use treefold::prelude::*;
//!
//! let tree = BalancedTree::new().insert(3).insert(1).insert(2);
//!
//! // Fold order is always sorted, regardless of insertion order.
//! assert_eq!(tree.clone().to_list(), vec![1, 2, 3]);
//!
//! // The derived algebra works on any conforming container.
//! let doubled: BalancedTree<i32> = tree.fmap(|n| n * 2);
//! assert_eq!(doubled.to_list(), vec![2, 4, 6]);
//! ```
//!
//! ## Feature Flags
//!
//! - `arc`: use `Arc` instead of `Rc` for structural sharing, making trees
//!   `Send + Sync` when their elements are.
//!
//! [`BalancedTree`]: persistent::BalancedTree

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use treefold::prelude::*;
/// ```
pub mod prelude {
    pub use crate::container::*;
    pub use crate::persistent::*;
}

pub mod container;

pub mod persistent;
