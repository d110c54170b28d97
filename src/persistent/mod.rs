//! Persistent (immutable) data structures.
//!
//! This module provides [`BalancedTree`], a persistent height-balanced
//! binary search tree. Mutation-like operations return a new version that
//! shares untouched subtrees with the previous version, so prior versions
//! stay valid and cheap to keep.
//!
//! # Structural Sharing
//!
//! ```rust
//! use treefold::persistent::BalancedTree;
//!
//! let tree = BalancedTree::new().insert(2).insert(1).insert(3);
//!
//! // Insertion returns a new version; the original is untouched.
//! let grown = tree.insert(4);
//! assert!(!tree.contains(&4));
//! assert!(grown.contains(&4));
//! ```

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

mod tree;

pub use tree::BalancedTree;
pub use tree::BalancedTreeIntoIterator;
pub use tree::BalancedTreeIterator;

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod reference_counter_tests {
    use super::ReferenceCounter;
    use rstest::rstest;

    #[rstest]
    fn test_reference_counter_clone() {
        let reference_counter: ReferenceCounter<i32> = ReferenceCounter::new(42);
        let reference_counter_clone = reference_counter.clone();
        assert_eq!(*reference_counter, *reference_counter_clone);
    }

    #[rstest]
    fn test_reference_counter_strong_count() {
        let reference_counter: ReferenceCounter<i32> = ReferenceCounter::new(42);
        assert_eq!(ReferenceCounter::strong_count(&reference_counter), 1);
        let reference_counter_clone = reference_counter.clone();
        assert_eq!(ReferenceCounter::strong_count(&reference_counter), 2);
        drop(reference_counter_clone);
        assert_eq!(ReferenceCounter::strong_count(&reference_counter), 1);
    }
}
