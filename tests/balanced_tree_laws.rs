//! Property-based tests for `BalancedTree`.
//!
//! These properties pin down the two interlocking invariants (search-tree
//! ordering and AVL height balance) together with height-cache consistency
//! and fold determinism, for arbitrary insertion orders.

use proptest::prelude::*;
use std::collections::BTreeSet;
use treefold::container::Container;
use treefold::persistent::BalancedTree;

// =============================================================================
// Strategies and Invariant Checks
// =============================================================================

/// Strategy for generating a tree from an arbitrary insertion sequence.
fn arbitrary_tree(max_size: usize) -> impl Strategy<Value = (BalancedTree<i32>, Vec<i32>)> {
    prop::collection::vec(any::<i32>(), 0..max_size)
        .prop_map(|elements| (elements.iter().copied().collect(), elements))
}

/// Checks the binary-search-tree ordering invariant: every value is within
/// the open interval dictated by its ancestors.
fn is_search_tree(tree: &BalancedTree<i32>, lower: Option<i32>, upper: Option<i32>) -> bool {
    match tree.value() {
        None => true,
        Some(&value) => {
            lower.is_none_or(|bound| bound < value)
                && upper.is_none_or(|bound| value < bound)
                && is_search_tree(&tree.left(), lower, Some(value))
                && is_search_tree(&tree.right(), Some(value), upper)
        }
    }
}

/// Checks the AVL balance invariant and height-cache consistency for every
/// reachable node.
fn is_balanced_with_consistent_heights(tree: &BalancedTree<i32>) -> bool {
    if tree.is_empty() {
        return tree.height() == 0;
    }
    let left = tree.left();
    let right = tree.right();
    let difference = left.height().abs_diff(right.height());

    difference <= 1
        && tree.height() == 1 + left.height().max(right.height())
        && is_balanced_with_consistent_heights(&left)
        && is_balanced_with_consistent_heights(&right)
}

// =============================================================================
// Structural Invariants
// =============================================================================

proptest! {
    /// Invariant: ordering holds at every node, for every insertion order.
    #[test]
    fn prop_search_tree_invariant((tree, _) in arbitrary_tree(60)) {
        prop_assert!(is_search_tree(&tree, None, None));
    }

    /// Invariant: sibling heights differ by at most one at every node, and
    /// every cached height equals one plus the larger child height.
    #[test]
    fn prop_balance_and_height_cache_invariant((tree, _) in arbitrary_tree(60)) {
        prop_assert!(is_balanced_with_consistent_heights(&tree));
    }

    /// The balance invariant keeps the height logarithmic: a tree of n
    /// values never exceeds twice the perfect-tree height plus one.
    #[test]
    fn prop_height_is_logarithmic((tree, _) in arbitrary_tree(120)) {
        let length = tree.len();
        let height = tree.height();
        let perfect = usize::BITS as usize - (length + 1).leading_zeros() as usize;
        prop_assert!(height <= 2 * perfect + 1);
    }

    /// Invariants survive arbitrary interleavings of structural sharing:
    /// every intermediate version is itself a valid balanced search tree.
    #[test]
    fn prop_every_version_is_valid(elements in prop::collection::vec(any::<i32>(), 0..30)) {
        let mut tree = BalancedTree::new();
        for element in elements {
            tree = tree.insert(element);
            prop_assert!(is_search_tree(&tree, None, None));
            prop_assert!(is_balanced_with_consistent_heights(&tree));
        }
    }
}

// =============================================================================
// Content Laws
// =============================================================================

proptest! {
    /// Folding visits the sorted, de-duplicated insertion sequence,
    /// regardless of insertion order.
    #[test]
    fn prop_fold_is_sorted_and_deduplicated((tree, elements) in arbitrary_tree(60)) {
        let expected: Vec<i32> = elements.iter().copied().collect::<BTreeSet<i32>>()
            .into_iter()
            .collect();
        prop_assert_eq!(tree.to_list(), expected);
    }

    /// Every inserted value is contained; a value never inserted is not.
    #[test]
    fn prop_contains_inserted_values((tree, elements) in arbitrary_tree(60), probe: i32) {
        for element in &elements {
            prop_assert!(tree.contains(element));
        }
        prop_assert_eq!(tree.contains(&probe), elements.contains(&probe));
    }

    /// Duplicate insertion is idempotent: the value sequence is unchanged.
    #[test]
    fn prop_duplicate_insertion_is_idempotent((tree, elements) in arbitrary_tree(60)) {
        for element in elements {
            let reinserted = tree.insert(element);
            prop_assert_eq!(&reinserted, &tree);
        }
    }

    /// Insertion never disturbs earlier versions.
    #[test]
    fn prop_insertion_preserves_prior_versions((tree, _) in arbitrary_tree(60), extra: i32) {
        let before: Vec<i32> = tree.iter().copied().collect();
        let _grown = tree.insert(extra);
        let after: Vec<i32> = tree.iter().copied().collect();
        prop_assert_eq!(before, after);
    }

    /// min/max agree with the fold order.
    #[test]
    fn prop_min_max_agree_with_fold((tree, _) in arbitrary_tree(60)) {
        let values = tree.clone().to_list();
        prop_assert_eq!(tree.min(), values.first());
        prop_assert_eq!(tree.max(), values.last());
    }
}

// =============================================================================
// Functor Laws (protocol implementation on the tree)
// =============================================================================

proptest! {
    /// Mapping the identity function preserves the visitation sequence.
    #[test]
    fn prop_fmap_identity((tree, _) in arbitrary_tree(40)) {
        let mapped: BalancedTree<i32> = tree.clone().fmap(|value| value);
        prop_assert_eq!(mapped.to_list(), tree.to_list());
    }

    /// Mapping composed functions equals mapping them in sequence, for an
    /// order-preserving function.
    #[test]
    fn prop_fmap_composition((tree, _) in arbitrary_tree(40)) {
        let composed: BalancedTree<i64> =
            tree.clone().fmap(|value| i64::from(value) * 2 + 1);
        let sequenced: BalancedTree<i64> = tree
            .fmap(|value| i64::from(value) * 2)
            .fmap(|value| value + 1);
        prop_assert_eq!(composed.to_list(), sequenced.to_list());
    }
}
