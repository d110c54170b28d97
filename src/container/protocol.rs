//! The fold-based container protocol.
//!
//! This module provides the [`Container`] trait: three primitives — an empty
//! instance, insertion of one value, and a left-fold — from which the whole
//! combinator algebra (map, filter, concatenation, flat-map, applicative
//! apply and lift, traverse and sequence) is derived as default methods.
//!
//! Implementors supply only the primitives and inherit the algebra. None of
//! the derived methods may be (or need to be) specialized against a concrete
//! container shape.
//!
//! # Laws
//!
//! Every implementation must satisfy:
//!
//! - `empty` is idempotent and side-effect free: two calls produce
//!   indistinguishable values, and neither observes the receiver.
//! - `build` never mutates the receiver observably; the returned container
//!   holds the new value in addition to the receiver's values, at an
//!   implementation-defined position.
//! - `fold_left` over an empty container returns the seed unchanged, and
//!   visits values in the container's canonical order, left to right.
//!
//! # Examples
//!
//! ```rust
//! use treefold::container::Container;
//!
//! let values = vec![1, 2, 3, 4];
//! let even_squares: Vec<i32> = values.fmap(|n| n * n).filter(|n| n % 2 == 0);
//! assert_eq!(even_squares, vec![4, 16]);
//! ```

use super::higher::TypeConstructor;

/// The minimal capability set of a persistent container, plus the algebra
/// derived from it.
///
/// # Required Methods
///
/// - [`empty`](Container::empty): produce a container holding no values
/// - [`build`](Container::build): produce a container with one more value
/// - [`fold_left`](Container::fold_left): combine a seed with every value in
///   canonical order
///
/// # Provided Methods
///
/// Everything else is derived from the three primitives: [`fmap`]
/// (mapping), [`filter`], [`combine`] (concatenation), [`flat_map`],
/// [`apply`], [`lift2`], [`traverse_option`]/[`traverse_result`],
/// [`sequence_option`]/[`sequence_result`], and the fold conveniences
/// [`to_list`], [`length`], [`is_empty`], [`find`], [`exists`].
///
/// [`fmap`]: Container::fmap
/// [`filter`]: Container::filter
/// [`combine`]: Container::combine
/// [`flat_map`]: Container::flat_map
/// [`apply`]: Container::apply
/// [`lift2`]: Container::lift2
/// [`traverse_option`]: Container::traverse_option
/// [`traverse_result`]: Container::traverse_result
/// [`sequence_option`]: Container::sequence_option
/// [`sequence_result`]: Container::sequence_result
/// [`to_list`]: Container::to_list
/// [`length`]: Container::length
/// [`is_empty`]: Container::is_empty
/// [`find`]: Container::find
/// [`exists`]: Container::exists
///
/// # Examples
///
/// ```rust
/// use treefold::container::Container;
///
/// let words: Vec<String> = vec![1, 2, 3].fmap(|n| n.to_string());
/// assert_eq!(words, vec!["1", "2", "3"]);
/// ```
pub trait Container: TypeConstructor + Sized {
    /// Returns a container of this shape family holding no values.
    ///
    /// Callable for any element type, independent of the receiver's
    /// contents; the derived algebra uses it to seed folds whose result
    /// element type differs from the receiver's.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treefold::container::Container;
    ///
    /// let none: Option<i32> = <Option<()>>::empty();
    /// assert_eq!(none, None);
    ///
    /// let empty: Vec<String> = <Vec<()>>::empty();
    /// assert!(empty.is_empty());
    /// ```
    fn empty<B>() -> Self::WithType<B>
    where
        Self::WithType<B>: Container<Inner = B>;

    /// Returns a container holding `element` in addition to the receiver's
    /// values.
    ///
    /// The position of the new value is implementation-defined: `Vec`
    /// appends, `Option` replaces its single slot, and
    /// [`BalancedTree`](crate::persistent::BalancedTree) performs an ordered
    /// insertion.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treefold::container::Container;
    ///
    /// assert_eq!(vec![1, 2].build(3), vec![1, 2, 3]);
    /// assert_eq!(None.build(7), Some(7));
    /// ```
    #[must_use]
    fn build(self, element: Self::Inner) -> Self;

    /// Combines `seed` with every contained value, visiting values in the
    /// container's canonical order, left to right.
    ///
    /// Over an empty container the seed is returned unchanged. This single
    /// primitive is sufficient to enumerate all values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treefold::container::Container;
    ///
    /// let sum = vec![1, 2, 3].fold_left(0, |accumulator, n| accumulator + n);
    /// assert_eq!(sum, 6);
    ///
    /// let untouched = Vec::<i32>::new().fold_left(42, |accumulator, _| accumulator + 1);
    /// assert_eq!(untouched, 42);
    /// ```
    fn fold_left<B, F>(self, seed: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Applies a function to every value, collecting the results in the
    /// same container shape.
    ///
    /// # Laws
    ///
    /// - Identity: `fa.fmap(|x| x)` has the same traversal sequence as `fa`.
    /// - Composition: `fa.fmap(f).fmap(g)` equals `fa.fmap(|x| g(f(x)))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treefold::container::Container;
    ///
    /// let doubled: Vec<i32> = vec![1, 2, 3].fmap(|n| n * 2);
    /// assert_eq!(doubled, vec![2, 4, 6]);
    /// ```
    fn fmap<B, F>(self, mut function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> B,
        Self::WithType<B>: Container<Inner = B>,
    {
        self.fold_left(Self::empty::<B>(), |accumulator, element| {
            accumulator.build(function(element))
        })
    }

    /// Keeps only the values satisfying the predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treefold::container::Container;
    ///
    /// let evens: Vec<i32> = vec![1, 2, 3, 4].filter(|n| n % 2 == 0);
    /// assert_eq!(evens, vec![2, 4]);
    /// ```
    fn filter<P>(self, mut predicate: P) -> Self::WithType<Self::Inner>
    where
        P: FnMut(&Self::Inner) -> bool,
        Self::WithType<Self::Inner>: Container<Inner = Self::Inner>,
    {
        self.fold_left(Self::empty::<Self::Inner>(), |accumulator, element| {
            if predicate(&element) {
                accumulator.build(element)
            } else {
                accumulator
            }
        })
    }

    /// Concatenates two containers by folding the receiver's values into
    /// `other`.
    ///
    /// Because the receiver is folded *into* `other`, the result's traversal
    /// order places the receiver's values after `other`'s for
    /// sequence-shaped containers. This is a deliberate design choice, not
    /// incidental: it is what makes [`flat_map`](Container::flat_map)
    /// preserve per-group order. Ordered containers such as
    /// [`BalancedTree`](crate::persistent::BalancedTree) re-sort the union.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treefold::container::Container;
    ///
    /// let joined = vec![3, 4].combine(vec![1, 2]);
    /// assert_eq!(joined, vec![1, 2, 3, 4]);
    /// ```
    fn combine(self, other: Self::WithType<Self::Inner>) -> Self::WithType<Self::Inner>
    where
        Self::WithType<Self::Inner>: Container<Inner = Self::Inner>,
    {
        self.fold_left(other, |accumulator, element| accumulator.build(element))
    }

    /// Applies a container-producing function to every value and flattens
    /// the results into one container.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treefold::container::Container;
    ///
    /// let repeated: Vec<i32> = vec![1, 2].flat_map(|n| vec![n, n * 10]);
    /// assert_eq!(repeated, vec![1, 10, 2, 20]);
    /// ```
    fn flat_map<B, F>(self, mut function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> Self::WithType<B>,
        Self::WithType<B>: Container<Inner = B, WithType<B> = Self::WithType<B>>,
    {
        self.fold_left(Self::empty::<B>(), |accumulator, element| {
            function(element).combine(accumulator)
        })
    }

    /// Applies every function in `functions` to every value in the
    /// receiver, concatenating the results in the receiver's shape.
    ///
    /// The function container may be any conforming container, not
    /// necessarily the receiver's shape; this is what keeps `apply` usable
    /// when the receiver's shape constrains its element type (a tree cannot
    /// hold closures, but a `Vec` of functions applied to a tree works).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treefold::container::Container;
    ///
    /// let functions: Vec<fn(i32) -> i32> = vec![|n| n + 1, |n| n * 10];
    /// let applied = vec![1, 2].apply(functions);
    /// assert_eq!(applied, vec![2, 3, 10, 20]);
    /// ```
    fn apply<B, F, Functions>(self, functions: Functions) -> Self::WithType<B>
    where
        Self: Clone,
        Functions: Container<Inner = F>,
        F: Fn(Self::Inner) -> B,
        Self::WithType<B>: Container<Inner = B>,
    {
        functions.fold_left(Self::empty::<B>(), |accumulator, function| {
            self.clone().fold_left(accumulator, |accumulator, element| {
                accumulator.build(function(element))
            })
        })
    }

    /// Combines values pairwise across two containers of possibly different
    /// shapes, collecting the results in the *second* container's shape
    /// family.
    ///
    /// Every value of the receiver is paired with every value of `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treefold::container::Container;
    ///
    /// let sums = vec![1, 2].lift2(vec![10, 20], |a, b| a + b);
    /// assert_eq!(sums, vec![11, 21, 12, 22]);
    ///
    /// // Result shape follows the second operand.
    /// let scaled = Some(3).lift2(vec![10, 20], |a, b| a * b);
    /// assert_eq!(scaled, vec![30, 60]);
    /// ```
    fn lift2<Other, B, C, F>(self, other: Other, function: F) -> Other::WithType<C>
    where
        Self::Inner: Clone,
        Other: Container<Inner = B> + Clone,
        Other::WithType<C>: Container<Inner = C>,
        F: Fn(Self::Inner, B) -> C,
    {
        self.fold_left(Other::empty::<C>(), |accumulator, element| {
            other.clone().fold_left(accumulator, |accumulator, value| {
                accumulator.build(function(element.clone(), value))
            })
        })
    }

    /// Applies a fallible function to every value; succeeds with the
    /// collected container only if every application succeeds.
    ///
    /// Values are visited left to right; once one application returns
    /// `None`, later values are not passed to the function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treefold::container::Container;
    ///
    /// let parsed = vec!["1", "2"].traverse_option(|s| s.parse::<i32>().ok());
    /// assert_eq!(parsed, Some(vec![1, 2]));
    ///
    /// let failed = vec!["1", "x"].traverse_option(|s| s.parse::<i32>().ok());
    /// assert_eq!(failed, None);
    /// ```
    fn traverse_option<B, F>(self, mut function: F) -> Option<Self::WithType<B>>
    where
        F: FnMut(Self::Inner) -> Option<B>,
        Self::WithType<B>: Container<Inner = B>,
    {
        self.fold_left(Some(Self::empty::<B>()), |accumulator, element| {
            accumulator.and_then(|built| function(element).map(|value| built.build(value)))
        })
    }

    /// Applies a fallible function to every value; succeeds with the
    /// collected container only if every application succeeds, otherwise
    /// yields the first error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treefold::container::Container;
    ///
    /// let parsed: Result<Vec<i32>, _> =
    ///     vec!["1", "2"].traverse_result(|s| s.parse::<i32>());
    /// assert_eq!(parsed, Ok(vec![1, 2]));
    ///
    /// let failed: Result<Vec<i32>, _> =
    ///     vec!["1", "x"].traverse_result(|s| s.parse::<i32>());
    /// assert!(failed.is_err());
    /// ```
    fn traverse_result<B, E, F>(self, mut function: F) -> Result<Self::WithType<B>, E>
    where
        F: FnMut(Self::Inner) -> Result<B, E>,
        Self::WithType<B>: Container<Inner = B>,
    {
        self.fold_left(Ok(Self::empty::<B>()), |accumulator, element| {
            accumulator.and_then(|built| function(element).map(|value| built.build(value)))
        })
    }

    /// Turns a container of `Option`s inside out.
    ///
    /// `Some` of the collected container if every value is present, `None`
    /// if any value is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treefold::container::Container;
    ///
    /// assert_eq!(vec![Some(1), Some(2)].sequence_option(), Some(vec![1, 2]));
    /// assert_eq!(vec![Some(1), None].sequence_option(), None);
    /// ```
    fn sequence_option(self) -> Option<Self::WithType<<Self::Inner as TypeConstructor>::Inner>>
    where
        Self::Inner: TypeConstructor + Into<Option<<Self::Inner as TypeConstructor>::Inner>>,
        Self::WithType<<Self::Inner as TypeConstructor>::Inner>:
            Container<Inner = <Self::Inner as TypeConstructor>::Inner>,
    {
        self.traverse_option(Into::into)
    }

    /// Turns a container of `Result`s inside out.
    ///
    /// `Ok` of the collected container if every value is `Ok`, otherwise
    /// the first `Err`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treefold::container::Container;
    ///
    /// let ok: Result<Vec<i32>, String> = vec![Ok(1), Ok(2)].sequence_result();
    /// assert_eq!(ok, Ok(vec![1, 2]));
    ///
    /// let err: Result<Vec<i32>, String> =
    ///     vec![Ok(1), Err("missing".to_string())].sequence_result();
    /// assert_eq!(err, Err("missing".to_string()));
    /// ```
    fn sequence_result<E>(self) -> Result<Self::WithType<<Self::Inner as TypeConstructor>::Inner>, E>
    where
        Self::Inner: TypeConstructor + Into<Result<<Self::Inner as TypeConstructor>::Inner, E>>,
        Self::WithType<<Self::Inner as TypeConstructor>::Inner>:
            Container<Inner = <Self::Inner as TypeConstructor>::Inner>,
    {
        self.traverse_result(Into::into)
    }

    /// Collects all values into a `Vec` in canonical order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treefold::container::Container;
    ///
    /// assert_eq!(Some(42).to_list(), vec![42]);
    /// assert_eq!(None::<i32>.to_list(), Vec::<i32>::new());
    /// ```
    fn to_list(self) -> Vec<Self::Inner> {
        self.fold_left(Vec::new(), |mut accumulator, element| {
            accumulator.push(element);
            accumulator
        })
    }

    /// Returns the number of contained values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treefold::container::Container;
    ///
    /// assert_eq!(vec![1, 2, 3].length(), 3);
    /// assert_eq!(None::<i32>.length(), 0);
    /// ```
    fn length(&self) -> usize
    where
        Self: Clone,
    {
        self.clone().fold_left(0, |count, _| count + 1)
    }

    /// Returns whether the container holds no values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treefold::container::Container;
    ///
    /// assert!(Container::is_empty(&None::<i32>));
    /// assert!(!Container::is_empty(&Some(1)));
    /// ```
    fn is_empty(&self) -> bool
    where
        Self: Clone,
    {
        self.clone().fold_left(true, |_, _| false)
    }

    /// Finds the first value (in canonical order) satisfying a predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treefold::container::Container;
    ///
    /// assert_eq!(vec![1, 2, 3, 4].find(|n| *n > 2), Some(3));
    /// assert_eq!(vec![1, 2].find(|n| *n > 2), None);
    /// ```
    fn find<P>(self, mut predicate: P) -> Option<Self::Inner>
    where
        P: FnMut(&Self::Inner) -> bool,
    {
        self.fold_left(None, |accumulator, element| {
            if accumulator.is_some() {
                accumulator
            } else if predicate(&element) {
                Some(element)
            } else {
                None
            }
        })
    }

    /// Returns whether any value satisfies the predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treefold::container::Container;
    ///
    /// assert!(vec![1, 2, 3].exists(|n| *n == 2));
    /// assert!(!vec![1, 2, 3].exists(|n| *n == 9));
    /// ```
    fn exists<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        self.clone().find(|element| predicate(element)).is_some()
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Container for Option<A> {
    #[inline]
    fn empty<B>() -> Option<B> {
        None
    }

    /// `Option` holds at most one value, so building replaces the slot.
    #[inline]
    fn build(self, element: A) -> Self {
        Some(element)
    }

    #[inline]
    fn fold_left<B, F>(self, seed: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match self {
            Some(value) => function(seed, value),
            None => seed,
        }
    }
}

// =============================================================================
// Vec<T> Implementation
// =============================================================================

impl<T> Container for Vec<T> {
    #[inline]
    fn empty<B>() -> Vec<B> {
        Vec::new()
    }

    /// `Vec` builds by appending at the end, so canonical order is
    /// insertion order.
    #[inline]
    fn build(mut self, element: T) -> Self {
        self.push(element);
        self
    }

    #[inline]
    fn fold_left<B, F>(self, seed: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.into_iter().fold(seed, function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_empty_is_idempotent() {
        let first: Vec<i32> = <Vec<()>>::empty();
        let second: Vec<i32> = <Vec<()>>::empty();
        assert_eq!(first, second);
        assert_eq!(<Option<()>>::empty::<i32>(), None);
    }

    #[rstest]
    fn test_fold_left_over_empty_returns_seed() {
        let seed = "seed".to_string();
        let result = Vec::<i32>::new().fold_left(seed.clone(), |accumulator, _| accumulator + "!");
        assert_eq!(result, seed);
        assert_eq!(None::<i32>.fold_left(7, |accumulator, n| accumulator + n), 7);
    }

    #[rstest]
    fn test_build_appends_for_vec() {
        assert_eq!(vec![1].build(2).build(3), vec![1, 2, 3]);
    }

    #[rstest]
    fn test_build_replaces_for_option() {
        assert_eq!(None.build(1), Some(1));
        assert_eq!(Some(1).build(2), Some(2));
    }

    #[rstest]
    fn test_fmap_preserves_order() {
        let result: Vec<String> = vec![3, 1, 2].fmap(|n| n.to_string());
        assert_eq!(result, vec!["3", "1", "2"]);
    }

    #[rstest]
    fn test_combine_places_receiver_after_other() {
        assert_eq!(vec![3, 4].combine(vec![1, 2]), vec![1, 2, 3, 4]);
    }

    #[rstest]
    fn test_flat_map_preserves_group_order() {
        let result: Vec<i32> = vec![1, 2, 3].flat_map(|n| vec![n, -n]);
        assert_eq!(result, vec![1, -1, 2, -2, 3, -3]);
    }

    #[rstest]
    fn test_apply_pairs_every_function_with_every_value() {
        let functions: Vec<fn(i32) -> i32> = vec![|n| n + 1, |n| n * 10];
        assert_eq!(vec![1, 2].apply(functions), vec![2, 3, 10, 20]);
    }

    #[rstest]
    fn test_lift2_builds_in_second_shape() {
        let result = Some(3).lift2(vec![10, 20], |a, b| a * b);
        assert_eq!(result, vec![30, 60]);
    }

    #[rstest]
    fn test_traverse_option_short_circuits_the_function() {
        let mut calls = 0;
        let result = vec![1, 2, 3].traverse_option(|n| {
            calls += 1;
            if n == 2 { None } else { Some(n) }
        });
        assert_eq!(result, None);
        assert_eq!(calls, 2);
    }

    #[rstest]
    fn test_sequence_result_yields_first_error() {
        let values: Vec<Result<i32, &str>> = vec![Ok(1), Err("first"), Err("second")];
        assert_eq!(values.sequence_result(), Err("first"));
    }

    #[rstest]
    fn test_find_returns_leftmost_match() {
        assert_eq!(vec![1, 8, 2, 9].find(|n| *n > 5), Some(8));
    }
}
