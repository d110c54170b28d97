//! Higher-kinded type emulation through Generic Associated Types.
//!
//! Rust has no native higher-kinded types: there is no way to write a trait
//! that abstracts over `Option<_>` or `Vec<_>` as bare type constructors.
//! This module works around that with a Generic Associated Type: a container
//! names its current element type (`Inner`) and the same container shape
//! applied to any other element type (`WithType<B>`). The
//! [`Container`](super::Container) protocol builds on this to express
//! operations like mapping, whose result holds a different element type in
//! the same shape.

/// A trait representing a type constructor.
///
/// Implementors are a container shape applied to some element type, for
/// example `Option<A>` or `Vec<A>`. The associated types recover the element
/// type and re-apply the shape to a different element type.
///
/// # Laws
///
/// For any `F: TypeConstructor`, `F::WithType<F::Inner>` must be the same
/// type as `F` (up to type equality): re-applying the shape to the current
/// element type goes nowhere.
///
/// # Examples
///
/// ```rust
/// use treefold::container::TypeConstructor;
///
/// fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
///
/// assert_inner::<Option<i32>>();
/// assert_inner::<Vec<i32>>();
/// ```
pub trait TypeConstructor {
    /// The element type this shape is currently applied to.
    ///
    /// For `Vec<i32>` this is `i32`.
    type Inner;

    /// The same shape applied to a different element type `B`.
    ///
    /// For `Vec<i32>`, `WithType<String>` is `Vec<String>`. The bound keeps
    /// the result usable as a type constructor itself, so transformations
    /// can be chained.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

impl<T, E> TypeConstructor for Result<T, E> {
    type Inner = T;
    type WithType<B> = Result<B, E>;
}

impl<T> TypeConstructor for Vec<T> {
    type Inner = T;
    type WithType<B> = Vec<B>;
}
