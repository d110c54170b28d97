//! The fold-based container protocol and its derived algebra.
//!
//! This module defines the capability set every persistent container in this
//! library must supply, and derives a reusable combinator algebra from it:
//!
//! - [`TypeConstructor`]: Generic-Associated-Type emulation of
//!   higher-kinded types, so a trait can speak about "the same container
//!   shape holding a different element type".
//! - [`Container`]: the three primitives — `empty`, `build`, `fold_left` —
//!   together with default methods for mapping, filtering, concatenation,
//!   flat-mapping, applicative apply/lift, and traverse/sequence, each
//!   implemented once against the primitives alone.
//!
//! Conforming containers provided out of the box are `Option<T>`, `Vec<T>`,
//! and [`BalancedTree<T>`](crate::persistent::BalancedTree).
//!
//! # Examples
//!
//! ```rust
//! use treefold::container::Container;
//!
//! // The derived algebra is shape-generic: this function works for any
//! // conforming container.
//! fn squares<C>(values: C) -> C::WithType<i64>
//! where
//!     C: Container<Inner = i64>,
//!     C::WithType<i64>: Container<Inner = i64>,
//! {
//!     values.fmap(|n| n * n)
//! }
//!
//! assert_eq!(squares(vec![1, 2, 3]), vec![1, 4, 9]);
//! assert_eq!(squares(Some(5)), Some(25));
//! ```

mod higher;
mod protocol;

pub use higher::TypeConstructor;
pub use protocol::Container;
