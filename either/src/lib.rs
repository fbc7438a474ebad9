//! A right-biased `Either` type.
//!
//! `Right` carries the primary value and `Left` the alternative. Mapping and
//! sequencing act on `Right` and short-circuit on `Left`, so fallible steps
//! can be chained without raising.

mod either;
mod fault;
mod iter;
mod semigroup;
mod try_fn;

pub use self::either::Either;
pub use self::fault::{Fault, Panic};
pub use self::semigroup::{Product, Semigroup, Sum};
pub use self::try_fn::{try_fn, try_result};

#[cfg(feature = "derive")]
pub use either_derive::Semigroup;
